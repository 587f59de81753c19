use anyhow::Result;
use derive_more::Display;
use inquire::{Password, PasswordDisplayMode, Select, Text};
use log::info;
use regform::consts::SUCCESS_NOTICE;
use regform::{Field, FormSession};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const LOG_FILE: &str = "./regform.log";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns None to leave the menu,
/// or Some(()) to show it again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, reporting errors, until it exits.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    session: FormSession,
}

impl App {
    pub fn new(session: FormSession) -> Self {
        App { session }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Welcome! Please fill in the registration form.");
        self.enter_loop();
        Ok(())
    }

    fn edit_field(&mut self) -> Result<()> {
        let field = Select::new("Which field?", Field::iter().collect()).prompt()?;
        let prompt = format!("{field}:");

        let value = if field.is_secret() {
            Password::new(&prompt)
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()?
        } else {
            Text::new(&prompt)
                .with_initial_value(self.session.value(field))
                .prompt()?
        };

        self.session.set_value(field, value);

        if let Some(message) = self.session.error(field) {
            eprintln!("[!] {field}: {message}");
        }
        Ok(())
    }

    fn review(&self) {
        for field in Field::iter() {
            let value = if field.is_secret() && !self.session.value(field).is_empty() {
                "********"
            } else {
                self.session.value(field)
            };
            match self.session.error(field) {
                Some(message) => println!("{field}: {value}  [!] {message}"),
                None => println!("{field}: {value}"),
            }
        }
    }

    fn submit(&mut self) {
        let result = self.session.submit(|record| {
            // The mock submission target: log the full record
            match serde_json::to_string(&record) {
                Ok(json) => info!("registration submitted: {json}"),
                Err(error) => info!("registration submitted, but not serializable: {error}"),
            }
        });

        match result {
            Ok(()) => println!("[*] {SUCCESS_NOTICE}"),
            Err(error) => {
                println!("[!] {error}");
                for (field, message) in &error.errors {
                    println!(" - {field}: {message}");
                }
            }
        }
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Fill in a field")]
            Edit,
            #[display("Review the form")]
            Review,
            #[display("Submit")]
            Submit,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What would you like to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Edit => self.edit_field()?,
            Choice::Review => self.review(),
            Choice::Submit => self.submit(),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    App::new(FormSession::new()).start()
}
