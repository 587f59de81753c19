//! Stateful form session: per-field values, rule evaluation on every
//! change, aggregate validity, and submit gating.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::consts::{
    EMAIL_REQUIRED, FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED, PHONE_REQUIRED,
};
use crate::fields::{Field, Registration};
use crate::rules::{validate_confirmation, Outcome, RuleSet};

/// Where the form currently stands.
///
/// `Pristine` is the state before any interaction; no errors are
/// surfaced there. Every edit or submit attempt re-evaluates all
/// fields and lands on `Valid` or `Invalid`. `Submitting` only exists
/// within a successful [`FormSession::submit`] call, which ends by
/// resetting the form to `Pristine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Pristine,
    Valid,
    Invalid,
    Submitting,
}

/// Submission was suppressed because at least one field is invalid.
#[derive(Debug, Error)]
#[error("submission rejected: {} invalid field(s)", .errors.len())]
pub struct SubmitError {
    /// Each invalid field with its surfaced message
    pub errors: Vec<(Field, String)>,
}

pub struct FormSession {
    values: HashMap<Field, String>,
    rules: HashMap<Field, RuleSet>,
    outcomes: HashMap<Field, Outcome>,
    state: FormState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Creates a pristine session with every field registered under
    /// its rule set and an empty value.
    pub fn new() -> Self {
        let values = Field::iter().map(|field| (field, String::new())).collect();

        let rules = [
            (Field::FirstName, RuleSet::name(FIRST_NAME_REQUIRED)),
            (Field::LastName, RuleSet::name(LAST_NAME_REQUIRED)),
            (Field::Email, RuleSet::email(EMAIL_REQUIRED)),
            (Field::Phone, RuleSet::phone(PHONE_REQUIRED)),
            (Field::Password, RuleSet::password()),
        ]
        .into_iter()
        .collect();

        Self {
            values,
            rules,
            outcomes: HashMap::new(),
            state: FormState::Pristine,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Stores a new value for the field and re-runs validation for the
    /// whole form. The first interaction leaves the pristine state.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.revalidate();
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[&field]
    }

    /// The field's current surfaced error message. A pristine form has
    /// none, matching the host behavior of only showing errors after
    /// interaction or a submit attempt.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.outcomes.get(&field).and_then(Outcome::message)
    }

    /// Aggregate validity signal: true iff every field's outcome is
    /// valid. A pristine form is not valid (all fields are empty).
    pub fn is_valid(&self) -> bool {
        self.state == FormState::Valid
    }

    /// Snapshot of the current field values as the submit record
    pub fn values(&self) -> Registration {
        Registration {
            first_name: self.values[&Field::FirstName].clone(),
            last_name: self.values[&Field::LastName].clone(),
            email: self.values[&Field::Email].clone(),
            phone: self.values[&Field::Phone].clone(),
            password: self.values[&Field::Password].clone(),
            confirm_password: self.values[&Field::ConfirmPassword].clone(),
        }
    }

    /// Attempts submission. Iff every field is valid, the callback
    /// receives the full record and the form is reset to pristine.
    /// Otherwise no callback runs, nothing is cleared, and the error
    /// lists every invalid field with its current message.
    pub fn submit<F>(&mut self, callback: F) -> Result<(), SubmitError>
    where
        F: FnOnce(Registration),
    {
        self.revalidate();

        if self.state != FormState::Valid {
            let errors = Field::iter()
                .filter_map(|field| {
                    self.error(field)
                        .map(|message| (field, message.to_owned()))
                })
                .collect();
            return Err(SubmitError { errors });
        }

        self.state = FormState::Submitting;
        let record = self.values();
        info!("form submitted for {}", record.email);
        callback(record);

        self.reset();
        Ok(())
    }

    /// Clears every field back to an empty value and returns the form
    /// to the pristine state.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        self.outcomes.clear();
        self.state = FormState::Pristine;
    }

    fn outcome_for(&self, field: Field) -> Outcome {
        let value = &self.values[&field];
        match field {
            // The confirmation check is the one cross-field rule
            Field::ConfirmPassword => {
                validate_confirmation(value, &self.values[&Field::Password])
            }
            _ => self.rules[&field].evaluate(value),
        }
    }

    fn revalidate(&mut self) {
        let outcomes: HashMap<Field, Outcome> = Field::iter()
            .map(|field| (field, self.outcome_for(field)))
            .collect();
        self.outcomes = outcomes;

        self.state = if self.outcomes.values().all(Outcome::is_valid) {
            FormState::Valid
        } else {
            FormState::Invalid
        };
    }
}
