//! Declarative per-field validation rules.
//!
//! A [`RuleSet`] is a pure, stateless bundle of constraints built once
//! per field at form-definition time and re-evaluated on every value
//! change. Evaluation never fails: it always produces an [`Outcome`],
//! either `Valid` or `Invalid` with the first failing check's message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{
    CONFIRMATION_REQUIRED, MISSING_DIGIT, MISSING_LOWERCASE, MISSING_SPECIAL, MISSING_UPPERCASE,
    NAME_MAX_LENGTH, NAME_MIN_LENGTH, PASSWORDS_DO_NOT_MATCH, PASSWORD_MAX_LENGTH,
    PASSWORD_MIN_LENGTH, PASSWORD_REQUIRED, PHONE_INVALID, PHONE_MAX_LENGTH, SPECIAL_CHARACTERS,
};

// Telephone-number shape: optional leading "+", digit groups of which
// any may be parenthesized (country code), separated by "-", space,
// "." or "/". Letters and any other punctuation are rejected.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(\(\d{1,4}\)|\d{1,4})([-\s./]*(\(\d{1,4}\)|\d+))*[-\s./]*$")
        .expect("Failed to compile phone regex")
});

/// Verdict for a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid(String),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The surfaced error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(message) => Some(message),
        }
    }
}

/// A named boolean check over a field value, carrying its own message.
/// Predicates are evaluated independently of each other; a field is
/// valid only if every one of them passes.
#[derive(Debug, Clone)]
pub struct Predicate {
    pub name: &'static str,
    check: fn(&str) -> bool,
    message: &'static str,
}

impl Predicate {
    pub fn holds_for(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Declarative constraints for one form field.
#[derive(Debug, Clone)]
pub struct RuleSet {
    required: String,
    min_length: Option<(usize, String)>,
    max_length: Option<(usize, String)>,
    pattern: Option<(&'static Regex, &'static str)>,
    predicates: Vec<Predicate>,
}

impl RuleSet {
    /// Rules for a name-like field: required, with the default
    /// inclusive length bounds [2, 50].
    pub fn name(required: &str) -> Self {
        Self::name_bounded(required, NAME_MIN_LENGTH, NAME_MAX_LENGTH)
    }

    /// Rules for a required field with explicit inclusive length
    /// bounds. A `min` of 0 omits the minimum-length check entirely,
    /// for fields where presence alone matters.
    pub fn name_bounded(required: &str, min: usize, max: usize) -> Self {
        let min_length =
            (min > 0).then(|| (min, format!("cannot be less than {min} characters.")));

        Self {
            required: required.to_owned(),
            min_length,
            max_length: Some((max, format!("cannot be longer than {max} characters."))),
            pattern: None,
            predicates: Vec::new(),
        }
    }

    /// Rules for the email field: presence and the maximum length
    /// only. Format checking is left to the host's input widget.
    pub fn email(required: &str) -> Self {
        Self::name_bounded(required, 0, NAME_MAX_LENGTH)
    }

    /// Rules for the phone field: required, at most 20 characters,
    /// and matching the telephone-number shape.
    pub fn phone(required: &str) -> Self {
        let mut rules = Self::name_bounded(required, 0, PHONE_MAX_LENGTH);
        rules.pattern = Some((&PHONE_REGEX, PHONE_INVALID));
        rules
    }

    /// Rules for the password field: required, length in [8, 25], and
    /// the four composition predicates, evaluated in the order
    /// lowercase, uppercase, digit, special character.
    pub fn password() -> Self {
        let mut rules =
            Self::name_bounded(PASSWORD_REQUIRED, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH);
        rules.predicates = vec![
            Predicate {
                name: "lowercase",
                check: has_lowercase,
                message: MISSING_LOWERCASE,
            },
            Predicate {
                name: "uppercase",
                check: has_uppercase,
                message: MISSING_UPPERCASE,
            },
            Predicate {
                name: "number",
                check: has_digit,
                message: MISSING_DIGIT,
            },
            Predicate {
                name: "special",
                check: has_special,
                message: MISSING_SPECIAL,
            },
        ];
        rules
    }

    /// Evaluates the value against every applicable check, in order:
    /// required, minimum length, maximum length, pattern, then the
    /// predicates in declaration order. The first failure's message is
    /// the one surfaced.
    pub fn evaluate(&self, value: &str) -> Outcome {
        if value.is_empty() {
            return Outcome::Invalid(self.required.clone());
        }

        let length = value.chars().count();

        if let Some((min, message)) = &self.min_length {
            if length < *min {
                return Outcome::Invalid(message.clone());
            }
        }

        if let Some((max, message)) = &self.max_length {
            if length > *max {
                return Outcome::Invalid(message.clone());
            }
        }

        if let Some((pattern, message)) = &self.pattern {
            if !pattern.is_match(value) {
                return Outcome::Invalid((*message).to_owned());
            }
        }

        for predicate in &self.predicates {
            if !predicate.holds_for(value) {
                return Outcome::Invalid(predicate.message.to_owned());
            }
        }

        Outcome::Valid
    }
}

/// Checks the confirmation field: required, then exact case-sensitive
/// equality with the password value.
pub fn validate_confirmation(value: &str, password: &str) -> Outcome {
    if value.is_empty() {
        return Outcome::Invalid(CONFIRMATION_REQUIRED.to_owned());
    }

    if value != password {
        return Outcome::Invalid(PASSWORDS_DO_NOT_MATCH.to_owned());
    }

    Outcome::Valid
}
