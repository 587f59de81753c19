//! Form field identifiers and the submitted record.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// One of the six registration-form fields. The display name is the
/// label shown next to the input in the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display)]
pub enum Field {
    #[display("Name(s)")]
    FirstName,
    #[display("Surname(s)")]
    LastName,
    #[display("Email")]
    Email,
    #[display("Phone")]
    Phone,
    #[display("Password")]
    Password,
    #[display("Repeat Password")]
    ConfirmPassword,
}

impl Field {
    /// Whether the field's value should be masked when echoed back
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// The record handed to the submit callback. Serialized with the host
/// page's camelCase keys.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_six_fields() {
        assert_eq!(Field::iter().count(), 6);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::FirstName.to_string(), "Name(s)");
        assert_eq!(Field::ConfirmPassword.to_string(), "Repeat Password");
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let record = Registration {
            first_name: "Sonny".into(),
            last_name: "Arce".into(),
            email: "sonnymijael@gmail.com".into(),
            phone: "3141160772".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["firstName"], "Sonny");
        assert_eq!(json["confirmPassword"], "Abcdef1!");
        assert!(json.get("first_name").is_none());
    }
}
