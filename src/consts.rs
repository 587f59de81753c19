//! Constants shared by the validation rules: length bounds,
//! the accepted special-character set, and user-facing messages.

/// Minimum length for name fields
pub const NAME_MIN_LENGTH: usize = 2;
/// Maximum length for name and email fields
pub const NAME_MAX_LENGTH: usize = 50;
/// Maximum length for the phone field
pub const PHONE_MAX_LENGTH: usize = 20;
/// Minimum length for the password field
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Maximum length for the password field
pub const PASSWORD_MAX_LENGTH: usize = 25;

/// Characters accepted by the password special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

pub const FIRST_NAME_REQUIRED: &str = "Name(s) is required.";
pub const LAST_NAME_REQUIRED: &str = "Surname(s) is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const PHONE_REQUIRED: &str = "Phone is required.";
pub const PASSWORD_REQUIRED: &str = "Please enter your password";
pub const CONFIRMATION_REQUIRED: &str = "You must confirm your password";

pub const PHONE_INVALID: &str = "Invalid phone number";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

pub const MISSING_LOWERCASE: &str = "Must contain at least one lowercase letter.";
pub const MISSING_UPPERCASE: &str = "Must contain at least one capital letter.";
pub const MISSING_DIGIT: &str = "Must contain at least one number.";
pub const MISSING_SPECIAL: &str = "Must contain at least one special character (!@#$%^&*).";

pub const SUCCESS_NOTICE: &str = "Registration completed!.";
