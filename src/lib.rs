//! Registration-form validation: declarative per-field rule sets, a
//! pure evaluation engine, and a stateful form session that gates a
//! submit callback on aggregate validity.

pub mod consts;
pub mod fields;
pub mod rules;
pub mod session;

// Re-export commonly used types and functions
pub use fields::{Field, Registration};
pub use rules::{validate_confirmation, Outcome, RuleSet};
pub use session::{FormSession, FormState, SubmitError};
