//! Form domain layer
//!
//! Type-safe backing model for the project submission form plus the
//! validator that annotates it.

mod field;
mod form_state;
pub mod validator;

pub use field::{FieldId, FieldValue, FormField};
pub use form_state::{ProjectForm, ProjectType};
pub use validator::{validate_email_format, StepCheck};
