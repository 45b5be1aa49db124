//! Adoption-intake form validation.
//!
//! The core of this crate is a set of pure per-field validators
//! ([`rules`]) that map a raw input string to an empty string (valid)
//! or a fixed, human-readable error message. On top of that sits a
//! fluent [`Validator`] for checking several fields in one pass and an
//! immutable [`AdoptionForm`] value whose `validate` method is the
//! whole-form reducer a rendering layer calls on submit.
//!
//! # Example
//!
//! ```
//! use rehome_form::AdoptionForm;
//!
//! let form = AdoptionForm {
//!     first_name: "Anna".into(),
//!     surname: "Nguyen".into(),
//!     phone: "+1 415-555-0132".into(),
//!     address: "12 Shelter Lane".into(),
//!     email: "anna@example.com".into(),
//!     password: "Abcdef1".into(),
//! };
//! assert!(form.validate().is_valid());
//! ```

mod form;
mod result;
pub mod rules;
mod validator;

pub use form::AdoptionForm;
pub use result::{FieldError, ValidationResult};
pub use validator::{FieldBuilder, Validator};
