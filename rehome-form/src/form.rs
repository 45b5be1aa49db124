//! Adoption-intake form state.

use serde::{Deserialize, Serialize};

use crate::result::ValidationResult;
use crate::rules;
use crate::validator::Validator;

/// The raw values of the adoption-intake form.
///
/// This is an immutable snapshot of what the user has typed; the
/// rendering layer replaces the whole value on every edit and calls
/// [`AdoptionForm::validate`] on submit. There is no dirty/touched
/// tracking here, and no field ever rejects being set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionForm {
    pub first_name: String,
    pub surname: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub password: String,
}

impl AdoptionForm {
    /// Validate every field and return the errors by field.
    ///
    /// All six fields are always evaluated so the rendering layer can
    /// show every message at once; field names in the result match the
    /// on-screen labels. Pure and idempotent, so resubmission is never
    /// blocked.
    pub fn validate(&self) -> ValidationResult {
        Validator::new()
            .field("first name", self.first_name.as_str())
            .verdict(rules::validate_name)
            .field("surname", self.surname.as_str())
            .verdict(rules::validate_name)
            .field("phone number", self.phone.as_str())
            .verdict(rules::validate_phone)
            .field("address", self.address.as_str())
            .verdict(rules::validate_address)
            .field("email", self.email.as_str())
            .verdict(rules::validate_email)
            .field("password", self.password.as_str())
            .verdict(rules::validate_password)
            .validate()
    }
}
