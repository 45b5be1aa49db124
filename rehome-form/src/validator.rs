//! Validator builder for fluent validation API.

use super::result::{FieldError, ValidationResult};

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), String>>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    value: String,
    rules: Vec<Rule>,
}

/// Builder for validating multiple form fields.
///
/// # Example
///
/// ```
/// use rehome_form::{Validator, rules};
///
/// let result = Validator::new()
///     .field("email", "anna@example.com")
///         .verdict(rules::validate_email)
///     .field("password", "Abcdef1")
///         .verdict(rules::validate_password)
///     .validate();
///
/// assert!(result.is_valid());
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value: value.into(),
            rules: Vec::new(),
        }
    }

    /// Run all validations.
    ///
    /// Every field is evaluated; within a field, rules run in the order
    /// they were added and only the first failure is reported.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            for rule in &field.rules {
                if let Err(message) = rule(&field.value) {
                    errors.push(FieldError {
                        field: field.name.clone(),
                        message,
                    });
                    break;
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            log::debug!("validation failed for {} field(s)", errors.len());
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    name: String,
    value: String,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Adopt a verdict function as this field's rule chain.
    ///
    /// A verdict function returns `""` for valid input and the error
    /// message otherwise, so a whole ordered chain of checks (such as
    /// the password rules) collapses into one call.
    pub fn verdict(mut self, f: fn(&str) -> &'static str) -> Self {
        self.rules.push(Box::new(move |v| {
            let msg = f(v);
            if msg.is_empty() { Ok(()) } else { Err(msg.to_string()) }
        }));
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        let validator = self.finalize();
        validator.field(name, value)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            value: self.value,
            rules: self.rules,
        });
        validator
    }
}
