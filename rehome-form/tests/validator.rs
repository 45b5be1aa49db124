use rehome_form::{Validator, rules};

#[test]
fn test_empty_validator_is_valid() {
    assert!(Validator::new().validate().is_valid());
}

#[test]
fn test_single_field_passes() {
    let result = Validator::new()
        .field("name", "Anna")
        .verdict(rules::validate_name)
        .validate();
    assert!(result.is_valid());
    assert!(result.first_error().is_none());
    assert_eq!(result.errors(), &[]);
}

#[test]
fn test_first_failing_rule_wins_within_a_field() {
    let result = Validator::new()
        .field("nickname", "")
        .required("nickname is required")
        .rule(|v| v.len() >= 3, "nickname too short")
        .validate();
    let errors = result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "nickname is required");
}

#[test]
fn test_every_field_is_evaluated() {
    let result = Validator::new()
        .field("name", "Anna2")
        .verdict(rules::validate_name)
        .field("email", "a@b")
        .verdict(rules::validate_email)
        .field("address", "12 Shelter Lane")
        .verdict(rules::validate_address)
        .validate();

    assert!(result.is_invalid());
    let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email"]);
}

#[test]
fn test_errors_keep_field_insertion_order() {
    let result = Validator::new()
        .field("b", "")
        .required("b blank")
        .field("a", "")
        .required("a blank")
        .validate();
    let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["b", "a"]);
}

#[test]
fn test_verdict_carries_the_rule_message() {
    let result = Validator::new()
        .field("password", "abcdef")
        .verdict(rules::validate_password)
        .validate();
    assert_eq!(result.message_for("password"), "must include number");
}

#[test]
fn test_custom_rule_message() {
    let result = Validator::new()
        .field("code", "xyz")
        .rule(|v| v.starts_with("RH-"), "code must start with RH-")
        .validate();
    assert_eq!(result.message_for("code"), "code must start with RH-");
}

#[test]
fn test_field_error_display() {
    let result = Validator::new()
        .field("email", "nope")
        .verdict(rules::validate_email)
        .validate();
    let err = result.first_error().unwrap();
    assert_eq!(err.to_string(), "email: invalid email");
}
