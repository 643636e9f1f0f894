//! Field validation rules
//!
//! Every field has a pure rule function registered in a static table. Rules
//! read sibling values through a read-only snapshot so cross-field checks
//! (confirm password) stay side-effect free and testable in isolation.

use super::field::{Field, FieldValues, FIELD_COUNT};
use regex::Regex;
use std::sync::LazyLock;

/// Outcome of validating a single field; the message is empty when valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Read-only view of the current form values, passed to every rule
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    values: &'a FieldValues,
}

impl<'a> FormSnapshot<'a> {
    pub fn new(values: &'a FieldValues) -> Self {
        Self { values }
    }

    pub fn value(&self, field: Field) -> &'a str {
        self.values.get(field)
    }
}

/// A field's validation entry: identity, whether it gates submission, and
/// the rule itself
pub struct FieldSpec {
    pub field: Field,
    pub required: bool,
    pub validate: fn(&str, FormSnapshot<'_>) -> ValidationResult,
}

/// Rule table, one entry per field in display order
pub static SPECS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        field: Field::FullName,
        required: true,
        validate: validate_full_name,
    },
    FieldSpec {
        field: Field::Email,
        required: true,
        validate: validate_email,
    },
    FieldSpec {
        field: Field::Password,
        required: true,
        validate: validate_password,
    },
    FieldSpec {
        field: Field::ConfirmPassword,
        required: true,
        validate: validate_confirm_password,
    },
    FieldSpec {
        field: Field::Age,
        required: true,
        validate: validate_age,
    },
    FieldSpec {
        field: Field::Phone,
        required: false,
        validate: validate_phone,
    },
];

/// Look up the rule table entry for a field
pub fn spec(field: Field) -> &'static FieldSpec {
    &SPECS[field.index()]
}

/// Validate one field value against its registered rule
pub fn validate(field: Field, value: &str, snapshot: FormSnapshot<'_>) -> ValidationResult {
    (spec(field).validate)(value, snapshot)
}

// One `@`, a dot somewhere in the domain, no whitespace. Deliberately
// stricter than the RFC grammar, which would accept dotless domains.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Ten ASCII digits with optional separators and parentheses around the
// area code
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$")
        .expect("phone pattern is valid")
});

/// Symbols accepted by the password strength rule
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|`~";

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 8;
const MIN_AGE: u32 = 13;
const MAX_AGE: u32 = 120;

fn validate_full_name(value: &str, _snapshot: FormSnapshot<'_>) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return ValidationResult::err(format!(
            "Name must be at least {MIN_NAME_CHARS} characters"
        ));
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return ValidationResult::err("Name may only contain letters and spaces");
    }
    ValidationResult::ok()
}

fn validate_email(value: &str, _snapshot: FormSnapshot<'_>) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::err("Email is required");
    }
    if !EMAIL_RE.is_match(value) {
        return ValidationResult::err("Enter a valid email address, e.g. name@example.com");
    }
    ValidationResult::ok()
}

fn validate_password(value: &str, _snapshot: FormSnapshot<'_>) -> ValidationResult {
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return ValidationResult::err(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        ));
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if !(has_lower && has_upper && has_digit && has_symbol) {
        return ValidationResult::err(
            "Password needs a lowercase letter, an uppercase letter, a digit, and a symbol",
        );
    }
    ValidationResult::ok()
}

fn validate_confirm_password(value: &str, snapshot: FormSnapshot<'_>) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::err("Please confirm your password");
    }
    // An empty password is an ordinary mismatch, not a special case
    if value != snapshot.value(Field::Password) {
        return ValidationResult::err("Passwords do not match");
    }
    ValidationResult::ok()
}

fn validate_age(value: &str, _snapshot: FormSnapshot<'_>) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Age is required");
    }
    match trimmed.parse::<u32>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => ValidationResult::ok(),
        _ => ValidationResult::err(format!(
            "Age must be a whole number between {MIN_AGE} and {MAX_AGE}"
        )),
    }
}

fn validate_phone(value: &str, _snapshot: FormSnapshot<'_>) -> ValidationResult {
    // Optional: empty is fine, anything else must look like a real number
    if value.is_empty() {
        return ValidationResult::ok();
    }
    if !PHONE_RE.is_match(value) {
        return ValidationResult::err("Enter a 10-digit phone number, e.g. (123) 456-7890");
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(field: Field, value: &str) -> ValidationResult {
        let values = FieldValues::default();
        validate(field, value, FormSnapshot::new(&values))
    }

    mod full_name {
        use super::*;

        #[test]
        fn test_two_letters_is_valid() {
            assert!(check(Field::FullName, "Jo").valid);
        }

        #[test]
        fn test_single_letter_fails_length() {
            let result = check(Field::FullName, "J");
            assert!(!result.valid);
            assert!(result.message.contains("at least 2"));
        }

        #[test]
        fn test_digits_fail_charset() {
            let result = check(Field::FullName, "John3");
            assert!(!result.valid);
            assert!(result.message.contains("letters and spaces"));
        }

        #[test]
        fn test_length_and_charset_messages_differ() {
            let too_short = check(Field::FullName, "J");
            let bad_charset = check(Field::FullName, "John3");
            assert_ne!(too_short.message, bad_charset.message);
        }

        #[test]
        fn test_spaces_between_names_are_allowed() {
            assert!(check(Field::FullName, "Mary Jane").valid);
        }

        #[test]
        fn test_accented_letters_are_allowed() {
            assert!(check(Field::FullName, "José").valid);
            assert!(check(Field::FullName, "Åsa Öström").valid);
        }

        #[test]
        fn test_whitespace_only_fails_length() {
            let result = check(Field::FullName, "   ");
            assert!(!result.valid);
            assert!(result.message.contains("at least 2"));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert!(check(Field::FullName, "  Jo  ").valid);
        }

        #[test]
        fn test_symbols_fail_charset() {
            assert!(!check(Field::FullName, "J@ne").valid);
            assert!(!check(Field::FullName, "Jane-Doe").valid);
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_is_valid() {
            assert!(check(Field::Email, "a@b.co").valid);
        }

        #[test]
        fn test_empty_is_required() {
            let result = check(Field::Email, "");
            assert!(!result.valid);
            assert!(result.message.contains("required"));
        }

        #[test]
        fn test_dotless_domain_is_rejected() {
            assert!(!check(Field::Email, "a@b").valid);
        }

        #[test]
        fn test_missing_at_is_rejected() {
            assert!(!check(Field::Email, "ab.co").valid);
        }

        #[test]
        fn test_whitespace_is_rejected() {
            assert!(!check(Field::Email, "a b@c.co").valid);
            assert!(!check(Field::Email, "a@c .co").valid);
        }

        #[test]
        fn test_double_at_is_rejected() {
            assert!(!check(Field::Email, "a@b@c.co").valid);
        }

        #[test]
        fn test_ordinary_address_is_valid() {
            assert!(check(Field::Email, "jane.doe+tag@example.com").valid);
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_missing_symbol_is_rejected() {
            let result = check(Field::Password, "Abc12345");
            assert!(!result.valid);
            assert!(result.message.contains("symbol"));
        }

        #[test]
        fn test_full_mix_is_accepted() {
            assert!(check(Field::Password, "Abcd12!@").valid);
        }

        #[test]
        fn test_too_short_fails_length() {
            let result = check(Field::Password, "short1!");
            assert!(!result.valid);
            assert!(result.message.contains("at least 8"));
        }

        #[test]
        fn test_missing_uppercase_is_rejected() {
            assert!(!check(Field::Password, "abcd123!").valid);
        }

        #[test]
        fn test_missing_lowercase_is_rejected() {
            assert!(!check(Field::Password, "ABCD123!").valid);
        }

        #[test]
        fn test_missing_digit_is_rejected() {
            assert!(!check(Field::Password, "Abcdefg!").valid);
        }

        #[test]
        fn test_various_symbols_count() {
            assert!(check(Field::Password, "Abcd123_").valid);
            assert!(check(Field::Password, "Abcd123?").valid);
            assert!(check(Field::Password, "Abcd123#").valid);
        }
    }

    mod confirm_password {
        use super::*;

        fn check_confirm(password: &str, confirm: &str) -> ValidationResult {
            let mut values = FieldValues::default();
            values.set(Field::Password, password);
            validate(Field::ConfirmPassword, confirm, FormSnapshot::new(&values))
        }

        #[test]
        fn test_matching_value_is_valid() {
            assert!(check_confirm("Abcd12!@", "Abcd12!@").valid);
        }

        #[test]
        fn test_empty_is_rejected() {
            let result = check_confirm("Abcd12!@", "");
            assert!(!result.valid);
            assert!(result.message.contains("confirm"));
        }

        #[test]
        fn test_mismatch_is_rejected() {
            let result = check_confirm("Abcd12!@", "Abcd12!#");
            assert!(!result.valid);
            assert!(result.message.contains("do not match"));
        }

        #[test]
        fn test_value_before_password_is_a_mismatch() {
            let result = check_confirm("", "Abcd12!@");
            assert!(!result.valid);
            assert!(result.message.contains("do not match"));
        }
    }

    mod age {
        use super::*;

        #[test]
        fn test_bounds_are_inclusive() {
            assert!(check(Field::Age, "13").valid);
            assert!(check(Field::Age, "120").valid);
        }

        #[test]
        fn test_outside_bounds_is_rejected() {
            assert!(!check(Field::Age, "12").valid);
            assert!(!check(Field::Age, "121").valid);
        }

        #[test]
        fn test_non_numeric_is_rejected() {
            assert!(!check(Field::Age, "abc").valid);
            assert!(!check(Field::Age, "1x").valid);
        }

        #[test]
        fn test_fractions_are_rejected() {
            assert!(!check(Field::Age, "13.5").valid);
        }

        #[test]
        fn test_negative_is_rejected() {
            assert!(!check(Field::Age, "-5").valid);
        }

        #[test]
        fn test_empty_has_its_own_message() {
            let result = check(Field::Age, "");
            assert!(!result.valid);
            assert!(result.message.contains("required"));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert!(check(Field::Age, " 18 ").valid);
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_empty_is_valid() {
            assert!(check(Field::Phone, "").valid);
        }

        #[test]
        fn test_formatted_number_is_valid() {
            assert!(check(Field::Phone, "(123) 456-7890").valid);
        }

        #[test]
        fn test_bare_digits_are_valid() {
            assert!(check(Field::Phone, "1234567890").valid);
        }

        #[test]
        fn test_dashes_and_dots_are_valid() {
            assert!(check(Field::Phone, "123-456-7890").valid);
            assert!(check(Field::Phone, "123.456.7890").valid);
        }

        #[test]
        fn test_too_few_digits_is_rejected() {
            let result = check(Field::Phone, "12345");
            assert!(!result.valid);
            assert!(result.message.contains("10-digit"));
        }

        #[test]
        fn test_letters_are_rejected() {
            assert!(!check(Field::Phone, "123-456-78ab").valid);
        }

        #[test]
        fn test_non_ascii_digits_are_rejected() {
            assert!(!check(Field::Phone, "١٢٣٤٥٦٧٨٩٠").valid);
        }
    }

    mod rule_table {
        use super::*;

        #[test]
        fn test_entries_match_display_order() {
            for field in Field::ALL {
                assert_eq!(spec(field).field, field);
            }
        }

        #[test]
        fn test_required_flags_follow_fields() {
            for entry in &SPECS {
                assert_eq!(entry.required, entry.field.is_required());
            }
        }

        #[test]
        fn test_validate_dispatches_through_table() {
            let values = FieldValues::default();
            let via_entry = (spec(Field::Email).validate)("a@b.co", FormSnapshot::new(&values));
            let via_validate = validate(Field::Email, "a@b.co", FormSnapshot::new(&values));
            assert_eq!(via_entry, via_validate);
        }
    }

    mod totality {
        use super::*;

        #[test]
        fn test_same_input_gives_same_result() {
            let mut values = FieldValues::default();
            values.set(Field::Password, "Abcd12!@");
            for field in Field::ALL {
                let first = validate(field, "Abcd12!@", FormSnapshot::new(&values));
                let second = validate(field, "Abcd12!@", FormSnapshot::new(&values));
                assert_eq!(first, second);
            }
        }

        #[test]
        fn test_odd_inputs_never_panic() {
            let long = "x".repeat(10_000);
            let inputs = [
                "",
                " ",
                "\u{0}",
                "🦀🦀🦀",
                "a\nb",
                long.as_str(),
                "٣٤٥", // non-ASCII digits
            ];
            let values = FieldValues::default();
            for field in Field::ALL {
                for input in inputs {
                    let result = validate(field, input, FormSnapshot::new(&values));
                    // Invalid results always explain themselves; valid ones never do
                    assert_eq!(result.valid, result.message.is_empty());
                }
            }
        }
    }
}
