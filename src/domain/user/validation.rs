//! User validation rules
//!
//! Submissions are checked against [`USER_RULES`], an ordered table of
//! `(field, rule, message)` entries. Every entry is evaluated and all
//! failures are reported together.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::entity::UserFields;

const MIN_NAME_LENGTH: usize = 1;
const MAX_NAME_LENGTH: usize = 10;
const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 200;
const MAX_BIO_LENGTH: usize = 200;

/// Raw form submission, exactly as posted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub bio: String,
}

/// Fields a rule can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Age,
    Bio,
}

impl Field {
    /// Optional fields skip their rules when left blank
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Age | Self::Bio)
    }

    fn value<'a>(&self, form: &'a UserForm) -> &'a str {
        match self {
            Self::FirstName => form.first_name.trim(),
            Self::LastName => form.last_name.trim(),
            Self::Email => form.email.trim(),
            Self::Age => form.age.trim(),
            Self::Bio => form.bio.trim(),
        }
    }
}

/// A single check applied to an already-trimmed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty and ASCII letters only
    Alphabetic,
    /// Character count within `min..=max`
    Length { min: usize, max: usize },
    /// Standard email syntax
    Email,
    /// Parses as an integer within `min..=max`
    IntRange { min: i64, max: i64 },
    /// At most `max` characters
    MaxLength(usize),
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match *self {
            Self::Alphabetic => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
            Self::Length { min, max } => (min..=max).contains(&value.chars().count()),
            Self::Email => value.to_owned().validate_email(),
            Self::IntRange { min, max } => value
                .parse::<i64>()
                .map(|n| (min..=max).contains(&n))
                .unwrap_or(false),
            Self::MaxLength(max) => value.chars().count() <= max,
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

const fn rule(field: Field, rule: Rule, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        rule,
        message,
    }
}

const NAME_LENGTH: Rule = Rule::Length {
    min: MIN_NAME_LENGTH,
    max: MAX_NAME_LENGTH,
};

/// Rules applied to every create and update submission, in reporting order
pub const USER_RULES: &[FieldRule] = &[
    rule(Field::FirstName, Rule::Alphabetic, "First name must only contain letters."),
    rule(Field::FirstName, NAME_LENGTH, "First name must be between 1 and 10 characters."),
    rule(Field::LastName, Rule::Alphabetic, "Last name must only contain letters."),
    rule(Field::LastName, NAME_LENGTH, "Last name must be between 1 and 10 characters."),
    rule(Field::Email, Rule::Email, "Email must be an email"),
    rule(
        Field::Age,
        Rule::IntRange {
            min: MIN_AGE,
            max: MAX_AGE,
        },
        "Age must be a number between 18 and 200",
    ),
    rule(Field::Bio, Rule::MaxLength(MAX_BIO_LENGTH), "Bio must be below 200 characters"),
];

/// A failed rule, attributed to its field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every rule violation found in a submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.message.as_str())
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    fn push(&mut self, field: Field, message: &str) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().collect::<Vec<_>>().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a submission against a rule table, collecting every failure
pub fn check_rules(form: &UserForm, rules: &[FieldRule]) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for entry in rules {
        let value = entry.field.value(form);

        if entry.field.is_optional() && value.is_empty() {
            continue;
        }

        if !entry.rule.check(value) {
            errors.push(entry.field, entry.message);
        }
    }

    errors
}

/// Validate a submission and produce trimmed field values
pub fn validate_user(form: &UserForm) -> Result<UserFields, ValidationErrors> {
    let errors = check_rules(form, USER_RULES);

    if !errors.is_empty() {
        return Err(errors);
    }

    let age = Field::Age.value(form);
    let bio = Field::Bio.value(form);

    Ok(UserFields {
        first_name: Field::FirstName.value(form).to_string(),
        last_name: Field::LastName.value(form).to_string(),
        email: Field::Email.value(form).to_string(),
        // Range already checked, so the value fits
        age: age.parse::<u8>().ok(),
        bio: (!bio.is_empty()).then(|| bio.to_string()),
    })
}
