//! Client-side form validation.
//!
//! Runs before any request is issued. Every rule is checked so the view can
//! mark all offending fields at once.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::api::{LoginRequest, NewStudent, RegisterRequest};

const MIN_USERNAME: usize = 3;
const MIN_PASSWORD: usize = 8;
const MIN_NAME: usize = 2;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
    FirstName,
    LastName,
    PageSize,
    Id,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PageSize => "pageSize",
            Self::Id => "id",
        }
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// All field errors of one submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct FormErrors(pub Vec<ValidationError>);

impl FormErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// First message reported for `field`.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects field errors for a single form.
#[derive(Default)]
struct Checker {
    errors: Vec<ValidationError>,
}

impl Checker {
    fn reject(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field,
            message: message.into(),
        });
    }

    /// Required + minimum length. Returns false if the field was rejected.
    fn min_len(&mut self, field: Field, value: &str, label: &str, min: usize) -> bool {
        if value.is_empty() {
            self.reject(field, format!("{label} is required"));
            false
        } else if value.chars().count() < min {
            self.reject(field, format!("{label} must be at least {min} characters"));
            false
        } else {
            true
        }
    }

    fn email(&mut self, value: &str) {
        if value.is_empty() {
            self.reject(Field::Email, "Email is required");
        } else if !EMAIL.is_match(value) {
            self.reject(Field::Email, "Invalid email format");
        }
    }

    fn finish(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(self.errors))
        }
    }
}

/// Character classes a registration password must contain.
fn missing_password_classes(password: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("one number");
    }
    missing
}

fn list_phrase(parts: &[&str]) -> String {
    match parts {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Item id used as a path segment. Dot segments would address the
/// collection itself.
pub fn validate_item_id(id: &str) -> Result<(), FormErrors> {
    let mut check = Checker::default();
    if matches!(id.trim(), "" | "." | "..") {
        check.reject(Field::Id, "A valid id is required");
    }
    check.finish()
}

impl LoginRequest {
    /// Username ≥ 3 chars, password ≥ 8 chars.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut check = Checker::default();
        check.min_len(Field::Username, &self.username, "Username", MIN_USERNAME);
        check.min_len(Field::Password, &self.password, "Password", MIN_PASSWORD);
        check.finish()
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut check = Checker::default();
        check.min_len(Field::Username, &self.username, "Username", MIN_USERNAME);
        check.email(&self.email);
        check.min_len(Field::FirstName, &self.first_name, "First name", MIN_NAME);
        check.min_len(Field::LastName, &self.last_name, "Last name", MIN_NAME);
        if check.min_len(Field::Password, &self.password, "Password", MIN_PASSWORD) {
            let missing = missing_password_classes(&self.password);
            if !missing.is_empty() {
                check.reject(
                    Field::Password,
                    format!("Password must contain at least {}", list_phrase(&missing)),
                );
            }
        }
        check.finish()
    }
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut check = Checker::default();
        check.min_len(Field::FirstName, &self.first_name, "First name", MIN_NAME);
        check.min_len(Field::LastName, &self.last_name, "Last name", MIN_NAME);
        check.email(&self.email);
        check.finish()
    }
}
