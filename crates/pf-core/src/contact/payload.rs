use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basic `local@domain.tld` shape, no whitespace.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Raw form input, exactly as typed.
///
/// 表单原始输入。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: ContactField,
    pub problem: FieldProblem,
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field.as_str()),
            FieldProblem::InvalidEmail => write!(f, "{} is not a valid address", self.field.as_str()),
        }
    }
}

/// User-input error, shown inline next to the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid contact form: {}", render_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn has_issue(&self, field: ContactField, problem: FieldProblem) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.field == field && issue.problem == problem)
    }
}

/// A payload that passed validation; all fields trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactFormPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Check every field and report all problems at once.
    pub fn validate(&self) -> Result<ValidatedContactForm, ValidationError> {
        let mut issues = Vec::new();
        let fields = [
            (ContactField::Name, self.name.trim()),
            (ContactField::Email, self.email.trim()),
            (ContactField::Subject, self.subject.trim()),
            (ContactField::Message, self.message.trim()),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                issues.push(FieldIssue {
                    field,
                    problem: FieldProblem::Missing,
                });
            } else if field == ContactField::Email && !EMAIL_SHAPE.is_match(value) {
                issues.push(FieldIssue {
                    field,
                    problem: FieldProblem::InvalidEmail,
                });
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError { issues });
        }

        Ok(ValidatedContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

impl ValidatedContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Template parameters keyed by form field name.
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .map(|(field, value)| (field.as_str().to_string(), value.clone()))
        .collect()
    }
}
