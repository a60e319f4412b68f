//! # Contact form — rule table and submission state machine
//!
//! Field rules are data ([`RULES`]), evaluated in table order. Each field
//! reports only its first failing rule, and every field is checked on every
//! submit so several errors can surface at once.
//!
//! The form moves `Idle → Pending → Success`, falling back to `Idle` (with
//! errors attached) when validation rejects a submission. `Success` is
//! terminal; the widget has to be remounted to send another message.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Values collected from the form controls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub subscribe: bool,
}

impl ContactSubmission {
    /// Store the text typed into `field`.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        field.value(self)
    }
}

/// Validated text fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    fn value<'a>(&self, submission: &'a ContactSubmission) -> &'a str {
        match self {
            Field::Name => &submission.name,
            Field::Email => &submission.email,
            Field::Message => &submission.message,
        }
    }
}

/// First error message per failing field.
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    EmailFormat,
}

impl Rule {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::EmailFormat => is_valid_email(value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

pub const RULES: &[FieldRule] = &[
    FieldRule { field: Field::Name, rule: Rule::Required, message: "Name is required" },
    FieldRule { field: Field::Email, rule: Rule::Required, message: "Email is required" },
    FieldRule { field: Field::Email, rule: Rule::EmailFormat, message: "Email is invalid" },
    FieldRule { field: Field::Message, rule: Rule::Required, message: "Message is required" },
];

const EMAIL_PATTERN: &str = r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Whether `value` has the shape of an email address.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

/// Run the rule table against a submission.
pub fn validate(submission: &ContactSubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for rule in RULES {
        if errors.contains_key(&rule.field) {
            continue;
        }
        if !rule.rule.accepts(rule.field.value(submission)) {
            errors.insert(rule.field, rule.message.to_string());
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Outcome of one submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormResult {
    pub success: bool,
    pub field_errors: FieldErrors,
}

impl FormResult {
    pub fn accepted() -> Self {
        Self {
            success: true,
            field_errors: FieldErrors::new(),
        }
    }

    pub fn rejected(field_errors: FieldErrors) -> Self {
        Self {
            success: false,
            field_errors,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Pending,
    Success,
}

/// What the form did with a submit click.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStep {
    /// The form is pending or already succeeded.
    Ignored,
    /// Validation failed; errors are attached to the state.
    Rejected,
    /// The form is now pending; deliver this submission.
    Accepted(ContactSubmission),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub phase: FormPhase,
    pub errors: FieldErrors,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, submission: ContactSubmission) -> SubmitStep {
        if self.phase != FormPhase::Idle {
            return SubmitStep::Ignored;
        }
        match validate(&submission) {
            Ok(()) => {
                self.errors.clear();
                self.phase = FormPhase::Pending;
                SubmitStep::Accepted(submission)
            }
            Err(errors) => {
                self.errors = errors;
                SubmitStep::Rejected
            }
        }
    }

    /// Settle a pending submission.
    pub fn finish(&mut self, result: FormResult) {
        if self.phase != FormPhase::Pending {
            return;
        }
        if result.success {
            self.errors.clear();
            self.phase = FormPhase::Success;
        } else {
            self.errors = result.field_errors;
            self.phase = FormPhase::Idle;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Pending
    }

    pub fn is_success(&self) -> bool {
        self.phase == FormPhase::Success
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
