//! Commission request form view-model
//!
//! Fields are checked one at a time on blur and all required fields are
//! checked together on submit. A field group shows at most one error. The
//! form post itself is handled by the hosting platform's form capture, so
//! a valid submit only switches the button to its in-flight state.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use atelier_newsletter::is_valid_email;

pub const REQUIRED_FIELD: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

const SUBMIT_LABEL: &str = "Submit Request";
const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
        }
    }

    /// The error this value earns, if any. Required comes before format.
    fn check(&self, value: &str) -> Option<&'static str> {
        if self.required && value.trim().is_empty() {
            return Some(REQUIRED_FIELD);
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            return Some(INVALID_EMAIL);
        }
        None
    }
}

pub const COMMISSION_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("name", "Your Name", FieldKind::Text, true),
    FieldSpec::new("email", "Email Address", FieldKind::Email, true),
    FieldSpec::new("projectType", "Project Type", FieldKind::Select, true),
    FieldSpec::new("description", "Project Description", FieldKind::TextArea, true),
    FieldSpec::new("budget", "Budget Range", FieldKind::Select, false),
    FieldSpec::new("timeline", "Timeline", FieldKind::Select, false),
    FieldSpec::new("referral", "How did you hear about me?", FieldKind::Text, false),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Shown as an alert; `fields` lists the groups now carrying an error
    #[error("Please fill out all required fields correctly.")]
    Invalid { fields: Vec<&'static str> },

    #[error("Submission already in progress")]
    InFlight,
}

#[derive(Debug, Clone)]
pub struct CommissionForm {
    fields: Vec<FieldSpec>,
    errors: BTreeMap<&'static str, &'static str>,
    submitting: bool,
}

impl Default for CommissionForm {
    fn default() -> Self {
        Self::new(&COMMISSION_FIELDS)
    }
}

impl CommissionForm {
    pub fn new(fields: &[FieldSpec]) -> Self {
        Self {
            fields: fields.to_vec(),
            errors: BTreeMap::new(),
            submitting: false,
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied()
    }

    /// Field groups that carry the `error` class
    pub fn errored_fields(&self) -> Vec<&'static str> {
        self.errors.keys().copied().collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn button_enabled(&self) -> bool {
        !self.submitting
    }

    /// Blur handler. Replaces the field's previous error; unknown fields pass.
    pub fn validate_field(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = self.fields.iter().find(|f| f.name == name).copied() else {
            return true;
        };
        self.errors.remove(field.name);
        match field.check(value) {
            Some(message) => {
                self.errors.insert(field.name, message);
                false
            }
            None => true,
        }
    }

    /// Check every required field against `values` (name, current value).
    /// A field missing from `values` is empty.
    pub fn submit(&mut self, values: &[(&str, &str)]) -> Result<(), SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let required: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        let mut invalid = Vec::new();
        for name in required {
            let value = values
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| *v)
                .unwrap_or("");
            if !self.validate_field(name, value) {
                invalid.push(name);
            }
        }

        if !invalid.is_empty() {
            tracing::debug!(fields = ?invalid, "Commission form has invalid fields");
            return Err(SubmitBlocked::Invalid { fields: invalid });
        }

        self.submitting = true;
        Ok(())
    }
}
