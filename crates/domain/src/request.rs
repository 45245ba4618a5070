//! Pending request: the payload assembled right before a submission.

use serde::Serialize;

use crate::command::Command;
use crate::layout::FieldRole;

/// A command submission built from the visible input values.
///
/// Lives only for one round-trip: it is built on submit, sent, and then used
/// once more to format the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRequest {
    pub username: String,
    pub command: Command,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl PendingRequest {
    /// Assemble a request for `command` from the input slot values.
    ///
    /// Only slots the command's layout shows contribute; each contributes its
    /// value under the slot's role. Values are passed through unvalidated.
    #[must_use]
    pub fn build(username: impl Into<String>, command: Command, inputs: &[String]) -> Self {
        let mut request = Self {
            username: username.into(),
            command,
            amount: None,
            stock: None,
            filename: None,
        };
        for (field, value) in command.layout().fields().iter().zip(inputs) {
            let slot = match field.role {
                FieldRole::Amount => &mut request.amount,
                FieldRole::Stock => &mut request.stock,
                FieldRole::Filename => &mut request.filename,
            };
            *slot = Some(value.clone());
        }
        request
    }

    /// Form fields in wire order. The command travels in the URL path.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("username", self.username.as_str())];
        let optional = [
            (FieldRole::Amount, &self.amount),
            (FieldRole::Stock, &self.stock),
            (FieldRole::Filename, &self.filename),
        ];
        for (role, value) in optional {
            if let Some(value) = value {
                fields.push((role.key(), value.as_str()));
            }
        }
        fields
    }
}
