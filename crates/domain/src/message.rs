//! Result messages shown in the results area after a submission.

use crate::command::Command;
use crate::error::GatewayError;
use crate::request::PendingRequest;

/// Prefix of every failure message. The spelling matches the deployed UI.
pub const FAILURE_PREFIX: &str = "Error occured: ";

/// Alert text for a failed login.
pub const LOGIN_FAILURE: &str = "Error occured while logging in!";

/// Message for a successful submission of `request` answered with `body`.
///
/// QUOTE reports the price returned by the server. Every other command
/// (DUMPLOG included) gets the generic confirmation; clauses for an absent,
/// blank or zero amount and an absent or blank stock are left out.
#[must_use]
pub fn success(request: &PendingRequest, body: &str) -> String {
    if request.command == Command::Quote {
        let stock = request.stock.as_deref().unwrap_or_default().trim();
        return format!("Stock: {stock} - ${}", body.trim());
    }

    let mut parts = vec![request.command.title()];
    if let Some(amount) = request.amount.as_deref().filter(|a| !is_blank_or_zero(a)) {
        parts.push(format!("Amount: ${}", amount.trim()));
    }
    if let Some(stock) = request.stock.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("Stock: {}", stock.trim()));
    }
    parts.push("successful.".to_string());
    parts.join(" ")
}

/// Message for a failed submission: the server's raw text behind a fixed prefix.
#[must_use]
pub fn failure(error: &GatewayError) -> String {
    format!("{FAILURE_PREFIX}{}", error.server_message())
}

fn is_blank_or_zero(amount: &str) -> bool {
    let amount = amount.trim();
    amount.is_empty() || amount.parse::<f64>().is_ok_and(|value| value.abs() < f64::EPSILON)
}
