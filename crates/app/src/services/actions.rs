//! Actions page: command selection, inputs, submission, and results.
//!
//! [`ActionsPage`] is the page's whole UI state; it is owned by the page
//! component and mutated by event handlers. [`ActionsService`] performs the
//! network round-trip. The two are split so a browser adapter can release
//! the state while a request is in flight and apply the outcome later.

use daytrader_domain::command::Command;
use daytrader_domain::error::{GatewayError, ValidationError};
use daytrader_domain::layout::{Layout, MAX_FIELDS};
use daytrader_domain::message;
use daytrader_domain::request::PendingRequest;
use daytrader_domain::session::Session;

use crate::ports::TradingGateway;

/// UI state of the actions page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsPage {
    session: Session,
    command: Command,
    inputs: [String; MAX_FIELDS],
    results: String,
}

impl ActionsPage {
    /// Fresh page for `session`, with the first command selected.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            command: Command::ALL[0],
            inputs: Default::default(),
            results: String::new(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        self.session.username()
    }

    #[must_use]
    pub fn command(&self) -> Command {
        self.command
    }

    /// Inputs currently shown for the selected command.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.command.layout()
    }

    /// Value typed into input slot `slot` (empty for slots out of range).
    #[must_use]
    pub fn input(&self, slot: usize) -> &str {
        self.inputs.get(slot).map_or("", String::as_str)
    }

    /// Text of the results area.
    #[must_use]
    pub fn results(&self) -> &str {
        &self.results
    }

    /// Switch to `command`, clearing both inputs and the results area.
    pub fn select(&mut self, command: Command) {
        self.command = command;
        self.inputs = Default::default();
        self.results.clear();
    }

    /// Switch to the command named `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownCommand`] for an unknown identifier;
    /// the page is left unchanged.
    pub fn select_id(&mut self, id: &str) -> Result<Command, ValidationError> {
        let command = id.parse::<Command>()?;
        self.select(command);
        Ok(command)
    }

    /// Record a keystroke in input slot `slot`; out-of-range slots are ignored.
    pub fn set_input(&mut self, slot: usize, value: impl Into<String>) {
        if let Some(input) = self.inputs.get_mut(slot) {
            *input = value.into();
        }
    }

    /// Payload for the current command built from the visible inputs only.
    #[must_use]
    pub fn pending_request(&self) -> PendingRequest {
        let visible = self.layout().visible_count();
        PendingRequest::build(
            self.session.username(),
            self.command,
            &self.inputs[..visible],
        )
    }

    /// Render the outcome of `request` into the results area.
    ///
    /// Success clears the inputs; failure leaves them as typed.
    pub fn apply_outcome(&mut self, request: &PendingRequest, outcome: &Result<String, GatewayError>) {
        match outcome {
            Ok(body) => {
                self.inputs = Default::default();
                self.results = message::success(request, body);
            }
            Err(err) => {
                self.results = message::failure(err);
            }
        }
    }
}

/// Submits pending requests to the trading server.
pub struct ActionsService<G> {
    gateway: G,
}

impl<G: TradingGateway> ActionsService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Send `request` once. No retry and no timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`GatewayError`] reported by the gateway unchanged.
    pub async fn submit(&self, request: &PendingRequest) -> Result<String, GatewayError> {
        tracing::debug!(
            username = %request.username,
            command = %request.command,
            "submitting command"
        );
        let outcome = self.gateway.submit(request).await;
        if let Err(err) = &outcome {
            tracing::warn!(command = %request.command, error = %err, "command failed");
        }
        outcome
    }
}
