//! Delivery payload and the courier seam
//!
//! The controller hands a [`TemplateParams`] to a [`Courier`] and later
//! receives the outcome through
//! [`WizardController::on_delivery_result`](crate::controller::WizardController::on_delivery_result).

use serde::{Deserialize, Serialize};

/// Message used when the sender leaves the message field blank
pub const DEFAULT_MESSAGE: &str = "Sending you love and warm wishes! 💝";

/// Variables substituted into the email template.
/// Field names are the template variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub from_name: String,
    pub message: String,
    /// "🌹 Rose, 🎂 Cake"
    pub gifts: String,
}

/// Acknowledgement from the email service. This is an HTTP-level
/// acknowledgement, not proof the email reached an inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

/// Why a send did not go through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct DeliveryFailure {
    pub reason: String,
}

impl DeliveryFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

pub type DeliveryOutcome = Result<DeliveryReceipt, DeliveryFailure>;

/// Hands an email off for sending without blocking the caller
pub trait Courier {
    fn dispatch(&mut self, params: TemplateParams);
}

/// Holds the last dispatched request until someone takes it.
/// Used where the caller performs the send itself.
#[derive(Debug, Default)]
pub struct QueuedCourier {
    pending: Option<TemplateParams>,
    dispatched: usize,
}

impl QueuedCourier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Option<TemplateParams> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&TemplateParams> {
        self.pending.as_ref()
    }

    /// Total number of dispatches seen
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }
}

impl Courier for QueuedCourier {
    fn dispatch(&mut self, params: TemplateParams) {
        self.dispatched += 1;
        self.pending = Some(params);
    }
}
