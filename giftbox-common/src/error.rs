//! User-facing wizard errors
//!
//! None of these are fatal; each one leaves the wizard in a state the
//! user can correct. The display strings are what the user sees.

use crate::surface::Field;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Tried to pick one gift more than the selection allows
    #[error("You can select up to {limit} items only! 🎁")]
    SelectionLimitExceeded { limit: usize },

    #[error("Please fill in all required fields! 💌")]
    RequiredFieldMissing { field: Field },

    #[error("Please enter a valid email address! 📧")]
    InvalidEmailFormat { email: String },

    /// The courier reported that the email was not sent
    #[error("Oops! There was an error sending the gift. Please try again! 💔")]
    DeliveryFailed { reason: String },
}
