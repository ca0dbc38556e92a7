//! Giftbox Common Library
//!
//! Everything the gift wizard needs that does not touch a display:
//! the gift catalog, selection and step state, form validation, the
//! delivery payload, the rendering-surface abstraction and the controller
//! that ties them together.
//! This crate has NO GTK4 or async dependencies.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod delivery;
pub mod error;
pub mod selection;
pub mod steps;
pub mod surface;
pub mod validate;

pub use catalog::GiftEntry;
pub use controller::{DeliveryFollowUp, SubmitStatus, WizardController};
pub use delivery::{Courier, DeliveryFailure, DeliveryReceipt, TemplateParams};
pub use error::WizardError;
pub use steps::Step;
pub use surface::{Field, MemorySurface, Node, Notice, Surface};
