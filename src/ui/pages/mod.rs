//! Wizard Pages - One page per wizard step
//!
//! Each page builds its own widgets and emits signals for navigation;
//! the wizard routes those signals to the controller.

mod catalog;
mod form;
mod sending;
mod complete;

pub use catalog::CatalogPage;
pub use form::FormPage;
pub use sending::SendingPage;
pub use complete::CompletePage;
