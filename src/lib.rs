//! Giftbox Library - Virtual gift wizard
//!
//! This library provides:
//! - The EmailJS client and the threaded courier that drives it
//! - The GTK4/Libadwaita wizard
//!
//! The wizard state machine, catalog and configuration live in
//! `giftbox-common` and are re-exported here.

pub mod courier;
pub mod emailjs;
pub mod ui;

pub use giftbox_common::{catalog, config, controller, delivery, error, selection, steps, surface, validate};
