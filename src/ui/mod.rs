//! UI Module - GTK4 + Libadwaita Interface
//!
//! A frameless window with a four-step gift wizard.

pub mod app;
pub mod window;
pub mod wizard;
pub mod pages;
pub mod indicator;
pub mod surface;
