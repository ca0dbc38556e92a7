//! Rendering surface
//!
//! The controller never touches widgets directly. It addresses named nodes
//! on a [`Surface`] and the front end decides what "active" or "selected"
//! means for its own widgets. [`MemorySurface`] keeps everything in maps;
//! it backs the tests and the headless send mode.

use crate::catalog::GiftEntry;
use crate::steps::Step;
use std::collections::{HashMap, HashSet};

/// Class marking the visible step panel and lit indicator parts
pub const ACTIVE: &str = "active";

/// Class marking a picked gift tile
pub const SELECTED: &str = "selected";

/// Class revealing the inline form error
pub const VISIBLE: &str = "visible";

/// Stable identifiers for the nodes the controller writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// Catalog tile for the gift with this id
    Tile(u32),
    /// Content panel of a step
    Panel(Step),
    /// Step indicator circle, 1-based
    Circle(usize),
    /// Step indicator connector, 1-based
    Segment(usize),
    SelectedCount,
    NextButton,
    FormError,
    DisplayMessage,
    DisplaySender,
    DisplayGifts,
}

/// User-editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RecipientEmail,
    SenderName,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::RecipientEmail, Field::SenderName, Field::Message];
}

/// Something the user should be told about outside the normal layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Transient, e.g. the selection is full
    Warning(String),
    /// Needs dismissing, e.g. the email could not be sent
    Error(String),
}

pub trait Surface {
    /// Create one tile per entry, keyed by gift id
    fn mount_catalog(&mut self, entries: &[GiftEntry]);

    fn set_text(&mut self, node: Node, text: &str);

    fn set_class(&mut self, node: Node, class: &str, enabled: bool);

    fn set_enabled(&mut self, node: Node, enabled: bool);

    fn field_value(&self, field: Field) -> String;

    fn clear_field(&mut self, field: Field);

    fn notify(&mut self, notice: Notice);
}

/// A surface that only remembers what was written to it
#[derive(Debug, Default)]
pub struct MemorySurface {
    tiles: Vec<u32>,
    texts: HashMap<Node, String>,
    classes: HashSet<(Node, String)>,
    disabled: HashSet<Node>,
    fields: HashMap<Field, String>,
    notices: Vec<Notice>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into a field
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn text(&self, node: Node) -> Option<&str> {
        self.texts.get(&node).map(String::as_str)
    }

    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.classes.contains(&(node, class.to_string()))
    }

    pub fn is_enabled(&self, node: Node) -> bool {
        !self.disabled.contains(&node)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Steps whose panel currently carries [`ACTIVE`]
    pub fn active_panels(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| self.has_class(Node::Panel(*step), ACTIVE))
            .collect()
    }
}

impl Surface for MemorySurface {
    fn mount_catalog(&mut self, entries: &[GiftEntry]) {
        self.tiles = entries.iter().map(|gift| gift.id).collect();
    }

    fn set_text(&mut self, node: Node, text: &str) {
        self.texts.insert(node, text.to_string());
    }

    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        let key = (node, class.to_string());
        if enabled {
            self.classes.insert(key);
        } else {
            self.classes.remove(&key);
        }
    }

    fn set_enabled(&mut self, node: Node, enabled: bool) {
        if enabled {
            self.disabled.remove(&node);
        } else {
            self.disabled.insert(node);
        }
    }

    fn field_value(&self, field: Field) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn clear_field(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_toggling() {
        let mut surface = MemorySurface::new();
        surface.set_class(Node::Tile(3), SELECTED, true);
        assert!(surface.has_class(Node::Tile(3), SELECTED));
        assert!(!surface.has_class(Node::Tile(3), ACTIVE));

        surface.set_class(Node::Tile(3), SELECTED, false);
        assert!(!surface.has_class(Node::Tile(3), SELECTED));
    }

    #[test]
    fn test_fields_default_to_empty() {
        let mut surface = MemorySurface::new();
        assert_eq!(surface.field_value(Field::Message), "");

        surface.set_field(Field::Message, "hi");
        assert_eq!(surface.field_value(Field::Message), "hi");

        surface.clear_field(Field::Message);
        assert_eq!(surface.field_value(Field::Message), "");
    }
}
