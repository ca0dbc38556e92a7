//! Selected gifts - an insertion-ordered set capped at [`MAX_SELECTION`]

use crate::catalog::GiftEntry;
use crate::error::WizardError;

/// Most gifts that can go into one email
pub const MAX_SELECTION: usize = 5;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    gifts: Vec<GiftEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the gift if present, otherwise append it.
    /// Appending to a full selection fails and changes nothing.
    pub fn toggle(&mut self, gift: GiftEntry) -> Result<Toggle, WizardError> {
        if let Some(index) = self.gifts.iter().position(|g| g.id == gift.id) {
            self.gifts.remove(index);
            return Ok(Toggle::Removed);
        }

        if self.gifts.len() >= MAX_SELECTION {
            return Err(WizardError::SelectionLimitExceeded { limit: MAX_SELECTION });
        }

        self.gifts.push(gift);
        Ok(Toggle::Added)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.gifts.iter().any(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GiftEntry> {
        self.gifts.iter()
    }

    pub fn clear(&mut self) {
        self.gifts.clear();
    }

    /// "🌹 Rose, 🎂 Cake"
    pub fn summary(&self) -> String {
        self.gifts
            .iter()
            .map(GiftEntry::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_by_name, CATALOG};

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = Selection::new();
        selection.toggle(CATALOG[0]).unwrap();
        selection.toggle(CATALOG[3]).unwrap();
        let before = selection.clone();

        assert_eq!(selection.toggle(CATALOG[10]).unwrap(), Toggle::Added);
        assert_eq!(selection.toggle(CATALOG[10]).unwrap(), Toggle::Removed);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_sixth_gift_is_rejected() {
        let mut selection = Selection::new();
        for gift in &CATALOG[..5] {
            selection.toggle(*gift).unwrap();
        }

        let err = selection.toggle(CATALOG[5]).unwrap_err();
        assert_eq!(err, WizardError::SelectionLimitExceeded { limit: 5 });
        assert_eq!(selection.len(), 5);
        assert!(!selection.contains(CATALOG[5].id));

        // Removing still works when full
        assert_eq!(selection.toggle(CATALOG[2]).unwrap(), Toggle::Removed);
        assert_eq!(selection.toggle(CATALOG[5]).unwrap(), Toggle::Added);
    }

    #[test]
    fn test_cardinality_never_exceeds_limit() {
        let mut selection = Selection::new();
        // Deterministic pseudo-random walk over the catalog
        let mut seed: u32 = 0x2545_F491;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let gift = CATALOG[(seed >> 16) as usize % CATALOG.len()];
            let _ = selection.toggle(gift);
            assert!(selection.len() <= MAX_SELECTION);
        }
    }

    #[test]
    fn test_summary_keeps_insertion_order() {
        let mut selection = Selection::new();
        selection.toggle(*find_by_name("Rose").unwrap()).unwrap();
        selection.toggle(*find_by_name("Cake").unwrap()).unwrap();
        assert_eq!(selection.summary(), "🌹 Rose, 🎂 Cake");

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.summary(), "");
    }
}
