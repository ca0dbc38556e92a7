//! Wizard steps and the step indicator
//!
//! The wizard walks Catalog -> Form -> Sending -> Confirmation. Moving
//! past either end is a no-op.

/// Circles in the step indicator (Choose, Write, Send)
pub const INDICATOR_CIRCLES: usize = 3;

/// Connecting segments between indicator circles
pub const INDICATOR_SEGMENTS: usize = INDICATOR_CIRCLES - 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Pick gifts from the grid
    #[default]
    Catalog = 1,
    /// Recipient, sender and message
    Form = 2,
    /// Wrapping animation while the email goes out
    Sending = 3,
    /// Gift sent
    Confirmation = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Catalog, Step::Form, Step::Sending, Step::Confirmation];

    /// 1-based position
    pub fn number(self) -> usize {
        self as usize
    }

    pub fn from_number(number: usize) -> Option<Step> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    /// The following step, or `self` at the end
    pub fn next(self) -> Step {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    /// The preceding step, or `self` at the start
    pub fn prev(self) -> Step {
        Self::from_number(self.number() - 1).unwrap_or(self)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Catalog => "Choose",
            Step::Form => "Write",
            Step::Sending => "Send",
            Step::Confirmation => "Sent",
        }
    }
}

/// Indicator circle `circle` (1-based) is lit for every step at or past it
pub fn circle_active(step: Step, circle: usize) -> bool {
    step.number() >= circle
}

/// Segment `segment` joins circle `segment` to `segment + 1`
pub fn segment_active(step: Step, segment: usize) -> bool {
    step.number() > segment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_is_clamped() {
        assert_eq!(Step::Confirmation.next(), Step::Confirmation);
        assert_eq!(Step::Catalog.prev(), Step::Catalog);
        assert_eq!(Step::Catalog.next(), Step::Form);
        assert_eq!(Step::Sending.prev(), Step::Form);
    }

    #[test]
    fn test_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(5), None);
    }

    #[test]
    fn test_indicator() {
        assert!(circle_active(Step::Catalog, 1));
        assert!(!circle_active(Step::Catalog, 2));
        assert!(!segment_active(Step::Catalog, 1));

        assert!(circle_active(Step::Form, 2));
        assert!(segment_active(Step::Form, 1));
        assert!(!segment_active(Step::Form, 2));

        for n in 1..=INDICATOR_CIRCLES {
            assert!(circle_active(Step::Confirmation, n));
        }
        for n in 1..=INDICATOR_SEGMENTS {
            assert!(segment_active(Step::Sending, n));
        }
    }
}
