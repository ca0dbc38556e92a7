//! Wizard Controller
//!
//! Owns the selected gifts and the current step, and keeps a [`Surface`]
//! in sync with them. All methods run on the caller's thread; the only
//! asynchronous piece is the send, which goes through a [`Courier`] and
//! comes back through [`WizardController::on_delivery_result`].

use crate::catalog::{catalog, GiftEntry};
use crate::delivery::{Courier, DeliveryOutcome, TemplateParams, DEFAULT_MESSAGE};
use crate::error::WizardError;
use crate::selection::{Selection, Toggle};
use crate::steps::{circle_active, segment_active, Step, INDICATOR_CIRCLES, INDICATOR_SEGMENTS};
use crate::surface::{Field, Node, Notice, Surface, ACTIVE, SELECTED, VISIBLE};
use crate::validate::{is_blank, validate_email};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of a submit that passed validation (or was not applicable)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Handed to the courier, wizard now on the sending step
    Dispatched,
    /// Not on the form step, or a send is already in flight
    Ignored,
}

/// What the front end should do after a delivery outcome arrives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryFollowUp {
    /// Call [`WizardController::confirm_delivery`] after this delay
    ConfirmAfter(Duration),
    /// Send failed; the wizard is back on the form with inputs intact
    ReturnedToForm(WizardError),
    /// No send was in flight (e.g. the wizard was reset meanwhile)
    Ignored,
}

pub struct WizardController<S: Surface, C: Courier> {
    surface: S,
    courier: C,
    selection: Selection,
    step: Step,
    in_flight: bool,
    confirmation_delay: Duration,
}

impl<S: Surface, C: Courier> WizardController<S, C> {
    /// Mount the catalog on `surface` and show the first step
    pub fn new(surface: S, courier: C, confirmation_delay: Duration) -> Self {
        let mut controller = Self {
            surface,
            courier,
            selection: Selection::new(),
            step: Step::Catalog,
            in_flight: false,
            confirmation_delay,
        };

        controller.render_catalog();
        controller.show_only(Step::Catalog);
        controller.sync_counter();
        controller.sync_indicator();
        controller
    }

    pub fn render_catalog(&mut self) {
        self.surface.mount_catalog(catalog());
    }

    /// Add or remove `gift`. A full selection rejects additions with a
    /// warning and stays as it was.
    pub fn toggle(&mut self, gift: GiftEntry) -> Result<Toggle, WizardError> {
        match self.selection.toggle(gift) {
            Ok(toggle) => {
                self.surface
                    .set_class(Node::Tile(gift.id), SELECTED, toggle == Toggle::Added);
                self.sync_counter();
                debug!("{:?} {} ({} selected)", toggle, gift.name, self.selection.len());
                Ok(toggle)
            }
            Err(err) => {
                self.surface.notify(Notice::Warning(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn next(&mut self) -> Step {
        self.go_to(self.step.next());
        self.step
    }

    pub fn prev(&mut self) -> Step {
        self.go_to(self.step.prev());
        self.step
    }

    /// Validate the form and hand the email to the courier.
    ///
    /// Validation failures are shown inline and leave everything untouched.
    pub fn submit(&mut self) -> Result<SubmitStatus, WizardError> {
        if self.step != Step::Form || self.in_flight {
            return Ok(SubmitStatus::Ignored);
        }

        let params = match self.read_form() {
            Ok(params) => params,
            Err(err) => {
                self.surface.set_text(Node::FormError, &err.to_string());
                self.surface.set_class(Node::FormError, VISIBLE, true);
                return Err(err);
            }
        };
        self.hide_form_error();

        self.surface
            .set_text(Node::DisplayMessage, &format!("\"{}\"", params.message));
        self.surface.set_text(Node::DisplaySender, &params.from_name);
        self.surface.set_text(Node::DisplayGifts, &params.gifts);

        self.next();
        self.in_flight = true;
        info!(
            "Sending {} gift(s) from {} to {}",
            self.selection.len(),
            params.from_name,
            params.to_email
        );
        self.courier.dispatch(params);

        Ok(SubmitStatus::Dispatched)
    }

    /// Feed the courier's outcome back in
    pub fn on_delivery_result(&mut self, outcome: DeliveryOutcome) -> DeliveryFollowUp {
        if !self.in_flight {
            debug!("Dropping delivery outcome with nothing in flight");
            return DeliveryFollowUp::Ignored;
        }
        self.in_flight = false;

        match outcome {
            Ok(receipt) => {
                info!("Gift email accepted: {} {}", receipt.status, receipt.text);
                DeliveryFollowUp::ConfirmAfter(self.confirmation_delay)
            }
            Err(failure) => {
                warn!("Gift email failed: {}", failure);
                let err = WizardError::DeliveryFailed { reason: failure.reason };
                self.surface.notify(Notice::Error(err.to_string()));
                if self.step == Step::Sending {
                    self.prev();
                }
                DeliveryFollowUp::ReturnedToForm(err)
            }
        }
    }

    /// Move from the sending animation to the confirmation. Returns false
    /// if the wizard has left the sending step since.
    pub fn confirm_delivery(&mut self) -> bool {
        if self.step != Step::Sending || self.in_flight {
            return false;
        }
        self.next();
        true
    }

    /// Back to an empty first step
    pub fn reset(&mut self) {
        self.selection.clear();
        self.in_flight = false;

        for gift in catalog() {
            self.surface.set_class(Node::Tile(gift.id), SELECTED, false);
        }
        for field in Field::ALL {
            self.surface.clear_field(field);
        }
        self.hide_form_error();

        self.step = Step::Catalog;
        self.show_only(Step::Catalog);
        self.sync_counter();
        self.sync_indicator();
        debug!("Wizard reset");
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn courier(&self) -> &C {
        &self.courier
    }

    pub fn courier_mut(&mut self) -> &mut C {
        &mut self.courier
    }

    fn read_form(&self) -> Result<TemplateParams, WizardError> {
        let email = self.surface.field_value(Field::RecipientEmail);
        let name = self.surface.field_value(Field::SenderName);
        let message = self.surface.field_value(Field::Message);

        if is_blank(&email) {
            return Err(WizardError::RequiredFieldMissing { field: Field::RecipientEmail });
        }
        if is_blank(&name) {
            return Err(WizardError::RequiredFieldMissing { field: Field::SenderName });
        }

        let email = email.trim();
        if !validate_email(email) {
            return Err(WizardError::InvalidEmailFormat { email: email.to_string() });
        }

        let message = if is_blank(&message) {
            DEFAULT_MESSAGE.to_string()
        } else {
            message.trim().to_string()
        };

        Ok(TemplateParams {
            to_email: email.to_string(),
            from_name: name.trim().to_string(),
            message,
            gifts: self.selection.summary(),
        })
    }

    fn go_to(&mut self, target: Step) {
        if target == self.step {
            return;
        }
        self.surface.set_class(Node::Panel(self.step), ACTIVE, false);
        self.step = target;
        self.surface.set_class(Node::Panel(target), ACTIVE, true);
        self.sync_indicator();
    }

    fn show_only(&mut self, step: Step) {
        for panel in Step::ALL {
            self.surface.set_class(Node::Panel(panel), ACTIVE, panel == step);
        }
    }

    fn sync_counter(&mut self) {
        let count = self.selection.len();
        self.surface.set_text(Node::SelectedCount, &count.to_string());
        self.surface.set_enabled(Node::NextButton, count > 0);
    }

    fn sync_indicator(&mut self) {
        for circle in 1..=INDICATOR_CIRCLES {
            self.surface
                .set_class(Node::Circle(circle), ACTIVE, circle_active(self.step, circle));
        }
        for segment in 1..=INDICATOR_SEGMENTS {
            self.surface
                .set_class(Node::Segment(segment), ACTIVE, segment_active(self.step, segment));
        }
    }

    fn hide_form_error(&mut self) {
        self.surface.set_text(Node::FormError, "");
        self.surface.set_class(Node::FormError, VISIBLE, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_by_name, CATALOG};
    use crate::delivery::{DeliveryFailure, DeliveryReceipt, QueuedCourier};
    use crate::selection::MAX_SELECTION;
    use crate::surface::MemorySurface;

    type TestController = WizardController<MemorySurface, QueuedCourier>;

    fn controller() -> TestController {
        WizardController::new(MemorySurface::new(), QueuedCourier::new(), Duration::from_secs(3))
    }

    fn gift(name: &str) -> GiftEntry {
        *find_by_name(name).unwrap()
    }

    fn fill_form(c: &mut TestController, email: &str, name: &str, message: &str) {
        let surface = c.surface_mut();
        surface.set_field(Field::RecipientEmail, email);
        surface.set_field(Field::SenderName, name);
        surface.set_field(Field::Message, message);
    }

    /// Rose + Cake picked, on the form step with a valid form
    fn ready_to_send() -> TestController {
        let mut c = controller();
        c.toggle(gift("Rose")).unwrap();
        c.toggle(gift("Cake")).unwrap();
        c.next();
        fill_form(&mut c, "x@y.com", "Sam", "");
        c
    }

    fn receipt() -> DeliveryOutcome {
        Ok(DeliveryReceipt { status: 200, text: "OK".to_string() })
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        let surface = c.surface();

        assert_eq!(c.step(), Step::Catalog);
        assert_eq!(surface.tiles().len(), 25);
        assert_eq!(surface.active_panels(), vec![Step::Catalog]);
        assert_eq!(surface.text(Node::SelectedCount), Some("0"));
        assert!(!surface.is_enabled(Node::NextButton));
        assert!(surface.has_class(Node::Circle(1), ACTIVE));
        assert!(!surface.has_class(Node::Circle(2), ACTIVE));
        assert!(!surface.has_class(Node::Segment(1), ACTIVE));
    }

    #[test]
    fn test_toggle_updates_tile_counter_and_next_button() {
        let mut c = controller();
        let rose = gift("Rose");

        assert_eq!(c.toggle(rose).unwrap(), Toggle::Added);
        assert!(c.surface().has_class(Node::Tile(rose.id), SELECTED));
        assert_eq!(c.surface().text(Node::SelectedCount), Some("1"));
        assert!(c.surface().is_enabled(Node::NextButton));

        assert_eq!(c.toggle(rose).unwrap(), Toggle::Removed);
        assert!(!c.surface().has_class(Node::Tile(rose.id), SELECTED));
        assert_eq!(c.surface().text(Node::SelectedCount), Some("0"));
        assert!(!c.surface().is_enabled(Node::NextButton));
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_capacity_warning_leaves_state_unchanged() {
        let mut c = controller();
        for g in &CATALOG[..MAX_SELECTION] {
            c.toggle(*g).unwrap();
        }

        let sixth = CATALOG[MAX_SELECTION];
        let err = c.toggle(sixth).unwrap_err();

        assert_eq!(err, WizardError::SelectionLimitExceeded { limit: 5 });
        assert_eq!(c.selection().len(), 5);
        assert!(!c.surface().has_class(Node::Tile(sixth.id), SELECTED));
        assert_eq!(c.surface().text(Node::SelectedCount), Some("5"));
        assert_eq!(
            c.surface().notices(),
            &[Notice::Warning("You can select up to 5 items only! 🎁".to_string())]
        );
    }

    #[test]
    fn test_navigation_is_clamped_and_keeps_one_panel_active() {
        let mut c = controller();
        assert_eq!(c.prev(), Step::Catalog);

        for expected in [Step::Form, Step::Sending, Step::Confirmation, Step::Confirmation] {
            assert_eq!(c.next(), expected);
            assert_eq!(c.surface().active_panels(), vec![expected]);
        }

        assert!(c.surface().has_class(Node::Circle(3), ACTIVE));
        assert!(c.surface().has_class(Node::Segment(2), ACTIVE));

        assert_eq!(c.prev(), Step::Sending);
        assert_eq!(c.prev(), Step::Form);
        assert!(!c.surface().has_class(Node::Circle(3), ACTIVE));
        assert!(!c.surface().has_class(Node::Segment(2), ACTIVE));
        assert!(c.surface().has_class(Node::Segment(1), ACTIVE));
    }

    #[test]
    fn test_submit_with_empty_name_does_not_send() {
        let mut c = ready_to_send();
        c.surface_mut().set_field(Field::SenderName, "   ");

        let err = c.submit().unwrap_err();

        assert_eq!(err, WizardError::RequiredFieldMissing { field: Field::SenderName });
        assert_eq!(c.step(), Step::Form);
        assert_eq!(c.courier().dispatched(), 0);
        assert!(c.surface().has_class(Node::FormError, VISIBLE));
        assert_eq!(
            c.surface().text(Node::FormError),
            Some("Please fill in all required fields! 💌")
        );
    }

    #[test]
    fn test_submit_with_missing_email() {
        let mut c = ready_to_send();
        c.surface_mut().clear_field(Field::RecipientEmail);

        let err = c.submit().unwrap_err();
        assert_eq!(err, WizardError::RequiredFieldMissing { field: Field::RecipientEmail });
        assert_eq!(c.courier().dispatched(), 0);
    }

    #[test]
    fn test_submit_with_malformed_email() {
        let mut c = ready_to_send();
        c.surface_mut().set_field(Field::RecipientEmail, "x@y");

        let err = c.submit().unwrap_err();
        assert!(matches!(err, WizardError::InvalidEmailFormat { .. }));
        assert_eq!(c.step(), Step::Form);
        assert_eq!(c.courier().dispatched(), 0);

        // Fixing the address clears the inline error
        c.surface_mut().set_field(Field::RecipientEmail, "x@y.com");
        assert_eq!(c.submit().unwrap(), SubmitStatus::Dispatched);
        assert!(!c.surface().has_class(Node::FormError, VISIBLE));
    }

    #[test]
    fn test_submit_builds_payload_with_default_message() {
        let mut c = ready_to_send();

        assert_eq!(c.submit().unwrap(), SubmitStatus::Dispatched);
        assert_eq!(c.step(), Step::Sending);
        assert!(c.is_sending());

        let params = c.courier().pending().unwrap();
        assert_eq!(params.to_email, "x@y.com");
        assert_eq!(params.from_name, "Sam");
        assert_eq!(params.gifts, "🌹 Rose, 🎂 Cake");
        assert_eq!(params.message, DEFAULT_MESSAGE);

        let surface = c.surface();
        assert_eq!(
            surface.text(Node::DisplayMessage),
            Some("\"Sending you love and warm wishes! 💝\"")
        );
        assert_eq!(surface.text(Node::DisplaySender), Some("Sam"));
        assert_eq!(surface.text(Node::DisplayGifts), Some("🌹 Rose, 🎂 Cake"));
    }

    #[test]
    fn test_submit_keeps_custom_message() {
        let mut c = ready_to_send();
        c.surface_mut().set_field(Field::Message, "  Happy birthday!  ");

        c.submit().unwrap();
        assert_eq!(c.courier().pending().unwrap().message, "Happy birthday!");
    }

    #[test]
    fn test_only_one_send_in_flight() {
        let mut c = ready_to_send();
        c.submit().unwrap();

        // Force the form back into view while the first send is pending
        c.prev();
        assert_eq!(c.submit().unwrap(), SubmitStatus::Ignored);
        assert_eq!(c.courier().dispatched(), 1);
    }

    #[test]
    fn test_submit_outside_form_step_is_ignored() {
        let mut c = controller();
        fill_form(&mut c, "x@y.com", "Sam", "");
        assert_eq!(c.submit().unwrap(), SubmitStatus::Ignored);
        assert_eq!(c.courier().dispatched(), 0);
    }

    #[test]
    fn test_successful_delivery_confirms_after_delay() {
        let mut c = ready_to_send();
        c.submit().unwrap();

        let follow_up = c.on_delivery_result(receipt());
        assert_eq!(follow_up, DeliveryFollowUp::ConfirmAfter(Duration::from_secs(3)));
        assert_eq!(c.step(), Step::Sending);

        assert!(c.confirm_delivery());
        assert_eq!(c.step(), Step::Confirmation);
        assert_eq!(c.surface().active_panels(), vec![Step::Confirmation]);
        assert!(!c.confirm_delivery());
    }

    #[test]
    fn test_failed_delivery_returns_to_form_with_inputs() {
        let mut c = ready_to_send();
        c.surface_mut().set_field(Field::Message, "hello");
        c.submit().unwrap();

        let follow_up = c.on_delivery_result(Err(DeliveryFailure::new("HTTP 400")));

        assert_eq!(
            follow_up,
            DeliveryFollowUp::ReturnedToForm(WizardError::DeliveryFailed {
                reason: "HTTP 400".to_string()
            })
        );
        assert_eq!(c.step(), Step::Form);
        assert!(!c.is_sending());
        assert_eq!(c.surface().field_value(Field::SenderName), "Sam");
        assert_eq!(c.surface().field_value(Field::Message), "hello");
        assert_eq!(c.selection().len(), 2);
        assert!(matches!(c.surface().notices().last(), Some(Notice::Error(_))));

        // Resubmitting is allowed
        assert_eq!(c.submit().unwrap(), SubmitStatus::Dispatched);
        assert_eq!(c.courier().dispatched(), 2);
    }

    #[test]
    fn test_late_outcome_after_reset_is_ignored() {
        let mut c = ready_to_send();
        c.submit().unwrap();
        c.reset();

        assert_eq!(c.on_delivery_result(receipt()), DeliveryFollowUp::Ignored);
        assert!(!c.confirm_delivery());
        assert_eq!(c.step(), Step::Catalog);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut c = ready_to_send();
        c.surface_mut().set_field(Field::RecipientEmail, "bad");
        let _ = c.submit();
        c.surface_mut().set_field(Field::RecipientEmail, "x@y.com");
        c.submit().unwrap();
        c.on_delivery_result(receipt());
        c.confirm_delivery();

        c.reset();
        c.reset();

        let surface = c.surface();
        assert!(c.selection().is_empty());
        assert_eq!(c.step(), Step::Catalog);
        assert_eq!(surface.active_panels(), vec![Step::Catalog]);
        for field in Field::ALL {
            assert_eq!(surface.field_value(field), "");
        }
        for g in catalog() {
            assert!(!surface.has_class(Node::Tile(g.id), SELECTED));
        }
        assert_eq!(surface.text(Node::SelectedCount), Some("0"));
        assert!(!surface.is_enabled(Node::NextButton));
        assert!(!surface.has_class(Node::FormError, VISIBLE));
        assert!(!surface.has_class(Node::Circle(2), ACTIVE));
        assert!(!surface.has_class(Node::Segment(1), ACTIVE));
    }
}
