//! GTK rendering surface
//!
//! Maps the controller's nodes onto real widgets. Activating a step panel
//! scrolls the carousel to it; every other class toggle is a CSS class,
//! except the form error's `visible` which shows or hides the label.

use crate::ui::indicator::StepIndicator;
use crate::ui::pages::{CatalogPage, CompletePage, FormPage, SendingPage};
use giftbox_common::catalog::GiftEntry;
use giftbox_common::steps::Step;
use giftbox_common::surface::{Field, Node, Notice, Surface, ACTIVE, VISIBLE};
use adw::prelude::*;

pub struct GtkSurface {
    carousel: adw::Carousel,
    indicator: StepIndicator,
    catalog_page: CatalogPage,
    form_page: FormPage,
    sending_page: SendingPage,
    complete_page: CompletePage,
    toast_overlay: adw::ToastOverlay,
}

impl GtkSurface {
    pub fn new(
        carousel: adw::Carousel,
        indicator: StepIndicator,
        catalog_page: CatalogPage,
        form_page: FormPage,
        sending_page: SendingPage,
        complete_page: CompletePage,
        toast_overlay: adw::ToastOverlay,
    ) -> Self {
        Self {
            carousel,
            indicator,
            catalog_page,
            form_page,
            sending_page,
            complete_page,
            toast_overlay,
        }
    }

    fn panel(&self, step: Step) -> gtk::Widget {
        match step {
            Step::Catalog => self.catalog_page.clone().upcast(),
            Step::Form => self.form_page.clone().upcast(),
            Step::Sending => self.sending_page.clone().upcast(),
            Step::Confirmation => self.complete_page.clone().upcast(),
        }
    }

    fn widget(&self, node: Node) -> Option<gtk::Widget> {
        match node {
            Node::Tile(id) => self.catalog_page.tile(id).map(|w| w.upcast()),
            Node::Panel(step) => Some(self.panel(step)),
            Node::Circle(n) => self.indicator.circle(n),
            Node::Segment(n) => self.indicator.segment(n),
            Node::SelectedCount => self.catalog_page.count_label().map(|w| w.upcast()),
            Node::NextButton => self.catalog_page.next_button().map(|w| w.upcast()),
            Node::FormError => self.form_page.error_label().map(|w| w.upcast()),
            Node::DisplayMessage => self.complete_page.message_label().map(|w| w.upcast()),
            Node::DisplaySender => self.complete_page.sender_label().map(|w| w.upcast()),
            Node::DisplayGifts => self.complete_page.gifts_label().map(|w| w.upcast()),
        }
    }

    fn activate_panel(&self, step: Step) {
        let panel = self.panel(step);
        // Jump without animating until the window is on screen
        self.carousel.scroll_to(&panel, self.carousel.is_mapped());
        self.sending_page.set_active(step == Step::Sending);
    }

    fn show_error_dialog(&self, message: &str) {
        let parent = self
            .toast_overlay
            .root()
            .and_then(|root| root.downcast::<gtk::Window>().ok());

        let dialog = adw::MessageDialog::new(parent.as_ref(), Some("Gift Not Sent"), Some(message));
        dialog.add_response("close", "OK");
        dialog.set_default_response(Some("close"));
        dialog.set_close_response("close");
        dialog.present();
    }
}

impl Surface for GtkSurface {
    fn mount_catalog(&mut self, entries: &[GiftEntry]) {
        self.catalog_page.populate(entries);
    }

    fn set_text(&mut self, node: Node, text: &str) {
        match self.widget(node).and_then(|w| w.downcast::<gtk::Label>().ok()) {
            Some(label) => label.set_label(text),
            None => tracing::warn!("No label for {:?}", node),
        }
    }

    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        let Some(widget) = self.widget(node) else {
            tracing::warn!("No widget for {:?}", node);
            return;
        };

        if enabled {
            widget.add_css_class(class);
        } else {
            widget.remove_css_class(class);
        }

        match node {
            Node::Panel(step) if class == ACTIVE && enabled => self.activate_panel(step),
            Node::FormError if class == VISIBLE => widget.set_visible(enabled),
            _ => {}
        }
    }

    fn set_enabled(&mut self, node: Node, enabled: bool) {
        if let Some(widget) = self.widget(node) {
            widget.set_sensitive(enabled);
        }
    }

    fn field_value(&self, field: Field) -> String {
        self.form_page.field_text(field)
    }

    fn clear_field(&mut self, field: Field) {
        self.form_page.clear_field(field);
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Warning(message) => {
                let toast = adw::Toast::builder().title(&message).timeout(3).build();
                self.toast_overlay.add_toast(toast);
            }
            Notice::Error(message) => self.show_error_dialog(&message),
        }
    }
}
