//! Wizard Stack - Step indicator plus a carousel of the four pages
//!
//! Owns the controller and routes page signals into it. The send itself
//! runs on a worker thread (see [`crate::courier`]); this widget polls for
//! the outcome from the GTK main loop.

use crate::courier::ThreadedCourier;
use crate::ui::indicator::StepIndicator;
use crate::ui::pages::{CatalogPage, CompletePage, FormPage, SendingPage};
use crate::ui::surface::GtkSurface;
use giftbox_common::catalog;
use giftbox_common::config::GiftboxConfig;
use giftbox_common::controller::{DeliveryFollowUp, SubmitStatus, WizardController};
use giftbox_common::delivery::{DeliveryFailure, DeliveryOutcome};
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc;
use std::time::Duration;

pub type GtkController = WizardController<GtkSurface, ThreadedCourier>;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct WizardStack {
        pub carousel: RefCell<Option<adw::Carousel>>,
        pub config: RefCell<GiftboxConfig>,
        pub controller: RefCell<Option<Rc<RefCell<GtkController>>>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for WizardStack {
        const NAME: &'static str = "GiftboxWizardStack";
        type Type = super::WizardStack;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for WizardStack {
        fn constructed(&self) {
            self.parent_constructed();
            // NOTE: setup_ui() runs from new() once the config is in place
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            use std::sync::OnceLock;
            static SIGNALS: OnceLock<Vec<glib::subclass::Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![
                    glib::subclass::Signal::builder("gift-sent")
                        .build(),
                ]
            })
        }
    }

    impl WidgetImpl for WizardStack {}
    impl BoxImpl for WizardStack {}
}

glib::wrapper! {
    pub struct WizardStack(ObjectSubclass<imp::WizardStack>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl WizardStack {
    pub fn new(config: GiftboxConfig, toast_overlay: &adw::ToastOverlay) -> Self {
        let obj: Self = glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("vexpand", true)
            .build();

        *obj.imp().config.borrow_mut() = config;
        obj.setup_ui(toast_overlay);

        obj
    }

    fn setup_ui(&self, toast_overlay: &adw::ToastOverlay) {
        let imp = self.imp();
        let config = imp.config.borrow().clone();

        if !config.is_configured() {
            tracing::warn!("EmailJS keys are missing; sending will fail until they are configured");
        }

        let indicator = StepIndicator::new();

        // Pages change only under controller command
        let carousel = adw::Carousel::builder()
            .interactive(false)
            .allow_scroll_wheel(false)
            .allow_mouse_drag(false)
            .vexpand(true)
            .build();

        let catalog_page = CatalogPage::new();
        let form_page = FormPage::new();
        let sending_page = SendingPage::new();
        let complete_page = CompletePage::new();

        carousel.append(&catalog_page);
        carousel.append(&form_page);
        carousel.append(&sending_page);
        carousel.append(&complete_page);

        self.append(indicator.widget());
        self.append(&carousel);

        let surface = GtkSurface::new(
            carousel.clone(),
            indicator,
            catalog_page.clone(),
            form_page.clone(),
            sending_page,
            complete_page.clone(),
            toast_overlay.clone(),
        );
        let courier = ThreadedCourier::new(config.emailjs.clone());
        let controller = Rc::new(RefCell::new(WizardController::new(
            surface,
            courier,
            config.wizard.confirmation_delay(),
        )));

        self.connect_pages(&controller, &catalog_page, &form_page, &complete_page);

        *imp.carousel.borrow_mut() = Some(carousel);
        *imp.controller.borrow_mut() = Some(controller);
    }

    fn connect_pages(
        &self,
        controller: &Rc<RefCell<GtkController>>,
        catalog_page: &CatalogPage,
        form_page: &FormPage,
        complete_page: &CompletePage,
    ) {
        let weak = Rc::downgrade(controller);
        catalog_page.connect_local("gift-toggled", false, move |values: &[glib::Value]| {
            let id = values[1].get::<u32>().unwrap_or_default();
            match catalog::find_by_id(id) {
                Some(gift) => with_controller(&weak, |c| {
                    let _ = c.toggle(*gift);
                }),
                None => tracing::warn!("Unknown gift id: {}", id),
            }
            None
        });

        let weak = Rc::downgrade(controller);
        catalog_page.connect_local("next-clicked", false, move |_| {
            with_controller(&weak, |c| {
                c.next();
            });
            None
        });

        let weak = Rc::downgrade(controller);
        form_page.connect_local("back-clicked", false, move |_| {
            with_controller(&weak, |c| {
                c.prev();
            });
            None
        });

        form_page.connect_local(
            "send-clicked",
            false,
            glib::clone!(@weak self as wizard => @default-return None, move |_| {
                wizard.submit();
                None
            }),
        );

        let weak = Rc::downgrade(controller);
        complete_page.connect_local("reset-clicked", false, move |_| {
            with_controller(&weak, |c| c.reset());
            None
        });
    }

    fn controller(&self) -> Option<Rc<RefCell<GtkController>>> {
        self.imp().controller.borrow().clone()
    }

    fn submit(&self) {
        let Some(controller) = self.controller() else {
            return;
        };

        let receiver = {
            let mut controller = controller.borrow_mut();
            match controller.submit() {
                Ok(SubmitStatus::Dispatched) => controller.courier_mut().take_pending(),
                Ok(SubmitStatus::Ignored) => None,
                Err(err) => {
                    tracing::debug!("Submit blocked: {}", err);
                    None
                }
            }
        };

        if let Some(receiver) = receiver {
            self.watch_delivery(receiver);
        }
    }

    /// Poll the worker's channel from the GTK main loop until it answers
    fn watch_delivery(&self, receiver: mpsc::Receiver<DeliveryOutcome>) {
        let wizard = self.downgrade();

        glib::timeout_add_local(Duration::from_millis(16), move || {
            let Some(wizard) = wizard.upgrade() else {
                return glib::ControlFlow::Break;
            };

            let outcome = match receiver.try_recv() {
                Ok(outcome) => outcome,
                Err(mpsc::TryRecvError::Empty) => return glib::ControlFlow::Continue,
                Err(mpsc::TryRecvError::Disconnected) => Err(DeliveryFailure::new(
                    "The delivery worker stopped without reporting back",
                )),
            };

            wizard.finish_delivery(outcome);
            glib::ControlFlow::Break
        });
    }

    fn finish_delivery(&self, outcome: DeliveryOutcome) {
        let Some(controller) = self.controller() else {
            return;
        };

        let follow_up = controller.borrow_mut().on_delivery_result(outcome);

        if let DeliveryFollowUp::ConfirmAfter(delay) = follow_up {
            glib::timeout_add_local_once(
                delay,
                glib::clone!(@weak self as wizard => move || {
                    let Some(controller) = wizard.controller() else {
                        return;
                    };
                    let confirmed = controller.borrow_mut().confirm_delivery();
                    if confirmed {
                        wizard.emit_by_name::<()>("gift-sent", &[]);
                    }
                }),
            );
        }
    }
}

fn with_controller<F>(weak: &Weak<RefCell<GtkController>>, f: F)
where
    F: FnOnce(&mut GtkController),
{
    if let Some(controller) = weak.upgrade() {
        f(&mut controller.borrow_mut());
    }
}

impl Default for WizardStack {
    fn default() -> Self {
        Self::new(GiftboxConfig::default(), &adw::ToastOverlay::new())
    }
}
