//! Sending Page - Wrapping animation shown while the email goes out

use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct SendingPage {
        pub spinner: RefCell<Option<gtk::Spinner>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SendingPage {
        const NAME: &'static str = "GiftboxSendingPage";
        type Type = super::SendingPage;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for SendingPage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_ui();
        }
    }

    impl WidgetImpl for SendingPage {}
    impl BoxImpl for SendingPage {}
}

glib::wrapper! {
    pub struct SendingPage(ObjectSubclass<imp::SendingPage>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl SendingPage {
    pub fn new() -> Self {
        glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("spacing", 16)
            .property("valign", gtk::Align::Center)
            .property("vexpand", true)
            .build()
    }

    fn setup_ui(&self) {
        let gift = gtk::Label::builder()
            .label("🎁")
            .css_classes(["wrapping-gift"])
            .build();

        let spinner = gtk::Spinner::builder()
            .width_request(32)
            .height_request(32)
            .spinning(false)
            .build();

        let status = gtk::Label::builder()
            .label("Wrapping your gift...")
            .css_classes(["title-2"])
            .build();

        let caption = gtk::Label::builder()
            .label("Tying the ribbon and sending it on its way")
            .css_classes(["caption", "dim-label"])
            .build();

        self.append(&gift);
        self.append(&spinner);
        self.append(&status);
        self.append(&caption);

        *self.imp().spinner.borrow_mut() = Some(spinner);
    }

    /// Spin only while the page is on screen
    pub fn set_active(&self, active: bool) {
        if let Some(ref spinner) = *self.imp().spinner.borrow() {
            spinner.set_spinning(active);
        }
    }
}

impl Default for SendingPage {
    fn default() -> Self {
        Self::new()
    }
}
