//! Complete Page - Shown once the gift email has been accepted
//!
//! Repeats the message, sender and gifts, and offers to start over or
//! close the window.

use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct CompletePage {
        pub message_label: RefCell<Option<gtk::Label>>,
        pub sender_label: RefCell<Option<gtk::Label>>,
        pub gifts_label: RefCell<Option<gtk::Label>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CompletePage {
        const NAME: &'static str = "GiftboxCompletePage";
        type Type = super::CompletePage;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for CompletePage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_ui();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            use std::sync::OnceLock;
            static SIGNALS: OnceLock<Vec<glib::subclass::Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![
                    glib::subclass::Signal::builder("reset-clicked")
                        .build(),
                ]
            })
        }
    }

    impl WidgetImpl for CompletePage {}
    impl BoxImpl for CompletePage {}
}

glib::wrapper! {
    pub struct CompletePage(ObjectSubclass<imp::CompletePage>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl CompletePage {
    pub fn new() -> Self {
        glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("spacing", 12)
            .property("valign", gtk::Align::Center)
            .property("vexpand", true)
            .build()
    }

    fn setup_ui(&self) {
        let imp = self.imp();

        let icon = gtk::Image::builder()
            .icon_name("emblem-ok-symbolic")
            .pixel_size(64)
            .css_classes(["success-icon", "success"])
            .margin_bottom(8)
            .build();

        let title = gtk::Label::builder()
            .label("Gift Sent! 🎉")
            .css_classes(["title-1"])
            .build();

        let message_label = gtk::Label::builder()
            .css_classes(["display-message"])
            .wrap(true)
            .justify(gtk::Justification::Center)
            .max_width_chars(50)
            .build();

        let sender_label = gtk::Label::builder()
            .css_classes(["display-sender", "dim-label"])
            .build();

        let gifts_label = gtk::Label::builder()
            .css_classes(["display-gifts"])
            .wrap(true)
            .justify(gtk::Justification::Center)
            .margin_bottom(16)
            .build();

        let from_box = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(4)
            .halign(gtk::Align::Center)
            .build();
        from_box.append(
            &gtk::Label::builder()
                .label("With love from")
                .css_classes(["dim-label"])
                .build(),
        );
        from_box.append(&sender_label);

        let button_box = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(12)
            .halign(gtk::Align::Center)
            .margin_top(8)
            .build();

        let again_button = gtk::Button::builder()
            .label("Send Another Gift")
            .css_classes(["pill", "suggested-action"])
            .width_request(180)
            .height_request(44)
            .build();

        again_button.connect_clicked(glib::clone!(
            @weak self as page =>
            move |_| {
                page.emit_by_name::<()>("reset-clicked", &[]);
            }
        ));

        let close_button = gtk::Button::builder()
            .label("Close")
            .css_classes(["pill"])
            .width_request(100)
            .height_request(44)
            .build();

        close_button.connect_clicked(glib::clone!(
            @weak self as page =>
            move |_| {
                if let Some(window) = page.root().and_then(|r| r.downcast::<gtk::Window>().ok()) {
                    window.close();
                }
            }
        ));

        button_box.append(&again_button);
        button_box.append(&close_button);

        self.append(&icon);
        self.append(&title);
        self.append(&message_label);
        self.append(&from_box);
        self.append(&gifts_label);
        self.append(&button_box);

        *imp.message_label.borrow_mut() = Some(message_label);
        *imp.sender_label.borrow_mut() = Some(sender_label);
        *imp.gifts_label.borrow_mut() = Some(gifts_label);
    }

    pub fn message_label(&self) -> Option<gtk::Label> {
        self.imp().message_label.borrow().clone()
    }

    pub fn sender_label(&self) -> Option<gtk::Label> {
        self.imp().sender_label.borrow().clone()
    }

    pub fn gifts_label(&self) -> Option<gtk::Label> {
        self.imp().gifts_label.borrow().clone()
    }
}

impl Default for CompletePage {
    fn default() -> Self {
        Self::new()
    }
}
