//! Form Page - Recipient, sender and message
//!
//! Owns the three input widgets. Validation happens in the controller;
//! this page just exposes the raw text and an inline error label.

use giftbox_common::surface::Field;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct FormPage {
        pub email_entry: RefCell<Option<gtk::Entry>>,
        pub name_entry: RefCell<Option<gtk::Entry>>,
        pub message_view: RefCell<Option<gtk::TextView>>,
        pub error_label: RefCell<Option<gtk::Label>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for FormPage {
        const NAME: &'static str = "GiftboxFormPage";
        type Type = super::FormPage;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for FormPage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_ui();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            use std::sync::OnceLock;
            static SIGNALS: OnceLock<Vec<glib::subclass::Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![
                    glib::subclass::Signal::builder("back-clicked")
                        .build(),
                    glib::subclass::Signal::builder("send-clicked")
                        .build(),
                ]
            })
        }
    }

    impl WidgetImpl for FormPage {}
    impl BoxImpl for FormPage {}
}

glib::wrapper! {
    pub struct FormPage(ObjectSubclass<imp::FormPage>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl FormPage {
    pub fn new() -> Self {
        glib::Object::builder()
            .property("orientation", gtk::Orientation::Vertical)
            .property("spacing", 12)
            .property("vexpand", true)
            .build()
    }

    fn setup_ui(&self) {
        let imp = self.imp();

        let title = gtk::Label::builder()
            .label("Write a note")
            .css_classes(["title-2"])
            .halign(gtk::Align::Start)
            .build();

        let email_entry = gtk::Entry::builder()
            .placeholder_text("Recipient's email *")
            .input_purpose(gtk::InputPurpose::Email)
            .build();

        let name_entry = gtk::Entry::builder()
            .placeholder_text("Your name *")
            .input_purpose(gtk::InputPurpose::Name)
            .build();

        let message_caption = gtk::Label::builder()
            .label("Message (optional)")
            .css_classes(["caption", "dim-label"])
            .halign(gtk::Align::Start)
            .build();

        let message_view = gtk::TextView::builder()
            .wrap_mode(gtk::WrapMode::WordChar)
            .top_margin(8)
            .bottom_margin(8)
            .left_margin(8)
            .right_margin(8)
            .build();

        let message_scroll = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .min_content_height(100)
            .css_classes(["card", "message-scroll"])
            .child(&message_view)
            .build();

        let error_label = gtk::Label::builder()
            .css_classes(["error", "form-error"])
            .halign(gtk::Align::Start)
            .wrap(true)
            .visible(false)
            .build();

        let back_button = gtk::Button::builder()
            .label("Back")
            .css_classes(["pill"])
            .width_request(100)
            .height_request(40)
            .build();

        let send_button = gtk::Button::builder()
            .label("Send Gift")
            .css_classes(["pill", "suggested-action"])
            .width_request(140)
            .height_request(40)
            .build();

        back_button.connect_clicked(glib::clone!(
            @weak self as page =>
            move |_| {
                page.emit_by_name::<()>("back-clicked", &[]);
            }
        ));

        send_button.connect_clicked(glib::clone!(
            @weak self as page =>
            move |_| {
                page.emit_by_name::<()>("send-clicked", &[]);
            }
        ));

        // Enter moves from email to name, and sends from name
        email_entry.connect_activate(glib::clone!(
            @weak name_entry =>
            move |_| {
                name_entry.grab_focus();
            }
        ));

        name_entry.connect_activate(glib::clone!(
            @weak self as page =>
            move |_| {
                page.emit_by_name::<()>("send-clicked", &[]);
            }
        ));

        let button_box = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(12)
            .halign(gtk::Align::End)
            .build();
        button_box.append(&back_button);
        button_box.append(&send_button);

        self.append(&title);
        self.append(&email_entry);
        self.append(&name_entry);
        self.append(&message_caption);
        self.append(&message_scroll);
        self.append(&error_label);
        self.append(&button_box);

        *imp.email_entry.borrow_mut() = Some(email_entry);
        *imp.name_entry.borrow_mut() = Some(name_entry);
        *imp.message_view.borrow_mut() = Some(message_view);
        *imp.error_label.borrow_mut() = Some(error_label);
    }

    fn entry(&self, field: Field) -> Option<gtk::Entry> {
        let imp = self.imp();
        match field {
            Field::RecipientEmail => imp.email_entry.borrow().clone(),
            Field::SenderName => imp.name_entry.borrow().clone(),
            Field::Message => None,
        }
    }

    /// Current text of a field, untrimmed
    pub fn field_text(&self, field: Field) -> String {
        if let Some(entry) = self.entry(field) {
            return entry.text().to_string();
        }

        match *self.imp().message_view.borrow() {
            Some(ref view) => {
                let buffer = view.buffer();
                buffer
                    .text(&buffer.start_iter(), &buffer.end_iter(), false)
                    .to_string()
            }
            None => String::new(),
        }
    }

    pub fn clear_field(&self, field: Field) {
        if let Some(entry) = self.entry(field) {
            entry.set_text("");
        } else if let Some(ref view) = *self.imp().message_view.borrow() {
            view.buffer().set_text("");
        }
    }

    pub fn error_label(&self) -> Option<gtk::Label> {
        self.imp().error_label.borrow().clone()
    }
}

impl Default for FormPage {
    fn default() -> Self {
        Self::new()
    }
}
