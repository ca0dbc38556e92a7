//! Giftbox Application - GTK4 Application Setup
//!
//! Initializes the GTK4/Libadwaita application and handles the main event loop.

use crate::ui::window::GiftboxWindow;
use giftbox_common::config::GiftboxConfig;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::gio;
use gtk::glib;
use std::cell::RefCell;

/// Application ID for Giftbox
const APP_ID: &str = "org.giftbox.Giftbox";

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct GiftboxApplication {
        pub config: RefCell<GiftboxConfig>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GiftboxApplication {
        const NAME: &'static str = "GiftboxApplication";
        type Type = super::GiftboxApplication;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for GiftboxApplication {}

    impl ApplicationImpl for GiftboxApplication {
        fn activate(&self) {
            let app = self.obj();

            // Single window; a second launch just raises it
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }

            let config = self.config.borrow().clone();
            let window = GiftboxWindow::new(&app, config);
            window.present();
        }

        fn startup(&self) {
            self.parent_startup();

            let css_provider = gtk::CssProvider::new();
            css_provider.load_from_data(include_str!("styles.css"));

            match gtk::gdk::Display::default() {
                Some(display) => {
                    gtk::style_context_add_provider_for_display(
                        &display,
                        &css_provider,
                        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
                    );
                }
                None => {
                    tracing::warn!("No display available. CSS styling will not be applied.");
                }
            }

            let app = self.obj();
            app.setup_actions();
        }
    }

    impl GtkApplicationImpl for GiftboxApplication {}
    impl AdwApplicationImpl for GiftboxApplication {}
}

glib::wrapper! {
    pub struct GiftboxApplication(ObjectSubclass<imp::GiftboxApplication>)
        @extends adw::Application, gtk::Application, gio::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl GiftboxApplication {
    pub fn new(config: GiftboxConfig) -> Self {
        let app: Self = glib::Object::builder()
            .property("application-id", APP_ID)
            .property("flags", gio::ApplicationFlags::FLAGS_NONE)
            .build();

        *app.imp().config.borrow_mut() = config;

        app
    }

    fn setup_actions(&self) {
        let quit_action = gio::SimpleAction::new("quit", None);
        quit_action.connect_activate(glib::clone!(
            @weak self as app =>
            move |_, _| {
                app.quit();
            }
        ));
        self.add_action(&quit_action);

        self.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    pub fn run(&self) -> glib::ExitCode {
        // Our own CLI flags are parsed by clap; keep GTK from seeing them
        ApplicationExtManual::run_with_args::<&str>(self, &[])
    }
}

impl Default for GiftboxApplication {
    fn default() -> Self {
        Self::new(GiftboxConfig::default())
    }
}
