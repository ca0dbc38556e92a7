//! Giftbox Window - Frameless, draggable window hosting the wizard
//!
//! Uses GtkWindowHandle to make the entire window draggable and an
//! AdwToastOverlay for transient warnings.

use crate::ui::app::GiftboxApplication;
use crate::ui::wizard::WizardStack;
use giftbox_common::config::GiftboxConfig;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(string = r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <interface>
            <template class="GiftboxWindow" parent="AdwApplicationWindow">
                <property name="default-width">720</property>
                <property name="default-height">560</property>
                <property name="decorated">false</property>
                <property name="title">Giftbox</property>
                <style>
                    <class name="giftbox-window"/>
                </style>
                <property name="content">
                    <object class="GtkWindowHandle">
                        <property name="child">
                            <object class="AdwToastOverlay" id="toast_overlay">
                                <property name="child">
                                    <object class="GtkBox" id="main_box">
                                        <property name="orientation">vertical</property>
                                        <property name="margin-start">24</property>
                                        <property name="margin-end">24</property>
                                        <property name="margin-top">16</property>
                                        <property name="margin-bottom">24</property>

                                        <!-- Title and close button -->
                                        <child>
                                            <object class="GtkBox" id="header_box">
                                                <child>
                                                    <object class="GtkLabel">
                                                        <property name="label">🎁 Giftbox</property>
                                                        <property name="hexpand">true</property>
                                                        <property name="halign">start</property>
                                                        <style>
                                                            <class name="heading"/>
                                                        </style>
                                                    </object>
                                                </child>
                                                <child>
                                                    <object class="GtkButton" id="close_button">
                                                        <property name="icon-name">window-close-symbolic</property>
                                                        <property name="valign">center</property>
                                                        <property name="tooltip-text">Close</property>
                                                        <style>
                                                            <class name="circular"/>
                                                            <class name="flat"/>
                                                        </style>
                                                    </object>
                                                </child>
                                            </object>
                                        </child>

                                        <!-- Wizard content area -->
                                        <child>
                                            <object class="GtkBox" id="content_box">
                                                <property name="orientation">vertical</property>
                                                <property name="vexpand">true</property>
                                                <property name="valign">fill</property>
                                            </object>
                                        </child>
                                    </object>
                                </property>
                            </object>
                        </property>
                    </object>
                </property>
            </template>
        </interface>
    "#)]
    pub struct GiftboxWindow {
        #[template_child]
        pub content_box: TemplateChild<gtk::Box>,

        #[template_child]
        pub close_button: TemplateChild<gtk::Button>,

        #[template_child]
        pub toast_overlay: TemplateChild<adw::ToastOverlay>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GiftboxWindow {
        const NAME: &'static str = "GiftboxWindow";
        type Type = super::GiftboxWindow;
        type ParentType = adw::ApplicationWindow;

        fn class_init(klass: &mut Self::Class) {
            klass.bind_template();
        }

        fn instance_init(obj: &glib::subclass::InitializingObject<Self>) {
            obj.init_template();
        }
    }

    impl ObjectImpl for GiftboxWindow {
        fn constructed(&self) {
            self.parent_constructed();

            let window = self.obj();

            self.close_button.connect_clicked(glib::clone!(
                @weak window =>
                move |_| {
                    window.close();
                }
            ));
        }
    }

    impl WidgetImpl for GiftboxWindow {}
    impl WindowImpl for GiftboxWindow {}
    impl ApplicationWindowImpl for GiftboxWindow {}
    impl AdwApplicationWindowImpl for GiftboxWindow {}
}

glib::wrapper! {
    pub struct GiftboxWindow(ObjectSubclass<imp::GiftboxWindow>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl GiftboxWindow {
    pub fn new(app: &GiftboxApplication, config: GiftboxConfig) -> Self {
        let window: Self = glib::Object::builder()
            .property("application", app)
            .build();

        let imp = window.imp();
        let wizard = WizardStack::new(config, &imp.toast_overlay);
        imp.content_box.append(&wizard);

        wizard.connect_local("gift-sent", false, |_| {
            tracing::info!("Gift delivered, showing confirmation");
            None
        });

        window
    }
}
