//! Catalog Page - First page of the gift wizard
//!
//! Shows every gift as a tile, the running selection count and the
//! Next button. Tiles only emit `gift-toggled`; whether a tile looks
//! selected is decided by the controller through the surface.

use giftbox_common::catalog::GiftEntry;
use giftbox_common::selection::MAX_SELECTION;
use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;
use std::cell::RefCell;
use std::collections::HashMap;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct CatalogPage {
        pub flow_box: RefCell<Option<gtk::FlowBox>>,
        pub tiles: RefCell<HashMap<u32, gtk::Button>>,
        pub count_label: RefCell<Option<gtk::Label>>,
        pub next_button: RefCell<Option<gtk::Button>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CatalogPage {
        const NAME: &'static str = "GiftboxCatalogPage";
        type Type = super::CatalogPage;
        type ParentType = gtk::Box;
    }

    impl ObjectImpl for CatalogPage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_ui();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            use std::sync::OnceLock;
            static SIGNALS: OnceLock<Vec<glib::subclass::Signal>> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                vec![
                    glib::subclass::Signal::builder("gift-toggled")
                        .param_types([u32::static_type()])
                        .build(),
                    glib::subclass::Signal::builder("next-clicked")
                        .build(),
                ]
            })
        }
    }

    impl WidgetImpl for CatalogPage {}
    impl BoxImpl for CatalogPage {}
}

glib::wrapper! {
    pub struct CatalogPage(ObjectSubclass<imp::CatalogPage>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl CatalogPage {
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
            .label("Choose your gifts")
            .css_classes(["title-2"])
            .halign(gtk::Align::Start)
            .build();

        let subtitle = gtk::Label::builder()
            .label(&format!("Pick up to {} gifts to wrap", MAX_SELECTION))
            .css_classes(["dim-label"])
            .halign(gtk::Align::Start)
            .build();

        let flow_box = gtk::FlowBox::builder()
            .selection_mode(gtk::SelectionMode::None)
            .homogeneous(true)
            .min_children_per_line(3)
            .max_children_per_line(5)
            .column_spacing(8)
            .row_spacing(8)
            .valign(gtk::Align::Start)
            .build();

        let scroll = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .min_content_height(220)
            .child(&flow_box)
            .build();

        // "Selected: 0/5" with the number in its own label
        let count_box = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .hexpand(true)
            .valign(gtk::Align::Center)
            .build();

        let count_label = gtk::Label::builder()
            .label("0")
            .css_classes(["numeric", "selected-count"])
            .build();

        count_box.append(&gtk::Label::new(Some("Selected: ")));
        count_box.append(&count_label);
        count_box.append(&gtk::Label::new(Some(&format!("/{}", MAX_SELECTION))));

        let next_button = gtk::Button::builder()
            .label("Next")
            .css_classes(["pill", "suggested-action"])
            .width_request(120)
            .height_request(40)
            .sensitive(false)
            .build();

        next_button.connect_clicked(glib::clone!(
            @weak self as page =>
            move |_| {
                page.emit_by_name::<()>("next-clicked", &[]);
            }
        ));

        let footer = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(12)
            .build();
        footer.append(&count_box);
        footer.append(&next_button);

        self.append(&title);
        self.append(&subtitle);
        self.append(&scroll);
        self.append(&footer);

        *imp.flow_box.borrow_mut() = Some(flow_box);
        *imp.count_label.borrow_mut() = Some(count_label);
        *imp.next_button.borrow_mut() = Some(next_button);
    }

    /// Replace the grid contents with one tile per entry
    pub fn populate(&self, entries: &[GiftEntry]) {
        let imp = self.imp();
        let Some(flow_box) = imp.flow_box.borrow().clone() else {
            return;
        };

        let mut tiles = imp.tiles.borrow_mut();
        for (_, tile) in tiles.drain() {
            flow_box.remove(&tile);
        }

        for gift in entries {
            let content = gtk::Box::builder()
                .orientation(gtk::Orientation::Vertical)
                .spacing(4)
                .build();

            content.append(
                &gtk::Label::builder()
                    .label(gift.icon)
                    .css_classes(["gift-icon"])
                    .build(),
            );
            content.append(
                &gtk::Label::builder()
                    .label(gift.name)
                    .css_classes(["gift-name", "caption"])
                    .build(),
            );

            let tile = gtk::Button::builder()
                .child(&content)
                .css_classes(["gift-item", "card"])
                .tooltip_text(gift.category.label())
                .build();

            let id = gift.id;
            tile.connect_clicked(glib::clone!(
                @weak self as page =>
                move |_| {
                    page.emit_by_name::<()>("gift-toggled", &[&id]);
                }
            ));

            flow_box.append(&tile);
            tiles.insert(gift.id, tile);
        }
    }

    pub fn tile(&self, id: u32) -> Option<gtk::Button> {
        self.imp().tiles.borrow().get(&id).cloned()
    }

    pub fn count_label(&self) -> Option<gtk::Label> {
        self.imp().count_label.borrow().clone()
    }

    pub fn next_button(&self) -> Option<gtk::Button> {
        self.imp().next_button.borrow().clone()
    }
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new()
    }
}
