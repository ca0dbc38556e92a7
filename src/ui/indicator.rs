//! Step indicator: numbered circles joined by lines
//!
//! Plain widget bundle, no subclass. The controller lights circles and
//! lines by toggling the `active` class through the surface.

use giftbox_common::steps::{Step, INDICATOR_CIRCLES};
use gtk::prelude::*;

pub struct StepIndicator {
    root: gtk::Box,
    circles: Vec<gtk::Label>,
    segments: Vec<gtk::Separator>,
}

impl StepIndicator {
    pub fn new() -> Self {
        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .halign(gtk::Align::Center)
            .spacing(8)
            .margin_bottom(12)
            .css_classes(["step-indicator"])
            .build();

        let mut circles = Vec::with_capacity(INDICATOR_CIRCLES);
        let mut segments = Vec::with_capacity(INDICATOR_CIRCLES - 1);

        for number in 1..=INDICATOR_CIRCLES {
            if number > 1 {
                let line = gtk::Separator::builder()
                    .orientation(gtk::Orientation::Horizontal)
                    .valign(gtk::Align::Center)
                    .width_request(48)
                    .css_classes(["step-line"])
                    .build();
                root.append(&line);
                segments.push(line);
            }

            let stage = gtk::Box::builder()
                .orientation(gtk::Orientation::Vertical)
                .spacing(4)
                .build();

            let circle = gtk::Label::builder()
                .label(&number.to_string())
                .css_classes(["step-circle"])
                .width_request(32)
                .height_request(32)
                .build();

            let title = Step::from_number(number).map(Step::title).unwrap_or_default();
            stage.append(&circle);
            stage.append(
                &gtk::Label::builder()
                    .label(title)
                    .css_classes(["caption", "step-title"])
                    .build(),
            );

            root.append(&stage);
            circles.push(circle);
        }

        Self { root, circles, segments }
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    /// 1-based
    pub fn circle(&self, number: usize) -> Option<gtk::Widget> {
        let index = number.checked_sub(1)?;
        self.circles.get(index).map(|c| c.clone().upcast())
    }

    /// 1-based
    pub fn segment(&self, number: usize) -> Option<gtk::Widget> {
        let index = number.checked_sub(1)?;
        self.segments.get(index).map(|s| s.clone().upcast())
    }
}

impl Default for StepIndicator {
    fn default() -> Self {
        Self::new()
    }
}
