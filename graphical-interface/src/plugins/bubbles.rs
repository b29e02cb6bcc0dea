use std::{cell::RefCell, rc::Rc};

use egui::{Align2, Color32, FontId, Rect, Response, Stroke, Vec2};
use walkers::{Plugin, Projector};

use crate::bubbles::radius_from_count;
use crate::state::SelectionState;
use crate::types::{BubbleCategory, DisplayItem};
use crate::widgets::games_label;

/// Draws one size-scaled bubble per display item on top of the tile map.
pub struct Bubbles<'a> {
    items: &'a [DisplayItem],
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Bubbles<'a> {
    pub fn new(items: &'a [DisplayItem], selection_state: Rc<RefCell<SelectionState>>) -> Self {
        Self {
            items,
            selection_state,
        }
    }
}

impl Plugin for Bubbles<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for item in self.items {
            item.draw(ui, projector, &mut self.selection_state.borrow_mut());
        }
    }
}

fn category_fill(category: BubbleCategory) -> Color32 {
    match category {
        BubbleCategory::Country => Color32::from_rgba_unmultiplied(36, 98, 181, 210),
        BubbleCategory::Region => Color32::from_rgba_unmultiplied(222, 133, 34, 210),
        BubbleCategory::City => Color32::from_rgba_unmultiplied(42, 157, 89, 210),
    }
}

impl DisplayItem {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector, selection_state: &mut SelectionState) {
        let screen_position = projector.project(self.position).to_pos2();
        let radius = radius_from_count(self.count);

        let clickable_area = Rect::from_center_size(screen_position, Vec2::splat(radius * 2.0));
        let response = ui.allocate_rect(clickable_area, egui::Sense::click());

        let painter = ui.painter();
        painter.circle(
            screen_position,
            radius,
            category_fill(self.kind.category()),
            Stroke::new(1.5, Color32::WHITE),
        );
        painter.text(
            screen_position,
            Align2::CENTER_CENTER,
            self.count.to_string(),
            FontId::proportional(12.0),
            Color32::WHITE,
        );

        // egui renders these as plain text, so remote names cannot inject markup.
        let response = response.on_hover_ui(|ui| {
            let name = if self.name.is_empty() {
                "Location"
            } else {
                self.name.as_str()
            };
            ui.strong(name);
            ui.label(games_label(self.count as usize));
            ui.weak("Click to view");
        });

        if response.clicked() {
            selection_state.select(self);
        }
    }
}
