use api::MapData;

use crate::types::{DisplayItem, GeoIndex};

/// Hands the bubble most recently clicked on the map over to the app, which
/// turns it into an open side panel.
pub struct SelectionState {
    clicked: Option<DisplayItem>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { clicked: None }
    }

    pub fn select(&mut self, item: &DisplayItem) {
        self.clicked = Some(item.clone());
    }

    pub fn take_clicked(&mut self) -> Option<DisplayItem> {
        self.clicked.take()
    }
}

/// Owns the aggregated location snapshot currently shown on the map.
pub struct ViewState {
    index: GeoIndex,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            index: GeoIndex::default(),
        }
    }

    /// Replaces the whole snapshot, so a render pass never observes a
    /// partially updated index.
    pub fn install_index(&mut self, data: MapData) {
        self.index = GeoIndex::from_wire(data);
    }

    pub fn index(&self) -> &GeoIndex {
        &self.index
    }
}
