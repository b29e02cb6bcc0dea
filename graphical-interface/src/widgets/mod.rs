mod panel;
pub use panel::{PanelState, WidgetPanel};

/// Pluralized count shown in tooltips and the panel header.
pub fn games_label(count: usize) -> String {
    if count == 1 {
        "1 game".to_string()
    } else {
        format!("{} games", count)
    }
}
