/// Zoom thresholds between aggregation levels, matching the bubble data the
/// backend aggregates per level.
pub const ZOOM_COUNTRY: f64 = 4.0;
pub const ZOOM_REGION: f64 = 6.0;

/// Aggregation granularity selected by the current zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Country,
    Region,
    City,
}

impl Level {
    pub fn for_zoom(zoom: f64) -> Self {
        if zoom < ZOOM_COUNTRY {
            Level::Country
        } else if zoom < ZOOM_REGION {
            Level::Region
        } else {
            Level::City
        }
    }

    /// Caption shown over the map for the current level.
    pub fn caption(self) -> &'static str {
        match self {
            Level::Country => "Showing countries. Zoom in for regions and cities.",
            Level::Region => "Showing regions and states. Zoom in for cities.",
            Level::City => "Showing cities.",
        }
    }
}
