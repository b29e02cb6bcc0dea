use api::QueryParams;
use walkers::Position;

/// The five aggregation kinds a bubble can represent. The two orphan kinds
/// stand for locations whose games have no finer-grained breakdown and are
/// shown alongside a finer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Country,
    Region,
    City,
    CountryOnly,
    RegionOnly,
}

/// Visual family a bubble is colored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleCategory {
    Country,
    Region,
    City,
}

impl LocationKind {
    pub fn category(self) -> BubbleCategory {
        match self {
            LocationKind::Country | LocationKind::CountryOnly => BubbleCategory::Country,
            LocationKind::Region | LocationKind::RegionOnly => BubbleCategory::Region,
            LocationKind::City => BubbleCategory::City,
        }
    }

    /// Writes the location selector this kind contributes to a panel query.
    /// Orphan kinds additionally flag that the finer level is absent.
    pub fn apply_selector(self, params: &mut QueryParams, id: i64) {
        let id = id.to_string();
        match self {
            LocationKind::Country => params.set("country", &id),
            LocationKind::Region => params.set("region", &id),
            LocationKind::City => params.set("city", &id),
            LocationKind::CountryOnly => {
                params.set("country", &id);
                params.set("no_region", "1");
            }
            LocationKind::RegionOnly => {
                params.set("region", &id);
                params.set("no_city", "1");
            }
        }
    }
}

/// One renderable bubble. Recomputed from the current snapshot on every
/// render pass, never cached across viewport changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: i64,
    pub name: String,
    pub count: u32,
    pub position: Position,
    pub kind: LocationKind,
}
