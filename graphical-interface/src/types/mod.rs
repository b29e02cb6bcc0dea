mod location;
pub use location::{BubbleCategory, DisplayItem, LocationKind};

mod geo_index;
pub use geo_index::{Cluster, GeoIndex};

mod map_bounds;
pub use map_bounds::MapBounds;
