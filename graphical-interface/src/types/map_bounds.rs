use std::f64::consts::PI;

use walkers::Position;

const TILE_SIZE: f64 = 256.0;

/// Geographical rectangle of the current map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl MapBounds {
    /// Inclusive on all four edges, so a location exactly on an edge is
    /// still considered visible.
    pub fn contains(&self, position: &Position) -> bool {
        position.lat() >= self.south
            && position.lat() <= self.north
            && position.lon() >= self.west
            && position.lon() <= self.east
    }

    /// Derives the visible rectangle from the map center, the zoom, and the
    /// widget size in pixels, inverting the Web Mercator projection the tile
    /// map renders with.
    pub fn from_view(center: Position, zoom: f64, width_px: f32, height_px: f32) -> Self {
        let world = TILE_SIZE * zoom.exp2();
        let (center_x, center_y) = project(center.lat(), center.lon(), world);
        let half_width = f64::from(width_px) / 2.0;
        let half_height = f64::from(height_px) / 2.0;

        let (north, west) = unproject(center_x - half_width, center_y - half_height, world);
        let (south, east) = unproject(center_x + half_width, center_y + half_height, world);

        Self {
            south,
            north,
            west,
            east,
        }
    }
}

fn project(lat: f64, lon: f64, world: f64) -> (f64, f64) {
    let x = (lon + 180.0) / 360.0 * world;
    let lat_rad = lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * world;
    (x, y)
}

fn unproject(x: f64, y: f64, world: f64) -> (f64, f64) {
    let lon = (x / world * 360.0 - 180.0).clamp(-180.0, 180.0);
    let lat = (PI * (1.0 - 2.0 * y / world)).sinh().atan().to_degrees();
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHOLE_WORLD: MapBounds = MapBounds {
        south: -60.0,
        north: 80.0,
        west: -180.0,
        east: 180.0,
    };

    #[test]
    fn test_contains_inside_and_outside() {
        assert!(WHOLE_WORLD.contains(&Position::from_lat_lon(10.0, 10.0)));
        assert!(!WHOLE_WORLD.contains(&Position::from_lat_lon(85.0, 10.0)));
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let bounds = MapBounds {
            south: 0.0,
            north: 20.0,
            west: 0.0,
            east: 20.0,
        };
        assert!(bounds.contains(&Position::from_lat_lon(20.0, 10.0)));
        assert!(bounds.contains(&Position::from_lat_lon(0.0, 0.0)));
        assert!(bounds.contains(&Position::from_lat_lon(10.0, 20.0)));
        assert!(!bounds.contains(&Position::from_lat_lon(20.000001, 10.0)));
    }

    #[test]
    fn test_from_view_world_at_zoom_zero() {
        // One 256px tile shows the whole mercator world.
        let bounds = MapBounds::from_view(Position::from_lat_lon(0.0, 0.0), 0.0, 256.0, 256.0);
        assert!((bounds.west - -180.0).abs() < 1e-6);
        assert!((bounds.east - 180.0).abs() < 1e-6);
        assert!((bounds.north - 85.0511).abs() < 0.001);
        assert!((bounds.south - -85.0511).abs() < 0.001);
    }

    #[test]
    fn test_from_view_shrinks_when_zooming_in() {
        let center = Position::from_lat_lon(10.0, 10.0);
        let far = MapBounds::from_view(center, 4.0, 512.0, 512.0);
        let near = MapBounds::from_view(center, 6.0, 512.0, 512.0);
        assert!(near.east - near.west < far.east - far.west);
        assert!(near.north - near.south < far.north - far.south);
        assert!(near.contains(&center));
    }
}
