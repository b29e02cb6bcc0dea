use std::collections::HashSet;

use crate::level::Level;
use crate::types::{Cluster, DisplayItem, GeoIndex, LocationKind, MapBounds};

pub const BUBBLE_MIN_R: f32 = 12.0;
pub const BUBBLE_MAX_R: f32 = 28.0;
pub const BUBBLE_SCALE: f32 = 3.0;

/// Current zoom and visible rectangle. Bounds of `None` accept every
/// location, which covers the first pass before the map has a defined view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub bounds: Option<MapBounds>,
}

impl Viewport {
    fn accepts(&self, cluster: &Cluster) -> bool {
        match &self.bounds {
            Some(bounds) => bounds.contains(&cluster.position),
            None => true,
        }
    }
}

/// Bubble radius grows linearly with the game count, clamped at both ends.
pub fn radius_from_count(count: u32) -> f32 {
    (BUBBLE_MIN_R + count as f32 * BUBBLE_SCALE).clamp(BUBBLE_MIN_R, BUBBLE_MAX_R)
}

/// Projects the snapshot into the bubbles visible at the current viewport.
///
/// The country level is global; the region level unions bounds-filtered
/// regions with the country_only orphans, and the city level unions cities
/// with both orphan buckets. Insertion order follows the source buckets and
/// no two returned items share the same `(kind, id)`.
pub fn build_items(index: &GeoIndex, viewport: &Viewport) -> Vec<DisplayItem> {
    let mut items = Vec::new();
    let mut seen: HashSet<(LocationKind, i64)> = HashSet::new();

    match Level::for_zoom(viewport.zoom) {
        Level::Country => {
            extend(&mut items, &mut seen, &index.countries, LocationKind::Country, None);
        }
        Level::Region => {
            extend(
                &mut items,
                &mut seen,
                &index.regions,
                LocationKind::Region,
                Some(viewport),
            );
            extend(
                &mut items,
                &mut seen,
                &index.country_only,
                LocationKind::CountryOnly,
                Some(viewport),
            );
        }
        Level::City => {
            extend(
                &mut items,
                &mut seen,
                &index.cities,
                LocationKind::City,
                Some(viewport),
            );
            extend(
                &mut items,
                &mut seen,
                &index.country_only,
                LocationKind::CountryOnly,
                Some(viewport),
            );
            extend(
                &mut items,
                &mut seen,
                &index.region_only,
                LocationKind::RegionOnly,
                Some(viewport),
            );
        }
    }

    items
}

fn extend(
    items: &mut Vec<DisplayItem>,
    seen: &mut HashSet<(LocationKind, i64)>,
    clusters: &[Cluster],
    kind: LocationKind,
    viewport: Option<&Viewport>,
) {
    for cluster in clusters {
        if let Some(viewport) = viewport {
            if !viewport.accepts(cluster) {
                continue;
            }
        }
        if !seen.insert((kind, cluster.id)) {
            continue;
        }
        items.push(DisplayItem {
            id: cluster.id,
            name: cluster.name.clone(),
            count: cluster.count,
            position: cluster.position,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkers::Position;

    fn cluster(id: i64, name: &str, count: u32, lat: f64, lng: f64) -> Cluster {
        Cluster {
            id,
            name: name.to_string(),
            count,
            position: Position::from_lat_lon(lat, lng),
        }
    }

    fn sample_index() -> GeoIndex {
        GeoIndex {
            countries: vec![
                cluster(1, "Argentina", 5, -38.4, -63.6),
                cluster(2, "Japan", 3, 36.2, 138.3),
            ],
            regions: vec![cluster(10, "Mendoza", 2, 10.0, 10.0)],
            cities: vec![cluster(20, "Springfield", 1, 10.0, 10.0)],
            country_only: vec![cluster(3, "Uruguay", 1, 50.0, 50.0)],
            region_only: vec![cluster(11, "Patagonia", 4, 15.0, 15.0)],
        }
    }

    fn bounded(zoom: f64, south: f64, north: f64, west: f64, east: f64) -> Viewport {
        Viewport {
            zoom,
            bounds: Some(MapBounds {
                south,
                north,
                west,
                east,
            }),
        }
    }

    #[test]
    fn test_country_level_ignores_bounds() {
        // Bounds that contain none of the countries still return them all.
        let viewport = bounded(1.0, 0.0, 1.0, 0.0, 1.0);
        let items = build_items(&sample_index(), &viewport);
        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![LocationKind::Country, LocationKind::Country]);
        assert_eq!(items[0].name, "Argentina");
        assert_eq!(items[1].name, "Japan");
    }

    #[test]
    fn test_region_level_filters_by_bounds() {
        // Region at (10,10) inside, country_only orphan at (50,50) outside.
        let viewport = bounded(5.0, 0.0, 20.0, 0.0, 20.0);
        let items = build_items(&sample_index(), &viewport);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, LocationKind::Region);
        assert_eq!(items[0].id, 10);
    }

    #[test]
    fn test_region_level_includes_country_only_orphans() {
        let viewport = bounded(5.0, 0.0, 60.0, 0.0, 60.0);
        let items = build_items(&sample_index(), &viewport);
        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![LocationKind::Region, LocationKind::CountryOnly]);
    }

    #[test]
    fn test_city_level_unions_three_buckets_in_order() {
        let viewport = bounded(8.0, 0.0, 60.0, 0.0, 60.0);
        let items = build_items(&sample_index(), &viewport);
        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LocationKind::City,
                LocationKind::CountryOnly,
                LocationKind::RegionOnly,
            ]
        );
        // Orphans keep their own id namespace.
        assert_eq!(items[1].id, 3);
        assert_eq!(items[2].id, 11);
    }

    #[test]
    fn test_missing_bounds_accept_everything() {
        let viewport = Viewport {
            zoom: 8.0,
            bounds: None,
        };
        let items = build_items(&sample_index(), &viewport);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_edge_locations_are_included() {
        let index = GeoIndex {
            regions: vec![cluster(1, "On the edge", 1, 20.0, 10.0)],
            ..Default::default()
        };
        let viewport = bounded(5.0, 0.0, 20.0, 0.0, 20.0);
        assert_eq!(build_items(&index, &viewport).len(), 1);
    }

    #[test]
    fn test_duplicate_kind_and_id_is_dropped() {
        let index = GeoIndex {
            regions: vec![
                cluster(1, "First", 1, 5.0, 5.0),
                cluster(1, "Duplicate", 2, 6.0, 6.0),
            ],
            ..Default::default()
        };
        let viewport = Viewport {
            zoom: 5.0,
            bounds: None,
        };
        let items = build_items(&index, &viewport);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "First");
    }

    #[test]
    fn test_same_id_different_kind_is_kept() {
        let index = GeoIndex {
            cities: vec![cluster(7, "City seven", 1, 5.0, 5.0)],
            region_only: vec![cluster(7, "Region seven", 1, 6.0, 6.0)],
            ..Default::default()
        };
        let viewport = Viewport {
            zoom: 8.0,
            bounds: None,
        };
        assert_eq!(build_items(&index, &viewport).len(), 2);
    }

    #[test]
    fn test_build_items_is_idempotent() {
        let index = sample_index();
        let viewport = bounded(8.0, 0.0, 60.0, 0.0, 60.0);
        assert_eq!(
            build_items(&index, &viewport),
            build_items(&index, &viewport)
        );
    }

    #[test]
    fn test_radius_is_clamped_and_monotonic() {
        assert_eq!(radius_from_count(0), BUBBLE_MIN_R);
        assert_eq!(radius_from_count(1), BUBBLE_MIN_R + BUBBLE_SCALE);
        assert_eq!(radius_from_count(1000), BUBBLE_MAX_R);

        let mut previous = 0.0;
        for count in 0..200 {
            let radius = radius_from_count(count);
            assert!(radius >= BUBBLE_MIN_R && radius <= BUBBLE_MAX_R);
            assert!(radius >= previous);
            previous = radius;
        }
    }
}
