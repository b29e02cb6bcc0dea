use api::{CountryOnlyEntry, LocationEntry, MapData, RegionOnlyEntry};
use walkers::Position;

/// One pre-aggregated location with its game count.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: i64,
    pub name: String,
    pub count: u32,
    pub position: Position,
}

/// Snapshot of the aggregated location data at every granularity, plus the
/// orphan buckets for locations without a finer breakdown. Built once per
/// successful fetch and replaced wholesale, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct GeoIndex {
    pub countries: Vec<Cluster>,
    pub regions: Vec<Cluster>,
    pub cities: Vec<Cluster>,
    pub country_only: Vec<Cluster>,
    pub region_only: Vec<Cluster>,
}

impl GeoIndex {
    /// Entries with coordinates outside the valid latitude/longitude ranges
    /// are dropped here so later passes never have to re-check them.
    pub fn from_wire(data: MapData) -> Self {
        Self {
            countries: data.countries.into_iter().filter_map(from_entry).collect(),
            regions: data.regions.into_iter().filter_map(from_entry).collect(),
            cities: data.cities.into_iter().filter_map(from_entry).collect(),
            country_only: data
                .country_only
                .into_iter()
                .filter_map(from_country_only)
                .collect(),
            region_only: data
                .region_only
                .into_iter()
                .filter_map(from_region_only)
                .collect(),
        }
    }
}

fn cluster(id: i64, name: String, count: u32, lat: f64, lng: f64) -> Option<Cluster> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(Cluster {
        id,
        name,
        count,
        position: Position::from_lat_lon(lat, lng),
    })
}

fn from_entry(entry: LocationEntry) -> Option<Cluster> {
    cluster(entry.id, entry.name, entry.count, entry.lat, entry.lng)
}

fn from_country_only(entry: CountryOnlyEntry) -> Option<Cluster> {
    cluster(
        entry.country_id,
        entry.name,
        entry.count,
        entry.lat,
        entry.lng,
    )
}

fn from_region_only(entry: RegionOnlyEntry) -> Option<Cluster> {
    cluster(
        entry.region_id,
        entry.name,
        entry.count,
        entry.lat,
        entry.lng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_maps_orphan_ids() {
        let data = MapData {
            country_only: vec![CountryOnlyEntry {
                country_id: 3,
                name: "Uruguay".to_string(),
                count: 1,
                lat: -32.5,
                lng: -55.8,
            }],
            region_only: vec![RegionOnlyEntry {
                region_id: 7,
                name: "Patagonia".to_string(),
                count: 4,
                lat: -41.9,
                lng: -71.5,
            }],
            ..Default::default()
        };

        let index = GeoIndex::from_wire(data);
        assert_eq!(index.country_only[0].id, 3);
        assert_eq!(index.region_only[0].id, 7);
    }

    #[test]
    fn test_from_wire_drops_invalid_coordinates() {
        let data = MapData {
            countries: vec![
                LocationEntry {
                    id: 1,
                    name: "Valid".to_string(),
                    count: 2,
                    lat: 45.0,
                    lng: 170.0,
                },
                LocationEntry {
                    id: 2,
                    name: "Bad lat".to_string(),
                    count: 2,
                    lat: 91.0,
                    lng: 0.0,
                },
                LocationEntry {
                    id: 3,
                    name: "Bad lng".to_string(),
                    count: 2,
                    lat: 0.0,
                    lng: -181.0,
                },
            ],
            ..Default::default()
        };

        let index = GeoIndex::from_wire(data);
        assert_eq!(index.countries.len(), 1);
        assert_eq!(index.countries[0].id, 1);
    }

    #[test]
    fn test_from_wire_keeps_boundary_coordinates() {
        let data = MapData {
            cities: vec![LocationEntry {
                id: 5,
                name: "Edge".to_string(),
                count: 0,
                lat: -90.0,
                lng: 180.0,
            }],
            ..Default::default()
        };

        assert_eq!(GeoIndex::from_wire(data).cities.len(), 1);
    }
}
