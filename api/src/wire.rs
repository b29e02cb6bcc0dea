use serde::Deserialize;

/// One aggregated location at its proper level (country, region or city).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationEntry {
    pub id: i64,
    pub name: String,
    pub count: u32,
    pub lat: f64,
    pub lng: f64,
}

/// A country whose games have no region breakdown. Carries `country_id`
/// to distinguish it from the proper `country` entry at the same point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryOnlyEntry {
    pub country_id: i64,
    pub name: String,
    pub count: u32,
    pub lat: f64,
    pub lng: f64,
}

/// A region whose games have no city breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionOnlyEntry {
    pub region_id: i64,
    pub name: String,
    pub count: u32,
    pub lat: f64,
    pub lng: f64,
}

/// Payload of the map-data endpoint: five ordered buckets of aggregated
/// locations, one per granularity plus the two orphan buckets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapData {
    #[serde(default)]
    pub countries: Vec<LocationEntry>,
    #[serde(default)]
    pub regions: Vec<LocationEntry>,
    #[serde(default)]
    pub cities: Vec<LocationEntry>,
    #[serde(default)]
    pub country_only: Vec<CountryOnlyEntry>,
    #[serde(default)]
    pub region_only: Vec<RegionOnlyEntry>,
}

/// One game card shown in the side panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub location_display: Option<String>,
}

/// Payload of the location-games endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationGames {
    #[serde(default)]
    pub location_label: Option<String>,
    #[serde(default)]
    pub games: Vec<GameEntry>,
}
