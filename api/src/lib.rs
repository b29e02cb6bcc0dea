use std::fmt;

use serde::de::DeserializeOwned;

mod query;
mod wire;

pub use query::QueryParams;
pub use wire::{
    CountryOnlyEntry, GameEntry, LocationEntry, LocationGames, MapData, RegionOnlyEntry,
};

/// Failure of one endpoint request.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connection, DNS, TLS...).
    Transport(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(reason) => write!(f, "request failed: {}", reason),
            ApiError::Status(code) => write!(f, "server returned status {}", code),
            ApiError::Decode(reason) => write!(f, "invalid response body: {}", reason),
        }
    }
}

impl std::error::Error for ApiError {}

/// The backend seam of the map viewer. The graphical interface only talks to
/// this trait, so its panel and index flows can be exercised without a server.
pub trait Provider {
    /// Fetches the aggregated location buckets, forwarding the page query
    /// string so server-side filters apply to the aggregation.
    fn fetch_map_data(&self, query: &QueryParams) -> Result<MapData, ApiError>;

    /// Fetches the game list for one selected location.
    fn fetch_location_games(&self, query: &QueryParams) -> Result<LocationGames, ApiError>;
}

/// `Provider` backed by the two HTTP endpoints of the games site.
#[derive(Debug, Clone)]
pub struct HttpApi {
    map_data_url: String,
    location_games_url: String,
}

impl HttpApi {
    pub fn new(map_data_url: String, location_games_url: String) -> Self {
        Self {
            map_data_url,
            location_games_url,
        }
    }

    fn get<T: DeserializeOwned>(&self, url: &str, query: &QueryParams) -> Result<T, ApiError> {
        let full_url = if query.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, query.to_query_string())
        };

        let response = ureq::get(&full_url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ApiError::Status(code),
            other => ApiError::Transport(other.to_string()),
        })?;

        serde_json::from_reader(response.into_reader())
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl Provider for HttpApi {
    fn fetch_map_data(&self, query: &QueryParams) -> Result<MapData, ApiError> {
        self.get(&self.map_data_url, query)
    }

    fn fetch_location_games(&self, query: &QueryParams) -> Result<LocationGames, ApiError> {
        self.get(&self.location_games_url, query)
    }
}
