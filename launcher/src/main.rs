use graphical_interface::MapConfig;

fn usage() -> ! {
    eprintln!("Usage: launcher <map-data-url> <location-games-url> [query-string]");
    std::process::exit(1);
}

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(map_data_url), Some(location_games_url)) = (args.next(), args.next()) else {
        usage();
    };
    if map_data_url.is_empty() || location_games_url.is_empty() {
        usage();
    }
    let page_query = args.next().unwrap_or_default();

    let config = MapConfig {
        map_data_url,
        location_games_url,
        page_query,
    };

    if let Err(err) = graphical_interface::run(config) {
        eprintln!("Failed to start the map viewer: {}", err);
        std::process::exit(1);
    }
}
