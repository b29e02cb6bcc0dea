use std::{
    cell::RefCell,
    path::Path,
    rc::Rc,
    sync::{
        mpsc::{Receiver, Sender, TryRecvError},
        Arc,
    },
    thread,
};

use api::{ApiError, HttpApi, LocationGames, MapData, Provider, QueryParams};
use egui::Context;
use egui_extras::install_image_loaders;
use logger::Logger;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    bubbles::{build_items, Viewport},
    level::Level,
    plugins,
    state::{SelectionState, ViewState},
    types::{DisplayItem, MapBounds},
    widgets::WidgetPanel,
    windows,
};

const INITIAL_LAT: f64 = 20.0;
const INITIAL_LON: f64 = 0.0;
const INITIAL_ZOOM: f64 = 2.0;
const LOG_DIR: &str = "logs";
const LOG_NAME: &str = "map-viewer";

/// Endpoint configuration handed in by the embedding site.
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub map_data_url: String,
    pub location_games_url: String,
    /// Query string of the page, forwarded unchanged to the map-data
    /// endpoint so server-side filters apply to the aggregation.
    pub page_query: String,
}

/// The map viewer application: a tile map with aggregated game bubbles and
/// a side panel showing the games of a clicked bubble.
pub struct MapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    view_state: ViewState,
    panel: Option<WidgetPanel>,
    panel_tx: Sender<(u64, Result<LocationGames, ApiError>)>,
    panel_rx: Receiver<(u64, Result<LocationGames, ApiError>)>,
    panel_generation: u64,
    index_rx: Option<Receiver<Result<MapData, ApiError>>>,
    api: Arc<HttpApi>,
    page_query: QueryParams,
    logger: Option<Logger>,
}

impl MapApp {
    /// Creates the app and kicks off the one-shot fetch of the aggregated
    /// location data. Until it resolves the map shows no bubbles.
    pub fn new(egui_ctx: Context, config: MapConfig) -> Self {
        install_image_loaders(&egui_ctx);

        let mut initial_map_memory = MapMemory::default();
        let _ = initial_map_memory.set_zoom(INITIAL_ZOOM);

        let logger = Logger::new(Path::new(LOG_DIR), LOG_NAME).ok();
        let api = Arc::new(HttpApi::new(
            config.map_data_url,
            config.location_games_url,
        ));
        let page_query = QueryParams::parse(&config.page_query);

        let index_rx = spawn_index_fetch(api.clone(), page_query.clone(), egui_ctx.clone());
        let (panel_tx, panel_rx) = std::sync::mpsc::channel();

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            view_state: ViewState::new(),
            panel: None,
            panel_tx,
            panel_rx,
            panel_generation: 0,
            index_rx: Some(index_rx),
            api,
            page_query,
            logger,
        }
    }

    fn log_error(&self, message: &str) {
        match &self.logger {
            Some(logger) => {
                let _ = logger.error(message);
            }
            None => eprintln!("{}", message),
        }
    }

    fn poll_index_fetch(&mut self) {
        let Some(rx) = &self.index_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(data)) => {
                self.view_state.install_index(data);
                self.index_rx = None;
            }
            Ok(Err(err)) => {
                self.log_error(&format!("Failed to load map data: {}", err));
                self.index_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.index_rx = None;
            }
        }
    }

    fn poll_panel_fetches(&mut self) {
        while let Ok((generation, result)) = self.panel_rx.try_recv() {
            if let Err(err) = &result {
                self.log_error(&format!("Failed to load location games: {}", err));
            }
            if let Some(panel) = &mut self.panel {
                panel.deliver(generation, result);
            }
        }
    }

    /// Opens the side panel for a clicked bubble and starts its fetch. A
    /// fresh generation tags the request so a previous, still unresolved
    /// fetch can never overwrite this panel.
    fn open_panel(&mut self, item: DisplayItem, egui_ctx: &Context) {
        self.panel_generation += 1;
        let generation = self.panel_generation;

        let mut query = self.page_query.clone();
        item.kind.apply_selector(&mut query, item.id);
        query.set("view", "map");

        self.panel = Some(WidgetPanel::new(item.name, generation));

        let api = self.api.clone();
        let tx = self.panel_tx.clone();
        let ctx = egui_ctx.clone();
        thread::spawn(move || {
            let result = api.fetch_location_games(&query);
            let _ = tx.send((generation, result));
            ctx.request_repaint();
        });
    }

    fn current_viewport(&self, widget_size: egui::Vec2) -> Viewport {
        let center = self
            .map_memory
            .detached()
            .unwrap_or(Position::from_lat_lon(INITIAL_LAT, INITIAL_LON));
        let zoom = self.map_memory.zoom();
        let bounds = MapBounds::from_view(center, zoom, widget_size.x, widget_size.y);
        Viewport {
            zoom,
            bounds: Some(bounds),
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_index_fetch();
        self.poll_panel_fetches();

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let viewport = self.current_viewport(ui.available_size());
                let items = build_items(self.view_state.index(), &viewport);

                let bubbles = plugins::Bubbles::new(&items, self.selection_state.clone());
                let map = Map::new(
                    Some(self.tiles.as_mut()),
                    &mut self.map_memory,
                    Position::from_lat_lon(INITIAL_LAT, INITIAL_LON),
                )
                .with_plugin(bubbles);
                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
                windows::caption(ui, Level::for_zoom(viewport.zoom).caption());

                let clicked = self.selection_state.borrow_mut().take_clicked();
                if let Some(item) = clicked {
                    self.open_panel(item, ctx);
                }

                if let Some(panel) = &mut self.panel {
                    if !panel.show(ctx) {
                        self.panel = None;
                        // Invalidate whatever fetch the closed panel left in flight.
                        self.panel_generation += 1;
                    }
                }
            });
    }
}

fn spawn_index_fetch(
    api: Arc<HttpApi>,
    query: QueryParams,
    ctx: Context,
) -> Receiver<Result<MapData, ApiError>> {
    let (tx, rx) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let result = api.fetch_map_data(&query);
        let _ = tx.send(result);
        ctx.request_repaint();
    });
    rx
}
