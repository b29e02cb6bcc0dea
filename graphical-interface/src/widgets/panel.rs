use api::{ApiError, GameEntry, LocationGames};
use egui::{Color32, RichText, Vec2};

use super::games_label;

/// Lifecycle of one open panel request.
#[derive(Debug)]
pub enum PanelState {
    Loading,
    Loaded(LocationGames),
    Empty,
    Failed,
}

/// Side panel listing the games behind a clicked bubble.
///
/// Opens in `Loading` with the clicked bubble's name as a provisional title;
/// the matching fetch result moves it to `Loaded`, `Empty` or `Failed`.
pub struct WidgetPanel {
    fallback_title: String,
    generation: u64,
    state: PanelState,
}

impl WidgetPanel {
    pub fn new(fallback_title: String, generation: u64) -> Self {
        Self {
            fallback_title,
            generation,
            state: PanelState::Loading,
        }
    }

    /// Applies a finished fetch. A result that carries a different generation
    /// belongs to a superseded request and is dropped without touching the
    /// panel, so the latest click always wins.
    pub fn deliver(&mut self, generation: u64, result: Result<LocationGames, ApiError>) {
        if generation != self.generation {
            return;
        }
        self.state = match result {
            Ok(payload) if payload.games.is_empty() => PanelState::Empty,
            Ok(payload) => PanelState::Loaded(payload),
            Err(_) => PanelState::Failed,
        };
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn title(&self) -> &str {
        if let PanelState::Loaded(payload) = &self.state {
            if let Some(label) = payload.location_label.as_deref() {
                if !label.is_empty() {
                    return label;
                }
            }
        }
        if self.fallback_title.is_empty() {
            "Games"
        } else {
            &self.fallback_title
        }
    }

    /// Shows the panel window. Returns `false` once the user closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();
        let title = self.title().to_owned();

        egui::Window::new(title)
            .id(egui::Id::new("games_panel"))
            .resizable(false)
            .movable(false)
            .collapsible(false)
            .open(&mut open)
            .fixed_pos([screen_width - 340.0, 20.0])
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(ctx.screen_rect().height() - 80.0)
                    .show(ui, |ui| match &self.state {
                        PanelState::Loading => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label("Loading games…");
                            });
                        }
                        PanelState::Loaded(payload) => {
                            ui.label(RichText::new(games_label(payload.games.len())).size(14.0));
                            ui.add_space(8.0);
                            for game in &payload.games {
                                game_card(ui, game);
                            }
                        }
                        PanelState::Empty => {
                            ui.label("No games found for this location.");
                        }
                        PanelState::Failed => {
                            ui.label(
                                RichText::new("Could not load games.").color(Color32::LIGHT_RED),
                            );
                        }
                    });
            });

        open
    }
}

fn game_card(ui: &mut egui::Ui, game: &GameEntry) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            match game.logo_url.as_deref() {
                Some(logo_url) if !logo_url.is_empty() => {
                    ui.add(
                        egui::Image::new(logo_url)
                            .fit_to_exact_size(Vec2::splat(40.0))
                            .rounding(4.0),
                    );
                }
                _ => {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(40.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 4.0, Color32::from_gray(60));
                }
            }
            ui.vertical(|ui| {
                ui.hyperlink_to(RichText::new(&game.name).strong(), &game.url);
                let meta: Vec<&str> = [
                    game.college_name.as_deref(),
                    game.location_display.as_deref(),
                ]
                .into_iter()
                .flatten()
                .collect();
                if !meta.is_empty() {
                    ui.weak(meta.join(" · "));
                }
            });
        });
    });
    ui.add_space(6.0);
}
