use crate::draw::model::{Color, StrokeStyle};
use crate::draw::{DrawingCanvas, DrawingSurface};
use crate::global_key_handler::GlobalKeyHandler;
use crate::hud::paint::paint_team_panels;
use crate::hud::derive_team_panels;
use crate::keys::{KeyDirection, KeyEvent};
use crate::players::{PlayerCache, PlayerSource};
use crate::settings::{DrawActivation, Settings};
use crate::ui_state::{PanelId, UiAction, UiDispatcher, UiState, UiStore};
use eframe::egui::{self, Color32, PointerButton, Pos2, Sense, Stroke};

pub struct ReplayViewerApp {
    settings: Settings,
    settings_path: String,
    store: UiStore,
    keys: GlobalKeyHandler,
    canvas: DrawingCanvas,
    players: Option<PlayerCache>,
    tick: u32,
    playing: bool,
}

fn stroke_style(settings: &Settings) -> StrokeStyle {
    StrokeStyle {
        width: settings.drawing.stroke_width,
        color: Color::from_rgba_array(settings.drawing.stroke_color),
    }
}

impl ReplayViewerApp {
    pub fn new(settings: Settings, settings_path: String, players: Option<PlayerCache>) -> Self {
        let mut store = UiStore::new();
        let mut was_drawing = false;
        store.subscribe(move |state: &UiState| {
            if state.drawing != was_drawing {
                was_drawing = state.drawing;
                tracing::info!(drawing = state.drawing, "drawing mode changed");
            }
        });

        let tick = players
            .as_ref()
            .and_then(|p| p.tick_range())
            .map(|r| *r.start())
            .unwrap_or(0);

        Self {
            canvas: DrawingCanvas::new(stroke_style(&settings)),
            settings,
            settings_path,
            store,
            keys: GlobalKeyHandler::new(),
            players,
            tick,
            playing: false,
        }
    }

    pub fn ui_state(&self) -> &UiState {
        self.store.state()
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut DrawingCanvas {
        &mut self.canvas
    }

    pub fn open_panel(&mut self, panel: PanelId) {
        self.store.dispatch(UiAction::PushPanel(panel));
    }

    /// Feed key events through the global shortcut handler.
    pub fn process_key_events(&mut self, events: &[KeyEvent]) {
        for event in events {
            let ui = self.store.snapshot(self.settings.drawing_activation());
            self.keys.handle_event(
                *event,
                ui,
                &mut self.store,
                Some(&mut self.canvas as &mut dyn DrawingSurface),
            );
        }
        if !self.store.state().drawing {
            self.canvas.cancel_stroke();
        }
    }

    fn advance_playback(&mut self, ctx: &egui::Context) {
        if !self.playing {
            return;
        }
        let Some(range) = self.players.as_ref().and_then(|p| p.tick_range()) else {
            self.playing = false;
            return;
        };
        if self.tick >= *range.end() {
            self.playing = false;
        } else {
            self.tick += 1;
            ctx.request_repaint();
        }
    }

    fn timeline_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.playing { "Pause" } else { "Play" };
            if ui.button(label).clicked() {
                self.playing = !self.playing;
            }
            let (start, end) = self
                .players
                .as_ref()
                .and_then(|p| p.tick_range())
                .map(|r| (*r.start(), *r.end()))
                .unwrap_or((0, 0));
            ui.add(egui::Slider::new(&mut self.tick, start..=end).text("tick"));
            ui.separator();
            if ui.button("Settings").clicked() {
                self.open_panel(PanelId::Settings);
            }
            if ui.button("Players").clicked() {
                self.open_panel(PanelId::Players);
            }
            if ui.button("Help").clicked() {
                self.open_panel(PanelId::Help);
            }
            if self.store.state().drawing {
                ui.colored_label(Color32::YELLOW, "drawing");
            }
        });
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let drawing = self.store.state().drawing;

        if drawing {
            if response.drag_started_by(PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.canvas.begin_stroke((pos.x, pos.y));
                }
            }
            if response.dragged_by(PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.canvas.extend_stroke((pos.x, pos.y));
                }
            }
            if response.drag_stopped_by(PointerButton::Primary) {
                self.canvas.commit_stroke();
            }
        }

        let strokes = self
            .canvas
            .history()
            .strokes()
            .iter()
            .chain(self.canvas.active_stroke());
        for stroke in strokes {
            let c = stroke.style.color;
            let points: Vec<Pos2> = stroke.points.iter().map(|(x, y)| Pos2::new(*x, *y)).collect();
            painter.add(egui::Shape::line(
                points,
                Stroke::new(
                    stroke.style.width,
                    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a),
                ),
            ));
        }
    }

    fn panel_ui(&mut self, ctx: &egui::Context) {
        let Some(panel) = self.store.state().top_panel() else {
            return;
        };
        let mut open = true;
        let mut save_requested = false;
        egui::Window::new(panel.title())
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| match panel {
                PanelId::Settings => {
                    ui.label("Drawing activation");
                    ui.radio_value(
                        &mut self.settings.drawing.activation,
                        DrawActivation::Hold,
                        DrawActivation::Hold.to_string(),
                    );
                    ui.radio_value(
                        &mut self.settings.drawing.activation,
                        DrawActivation::Toggle,
                        DrawActivation::Toggle.to_string(),
                    );
                    ui.add(
                        egui::Slider::new(&mut self.settings.drawing.stroke_width, 1.0..=12.0)
                            .text("stroke width"),
                    );
                    if ui.button("Save").clicked() {
                        save_requested = true;
                    }
                }
                PanelId::Players => {
                    let players = self
                        .players
                        .as_ref()
                        .map(|p| p.players_at_tick(self.tick))
                        .unwrap_or_default();
                    for player in players {
                        ui.label(format!(
                            "{:?} {} class {} hp {}",
                            player.team, player.name, player.class_id, player.health
                        ));
                    }
                }
                PanelId::Help => {
                    ui.label("F: draw (hold or toggle, see Settings)");
                    ui.label("C: clear drawing");
                    ui.label("Z: undo last stroke");
                    ui.label("Esc: close panel / stop drawing");
                }
            });

        if save_requested {
            self.canvas.set_style(stroke_style(&self.settings));
            if let Err(err) = self.settings.save(&self.settings_path) {
                tracing::error!("failed to save settings to {}: {err:#}", self.settings_path);
            }
        }
        if !open {
            self.store.dispatch(UiAction::PopPanel);
        }
    }
}

impl eframe::App for ReplayViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Focused text fields swallow presses; releases still reach the
        // handler so the held set stays in sync.
        let focused = ctx.wants_keyboard_input();
        let events: Vec<KeyEvent> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(KeyEvent::from_egui)
                .filter(|event| event.direction == KeyDirection::Up || !focused)
                .collect()
        });
        self.process_key_events(&events);

        self.advance_playback(ctx);

        egui::TopBottomPanel::bottom("timeline").show(ctx, |ui| self.timeline_ui(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_gray(24)))
            .show(ctx, |ui| self.canvas_ui(ui));

        let source = self.players.as_ref().map(|p| p as &dyn PlayerSource);
        paint_team_panels(ctx, &derive_team_panels(source, self.tick));

        self.panel_ui(ctx);
    }
}
