use eframe::egui;
use replay_viewer::gui::ReplayViewerApp;
use replay_viewer::keys::{KeyEvent, LogicalKey};
use replay_viewer::settings::{DrawActivation, Settings};
use replay_viewer::ui_state::PanelId;

fn app(activation: DrawActivation) -> ReplayViewerApp {
    let mut settings = Settings::default();
    settings.drawing.activation = activation;
    ReplayViewerApp::new(settings, "settings.json".into(), None)
}

#[test]
fn f_press_closes_panel_and_enters_drawing() {
    let mut app = app(DrawActivation::Toggle);
    app.open_panel(PanelId::Help);

    app.process_key_events(&[KeyEvent::down(LogicalKey::F)]);

    assert!(app.ui_state().active_panels.is_empty());
    assert!(app.ui_state().drawing);

    app.process_key_events(&[KeyEvent::up(LogicalKey::F)]);
    assert!(app.ui_state().drawing);
}

#[test]
fn escape_closes_top_panel_before_leaving_drawing() {
    let mut app = app(DrawActivation::Toggle);
    app.process_key_events(&[KeyEvent::down(LogicalKey::F), KeyEvent::up(LogicalKey::F)]);
    app.open_panel(PanelId::Settings);

    app.process_key_events(&[KeyEvent::down(LogicalKey::Escape)]);
    assert!(app.ui_state().active_panels.is_empty());
    assert!(app.ui_state().drawing);

    app.process_key_events(&[KeyEvent::down(LogicalKey::Escape)]);
    assert!(!app.ui_state().drawing);
}

#[test]
fn leaving_drawing_mode_drops_unfinished_stroke() {
    let mut app = app(DrawActivation::Hold);
    app.process_key_events(&[KeyEvent::down(LogicalKey::F)]);
    app.canvas_mut().begin_stroke((1.0, 1.0));

    app.process_key_events(&[KeyEvent::up(LogicalKey::F)]);

    assert!(!app.ui_state().drawing);
    assert!(app.canvas().active_stroke().is_none());
}

#[test]
fn c_clears_committed_strokes() {
    let mut app = app(DrawActivation::Toggle);
    app.canvas_mut().begin_stroke((0.0, 0.0));
    app.canvas_mut().end_stroke((30.0, 30.0));
    assert_eq!(app.canvas().history().len(), 1);

    app.process_key_events(&[KeyEvent::down(LogicalKey::C)]);
    assert!(app.canvas().history().is_empty());
}

#[test]
fn players_panel_is_dismissed_by_escape() {
    let mut app = app(DrawActivation::Hold);
    app.open_panel(PanelId::Settings);
    app.open_panel(PanelId::Players);
    assert_eq!(app.ui_state().top_panel(), Some(PanelId::Players));

    app.process_key_events(&[KeyEvent::down(LogicalKey::Escape)]);
    assert_eq!(app.ui_state().top_panel(), Some(PanelId::Settings));
}

fn f_key(pressed: bool, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key: egui::Key::F,
        physical_key: None,
        pressed,
        repeat: false,
        modifiers,
    }
}

#[test]
fn f_release_with_ctrl_held_ends_hold_drawing() {
    let mut app = app(DrawActivation::Hold);
    let raw = [
        f_key(true, egui::Modifiers::NONE),
        f_key(false, egui::Modifiers::CTRL),
    ];
    let events: Vec<KeyEvent> = raw.iter().filter_map(KeyEvent::from_egui).collect();
    assert_eq!(events.len(), 2);

    app.process_key_events(&events);
    assert!(!app.ui_state().drawing);

    // F is no longer recorded as held, so the next press toggles again.
    app.process_key_events(&[KeyEvent::down(LogicalKey::F)]);
    assert!(app.ui_state().drawing);
}
