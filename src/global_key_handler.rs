use crate::draw::DrawingSurface;
use crate::keys::{KeyDirection, KeyEvent, LogicalKey};
use crate::settings::DrawActivation;
use crate::ui_state::{UiAction, UiDispatcher, UiSnapshot};
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

/// Viewer-wide keyboard shortcuts.
///
/// | key  | down                                   | up                        |
/// |------|----------------------------------------|---------------------------|
/// | Esc  | pop panel; stop drawing if none open   |                           |
/// | F    | pop panel, flip drawing (once per hold) | stop drawing under `Hold` |
/// | C    | clear drawing                          |                           |
/// | Z    | undo last stroke                       |                           |
///
/// Failures inside a handler are logged and swallowed so the listener keeps
/// working for the next event.
#[derive(Debug, Default)]
pub struct GlobalKeyHandler {
    keys_held: HashSet<LogicalKey>,
}

impl GlobalKeyHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn handle_event(
        &mut self,
        event: KeyEvent,
        ui: UiSnapshot,
        dispatcher: &mut dyn UiDispatcher,
        canvas: Option<&mut dyn DrawingSurface>,
    ) {
        match event.direction {
            KeyDirection::Down => self.key_down(event.key, ui, dispatcher, canvas),
            KeyDirection::Up => self.key_up(event.key, ui, dispatcher),
        }
    }

    pub fn key_down(
        &mut self,
        key: LogicalKey,
        ui: UiSnapshot,
        dispatcher: &mut dyn UiDispatcher,
        canvas: Option<&mut dyn DrawingSurface>,
    ) {
        guarded(key, KeyDirection::Down, || {
            self.try_key_down(key, ui, dispatcher, canvas)
        });
    }

    pub fn key_up(&mut self, key: LogicalKey, ui: UiSnapshot, dispatcher: &mut dyn UiDispatcher) {
        guarded(key, KeyDirection::Up, || {
            self.try_key_up(key, ui, dispatcher);
            Ok(())
        });
    }

    fn try_key_down(
        &mut self,
        key: LogicalKey,
        ui: UiSnapshot,
        dispatcher: &mut dyn UiDispatcher,
        canvas: Option<&mut dyn DrawingSurface>,
    ) -> anyhow::Result<()> {
        match key {
            LogicalKey::Escape => {
                dispatcher.dispatch(UiAction::PopPanel);
                // Checked against the panel count from before this event, so
                // Esc with an open panel closes only the panel.
                if ui.active_panel_count == 0 {
                    dispatcher.dispatch(UiAction::ToggleDrawing(Some(false)));
                }
            }
            LogicalKey::F => {
                if !self.keys_held.insert(key) {
                    return Ok(());
                }
                dispatcher.dispatch(UiAction::PopPanel);
                dispatcher.dispatch(UiAction::ToggleDrawing(None));
            }
            LogicalKey::C => {
                if let Some(canvas) = canvas {
                    canvas.clear()?;
                }
            }
            LogicalKey::Z => {
                if let Some(canvas) = canvas {
                    canvas.undo()?;
                }
            }
            LogicalKey::Other => {}
        }
        Ok(())
    }

    fn try_key_up(&mut self, key: LogicalKey, ui: UiSnapshot, dispatcher: &mut dyn UiDispatcher) {
        if key != LogicalKey::F {
            return;
        }
        self.keys_held.remove(&key);
        if ui.activation == DrawActivation::Hold {
            dispatcher.dispatch(UiAction::ToggleDrawing(Some(false)));
        }
    }
}

fn guarded<F>(key: LogicalKey, direction: KeyDirection, f: F)
where
    F: FnOnce() -> anyhow::Result<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            tracing::error!(key = key.name(), ?direction, "key handler failed: {err:#}");
        }
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(key = key.name(), ?direction, "key handler panicked: {msg}");
        }
    }
}
