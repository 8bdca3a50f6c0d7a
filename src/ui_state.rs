use crate::settings::DrawActivation;

/// Panels that can be stacked on top of the replay view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Settings,
    Players,
    Help,
}

impl PanelId {
    pub fn title(self) -> &'static str {
        match self {
            PanelId::Settings => "Settings",
            PanelId::Players => "Players",
            PanelId::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Remove the topmost panel, if any.
    PopPanel,
    PushPanel(PanelId),
    /// `Some(v)` forces drawing mode to `v`; `None` flips it.
    ToggleDrawing(Option<bool>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    /// Open panels, topmost last.
    pub active_panels: Vec<PanelId>,
    pub drawing: bool,
}

impl UiState {
    pub fn top_panel(&self) -> Option<PanelId> {
        self.active_panels.last().copied()
    }
}

/// What the key handler needs to know about the UI at the moment a key
/// event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiSnapshot {
    pub active_panel_count: usize,
    pub activation: DrawActivation,
}

pub trait UiDispatcher {
    fn dispatch(&mut self, action: UiAction);
}

pub fn reduce_ui_state(state: &mut UiState, action: UiAction) -> bool {
    match action {
        UiAction::PopPanel => state.active_panels.pop().is_some(),
        UiAction::PushPanel(panel) => {
            if state.top_panel() == Some(panel) {
                return false;
            }
            state.active_panels.retain(|p| *p != panel);
            state.active_panels.push(panel);
            true
        }
        UiAction::ToggleDrawing(active) => {
            let next = active.unwrap_or(!state.drawing);
            let changed = next != state.drawing;
            state.drawing = next;
            changed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&UiState)>;

/// Owned UI state container with explicit dispatch and change listeners.
#[derive(Default)]
pub struct UiStore {
    state: UiState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn snapshot(&self, activation: DrawActivation) -> UiSnapshot {
        UiSnapshot {
            active_panel_count: self.state.active_panels.len(),
            activation,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&UiState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl UiDispatcher for UiStore {
    fn dispatch(&mut self, action: UiAction) {
        if reduce_ui_state(&mut self.state, action) {
            tracing::debug!(
                ?action,
                panels = self.state.active_panels.len(),
                drawing = self.state.drawing,
                "ui state changed"
            );
            self.notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn pop_on_empty_stack_is_a_noop() {
        let mut state = UiState::default();
        assert!(!reduce_ui_state(&mut state, UiAction::PopPanel));
        assert!(state.active_panels.is_empty());
    }

    #[test]
    fn push_moves_existing_panel_to_top() {
        let mut state = UiState::default();
        reduce_ui_state(&mut state, UiAction::PushPanel(PanelId::Settings));
        reduce_ui_state(&mut state, UiAction::PushPanel(PanelId::Help));
        assert!(reduce_ui_state(
            &mut state,
            UiAction::PushPanel(PanelId::Settings)
        ));
        assert_eq!(state.active_panels, vec![PanelId::Help, PanelId::Settings]);
        assert!(!reduce_ui_state(
            &mut state,
            UiAction::PushPanel(PanelId::Settings)
        ));
    }

    #[test]
    fn toggle_without_value_flips_and_explicit_value_forces() {
        let mut state = UiState::default();
        reduce_ui_state(&mut state, UiAction::ToggleDrawing(None));
        assert!(state.drawing);
        reduce_ui_state(&mut state, UiAction::ToggleDrawing(None));
        assert!(!state.drawing);
        assert!(!reduce_ui_state(
            &mut state,
            UiAction::ToggleDrawing(Some(false))
        ));
        reduce_ui_state(&mut state, UiAction::ToggleDrawing(Some(true)));
        assert!(state.drawing);
    }

    #[test]
    fn listeners_fire_only_on_change_and_can_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = UiStore::new();
        let sink = seen.clone();
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.drawing));

        store.dispatch(UiAction::ToggleDrawing(Some(true)));
        store.dispatch(UiAction::ToggleDrawing(Some(true)));
        store.dispatch(UiAction::PopPanel);
        assert_eq!(*seen.borrow(), vec![true]);

        assert!(store.unsubscribe(id));
        store.dispatch(UiAction::ToggleDrawing(None));
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(!store.unsubscribe(id));
    }
}
