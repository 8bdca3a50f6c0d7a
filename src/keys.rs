use eframe::egui;

/// Logical key names the viewer reacts to. Everything else resolves to
/// [`LogicalKey::Other`] and is ignored by the key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Escape,
    F,
    C,
    Z,
    Other,
}

impl LogicalKey {
    /// Resolve a platform key name such as `"Esc"`, `"escape"` or `"KeyF"`.
    pub fn from_name(name: &str) -> Self {
        let upper = name.trim().to_ascii_uppercase();
        let upper = upper.strip_prefix("KEY").unwrap_or(&upper);
        match upper {
            "ESC" | "ESCAPE" => Self::Escape,
            "F" => Self::F,
            "C" => Self::C,
            "Z" => Self::Z,
            _ => Self::Other,
        }
    }

    pub fn from_egui(key: egui::Key) -> Self {
        Self::from_name(key.name())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Escape => "esc",
            Self::F => "f",
            Self::C => "c",
            Self::Z => "z",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: LogicalKey,
    pub direction: KeyDirection,
}

impl KeyEvent {
    pub fn down(key: LogicalKey) -> Self {
        Self {
            key,
            direction: KeyDirection::Down,
        }
    }

    pub fn up(key: LogicalKey) -> Self {
        Self {
            key,
            direction: KeyDirection::Up,
        }
    }

    /// Translate an egui input event. Modified presses (Ctrl/Alt/Cmd) are
    /// left to egui widgets so shortcuts like Ctrl+C keep working; releases
    /// always pass so a held key is never left recorded.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        let egui::Event::Key {
            key,
            pressed,
            modifiers,
            ..
        } = event
        else {
            return None;
        };

        if *pressed && (modifiers.ctrl || modifiers.alt || modifiers.command) {
            return None;
        }

        let key = LogicalKey::from_egui(*key);
        if key == LogicalKey::Other {
            return None;
        }

        Some(if *pressed {
            Self::down(key)
        } else {
            Self::up(key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_platform_names() {
        assert_eq!(LogicalKey::from_name("esc"), LogicalKey::Escape);
        assert_eq!(LogicalKey::from_name("Escape"), LogicalKey::Escape);
        assert_eq!(LogicalKey::from_name("KeyF"), LogicalKey::F);
        assert_eq!(LogicalKey::from_name(" z "), LogicalKey::Z);
        assert_eq!(LogicalKey::from_name("c"), LogicalKey::C);
        assert_eq!(LogicalKey::from_name("F1"), LogicalKey::Other);
        assert_eq!(LogicalKey::from_name(""), LogicalKey::Other);
    }

    #[test]
    fn egui_key_events_are_translated() {
        let event = egui::Event::Key {
            key: egui::Key::F,
            physical_key: None,
            pressed: true,
            repeat: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(
            KeyEvent::from_egui(&event),
            Some(KeyEvent::down(LogicalKey::F))
        );

        let release = egui::Event::Key {
            key: egui::Key::F,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(
            KeyEvent::from_egui(&release),
            Some(KeyEvent::up(LogicalKey::F))
        );
    }

    #[test]
    fn ctrl_chords_are_not_translated() {
        let event = egui::Event::Key {
            key: egui::Key::C,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        };
        assert_eq!(KeyEvent::from_egui(&event), None);
    }

    #[test]
    fn release_is_translated_even_with_ctrl_held() {
        let release = egui::Event::Key {
            key: egui::Key::F,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        };
        assert_eq!(
            KeyEvent::from_egui(&release),
            Some(KeyEvent::up(LogicalKey::F))
        );
    }

    #[test]
    fn egui_keys_resolve_through_names() {
        assert_eq!(LogicalKey::from_egui(egui::Key::Escape), LogicalKey::Escape);
        assert_eq!(LogicalKey::from_egui(egui::Key::F), LogicalKey::F);
        assert_eq!(LogicalKey::from_egui(egui::Key::Z), LogicalKey::Z);
        assert_eq!(LogicalKey::from_egui(egui::Key::F1), LogicalKey::Other);
    }
}
