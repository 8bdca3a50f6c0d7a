use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
    Spectator,
    #[serde(other)]
    Unassigned,
}

/// Player state at a single tick, as produced by the replay parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub team: Team,
    pub class_id: u8,
    #[serde(default = "default_connected")]
    pub connected: bool,
    pub health: i32,
    /// Medic charge level on a 0-100 scale.
    #[serde(default)]
    pub charge_level: Option<f32>,
}

fn default_connected() -> bool {
    true
}

impl PlayerSnapshot {
    pub fn new(name: impl Into<String>, team: Team, class_id: u8, health: i32) -> Self {
        Self {
            name: name.into(),
            team,
            class_id,
            connected: true,
            health,
            charge_level: None,
        }
    }

    pub fn with_charge(mut self, charge_level: f32) -> Self {
        self.charge_level = Some(charge_level);
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }
}
