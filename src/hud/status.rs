use crate::players::classes::{class_health, compare_class_ids, MEDIC_CLASS_ID};
use crate::players::{PlayerSnapshot, PlayerSource, Team};

pub const CHARGE_LABEL: &str = "Charge";
pub const LOW_HEALTH_PERCENT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Player,
    Charge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Normal,
    Overhealed,
    Low,
}

impl HealthState {
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage > 100.0 {
            Self::Overhealed
        } else if percentage < LOW_HEALTH_PERCENT {
            Self::Low
        } else {
            Self::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub kind: RowKind,
    pub name: String,
    /// Raw health for player rows, charge level for charge rows.
    pub value: f32,
    pub percentage: f32,
    pub health_state: HealthState,
    /// Class shown as the row icon; charge rows have none.
    pub class_id: Option<u8>,
}

impl StatusRow {
    pub fn player(player: &PlayerSnapshot) -> Self {
        let percentage = class_health(player.class_id, player.health).percentage;
        Self {
            kind: RowKind::Player,
            name: player.name.clone(),
            value: player.health as f32,
            percentage,
            health_state: HealthState::from_percentage(percentage),
            class_id: Some(player.class_id),
        }
    }

    pub fn charge(player: &PlayerSnapshot) -> Self {
        let charge = player.charge_level.unwrap_or(0.0);
        Self {
            kind: RowKind::Charge,
            name: CHARGE_LABEL.to_string(),
            value: charge,
            percentage: charge,
            health_state: HealthState::Normal,
            class_id: None,
        }
    }

    pub fn fill_width(&self) -> f32 {
        fill_width(self.percentage)
    }

    pub fn overheal_width(&self) -> f32 {
        overheal_width(self.percentage)
    }
}

/// Width of the main bar, in percent of the row width.
pub fn fill_width(percentage: f32) -> f32 {
    percentage.clamp(0.0, 100.0)
}

/// Width of the overheal band drawn on top of the main bar.
pub fn overheal_width(percentage: f32) -> f32 {
    (percentage - 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPanel {
    pub team: Team,
    pub alignment: Alignment,
    pub players: Vec<StatusRow>,
    pub charges: Vec<StatusRow>,
}

impl TeamPanel {
    fn empty(team: Team, alignment: Alignment) -> Self {
        Self {
            team,
            alignment,
            players: Vec::new(),
            charges: Vec::new(),
        }
    }

    fn from_players(team: Team, alignment: Alignment, mut players: Vec<&PlayerSnapshot>) -> Self {
        // `sort_by` is stable, equal class ids keep snapshot order.
        players.sort_by(|a, b| compare_class_ids(a.class_id, b.class_id));
        Self {
            team,
            alignment,
            players: players.iter().map(|p| StatusRow::player(p)).collect(),
            charges: players
                .iter()
                .filter(|p| p.class_id == MEDIC_CLASS_ID)
                .map(|p| StatusRow::charge(p))
                .collect(),
        }
    }

    pub fn has_separator(&self) -> bool {
        !self.charges.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.charges.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPanels {
    pub blue: TeamPanel,
    pub red: TeamPanel,
}

impl Default for TeamPanels {
    fn default() -> Self {
        Self {
            blue: TeamPanel::empty(Team::Blue, Alignment::Left),
            red: TeamPanel::empty(Team::Red, Alignment::Right),
        }
    }
}

/// Build both team panels for `tick`. Disconnected players and players on
/// any team other than blue or red are left out.
pub fn derive_team_panels(source: Option<&dyn PlayerSource>, tick: u32) -> TeamPanels {
    let Some(source) = source else {
        return TeamPanels::default();
    };
    panels_from_snapshots(&source.players_at_tick(tick))
}

pub fn panels_from_snapshots(snapshots: &[PlayerSnapshot]) -> TeamPanels {
    let mut blue = Vec::new();
    let mut red = Vec::new();

    for player in snapshots.iter().filter(|p| p.connected) {
        match player.team {
            Team::Blue => blue.push(player),
            Team::Red => red.push(player),
            Team::Spectator | Team::Unassigned => {}
        }
    }

    TeamPanels {
        blue: TeamPanel::from_players(Team::Blue, Alignment::Left, blue),
        red: TeamPanel::from_players(Team::Red, Alignment::Right, red),
    }
}
