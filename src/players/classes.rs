use std::cmp::Ordering;

pub const MEDIC_CLASS_ID: u8 = 5;

// Used for class ids outside the roster so normalisation stays total.
const FALLBACK_MAX_HEALTH: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerClass {
    Scout,
    Sniper,
    Soldier,
    Demoman,
    Medic,
    Heavy,
    Pyro,
    Spy,
    Engineer,
}

impl PlayerClass {
    pub fn from_id(class_id: u8) -> Option<Self> {
        Some(match class_id {
            1 => Self::Scout,
            2 => Self::Sniper,
            3 => Self::Soldier,
            4 => Self::Demoman,
            5 => Self::Medic,
            6 => Self::Heavy,
            7 => Self::Pyro,
            8 => Self::Spy,
            9 => Self::Engineer,
            _ => return None,
        })
    }

    pub fn max_health(self) -> i32 {
        match self {
            Self::Scout | Self::Sniper | Self::Spy | Self::Engineer => 125,
            Self::Soldier => 200,
            Self::Demoman | Self::Pyro => 175,
            Self::Medic => 150,
            Self::Heavy => 300,
        }
    }

    /// Short label drawn in place of a class icon.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Scout => "SCT",
            Self::Sniper => "SNP",
            Self::Soldier => "SOL",
            Self::Demoman => "DEM",
            Self::Medic => "MED",
            Self::Heavy => "HVY",
            Self::Pyro => "PYR",
            Self::Spy => "SPY",
            Self::Engineer => "ENG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassHealth {
    pub max: i32,
    /// 100 is full nominal health, above 100 is overheal.
    pub percentage: f32,
}

pub fn class_health(class_id: u8, health: i32) -> ClassHealth {
    let max = PlayerClass::from_id(class_id)
        .map(PlayerClass::max_health)
        .unwrap_or(FALLBACK_MAX_HEALTH);
    ClassHealth {
        max,
        percentage: health as f32 * 100.0 / max as f32,
    }
}

pub fn compare_class_ids(a: u8, b: u8) -> Ordering {
    a.cmp(&b)
}
