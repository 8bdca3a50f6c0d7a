pub mod paint;
pub mod status;

pub use status::{derive_team_panels, StatusRow, TeamPanel, TeamPanels};
