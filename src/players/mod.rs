pub mod cache;
pub mod classes;
pub mod snapshot;

pub use cache::{PlayerCache, PlayerSource};
pub use snapshot::{PlayerSnapshot, Team};
