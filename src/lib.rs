pub mod draw;
pub mod global_key_handler;
pub mod gui;
pub mod hud;
pub mod keys;
pub mod logging;
pub mod players;
pub mod settings;
pub mod ui_state;
