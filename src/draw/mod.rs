pub mod history;
pub mod input;
pub mod model;

pub use input::DrawingCanvas;

/// Operations the key handler may run against the drawing layer.
pub trait DrawingSurface {
    fn clear(&mut self) -> anyhow::Result<()>;
    fn undo(&mut self) -> anyhow::Result<()>;
}
