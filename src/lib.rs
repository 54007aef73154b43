#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod export;
pub mod history;
pub mod input;
pub mod palette;
pub mod panels;
pub mod path;
pub mod renderer;
pub mod stroke;
pub mod surface;

pub use app::PaintApp;
pub use export::ExportError;
pub use history::StrokeHistory;
pub use input::{InputHandler, PointerEvent, PointerPhase};
pub use palette::ColorCycle;
pub use path::PathBuilder;
pub use renderer::Renderer;
pub use stroke::{PathCommand, Stroke};
pub use surface::DrawingSurface;
