pub mod renderer;
pub mod views;

pub use renderer::ConsoleRenderer;
