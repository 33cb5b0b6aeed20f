//! Renderer trait and implementations.

mod console;
mod void;

pub use console::ConsoleRenderer;
pub use void::VoidRenderer;

use crate::board::Board;

/// Read-only board observer, invoked once before the first turn and after
/// every placement.
pub trait Renderer {
    /// Shows the current board. Fire-and-forget; failures are swallowed.
    fn render(&mut self, board: &Board);
}

/// The closed set of available renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RendererKind {
    /// Text grid on standard output.
    Console,
    /// No output (headless runs).
    None,
}

impl RendererKind {
    /// Builds a renderer of this kind.
    pub fn build(self) -> Box<dyn Renderer> {
        match self {
            RendererKind::Console => Box::new(ConsoleRenderer::stdout()),
            RendererKind::None => Box::new(VoidRenderer::new()),
        }
    }
}
