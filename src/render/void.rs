//! No-op renderer for headless runs.

use super::Renderer;
use crate::board::Board;
use derive_new::new;

/// Discards every render call.
#[derive(Debug, Clone, Copy, Default, new)]
pub struct VoidRenderer;

impl Renderer for VoidRenderer {
    fn render(&mut self, _board: &Board) {}
}
