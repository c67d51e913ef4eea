//! Board layout calculations - handles sizing and coordinate transformations.

use crate::ui::theme::{BOARD_PADDING, COORDINATE_SCALE, PIECE_SCALE};
use gpui::{Pixels, Size, px};

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions, leaving room
    /// for the status line above the board
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 4.0;
        (available_width.min(available_height) / 8.0).max(30.0)
    }

    /// Font size for piece glyphs
    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Font size for the rank and file labels
    pub fn label_size(&self) -> f32 {
        (self.square_size() * COORDINATE_SCALE).max(8.0)
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(560.0),
            height: px(640.0),
        })
    }
}
