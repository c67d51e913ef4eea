//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb, rgba};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.8; // glyph size relative to square
pub const COORDINATE_SCALE: f32 = 0.22;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 560.0;
pub const INITIAL_RIGHT_PANEL: f32 = 280.0;

// Highlight colors (RGBA)
pub const SELECTED_SQUARE: u32 = 0x6a9ae8cc;
pub const TARGET_SQUARE: u32 = 0x90ee90b3;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ERROR: u32 = 0xf87171;
pub const TEXT_GAME_OVER: u32 = 0xfacc15;

// Piece glyph colors
pub const WHITE_PIECE: u32 = 0xffffff;
pub const BLACK_PIECE: u32 = 0x000000;

/// Available board color schemes
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    #[default]
    Classic,
    Forest,
    Marine,
    Royal,
    Sunset,
}

/// Light and dark square colors of a theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardTheme {
    pub id: ThemeId,
    pub name: &'static str,
    pub light: u32,
    pub dark: u32,
}

pub const THEMES: [BoardTheme; 5] = [
    BoardTheme {
        id: ThemeId::Classic,
        name: "Classic",
        light: 0xf0d9b5,
        dark: 0xb58863,
    },
    BoardTheme {
        id: ThemeId::Forest,
        name: "Forest Green",
        light: 0xdaecd8,
        dark: 0x4a7c59,
    },
    BoardTheme {
        id: ThemeId::Marine,
        name: "Marine Blue",
        light: 0xd6e6f2,
        dark: 0x2c5784,
    },
    BoardTheme {
        id: ThemeId::Royal,
        name: "Royal Purple",
        light: 0xe5d6eb,
        dark: 0x6a3a82,
    },
    BoardTheme {
        id: ThemeId::Sunset,
        name: "Sunset",
        light: 0xffe6cc,
        dark: 0xd26466,
    },
];

impl ThemeId {
    pub fn theme(self) -> &'static BoardTheme {
        THEMES
            .iter()
            .find(|t| t.id == self)
            .unwrap_or(&THEMES[0])
    }
}

/// How a square is painted, in decreasing precedence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareTint {
    Selected,
    LegalTarget,
    Light,
    Dark,
}

impl SquareTint {
    /// Selection beats legal-target highlight, which beats the base color
    pub fn for_square(row: usize, col: usize, is_selected: bool, is_target: bool) -> Self {
        if is_selected {
            SquareTint::Selected
        } else if is_target {
            SquareTint::LegalTarget
        } else if (row + col) % 2 == 0 {
            SquareTint::Light
        } else {
            SquareTint::Dark
        }
    }

    pub fn color(self, theme: &BoardTheme) -> Rgba {
        match self {
            SquareTint::Selected => rgba(SELECTED_SQUARE),
            SquareTint::LegalTarget => rgba(TARGET_SQUARE),
            SquareTint::Light => rgb(theme.light),
            SquareTint::Dark => rgb(theme.dark),
        }
    }
}
