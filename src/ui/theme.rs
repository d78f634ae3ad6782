//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(250, 250, 250);
pub const GRID_LINE: Color32 = Color32::from_rgb(153, 153, 153);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(40, 40, 45);
pub const MARK_O: Color32 = Color32::from_rgb(45, 95, 180);

// Winning cells
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 220, 90);

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 20)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const TEXT_CURRENT: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const MAX_CELL_SIZE: f32 = 120.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const MARK_FONT_RATIO: f32 = 0.6;
