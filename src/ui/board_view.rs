//! Board rendering for the tic-tac-toe GUI

use crate::{GameView, Mark, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks on occupied cells or a decided board are still reported; the
    /// game state turns them into no-ops.
    pub fn show(&mut self, ui: &mut egui::Ui, view: &GameView) -> Option<Pos> {
        let available_size = ui.available_size();

        let fit = (available_size.x.min(available_size.y) - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;
        self.cell_size = fit.clamp(20.0, MAX_CELL_SIZE);
        let board_size = self.cell_size * BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::splat(board_size + 2.0 * BOARD_MARGIN),
            Sense::click(),
        );

        self.board_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(board_size),
        );

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);

        // Winning cells go under the grid and marks
        for pos in Pos::all() {
            if view.is_winning_cell(pos) {
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, WIN_HIGHLIGHT);
            }
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_cell());
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, view);

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            let extent = BOARD_SIZE as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, view: &GameView) {
        let font = egui::FontId::proportional(self.cell_size * MARK_FONT_RATIO);

        for pos in Pos::all() {
            if let Some(mark) = view.board.get(pos) {
                let color = match mark {
                    Mark::X => MARK_X,
                    Mark::O => MARK_O,
                };
                painter.text(
                    self.board_to_screen(pos),
                    egui::Align2::CENTER_CENTER,
                    mark.as_str(),
                    font.clone(),
                    color,
                );
            }
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col() as f32 * self.cell_size, pos.row() as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Pos::new(row, col)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
