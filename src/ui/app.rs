//! Main application for the tic-tac-toe GUI

use egui::{CentralPanel, Context, Frame, Key, RichText, ScrollArea, SidePanel};
use tracing::debug;

use crate::game::{GameState, GameView, Intent};
use crate::Pos;
use super::board_view::BoardView;
use super::theme::*;

/// Main tic-tac-toe application.
///
/// Owns the single current [`GameState`]; each intent replaces it.
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    /// Create the app with a starting snapshot
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the current snapshot with the result of `intent`
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        self.state = self.state.apply(intent);
    }

    /// Render the side panel with status, move list and sort toggle
    fn render_side_panel(&self, ctx: &Context, view: &GameView) -> Option<Intent> {
        let mut intent = None;

        SidePanel::right("info_panel")
            .min_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new(&view.status).size(18.0).strong().color(TEXT_PRIMARY));
                ui.add_space(10.0);

                ScrollArea::vertical()
                    .max_height((ui.available_height() - 40.0).max(0.0))
                    .show(ui, |ui| {
                        // Numbered by display position, like an ordered list
                        for (n, entry) in view.moves.iter().enumerate() {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(format!("{}.", n + 1)).color(TEXT_MUTED));
                                let text = if entry.is_current {
                                    RichText::new(&entry.label).strong().color(TEXT_CURRENT)
                                } else {
                                    RichText::new(&entry.label)
                                };
                                if ui.button(text).clicked() {
                                    intent = Some(Intent::JumpTo(entry.step));
                                }
                            });
                        }
                    });

                ui.add_space(8.0);
                if ui.button(view.sort_button_label.as_str()).clicked() {
                    intent = Some(Intent::ToggleSortOrder);
                }
            });

        intent
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, view: &GameView) -> Option<Intent> {
        CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| self.board_view.show(ui, view))
                    .inner
                    .map(Intent::PlaceMark)
            })
            .inner
    }

    /// Keyboard shortcuts for the same intents the mouse raises
    fn handle_input(&self, ctx: &Context) -> Vec<Intent> {
        let pressed: Vec<Key> = ctx.input(|i| {
            SHORTCUT_KEYS
                .iter()
                .copied()
                .filter(|key| i.key_pressed(*key))
                .collect()
        });
        shortcut_intents(&pressed, self.state.history().len())
    }
}

/// Digit keys 1-9, row-major over the board
const CELL_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

const SHORTCUT_KEYS: [Key; 12] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
    Key::S,
    Key::Home,
    Key::End,
];

/// Map pressed keys to intents, in the order given
fn shortcut_intents(pressed: &[Key], history_len: usize) -> Vec<Intent> {
    pressed
        .iter()
        .filter_map(|&key| shortcut_intent(key, history_len))
        .collect()
}

fn shortcut_intent(key: Key, history_len: usize) -> Option<Intent> {
    // 1-9 - Place a mark
    if let Some(idx) = CELL_KEYS.iter().position(|k| *k == key) {
        return Some(Intent::PlaceMark(Pos::from_index(idx)));
    }
    match key {
        // S - Toggle sort order
        Key::S => Some(Intent::ToggleSortOrder),
        // Home / End - Jump to first / last entry
        Key::Home => Some(Intent::JumpTo(0)),
        Key::End => Some(Intent::JumpTo(history_len.saturating_sub(1))),
        _ => None,
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for intent in self.handle_input(ctx) {
            self.dispatch(intent);
        }

        let view = self.state.view();

        // Side panel first so the central panel gets the remaining space
        let side = self.render_side_panel(ctx, &view);
        let board = self.render_board(ctx, &view);

        for intent in side.into_iter().chain(board) {
            self.dispatch(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_replaces_state() {
        let mut app = TicTacToeApp::default();
        app.dispatch(Intent::PlaceMark(Pos::new(0, 0).unwrap()));
        app.dispatch(Intent::PlaceMark(Pos::new(0, 0).unwrap()));
        assert_eq!(app.state().history().len(), 2);

        app.dispatch(Intent::ToggleSortOrder);
        app.dispatch(Intent::JumpTo(0));
        assert_eq!(app.state().step_number(), 0);
        assert!(!app.state().is_descending());
        assert_eq!(app.state().view().status, "Next player: X");
    }

    #[test]
    fn test_digit_keys_place_row_major() {
        assert_eq!(
            shortcut_intents(&[Key::Num1, Key::Num5, Key::Num9], 1),
            vec![
                Intent::PlaceMark(Pos::new(0, 0).unwrap()),
                Intent::PlaceMark(Pos::new(1, 1).unwrap()),
                Intent::PlaceMark(Pos::new(2, 2).unwrap()),
            ]
        );
        assert_eq!(
            shortcut_intents(&[Key::Num4], 1),
            vec![Intent::PlaceMark(Pos::new(1, 0).unwrap())]
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(shortcut_intents(&[Key::Home], 6), vec![Intent::JumpTo(0)]);
        assert_eq!(shortcut_intents(&[Key::End], 6), vec![Intent::JumpTo(5)]);
        assert_eq!(shortcut_intents(&[Key::End], 1), vec![Intent::JumpTo(0)]);
        assert_eq!(shortcut_intents(&[Key::S], 3), vec![Intent::ToggleSortOrder]);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert!(shortcut_intents(&[Key::A, Key::Num0, Key::Escape], 4).is_empty());
        assert!(shortcut_intents(&[], 4).is_empty());
    }

    #[test]
    fn test_every_shortcut_key_maps_to_an_intent() {
        for key in SHORTCUT_KEYS {
            assert!(shortcut_intent(key, 2).is_some(), "{key:?}");
        }
    }

    #[test]
    fn test_end_key_after_rewind_returns_to_latest() {
        let mut app = TicTacToeApp::default();
        for key in [Key::Num1, Key::Num2, Key::Num3, Key::Home] {
            for intent in shortcut_intents(&[key], app.state().history().len()) {
                app.dispatch(intent);
            }
        }
        assert_eq!(app.state().step_number(), 0);

        for intent in shortcut_intents(&[Key::End], app.state().history().len()) {
            app.dispatch(intent);
        }
        assert_eq!(app.state().step_number(), 3);
        assert_eq!(app.state().view().status, "Next player: O");
    }
}
