//! Application state and input handling.

use crate::input::{Action, action_for, move_cursor};
use crate::layout::BoardGeometry;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use strictly_chess::{BoardCommand, BoardController, DropResponse, PointerTracker, Square, dispatch};
use tracing::{debug, info, instrument};

/// Keyboard cursor starts on e2.
const START_CURSOR: Square = match Square::new(4, 1) {
    Some(square) => square,
    None => panic!("e2 is on the board"),
};

/// Main application state.
pub struct App {
    board: BoardController,
    cursor: Square,
    pointer: PointerTracker,
    geometry: Option<BoardGeometry>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application around a board.
    #[instrument(skip(board))]
    pub fn new(board: BoardController) -> Self {
        Self {
            board,
            cursor: START_CURSOR,
            pointer: PointerTracker::new(),
            geometry: None,
            notice: None,
            should_quit: false,
        }
    }

    /// The board being shown.
    pub fn board(&self) -> &BoardController {
        &self.board
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// Square of a piece being dragged with the mouse.
    pub fn dragging(&self) -> Option<Square> {
        self.pointer.dragging()
    }

    /// One-off message for the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was drawn, for mouse hit-testing.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = Some(geometry);
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        self.notice = None;
        match action {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction, self.board.orientation());
            }
            Action::Click => self.run(BoardCommand::Select(self.cursor)),
            Action::StepBack => {
                self.board.step_back();
            }
            Action::StepForward => {
                self.board.step_forward();
            }
            Action::GoToStart => {
                self.board.go_to_start();
            }
            Action::GoToEnd => {
                self.board.go_to_end();
            }
            Action::Flip => self.board.flip_orientation(),
            Action::Reset => {
                info!("New game");
                self.board.reset_board();
                self.pointer.cancel();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Handles a mouse event: press and release on squares become clicks or drops.
    #[instrument(skip(self), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let square = self
            .geometry
            .and_then(|g| g.square_at(event.column, event.row));
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match square {
                Some(square) => {
                    self.notice = None;
                    self.cursor = square;
                    let has_piece = self.board.position().piece_at(square).is_some();
                    self.pointer.press(square, has_piece);
                }
                None => self.pointer.cancel(),
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(square) = square {
                    self.cursor = square;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(command) = self.pointer.release(square) {
                    self.run(command);
                }
            }
            _ => {}
        }
    }

    fn run(&mut self, command: BoardCommand) {
        let response = dispatch(&mut self.board, command);
        debug!(?command, %response, "Command handled");
        if let (BoardCommand::Drop(mv), DropResponse::Snapback) = (command, response) {
            self.notice = Some(format!("{} is not a legal move", mv));
        }
    }
}
