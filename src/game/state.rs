use std::time::Duration;

use rand::Rng;

use crate::constants::FALL_INTERVAL_MS;
use crate::game::board::{clear_lines, collides, empty_board, freeze, Board};
use crate::game::piece::{rotate_cw, Piece, PieceType};
use crate::input::InputEvent;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Start,
    Playing,
    GameOver,
}

/// Supplies the next piece type for each spawn. Abstracted so tests can
/// script a deterministic sequence.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceType;
}

/// Draws uniformly from the seven piece types.
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PieceSource for RandomSource<R> {
    fn next_piece(&mut self) -> PieceType {
        PieceType::ALL[self.rng.gen_range(0..PieceType::ALL.len())]
    }
}

pub struct Game {
    board: Board,
    current_piece: Option<Piece>,
    score: u32,
    state: GameState,
    fall_time: Duration,
    source: Box<dyn PieceSource>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_source(Box::new(RandomSource::new(rand::thread_rng())))
    }

    pub fn with_source(source: Box<dyn PieceSource>) -> Self {
        Self {
            board: empty_board(),
            current_piece: None,
            score: 0,
            state: GameState::Start,
            fall_time: Duration::ZERO,
            source,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns to the start screen from any state.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_piece = None;
        self.score = 0;
        self.state = GameState::Start;
        self.fall_time = Duration::ZERO;
    }

    /// Advances the fall timer; when it passes the fall interval the
    /// active piece drops one row, locking if the drop is blocked.
    pub fn tick(&mut self, dt: Duration) {
        if self.state != GameState::Playing {
            return;
        }

        self.fall_time += dt;
        if self.fall_time > Duration::from_millis(FALL_INTERVAL_MS) {
            self.fall_time = Duration::ZERO;
            if !self.try_move(0, 1) {
                self.lock_piece();
            }
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Confirm => match self.state {
                GameState::Start => self.start_game(),
                GameState::GameOver => self.state = GameState::Start,
                GameState::Playing => {}
            },
            // Movement only acts on the falling piece
            _ if self.state != GameState::Playing => {}
            InputEvent::MoveLeft => {
                self.try_move(-1, 0);
            }
            InputEvent::MoveRight => {
                self.try_move(1, 0);
            }
            InputEvent::SoftDrop => {
                self.try_move(0, 1);
            }
            InputEvent::HardDrop => self.hard_drop(),
            InputEvent::RotateCw => self.try_rotate(1),
            InputEvent::RotateCcw => self.try_rotate(3),
        }
    }

    fn start_game(&mut self) {
        self.board = empty_board();
        self.score = 0;
        self.fall_time = Duration::ZERO;
        self.state = GameState::Playing;
        self.spawn_piece();
    }

    fn spawn_piece(&mut self) {
        let piece = Piece::new(self.source.next_piece());
        if collides(&self.board, &piece.shape, piece.x, piece.y) {
            self.current_piece = None;
            self.state = GameState::GameOver;
        } else {
            self.current_piece = Some(piece);
        }
    }

    /// Shifts the active piece if the destination is legal; otherwise the
    /// piece stays put. Returns whether the move was committed.
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if let Some(ref mut piece) = self.current_piece {
            let nx = piece.x + dx;
            let ny = piece.y + dy;
            if !collides(&self.board, &piece.shape, nx, ny) {
                piece.x = nx;
                piece.y = ny;
                return true;
            }
        }
        false
    }

    /// Applies `turns` clockwise quarter-turns as a single candidate,
    /// discarded if it does not fit at the current position. No kicks.
    fn try_rotate(&mut self, turns: u32) {
        if let Some(ref mut piece) = self.current_piece {
            let mut candidate = piece.shape.clone();
            for _ in 0..turns {
                candidate = rotate_cw(&candidate);
            }
            if !collides(&self.board, &candidate, piece.x, piece.y) {
                piece.shape = candidate;
            }
        }
    }

    /// Drops the piece to rest one row above the first collision. Does not
    /// lock; the gravity tick does that once the piece fails to fall.
    fn hard_drop(&mut self) {
        if let Some(ref mut piece) = self.current_piece {
            while !collides(&self.board, &piece.shape, piece.x, piece.y + 1) {
                piece.y += 1;
            }
        }
    }

    /// Freezes the piece at its last valid position, clears any completed
    /// rows, and spawns the next piece. A blocked spawn ends the game.
    fn lock_piece(&mut self) {
        if let Some(piece) = self.current_piece.take() {
            freeze(&mut self.board, &piece.shape, piece.x, piece.y, piece.color);
            let (board, cleared) = clear_lines(&self.board);
            self.board = board;
            self.score += cleared;
        }
        self.spawn_piece();
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
