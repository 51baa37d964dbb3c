pub mod board;
pub mod piece;
pub mod state;

pub use board::Cell;
pub use state::{Game, GameState};
