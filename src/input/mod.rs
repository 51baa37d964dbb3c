pub mod event;
pub mod handler;

pub use event::InputEvent;
pub use handler::{map_key, map_mouse};
