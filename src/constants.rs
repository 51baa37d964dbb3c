pub const COLS: usize = 10;
pub const ROWS: usize = 20;

// Gravity interval: one row per tick while playing (in milliseconds)
pub const FALL_INTERVAL_MS: u64 = 500;

// How long the event poll blocks each frame
pub const POLL_INTERVAL_MS: u64 = 16;
