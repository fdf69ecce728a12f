// Constants for the piece inventory

/// Slots in the queue and in each stack for the reference game
pub const DEFAULT_CAPACITY: usize = 5;

/// Longest piece name, in characters
pub const NAME_MAX: usize = 20;

/// Pieces placed in the queue when a game is seeded (`Piece_A1`..)
pub const SEED_QUEUE_PIECES: i32 = 3;

/// Pieces placed in the reserve stack when a game is seeded (`Piece_B1`..)
pub const SEED_RESERVE_PIECES: i32 = 2;

/// Printed once the containers have been dropped at the end of a session
pub const RELEASE_MESSAGE: &str = "Queue and stack memory released.";
