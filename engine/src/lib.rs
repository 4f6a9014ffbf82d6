pub mod board;
pub mod bot_controller;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{calculate_minimax_move, select_move};
pub use error::EngineError;
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use settings::{MatchSettings, Opponent};
pub use types::{Difficulty, Mark, Outcome};
pub use win_detector::{WIN_LINES, check_win, evaluate, winning_line};
