pub mod config;
pub mod error;
pub mod game_app;
pub mod game_session;

pub use config::AppConfig;
pub use error::{ConfigError, GameError};
pub use game_app::GameApp;
pub use game_session::{evaluate, Board, Cell, GameSession, Mark, Outcome};
