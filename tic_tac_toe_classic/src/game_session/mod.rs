pub mod model;
pub mod session;

pub use model::{evaluate, Board, Cell, Mark, Outcome, CELL_COUNT, LINES};
pub use session::{GameSession, Snapshot};
