mod chat_turn;
mod chunk_window;
mod turn_role;

pub use chat_turn::ChatTurn;
pub use chunk_window::{ChunkWindow, plan_windows};
pub use turn_role::TurnRole;
