//! Conversation session types.

mod model;
mod turn;

pub use model::ChatSession;
pub use turn::Turn;
