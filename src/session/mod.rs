//! In-memory session structures
//!
//! None of these are persisted. They exist for the lifetime of one
//! [`LedgerSession`](crate::services::LedgerSession).

pub mod queue;
pub mod selection;
pub mod undo;

pub use queue::SessionQueue;
pub use selection::{SelectionController, SelectionState};
pub use undo::UndoStack;
