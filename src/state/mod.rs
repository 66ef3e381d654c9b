//! State management module
//!
//! This module holds the session, its persistence tiers and the
//! application context

pub mod context;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use context::AppContext;
pub use session::{Session, SessionStore};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, PersistenceAdapter, Tier, CURRENT_USER_KEY,
    IS_AUTHENTICATED_KEY,
};
