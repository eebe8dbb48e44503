//! Match-3 (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as `match3::{core, session, types}`
//! so the binary, integration tests and benches share a single import path.

pub use match3_core as core;
pub use match3_session as session;
pub use match3_types as types;
