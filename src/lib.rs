//! Block Blast (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockblast::{core,input,session,term,types}`
//! so the terminal runner, integration tests and benches share one import path.

pub use blockblast_core as core;
pub use blockblast_input as input;
pub use blockblast_session as session;
pub use blockblast_term as term;
pub use blockblast_types as types;
