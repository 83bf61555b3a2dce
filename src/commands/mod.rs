//! Command implementations
//!
//! Commands are `impl` blocks on [`Session`](crate::domain::areas::session::Session)
//! that tie the workspace, the diff and the mistake mapping together:
//!
//! - `compare`: diff every configured document pair and print the JSON report

pub mod compare;
