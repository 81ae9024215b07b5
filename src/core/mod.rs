//! Core scanning building blocks: the descriptor table with its lookup and
//! validation helpers, the parse session, and help rendering. These are the
//! primitives behind the high-level `api` module.
pub mod help;
pub mod session;
pub mod table;
