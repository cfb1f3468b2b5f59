//! Backends module - Filesystem operations
//!
//! Provides:
//! - inspect: Non-recursive directory listing with per-file reports

pub mod inspect;
