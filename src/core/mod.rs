//! Core module - Report model, errors, bounded reads and rendering
//!
//! This module provides:
//! - The per-file report model (FileReport)
//! - The inspection error taxonomy
//! - Bounded, non-decoding prefix reads
//! - Text rendering of reports

pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
