//! Backends module - File operations
//!
//! Provides:
//! - collect: C/C++ source file collection with walkdir

pub mod collect;
