//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Typed collection errors
//! - Path normalization and source-file matching
//! - Output line rendering

pub mod error;
pub mod paths;
pub mod render;
