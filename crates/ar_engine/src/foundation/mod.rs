//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the core:
//! - Math types and operations
//! - Handle-based collections
//! - Frame time management
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod math;
pub mod time;
