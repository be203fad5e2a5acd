//! Utility modules for common functionality
//!
//! This module provides helpers used throughout the application.

pub mod logger;
pub mod progress;
pub mod naming;
pub mod image_utils;
