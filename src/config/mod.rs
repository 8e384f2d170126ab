//! Configuration module for export conversion
//!
//! This module provides the `ConvertConfig` struct and its type-safe builder
//! with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{Complete, ConvertConfigBuilder, WithExportPath};
pub use types::ConvertConfig;
