//! Configuration module for article rendering
//!
//! This module provides the `RenderConfig` struct and its type-safe builder
//! for configuring the rendering pipeline with validation and sensible defaults.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::{RenderConfigBuilder, WithSiteUrl};
pub use types::RenderConfig;
