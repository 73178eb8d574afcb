//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the lyrics sync core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! Every other crate in the workspace logs through `tracing` and receives its
//! settings through [`config::SyncConfig`]; this crate owns both.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{SyncConfig, SyncConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
