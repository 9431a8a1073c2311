//! Milk Core - Foundation crate for the milk number scanner.
//!
//! This crate provides shared types, error handling and settings management
//! that the pattern, scanner and CLI crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based settings with XDG paths and environment overrides
//! - [`types`] - Shared newtypes and enums (`AreaCode`, `CandidateNumber`, `Tier`)
//!
//! # Example
//!
//! ```rust
//! use milk_core::{AppConfig, AreaCode, Tier};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.scanning.timeout_secs, 10);
//!
//! let code = AreaCode::new("212");
//! assert_eq!(code.as_str(), "212");
//! assert_eq!(Tier::from_name("VIP"), Some(Tier::Vip));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AllAlias, AppConfig, DefinitionsConfig, FilterConfig, ScanningConfig};
pub use error::{ConfigError, ConfigResult, MilkError, Result};
pub use types::{AreaCode, CandidateNumber, Tier};
