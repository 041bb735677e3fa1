//! Shared types, errors, and configuration for PurchaseFX.
//!
//! This crate provides common types used across all other crates:
//! - The purchase identifier
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, FiscalDataConfig, LoggingConfig};
pub use error::AppError;
