//! # Engine Module
//!
//! The pieces the batch workflow is assembled from.
//!
//! - **Configuration** ([`config`]) - Builder that validates inputs and produces a [`config::BatchConfig`]
//! - **Host Seam** ([`executor`]) - The [`executor::CommandExecutor`] trait and an in-memory recorder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping manifest, config and dispatch failures

pub mod config;
pub mod error;
pub mod executor;
pub mod progress;
