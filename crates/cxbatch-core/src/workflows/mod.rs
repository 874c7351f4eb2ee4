//! # Workflows Module
//!
//! Top-level entry points of the library.
//!
//! - **Batch Workflow** ([`batch`]) - Runs an analysis plan over every entry of a manifest,
//!   strictly sequentially, aborting on the first failed dispatch.

pub mod batch;
