//! # cxbatch Core Library
//!
//! Manifest-driven batch analysis of molecular structure files through the
//! ChimeraX command interface. All structural analysis (interface contacts,
//! hydrogen bonds, polymer classification) happens inside the host; this crate
//! only decides which commands to send, in which order, for which files.
//!
//! ## Layers
//!
//! - **[`core`]: Values.** The [`Manifest`](core::manifest::Manifest) of input
//!   paths, immutable host [`Command`](core::command::Command)s, chain-group
//!   selections, the built-in analysis variants and the
//!   [`AnalysisPlan`](core::plan::AnalysisPlan) that unifies them, plus the
//!   `.cxc` script writer.
//!
//! - **[`engine`]: Seams.** The [`CommandExecutor`](engine::executor::CommandExecutor)
//!   trait behind which the host session lives, progress reporting, batch
//!   configuration and the error types.
//!
//! - **[`workflows`]: The Public API.** [`workflows::batch::run`] walks the
//!   manifest and dispatches one open → analyse → save → clear → close cycle
//!   per structure.

pub mod core;
pub mod engine;
pub mod workflows;
