//! # Core Module
//!
//! Stateless values shared by the batch engine.
//!
//! - **Input** ([`manifest`]) - The list of structure files to process
//! - **Commands** ([`command`], [`selection`]) - Host command text and the chain-group specifiers used inside it
//! - **Analyses** ([`variant`], [`plan`]) - Built-in command sets and the plan the driver executes
//! - **Output** ([`io`]) - ChimeraX command scripts

pub mod command;
pub mod io;
pub mod manifest;
pub mod plan;
pub mod selection;
pub mod variant;
