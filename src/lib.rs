//! Scripts for deploying and wiring the Odon lending & staking contracts.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod utils;

/// Contract factory lookup
pub mod factory;

/// Our deploy utils
mod deploy;

// Our output utils
mod output_writer;

/// Explorer verification utils
pub mod verify;

pub mod tx;
