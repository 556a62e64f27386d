//! Command line interface for Prosemeter.

pub mod args;
pub mod commands;
pub mod output;
