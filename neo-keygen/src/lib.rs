//! Command-line front end for Neo N3 single-signature account generation.

pub mod args;
pub mod commands;
pub mod config;
