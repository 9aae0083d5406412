//! Shared utilities for the Ludo World workspace.

pub mod logger;
pub mod time;
