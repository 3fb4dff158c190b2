//! Command implementations for the rancher-config CLI

pub mod catalog;
pub mod environment;
pub mod global;
pub mod registry;
