//! Command implementations.

pub mod update;
