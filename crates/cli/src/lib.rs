//! Offline tools for Seeker snapshot files.
pub mod commands;
