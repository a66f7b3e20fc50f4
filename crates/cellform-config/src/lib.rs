//! Configuration management for the cellform system.
//!
//! This crate discovers configuration files, merges them with environment
//! overrides using `figment`, and provides typed access to the resulting
//! [`CellformConfig`](config::CellformConfig).

pub mod config;
pub mod discovery;
