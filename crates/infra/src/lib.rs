//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod repository;
