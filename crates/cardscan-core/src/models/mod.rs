//! Data models for extracted card fields and configuration.

pub mod card;
pub mod config;
