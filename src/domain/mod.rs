//! Core domain types and simulation logic.

pub mod asset;
pub mod error;
pub mod metrics;
pub mod params;
pub mod prepare;
pub mod price;
pub mod simulation;
pub mod strategy;
