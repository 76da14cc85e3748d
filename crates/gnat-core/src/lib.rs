//! Gnat Core - Foundational types for the gnat game core
//!
//! This crate provides the types the runtime crate depends on:
//! - `Playfield` - board geometry and depth bounds
//! - `Cadence`, `SimConfig` - frame-rate and period configuration
//! - `Direction`, `Key` - small enumerated tags for facing and input
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{Cadence, SimConfig};
pub use error::{GnatError, Result};
pub use types::{Direction, Key, Playfield};
