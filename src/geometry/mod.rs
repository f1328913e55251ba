// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric value types and configuration constants.
//!
//! - Tier: ring identifier (a plain `usize`)
//! - LayoutPoint: a point on the circle of a tier
//! - Pointer: host-supplied pointer position
//! - constants: tier ranges and buffer budgets

pub mod constants;
pub mod point;

// Re-export for convenience
pub use constants::*;
pub use point::{LayoutPoint, Pointer, Tier};
