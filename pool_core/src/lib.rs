//! # pool_core - Kiddie Pool Calculation Engine
//!
//! `pool_core` is the computational heart of the pool calculator suite. Every
//! calculator is a pure function: a JSON-serializable input record in, a
//! JSON-serializable result record out. All reference tables are immutable
//! data baked in at compile time, so concurrent independent calls are
//! trivially safe.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No silent fallbacks**: unknown units and shapes are hard errors;
//!   missing factor selections degrade to documented defaults that are
//!   flagged in the returned factor trace
//!
//! ## Quick Start
//!
//! ```rust
//! use pool_core::calculators::volume::{calculate, VolumeInput};
//! use pool_core::geometry::ShapeDimensions;
//! use pool_core::units::{Length, LengthUnit};
//!
//! let input = VolumeInput {
//!     dims: ShapeDimensions::Round {
//!         diameter: Length::new(5.0, LengthUnit::Feet),
//!     },
//!     depth: Length::new(1.0, LengthUnit::Feet),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.gallons - 146.9).abs() < 0.05);
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Dimensions, unit tags, canonical-unit conversion
//! - [`geometry`] - Pool shapes and closed-form area/volume formulas
//! - [`scoring`] - Factor-chain scoring with an explanatory trace
//! - [`calculators`] - The fifteen calculators
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod errors;
pub mod geometry;
pub mod scoring;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use geometry::{PoolShape, ShapeDimensions};
pub use scoring::{AppliedFactor, FactorChain, FactorTable, ScoreOutcome, TwoTier};
