// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Physical units expressed over a fixed set of fundamental dimensions.
//!
//! - Unit: a name plus one exponent per fundamental dimension
//! - UnitCatalog: the validated, ordered list of units for one run

pub mod catalog;
pub mod unit;

pub use catalog::UnitCatalog;
pub use unit::Unit;
