// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bookkeeping kept alongside the search.

pub mod statistics;

pub use statistics::{Counters, Statistics};
