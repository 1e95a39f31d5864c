// CapPlan: Capacity planning for traffic-engineered networks
// Copyright (C) 2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # CapPlan: Capacity planning for traffic-engineered networks
//!
//! This crate answers "what happens to my traffic if this element fails?" on top of the
//! simulator [`trafficsim`]. It takes a model, applies a set of failures on a copy, runs a full
//! simulation pass, and reports which demands and LSPs can no longer be routed and which
//! interfaces run hottest.
//!
//! ## Structure
//! - The module [`scenario`] describes failure scenarios ([`scenario::FailureScenario`]), runs them
//!   ([`scenario::run_scenario`]), and sweeps over all single failures in parallel
//!   ([`scenario::sweep`]).
//! - The module [`topology`] contains a few sample models to play with.
//!
//! ## Example
//!
//! ```
//! use capplan::{scenario::{run_scenario, FailureScenario}, topology::SampleTopology};
//!
//! # fn main() -> Result<(), capplan::Error> {
//! let model = SampleTopology::Square.build(0)?;
//! let report = run_scenario(&model, &[FailureScenario::Node("B".to_string())])?;
//! assert_eq!(report.unrouted_demands.len(), 1);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod scenario;
#[cfg(test)]
mod test;
pub mod topology;

use thiserror::Error;
use trafficsim::types::NetworkError;

/// Errors thrown while planning.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the simulator
    #[error("{0}")]
    Network(#[from] NetworkError),
    /// An interface was not given as `node:interface`.
    #[error("Invalid interface `{0}`, expected `node:interface`")]
    InvalidInterface(String),
    /// The report could not be serialized.
    #[error("Cannot serialize the report: {0}")]
    Json(#[from] serde_json::Error),
}
