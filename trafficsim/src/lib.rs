// TrafficSim: Traffic-Engineering Network Simulator written in Rust
// Copyright (C) 2022-2023 Tibor Schneider <sctibor@ethz.ch>
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

#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # TrafficSim
//!
//! This is a library for simulating how traffic is routed through a network with RSVP-TE label
//! switched paths, how much bandwidth is consumed on every link, and how the network behaves
//! when links, nodes or shared risk link groups fail.
//!
//! ## Main Concepts
//!
//! The [`model::Model`] is the main datastructure to operate on. It owns all nodes, interfaces
//! (unidirectional), circuits (pairs of interfaces in opposite directions), SRLGs, traffic demands
//! and RSVP LSPs. All elements are referenced by id or key, and the model is the single owner of
//! their state.
//!
//! Routing is computed as an instantaneous computation using shortest path algorithms from
//! [Petgraph](https://docs.rs/petgraph/latest/petgraph/index.html). A simulation pass
//! ([`model::Model::update_simulation`]) recomputes everything from scratch: it places the LSPs
//! (reserving their setup bandwidth), routes the demands (either inside the LSPs or along all
//! equal-cost shortest paths, reserving the carried traffic in both cases), and validates the
//! result.
//!
//! Failures are tracked with a set of causes per element (see [`types::FailureCause`]). An element
//! stays failed as long as any cause is active, and each unfail operation only removes its own
//! cause.
//!
//! ## Optional Features
//!
//! - `rand`: This feature enables helper functions in the [`builder`] for generating random
//!   costs and demand magnitudes.
//!
//! ## Example usage
//!
//! ```
//! use trafficsim::prelude::*;
//!
//! fn main() -> Result<(), NetworkError> {
//!     let mut model = Model::new();
//!     model.add_circuit(("A", "A-to-B", 10), ("B", "B-to-A", 10), 100.0, None)?;
//!     model.add_circuit(("B", "B-to-C", 10), ("C", "C-to-B", 10), 100.0, None)?;
//!
//!     model.add_demand("A", "C", 40.0, None)?;
//!     model.add_rsvp_lsp("A", "C", "lsp_a_c", None)?;
//!     model.update_simulation()?;
//!
//!     let lsp = model.get_rsvp_lsp("A", "C", "lsp_a_c")?;
//!     assert_eq!(lsp.reserved_bandwidth(), 40.0);
//!     assert_eq!(lsp.path().map(|p| p.cost), Some(20));
//!
//!     let ab = model.get_interface_object("A", "A-to-B")?;
//!     assert_eq!(ab.traffic(), 40.0);
//!     // reserved by the LSP and by the demand it carries
//!     assert_eq!(ab.reserved_bandwidth(), 80.0);
//!
//!     model.fail_node("B")?;
//!     model.update_simulation()?;
//!     assert_eq!(model.get_unrouted_demands().len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod circuit;
pub mod demand;
pub mod failure;
pub mod graph;
pub mod input;
pub mod interface;
pub mod model;
pub mod node;
pub mod path;
pub mod prelude;
pub mod rsvp;
pub mod simulation;
pub mod srlg;
pub mod types;
pub mod validate;

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod test;
