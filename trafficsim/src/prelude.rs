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

//! Convenience re-export of common members.

pub use crate::builder::ModelBuilder;
pub use crate::demand::{Demand, DemandKey, DemandPath, RoutedVia};
pub use crate::graph::GraphConstraints;
pub use crate::input::{DemandSpec, InterfaceSpec, LspSpec, NodeSpec};
pub use crate::model::Model;
pub use crate::path::ShortestPaths;
pub use crate::rsvp::{LspKey, RsvpLsp};
pub use crate::simulation::SimulationSummary;
pub use crate::types::{
    Bandwidth, CircuitId, Cost, FailureCause, InterfaceId, NetworkError, NodeId, MAX_COST,
};
pub use crate::validate::{ValidationErrors, Violation};
