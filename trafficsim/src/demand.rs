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

//! Traffic demands between two nodes.

use serde::{Deserialize, Serialize};

use crate::{
    rsvp::LspKey,
    types::{Bandwidth, InterfaceId, NodeId},
};

/// Name used for demands that were added without a name.
pub const DEFAULT_DEMAND_NAME: &str = "none";

/// Identification of a demand: `(source, dest, name)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DemandKey {
    /// Source node
    pub source: NodeId,
    /// Destination node
    pub dest: NodeId,
    /// Name of the demand
    pub name: String,
}

impl DemandKey {
    /// Create a new demand key
    pub fn new(source: NodeId, dest: NodeId, name: impl Into<String>) -> Self {
        Self {
            source,
            dest,
            name: name.into(),
        }
    }
}

/// How a routed demand reached its destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutedVia {
    /// Plain shortest path (IGP) routing.
    Igp,
    /// Carried by the routed LSPs of the parallel LSP group between source and destination.
    Lsps(Vec<LspKey>),
}

/// Routing result of a demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DemandPath {
    /// No path exists (or no simulation was run yet).
    #[default]
    Unrouted,
    /// The demand is routed over one or more paths, each given as a sequence of interfaces.
    Routed {
        /// All paths the demand takes. The magnitude is split evenly among them.
        routes: Vec<Vec<InterfaceId>>,
        /// Whether the demand travels over plain IGP paths or inside LSPs.
        via: RoutedVia,
    },
}

impl DemandPath {
    /// Returns `true` if the demand is routed.
    pub fn is_routed(&self) -> bool {
        matches!(self, Self::Routed { .. })
    }

    /// Return all paths of the demand (empty if unrouted).
    pub fn routes(&self) -> &[Vec<InterfaceId>] {
        match self {
            Self::Unrouted => &[],
            Self::Routed { routes, .. } => routes,
        }
    }
}

/// A traffic demand of `magnitude` from `source` to `dest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub(crate) key: DemandKey,
    pub(crate) magnitude: Bandwidth,
    pub(crate) path: DemandPath,
}

impl Demand {
    pub(crate) fn new(key: DemandKey, magnitude: Bandwidth) -> Self {
        Self {
            key,
            magnitude,
            path: DemandPath::Unrouted,
        }
    }

    /// The key of the demand.
    pub fn key(&self) -> &DemandKey {
        &self.key
    }

    /// Source node
    pub fn source(&self) -> NodeId {
        self.key.source
    }

    /// Destination node
    pub fn dest(&self) -> NodeId {
        self.key.dest
    }

    /// Name of the demand
    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Amount of traffic of this demand.
    pub fn magnitude(&self) -> Bandwidth {
        self.magnitude
    }

    /// Routing result of the last simulation pass.
    pub fn path(&self) -> &DemandPath {
        &self.path
    }

    /// Returns `true` if the demand was routed in the last simulation pass.
    pub fn is_routed(&self) -> bool {
        self.path.is_routed()
    }
}
