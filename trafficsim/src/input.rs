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

//! Plain input records, as produced by a model loader. They reference nodes by name and are turned
//! into a [`crate::model::Model`] by [`crate::model::Model::from_specs`].

use serde::{Deserialize, Serialize};

use crate::types::{Bandwidth, Cost};

fn default_true() -> bool {
    true
}

fn default_percent() -> f64 {
    100.0
}

/// Description of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Name of the node
    pub name: String,
    /// Latitude
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude
    #[serde(default)]
    pub lon: Option<f64>,
    /// SRLGs the node is a member of. Missing SRLGs are created.
    #[serde(default)]
    pub srlgs: Vec<String>,
}

impl NodeSpec {
    /// Create a node spec with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lat: None,
            lon: None,
            srlgs: Vec::new(),
        }
    }

    /// Set the coordinates of the node.
    pub fn coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }
}

/// Description of a single (unidirectional) interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSpec {
    /// Node owning the interface
    pub node: String,
    /// Node at the other end
    pub remote_node: String,
    /// Name of the interface, unique per node
    pub name: String,
    /// Routing metric
    pub cost: Cost,
    /// Capacity
    pub capacity: Bandwidth,
    /// Circuit id. If missing, it is inferred by pairing the interface with its reverse.
    #[serde(default)]
    pub circuit_id: Option<u32>,
    /// Whether RSVP LSPs may use this interface.
    #[serde(default = "default_true")]
    pub rsvp_enabled: bool,
    /// Percentage of the capacity that can be reserved.
    #[serde(default = "default_percent")]
    pub percent_reservable_bandwidth: f64,
    /// SRLGs the circuit of this interface is a member of. Missing SRLGs are created.
    #[serde(default)]
    pub srlgs: Vec<String>,
}

impl InterfaceSpec {
    /// Create an interface spec with default RSVP settings and no circuit id.
    pub fn new(
        node: impl Into<String>,
        remote_node: impl Into<String>,
        name: impl Into<String>,
        cost: Cost,
        capacity: Bandwidth,
    ) -> Self {
        Self {
            node: node.into(),
            remote_node: remote_node.into(),
            name: name.into(),
            cost,
            capacity,
            circuit_id: None,
            rsvp_enabled: true,
            percent_reservable_bandwidth: 100.0,
            srlgs: Vec::new(),
        }
    }

    /// Set the circuit id.
    pub fn circuit_id(mut self, id: u32) -> Self {
        self.circuit_id = Some(id);
        self
    }

    /// Enable or disable RSVP.
    pub fn rsvp_enabled(mut self, enabled: bool) -> Self {
        self.rsvp_enabled = enabled;
        self
    }

    /// Set the percentage of reservable bandwidth.
    pub fn percent_reservable_bandwidth(mut self, pct: f64) -> Self {
        self.percent_reservable_bandwidth = pct;
        self
    }

    /// Add the circuit to an SRLG.
    pub fn srlg(mut self, srlg: impl Into<String>) -> Self {
        self.srlgs.push(srlg.into());
        self
    }
}

/// Description of a traffic demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSpec {
    /// Source node
    pub source: String,
    /// Destination node
    pub dest: String,
    /// Amount of traffic
    pub magnitude: Bandwidth,
    /// Name of the demand (`"none"` if missing)
    #[serde(default)]
    pub name: Option<String>,
}

impl DemandSpec {
    /// Create a new demand spec without a name.
    pub fn new(source: impl Into<String>, dest: impl Into<String>, magnitude: Bandwidth) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            magnitude,
            name: None,
        }
    }

    /// Set the name of the demand.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Description of an RSVP LSP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LspSpec {
    /// Head-end node
    pub source: String,
    /// Tail-end node
    pub dest: String,
    /// Name of the LSP
    pub name: String,
    /// Configured setup bandwidth. Missing means auto-bandwidth.
    #[serde(default)]
    pub configured_setup_bandwidth: Option<Bandwidth>,
}

impl LspSpec {
    /// Create a new auto-bandwidth LSP spec.
    pub fn new(source: impl Into<String>, dest: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            name: name.into(),
            configured_setup_bandwidth: None,
        }
    }

    /// Configure a static setup bandwidth.
    pub fn setup_bandwidth(mut self, bw: Bandwidth) -> Self {
        self.configured_setup_bandwidth = Some(bw);
        self
    }
}
