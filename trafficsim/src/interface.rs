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

//! Module defining a unidirectional interface between two nodes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Bandwidth, CircuitId, Cost, FailureCause, InterfaceId, NodeId};

/// A unidirectional interface from `node` towards `remote_node`. Two interfaces in opposite
/// directions form a [`crate::circuit::Circuit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub(crate) id: InterfaceId,
    pub(crate) name: String,
    pub(crate) node: NodeId,
    pub(crate) remote_node: NodeId,
    pub(crate) cost: Cost,
    pub(crate) capacity: Bandwidth,
    pub(crate) circuit_id: Option<CircuitId>,
    pub(crate) rsvp_enabled: bool,
    pub(crate) percent_reservable_bandwidth: f64,
    pub(crate) reserved_bandwidth: Bandwidth,
    pub(crate) traffic: Bandwidth,
    pub(crate) failed: BTreeSet<FailureCause>,
}

impl Interface {
    /// Return the id of the interface.
    pub fn id(&self) -> InterfaceId {
        self.id
    }

    /// Return the name of the interface (unique per node).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node owning this interface.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The node at the other end of this interface.
    pub fn remote_node(&self) -> NodeId {
        self.remote_node
    }

    /// Routing metric of this interface.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Capacity of this interface.
    pub fn capacity(&self) -> Bandwidth {
        self.capacity
    }

    /// Circuit this interface is part of.
    pub fn circuit_id(&self) -> Option<CircuitId> {
        self.circuit_id
    }

    /// Whether RSVP LSPs may signal over this interface.
    pub fn rsvp_enabled(&self) -> bool {
        self.rsvp_enabled
    }

    /// Percentage of the capacity that can be reserved.
    pub fn percent_reservable_bandwidth(&self) -> f64 {
        self.percent_reservable_bandwidth
    }

    /// Bandwidth currently reserved on the interface.
    pub fn reserved_bandwidth(&self) -> Bandwidth {
        self.reserved_bandwidth
    }

    /// Traffic currently routed over the interface.
    pub fn traffic(&self) -> Bandwidth {
        self.traffic
    }

    /// Returns `true` if the interface is failed.
    pub fn is_failed(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Return all currently active failure causes of this interface.
    pub fn failure_causes(&self) -> &BTreeSet<FailureCause> {
        &self.failed
    }

    /// Upper bound of what can be reserved on this interface: `capacity * percent / 100`.
    pub fn max_reservable_bandwidth(&self) -> Bandwidth {
        self.capacity * self.percent_reservable_bandwidth / 100.0
    }

    /// Bandwidth that can still be reserved: `capacity * percent / 100 - reserved`.
    pub fn reservable_bandwidth(&self) -> Bandwidth {
        self.max_reservable_bandwidth() - self.reserved_bandwidth
    }

    /// Traffic divided by capacity, or `None` if the interface has no capacity.
    pub fn utilization(&self) -> Option<f64> {
        if self.capacity > 0.0 {
            Some(self.traffic / self.capacity)
        } else {
            None
        }
    }

    pub(crate) fn add_cause(&mut self, cause: FailureCause) {
        self.failed.insert(cause);
    }

    pub(crate) fn remove_cause(&mut self, cause: &FailureCause) {
        self.failed.remove(cause);
    }
}
