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

//! This module builds the directed routing graph from the current state of the model. The graph
//! contains one vertex per node (with the vertex index equal to the [`NodeId`]), and one edge per
//! interface that passes the given [`GraphConstraints`].

use petgraph::{Directed, Graph};
use serde::{Deserialize, Serialize};

use crate::{
    interface::Interface,
    model::Model,
    rsvp::RsvpLsp,
    types::{bw_le, Bandwidth, Cost, IndexType, InterfaceId, NodeId},
};

/// Edge weight of the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Interface represented by the edge
    pub interface: InterfaceId,
    /// Cost of the interface
    pub cost: Cost,
}

/// Directed routing graph, edges are interfaces.
pub type TopologyGraph = Graph<(), Hop, Directed, IndexType>;

/// Constraints on which interfaces appear in a [`TopologyGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphConstraints {
    /// Also include failed interfaces.
    pub include_failed: bool,
    /// Only include interfaces whose reservable bandwidth is at least this value.
    pub needed_bandwidth: Bandwidth,
    /// Only include RSVP enabled interfaces.
    pub rsvp_only: bool,
}

impl GraphConstraints {
    /// No constraint except that failed interfaces are excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether failed interfaces are included.
    pub fn include_failed(mut self, include_failed: bool) -> Self {
        self.include_failed = include_failed;
        self
    }

    /// Require a minimum reservable bandwidth.
    pub fn needed_bandwidth(mut self, needed_bandwidth: Bandwidth) -> Self {
        self.needed_bandwidth = needed_bandwidth;
        self
    }

    /// Only include RSVP enabled interfaces.
    pub fn rsvp_only(mut self, rsvp_only: bool) -> Self {
        self.rsvp_only = rsvp_only;
        self
    }

    fn admits(&self, iface: &Interface) -> bool {
        (self.include_failed || !iface.is_failed())
            && (!self.rsvp_only || iface.rsvp_enabled)
            && bw_le(self.needed_bandwidth, iface.reservable_bandwidth())
    }
}

impl Model {
    /// Build the routing graph containing all interfaces that satisfy `constraints`.
    pub fn build_graph(&self, constraints: &GraphConstraints) -> TopologyGraph {
        self.build_graph_filtered(|iface| constraints.admits(iface))
    }

    /// Build the graph used to re-path an already routed LSP: only non-failed, RSVP enabled
    /// interfaces are included. On interfaces of the LSP's current path, the LSP's own reservation
    /// is credited back before comparing against `needed_bandwidth`.
    pub fn build_graph_for_routed_lsp(
        &self,
        lsp: &RsvpLsp,
        needed_bandwidth: Bandwidth,
    ) -> TopologyGraph {
        self.build_graph_filtered(|iface| {
            if iface.is_failed() || !iface.rsvp_enabled {
                return false;
            }
            let mut reservable = iface.reservable_bandwidth();
            if lsp.uses(iface.id) {
                reservable += lsp.reserved_bandwidth;
            }
            bw_le(needed_bandwidth, reservable)
        })
    }

    fn build_graph_filtered<F>(&self, mut admit: F) -> TopologyGraph
    where
        F: FnMut(&Interface) -> bool,
    {
        let mut g = TopologyGraph::with_capacity(self.nodes.len(), self.interfaces.len());
        for _ in self.nodes.iter() {
            g.add_node(());
        }
        for iface in self.interfaces.iter() {
            if admit(iface) {
                g.add_edge(
                    iface.node,
                    iface.remote_node,
                    Hop {
                        interface: iface.id,
                        cost: iface.cost,
                    },
                );
            }
        }
        g
    }
}

/// Return the interface sequence of a path given as a sequence of nodes, choosing the cheapest
/// interface between each pair of consecutive nodes.
pub(crate) fn nodes_to_interfaces(g: &TopologyGraph, path: &[NodeId]) -> Option<Vec<InterfaceId>> {
    path.windows(2)
        .map(|w| {
            g.edges_connecting(w[0], w[1])
                .map(|e| *e.weight())
                .min_by_key(|h| (h.cost, h.interface))
                .map(|h| h.interface)
        })
        .collect()
}
