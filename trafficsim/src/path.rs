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

//! Path computation on a [`TopologyGraph`]. No message passing is simulated; paths are computed
//! directly using shortest path algorithms from petgraph.

use std::collections::{HashMap, HashSet};

use log::trace;
use petgraph::{
    algo::{all_simple_paths as simple_node_paths, dijkstra},
    visit::{EdgeRef, Reversed},
};
use serde::{Deserialize, Serialize};

use crate::{
    graph::{nodes_to_interfaces, GraphConstraints, TopologyGraph},
    model::Model,
    types::{Bandwidth, Cost, InterfaceId, NetworkError, NodeId},
};

/// All minimum-cost paths between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// Every path of minimal cost, as a sequence of interfaces. Sorted.
    pub paths: Vec<Vec<InterfaceId>>,
    /// The cost of the paths, or `None` if no path exists.
    pub cost: Option<Cost>,
}

impl ShortestPaths {
    /// Returns `true` if no path exists.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Compute all minimum-cost paths from `source` to `dest`. If no path exists (or `source == dest`),
/// the result is empty with cost `None`.
pub fn shortest_paths(g: &TopologyGraph, source: NodeId, dest: NodeId) -> ShortestPaths {
    if source == dest || source.index() >= g.node_count() || dest.index() >= g.node_count() {
        return ShortestPaths::default();
    }

    // distance of every node towards `dest`
    let dist: HashMap<NodeId, Cost> = dijkstra(Reversed(g), dest, None, |e| e.weight().cost);
    let cost = match dist.get(&source) {
        Some(c) => *c,
        None => return ShortestPaths::default(),
    };

    let mut paths = Vec::new();
    let mut current = Vec::new();
    let mut visited = HashSet::from([source]);
    tight_paths(
        g,
        &dist,
        source,
        dest,
        &mut visited,
        &mut current,
        &mut paths,
    );
    paths.sort();
    trace!(
        "{} shortest path(s) from {} to {} with cost {}",
        paths.len(),
        source.index(),
        dest.index(),
        cost
    );

    ShortestPaths {
        paths,
        cost: Some(cost),
    }
}

/// Enumerate all paths from `node` to `dest` that only use edges lying on a shortest path.
fn tight_paths(
    g: &TopologyGraph,
    dist: &HashMap<NodeId, Cost>,
    node: NodeId,
    dest: NodeId,
    visited: &mut HashSet<NodeId>,
    current: &mut Vec<InterfaceId>,
    paths: &mut Vec<Vec<InterfaceId>>,
) {
    if node == dest {
        paths.push(current.clone());
        return;
    }
    let d_node = dist[&node];
    for e in g.edges(node) {
        let next = e.target();
        let Some(d_next) = dist.get(&next) else {
            continue;
        };
        if e.weight().cost.saturating_add(*d_next) != d_node || visited.contains(&next) {
            continue;
        }
        visited.insert(next);
        current.push(e.weight().interface);
        tight_paths(g, dist, next, dest, visited, current, paths);
        current.pop();
        visited.remove(&next);
    }
}

/// Compute every simple path from `source` to `dest` with at most `max_hops` interfaces. The
/// result is sorted.
pub fn all_simple_paths(
    g: &TopologyGraph,
    source: NodeId,
    dest: NodeId,
    max_hops: usize,
) -> Vec<Vec<InterfaceId>> {
    if max_hops == 0
        || source == dest
        || source.index() >= g.node_count()
        || dest.index() >= g.node_count()
    {
        return Vec::new();
    }
    let mut paths: Vec<Vec<InterfaceId>> =
        simple_node_paths::<Vec<NodeId>, _>(g, source, dest, 0, Some(max_hops - 1))
            .filter_map(|p| nodes_to_interfaces(g, &p))
            .collect();
    paths.sort();
    paths
}

impl Model {
    /// Get all shortest paths from `source` to `dest` over non-failed interfaces with at least
    /// `needed_bw` reservable bandwidth.
    pub fn get_shortest_path(
        &self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        needed_bw: Bandwidth,
    ) -> Result<ShortestPaths, NetworkError> {
        let s = self.get_node_id(source)?;
        let d = self.get_node_id(dest)?;
        let g = self.build_graph(&GraphConstraints::new().needed_bandwidth(needed_bw));
        Ok(shortest_paths(&g, s, d))
    }

    /// Get all shortest paths for an already routed LSP, for which the bandwidth currently
    /// reserved by the LSP itself counts as available.
    pub fn get_shortest_path_for_routed_lsp(
        &self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        name: impl AsRef<str>,
        needed_bw: Bandwidth,
    ) -> Result<ShortestPaths, NetworkError> {
        let lsp = self.get_rsvp_lsp(source, dest, name)?;
        let g = self.build_graph_for_routed_lsp(lsp, needed_bw);
        Ok(shortest_paths(&g, lsp.source(), lsp.dest()))
    }

    /// Get all simple paths from `source` to `dest` that have at most `cutoff` hops, and where
    /// every interface has at least `needed_bw` reservable bandwidth. If `include_failed` is set,
    /// failed interfaces are considered as well.
    pub fn get_all_paths_reservable_bw(
        &self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        include_failed: bool,
        cutoff: usize,
        needed_bw: Bandwidth,
    ) -> Result<Vec<Vec<InterfaceId>>, NetworkError> {
        let s = self.get_node_id(source)?;
        let d = self.get_node_id(dest)?;
        let g = self.build_graph(
            &GraphConstraints::new()
                .include_failed(include_failed)
                .needed_bandwidth(needed_bw),
        );
        Ok(all_simple_paths(&g, s, d, cutoff))
    }

    /// Sum of the interface costs along a path.
    pub fn path_cost(&self, path: &[InterfaceId]) -> Cost {
        path.iter()
            .filter_map(|i| self.interface(*i))
            .fold(0, |acc: Cost, i| acc.saturating_add(i.cost))
    }
}
