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

//! # Simulation pass
//!
//! A simulation pass recomputes all paths, reservations and traffic from scratch:
//!
//! 1. Reset all reservations, traffic and paths.
//! 2. Place all RSVP LSPs, group by group (a group being all LSPs with the same source and
//!    destination). Auto-bandwidth LSPs request an equal share of the traffic of all demands
//!    between their source and destination.
//! 3. Re-path the routed auto-bandwidth members of partially routed groups, such that they carry
//!    the share of the unrouted members.
//! 4. Route all demands, either inside the routed LSPs of their group, or along all equal-cost
//!    shortest paths. Both reserve the carried traffic on every traversed interface. Inside LSPs,
//!    this reservation is capped at the bandwidth still available on each interface.
//! 5. Validate the result.
//!
//! The pass operates on a copy of the model, which only replaces the model if validation succeeds.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    demand::{DemandKey, DemandPath, RoutedVia},
    graph::GraphConstraints,
    model::Model,
    path::shortest_paths,
    rsvp::{LspKey, LspPath},
    types::{Bandwidth, InterfaceId, NetworkError, NodeId},
};

/// Entity holding a reservation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReservationOwner {
    /// Reserved by an RSVP LSP (setup bandwidth).
    Lsp(LspKey),
    /// Reserved by a demand, either along its shortest paths or on top of the LSPs carrying it.
    Demand(DemandKey),
}

/// A single reservation of `bandwidth` on `interface`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Interface on which the bandwidth is reserved
    pub interface: InterfaceId,
    /// Who holds the reservation
    pub owner: ReservationOwner,
    /// Amount reserved
    pub bandwidth: Bandwidth,
}

/// Aggregated result of the last simulation pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of failed nodes
    pub failed_nodes: usize,
    /// Number of failed interfaces
    pub failed_interfaces: usize,
    /// Number of failed SRLGs
    pub failed_srlgs: usize,
    /// Number of routed LSPs
    pub routed_lsps: usize,
    /// Number of unrouted LSPs
    pub unrouted_lsps: usize,
    /// Number of routed demands
    pub routed_demands: usize,
    /// Number of unrouted demands
    pub unrouted_demands: usize,
    /// Largest utilization of any non-failed interface.
    pub max_utilization: Option<f64>,
}

type Group = (NodeId, NodeId);

impl Model {
    /// Run a full simulation pass. The model is only updated if the result passes validation;
    /// otherwise, the model remains unchanged and the validation error is returned.
    pub fn update_simulation(&mut self) -> Result<&mut Self, NetworkError> {
        let mut next = self.clone();
        next.reset_simulation_state();

        let traffic = next.group_traffic();
        let groups = next.lsp_groups();
        next.place_lsps(&groups, &traffic);
        next.reroute_parallel_lsps(&groups, &traffic);
        next.route_demands();

        next.validate()?;
        next.simulated = true;

        let summary = next.simulation_summary();
        info!(
            "Simulation done: {}/{} LSPs routed, {}/{} demands routed",
            summary.routed_lsps,
            summary.routed_lsps + summary.unrouted_lsps,
            summary.routed_demands,
            summary.routed_demands + summary.unrouted_demands,
        );

        *self = next;
        Ok(self)
    }

    /// Summarize the current state of the model.
    pub fn simulation_summary(&self) -> SimulationSummary {
        let (routed_lsps, unrouted_lsps) = count_split(self.lsps().map(|l| l.is_routed()));
        let (routed_demands, unrouted_demands) =
            count_split(self.demands().map(|d| d.is_routed()));
        SimulationSummary {
            failed_nodes: self.nodes().filter(|n| n.is_failed()).count(),
            failed_interfaces: self.interfaces().filter(|i| i.is_failed()).count(),
            failed_srlgs: self.srlgs().filter(|s| s.is_failed()).count(),
            routed_lsps,
            unrouted_lsps,
            routed_demands,
            unrouted_demands,
            max_utilization: self
                .interfaces()
                .filter(|i| !i.is_failed())
                .filter_map(|i| i.utilization())
                .fold(None, |acc: Option<f64>, u| Some(acc.map_or(u, |a| a.max(u)))),
        }
    }

    fn reset_simulation_state(&mut self) {
        for iface in self.interfaces.iter_mut() {
            iface.reserved_bandwidth = 0.0;
            iface.traffic = 0.0;
        }
        self.lsps.values_mut().for_each(|l| l.reset());
        self.demands
            .values_mut()
            .for_each(|d| d.path = DemandPath::Unrouted);
        self.ledger.clear();
    }

    /// Sum of all demand magnitudes per `(source, dest)`.
    fn group_traffic(&self) -> HashMap<Group, Bandwidth> {
        let mut traffic = HashMap::new();
        for d in self.demands() {
            *traffic.entry((d.source(), d.dest())).or_insert(0.0) += d.magnitude;
        }
        traffic
    }

    /// Parallel LSP groups, members in key order.
    fn lsp_groups(&self) -> BTreeMap<Group, Vec<LspKey>> {
        self.lsps
            .keys()
            .cloned()
            .into_group_map_by(|k| (k.source, k.dest))
            .into_iter()
            .collect()
    }

    fn place_lsps(
        &mut self,
        groups: &BTreeMap<Group, Vec<LspKey>>,
        traffic: &HashMap<Group, Bandwidth>,
    ) {
        for (&(source, dest), members) in groups.iter() {
            let total = traffic.get(&(source, dest)).copied().unwrap_or(0.0);
            for key in members {
                let Some(configured) = self.lsps.get(key).map(|l| l.configured_setup_bandwidth)
                else {
                    continue;
                };
                let requested = configured.unwrap_or(total / members.len() as f64);
                let g = self.build_graph(
                    &GraphConstraints::new()
                        .rsvp_only(true)
                        .needed_bandwidth(requested),
                );
                let sp = shortest_paths(&g, source, dest);
                let path = sp.cost.zip(sp.paths.into_iter().next());

                if let Some((cost, interfaces)) = path.as_ref() {
                    self.reserve(interfaces, ReservationOwner::Lsp(key.clone()), requested);
                    debug!(
                        "Place LSP {} from {} to {} with {} over {} hops (cost {})",
                        key.name,
                        self.node_name(source),
                        self.node_name(dest),
                        requested,
                        interfaces.len(),
                        cost
                    );
                } else {
                    warn!(
                        "LSP {} from {} to {} cannot be routed with {}",
                        key.name,
                        self.node_name(source),
                        self.node_name(dest),
                        requested
                    );
                }

                if let Some(lsp) = self.lsps.get_mut(key) {
                    lsp.setup_bandwidth = requested;
                    if let Some((cost, interfaces)) = path {
                        lsp.reserved_bandwidth = requested;
                        lsp.path = Some(LspPath { interfaces, cost });
                    }
                }
            }
        }
    }

    /// In every group where some, but not all, members are routed, the routed auto-bandwidth
    /// members try to take over the traffic of the unrouted ones.
    fn reroute_parallel_lsps(
        &mut self,
        groups: &BTreeMap<Group, Vec<LspKey>>,
        traffic: &HashMap<Group, Bandwidth>,
    ) {
        for (&(source, dest), members) in groups.iter() {
            let routed: Vec<&LspKey> = members
                .iter()
                .filter(|k| self.lsps.get(*k).map(|l| l.is_routed()).unwrap_or(false))
                .collect();
            if routed.is_empty() || routed.len() == members.len() {
                continue;
            }
            let total = traffic.get(&(source, dest)).copied().unwrap_or(0.0);
            let requested = total / routed.len() as f64;

            for key in routed {
                let Some(lsp) = self.lsps.get(key) else {
                    continue;
                };
                if !lsp.is_auto_bandwidth() {
                    continue;
                }
                let g = self.build_graph_for_routed_lsp(lsp, requested);
                let sp = shortest_paths(&g, source, dest);
                let Some((cost, interfaces)) = sp.cost.zip(sp.paths.into_iter().next()) else {
                    debug!(
                        "LSP {} from {} to {} keeps its path, {} does not fit",
                        key.name,
                        self.node_name(source),
                        self.node_name(dest),
                        requested
                    );
                    continue;
                };

                let owner = ReservationOwner::Lsp(key.clone());
                self.release(&owner);
                self.reserve(&interfaces, owner, requested);
                debug!(
                    "Reroute LSP {} from {} to {} with {}",
                    key.name,
                    self.node_name(source),
                    self.node_name(dest),
                    requested
                );
                if let Some(lsp) = self.lsps.get_mut(key) {
                    lsp.setup_bandwidth = requested;
                    lsp.reserved_bandwidth = requested;
                    lsp.path = Some(LspPath { interfaces, cost });
                }
            }
        }
    }

    fn route_demands(&mut self) {
        let keys: Vec<DemandKey> = self.demands.keys().cloned().collect();
        for key in keys {
            let Some(magnitude) = self.demands.get(&key).map(|d| d.magnitude) else {
                continue;
            };

            let lsps: Vec<(LspKey, Vec<InterfaceId>)> = self
                .lsps()
                .filter(|l| l.source() == key.source && l.dest() == key.dest)
                .filter_map(|l| l.path().map(|p| (l.key.clone(), p.interfaces.clone())))
                .collect();

            let path = if !lsps.is_empty() {
                let share = magnitude / lsps.len() as f64;
                for (_, interfaces) in lsps.iter() {
                    self.reserve_carried(interfaces, &key, share);
                    self.add_traffic(interfaces, share);
                }
                let (lsp_keys, routes) = lsps.into_iter().unzip();
                DemandPath::Routed {
                    routes,
                    via: RoutedVia::Lsps(lsp_keys),
                }
            } else {
                let g = self.build_graph(&GraphConstraints::new().needed_bandwidth(magnitude));
                let sp = shortest_paths(&g, key.source, key.dest);
                if sp.is_empty() {
                    warn!(
                        "Demand {} from {} to {} cannot be routed",
                        key.name,
                        self.node_name(key.source),
                        self.node_name(key.dest)
                    );
                    DemandPath::Unrouted
                } else {
                    let share = magnitude / sp.paths.len() as f64;
                    for interfaces in sp.paths.iter() {
                        self.reserve(interfaces, ReservationOwner::Demand(key.clone()), share);
                        self.add_traffic(interfaces, share);
                    }
                    DemandPath::Routed {
                        routes: sp.paths,
                        via: RoutedVia::Igp,
                    }
                }
            };

            if let Some(d) = self.demands.get_mut(&key) {
                d.path = path;
            }
        }
    }

    fn reserve(&mut self, path: &[InterfaceId], owner: ReservationOwner, bandwidth: Bandwidth) {
        for iface in path {
            if let Some(i) = self.interfaces.get_mut(iface.index()) {
                i.reserved_bandwidth += bandwidth;
                self.ledger.push(Reservation {
                    interface: *iface,
                    owner: owner.clone(),
                    bandwidth,
                });
            }
        }
    }

    /// Reserve the share of a demand carried inside an LSP. Since the LSP path was admitted
    /// without it, each interface only reserves what is still available, capped at `share`.
    fn reserve_carried(&mut self, path: &[InterfaceId], key: &DemandKey, share: Bandwidth) {
        for iface in path {
            let Some(i) = self.interfaces.get_mut(iface.index()) else {
                continue;
            };
            let bandwidth = share.min(i.reservable_bandwidth());
            if bandwidth <= 0.0 {
                continue;
            }
            if bandwidth < share {
                debug!(
                    "Demand {} reserves only {} of {} on {}",
                    key.name, bandwidth, share, i.name
                );
            }
            i.reserved_bandwidth += bandwidth;
            self.ledger.push(Reservation {
                interface: *iface,
                owner: ReservationOwner::Demand(key.clone()),
                bandwidth,
            });
        }
    }

    fn release(&mut self, owner: &ReservationOwner) {
        let interfaces = &mut self.interfaces;
        self.ledger.retain(|r| {
            if &r.owner == owner {
                if let Some(i) = interfaces.get_mut(r.interface.index()) {
                    i.reserved_bandwidth -= r.bandwidth;
                }
                false
            } else {
                true
            }
        });
    }

    fn add_traffic(&mut self, path: &[InterfaceId], traffic: Bandwidth) {
        for iface in path {
            if let Some(i) = self.interfaces.get_mut(iface.index()) {
                i.traffic += traffic;
            }
        }
    }
}

fn count_split(iter: impl Iterator<Item = bool>) -> (usize, usize) {
    iter.fold((0, 0), |(t, f), x| if x { (t + 1, f) } else { (t, f + 1) })
}
