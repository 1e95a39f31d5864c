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

//! Consistency checks of the model.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    circuit::Circuit,
    model::Model,
    types::{bw_eq, bw_le, Bandwidth, CircuitId, InterfaceId, NetworkError, NodeId},
};

/// A single violated consistency invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    /// The interface is not matched into exactly one circuit.
    UnpairedInterface {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
    },
    /// More bandwidth is reserved than the interface allows.
    ReservedBandwidthTooHigh {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
        /// Reserved bandwidth
        reserved: Bandwidth,
        /// `capacity * percent_reservable_bandwidth / 100`
        limit: Bandwidth,
    },
    /// The reservations recorded for the interface do not sum up to its reserved bandwidth.
    ReservedBandwidthSumMismatch {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
        /// Reserved bandwidth of the interface
        reserved: Bandwidth,
        /// Sum of all recorded reservations
        recorded: Bandwidth,
    },
    /// The same interface name exists multiple times on a node.
    DuplicateInterface {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
    },
    /// The same node name exists multiple times.
    DuplicateNode(String),
    /// Both interfaces of a circuit have different capacities.
    CapacityMismatch {
        /// The circuit
        circuit: CircuitId,
        /// Capacity of the first interface
        capacity_a: Bandwidth,
        /// Capacity of the second interface
        capacity_b: Bandwidth,
    },
    /// More than one interface from `node` towards `remote_node`.
    ParallelCircuits {
        /// Name of the node
        node: String,
        /// Name of the remote node
        remote_node: String,
        /// Number of interfaces
        count: usize,
    },
    /// The SRLG lists a node as member, but the node does not list the SRLG.
    SrlgNodeMissingBackReference {
        /// Name of the SRLG
        srlg: String,
        /// Name of the node
        node: String,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::UnpairedInterface { node, interface } => {
                write!(f, "interface {interface} on {node} is not part of a circuit")
            }
            Violation::ReservedBandwidthTooHigh {
                node,
                interface,
                reserved,
                limit,
            } => write!(
                f,
                "interface {interface} on {node} reserves {reserved}, but only {limit} is reservable"
            ),
            Violation::ReservedBandwidthSumMismatch {
                node,
                interface,
                reserved,
                recorded,
            } => write!(
                f,
                "interface {interface} on {node} reserves {reserved}, but reservations sum up to {recorded}"
            ),
            Violation::DuplicateInterface { node, interface } => {
                write!(f, "interface {interface} exists multiple times on {node}")
            }
            Violation::DuplicateNode(node) => write!(f, "node {node} exists multiple times"),
            Violation::CapacityMismatch {
                circuit,
                capacity_a,
                capacity_b,
            } => write!(
                f,
                "circuit {circuit} has different capacities: {capacity_a} and {capacity_b}"
            ),
            Violation::ParallelCircuits {
                node,
                remote_node,
                count,
            } => write!(f, "{count} interfaces from {node} to {remote_node}"),
            Violation::SrlgNodeMissingBackReference { srlg, node } => {
                write!(f, "node {node} is in SRLG {srlg}, but does not reference it")
            }
        }
    }
}

/// The list of all violations found during validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    /// Returns `true` if no violation was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} violation(s): ", self.0.len())?;
        f.write_str(&self.0.iter().map(|v| v.to_string()).join("; "))
    }
}

impl Model {
    /// Rebuild all circuits and check the consistency of the model. All violations are collected
    /// and returned at once as [`NetworkError::Validation`].
    pub fn validate(&mut self) -> Result<&mut Self, NetworkError> {
        let mut violations = Vec::new();

        self.rebuild_circuits(&mut violations);
        self.check_reservations(&mut violations);
        self.check_duplicates(&mut violations);
        self.check_circuit_capacities(&mut violations);
        self.check_parallel_circuits(&mut violations);
        self.check_srlg_references(&mut violations);

        if violations.is_empty() {
            debug!(
                "Model is valid: {} nodes, {} circuits",
                self.nodes.len(),
                self.circuits.len()
            );
            Ok(self)
        } else {
            let errors = ValidationErrors(violations);
            warn!("Model is invalid: {}", errors);
            Err(errors.into())
        }
    }

    fn interface_names(&self, id: InterfaceId) -> (String, String) {
        let iface = &self.interfaces[id.index()];
        (self.node_name(iface.node).to_string(), iface.name.clone())
    }

    fn rebuild_circuits(&mut self, violations: &mut Vec<Violation>) {
        let mut groups: BTreeMap<CircuitId, Vec<InterfaceId>> = BTreeMap::new();
        let mut unpaired = Vec::new();
        for iface in self.interfaces.iter() {
            match iface.circuit_id {
                Some(c) => groups.entry(c).or_default().push(iface.id),
                None => unpaired.push(iface.id),
            }
        }

        let mut circuits = Vec::new();
        for (id, members) in groups {
            match members.as_slice() {
                [a, b] if self.is_reverse(*a, *b) => circuits.push(Circuit {
                    id,
                    interface_a: *a,
                    interface_b: *b,
                }),
                _ => unpaired.extend(members.iter().copied()),
            }
        }
        self.circuits = circuits;

        unpaired.sort();
        for id in unpaired {
            let (node, interface) = self.interface_names(id);
            violations.push(Violation::UnpairedInterface { node, interface });
        }
    }

    fn is_reverse(&self, a: InterfaceId, b: InterfaceId) -> bool {
        let (a, b) = (&self.interfaces[a.index()], &self.interfaces[b.index()]);
        a.node == b.remote_node && a.remote_node == b.node
    }

    fn check_reservations(&self, violations: &mut Vec<Violation>) {
        let mut recorded: HashMap<InterfaceId, Bandwidth> = HashMap::new();
        for r in self.ledger.iter() {
            *recorded.entry(r.interface).or_insert(0.0) += r.bandwidth;
        }

        for iface in self.interfaces.iter() {
            let limit = iface.max_reservable_bandwidth();
            if !bw_le(iface.reserved_bandwidth, limit) {
                let (node, interface) = self.interface_names(iface.id);
                violations.push(Violation::ReservedBandwidthTooHigh {
                    node,
                    interface,
                    reserved: iface.reserved_bandwidth,
                    limit,
                });
            }
            let sum = recorded.get(&iface.id).copied().unwrap_or(0.0);
            if !bw_eq(sum, iface.reserved_bandwidth) {
                let (node, interface) = self.interface_names(iface.id);
                violations.push(Violation::ReservedBandwidthSumMismatch {
                    node,
                    interface,
                    reserved: iface.reserved_bandwidth,
                    recorded: sum,
                });
            }
        }
    }

    fn check_duplicates(&self, violations: &mut Vec<Violation>) {
        self.nodes
            .iter()
            .map(|n| n.name.as_str())
            .duplicates()
            .sorted()
            .for_each(|n| violations.push(Violation::DuplicateNode(n.to_string())));

        self.interfaces
            .iter()
            .map(|i| (i.node, i.name.as_str()))
            .duplicates()
            .sorted()
            .for_each(|(node, interface)| {
                violations.push(Violation::DuplicateInterface {
                    node: self.node_name(node).to_string(),
                    interface: interface.to_string(),
                })
            });
    }

    fn check_circuit_capacities(&self, violations: &mut Vec<Violation>) {
        for c in self.circuits.iter() {
            let capacity_a = self.interfaces[c.interface_a.index()].capacity;
            let capacity_b = self.interfaces[c.interface_b.index()].capacity;
            if !bw_eq(capacity_a, capacity_b) {
                violations.push(Violation::CapacityMismatch {
                    circuit: c.id,
                    capacity_a,
                    capacity_b,
                });
            }
        }
    }

    fn check_parallel_circuits(&self, violations: &mut Vec<Violation>) {
        let counts: BTreeMap<(NodeId, NodeId), usize> = self
            .interfaces
            .iter()
            .map(|i| (i.node, i.remote_node))
            .counts()
            .into_iter()
            .collect();
        for ((node, remote), count) in counts {
            if count > 1 {
                violations.push(Violation::ParallelCircuits {
                    node: self.node_name(node).to_string(),
                    remote_node: self.node_name(remote).to_string(),
                    count,
                });
            }
        }
    }

    fn check_srlg_references(&self, violations: &mut Vec<Violation>) {
        for srlg in self.srlgs.values() {
            for node in srlg.nodes.iter() {
                let listed = self
                    .nodes
                    .get(node.index())
                    .map(|n| n.srlgs.contains(&srlg.name))
                    .unwrap_or(false);
                if !listed {
                    violations.push(Violation::SrlgNodeMissingBackReference {
                        srlg: srlg.name.clone(),
                        node: self.node_name(*node).to_string(),
                    });
                }
            }
        }
    }
}
