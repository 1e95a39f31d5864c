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

//! Failing and unfailing interfaces, nodes and SRLGs.
//!
//! Every node and interface keeps the set of [`FailureCause`]s that currently hold it down. An
//! element is failed as long as this set is non-empty, and every unfail operation only removes the
//! cause it is responsible for. Hence, unfailing a node does not bring back a circuit that is still
//! failed by an SRLG, and unfailing an SRLG does not bring back a node that was failed directly.
//!
//! None of these operations runs a simulation pass. They only mark the model as not simulated.

use log::debug;

use crate::{
    model::Model,
    types::{CircuitId, FailureCause, InterfaceId, NetworkError, NodeId},
};

impl Model {
    /// Fail the interface `interface` on `node`, together with its circuit partner.
    pub fn fail_interface(
        &mut self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
    ) -> Result<(), NetworkError> {
        let id = self.get_interface_id(node.as_ref(), interface.as_ref())?;
        debug!(
            "Fail interface {} on {}",
            interface.as_ref(),
            node.as_ref()
        );
        for i in self.with_partner(id) {
            self.interfaces[i.index()].add_cause(FailureCause::Direct);
        }
        self.simulated = false;
        Ok(())
    }

    /// Unfail the interface `interface` on `node`, together with its circuit partner. The reserved
    /// bandwidth on both interfaces is reset to zero.
    ///
    /// If one of the endpoint nodes is failed, the interface stays failed. If an SRLG still holds
    /// the circuit down, the direct failure is removed, but the interface stays failed. In both
    /// cases, [`NetworkError::UnfailBlocked`] is returned if `raise_on_block` is set.
    pub fn unfail_interface(
        &mut self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
        raise_on_block: bool,
    ) -> Result<(), NetworkError> {
        let id = self.get_interface_id(node.as_ref(), interface.as_ref())?;
        let blocked = |reason: String| NetworkError::UnfailBlocked {
            node: node.as_ref().to_string(),
            interface: interface.as_ref().to_string(),
            reason,
        };

        let iface = &self.interfaces[id.index()];
        if let Some(failed) = [iface.node, iface.remote_node]
            .into_iter()
            .find(|n| self.nodes[n.index()].is_failed())
        {
            let reason = format!("node {} is failed", self.node_name(failed));
            debug!(
                "Cannot unfail interface {} on {}: {}",
                interface.as_ref(),
                node.as_ref(),
                reason
            );
            return if raise_on_block {
                Err(blocked(reason))
            } else {
                Ok(())
            };
        }

        debug!(
            "Unfail interface {} on {}",
            interface.as_ref(),
            node.as_ref()
        );
        let members = self.with_partner(id);
        for i in members.iter() {
            let iface = &mut self.interfaces[i.index()];
            iface.remove_cause(&FailureCause::Direct);
            iface.reserved_bandwidth = 0.0;
        }
        self.ledger.retain(|r| !members.contains(&r.interface));
        self.simulated = false;

        let remaining = self.interfaces[id.index()].failure_causes().iter().next();
        match remaining {
            Some(cause) if raise_on_block => Err(blocked(format!("still failed by {cause}"))),
            _ => Ok(()),
        }
    }

    /// Fail a node. All interfaces from and towards this node fail as well.
    pub fn fail_node(&mut self, node: impl AsRef<str>) -> Result<(), NetworkError> {
        let id = self.get_node_id(node.as_ref())?;
        debug!("Fail node {}", node.as_ref());
        self.add_node_cause(id, FailureCause::Direct);
        self.simulated = false;
        Ok(())
    }

    /// Unfail a node. Interfaces from and towards this node come back up, unless they are still
    /// failed for another reason (e.g., the remote node is failed as well).
    pub fn unfail_node(&mut self, node: impl AsRef<str>) -> Result<(), NetworkError> {
        let id = self.get_node_id(node.as_ref())?;
        debug!("Unfail node {}", node.as_ref());
        self.remove_node_cause(id, &FailureCause::Direct);
        self.simulated = false;
        Ok(())
    }

    /// Fail an SRLG, and with it all member nodes and circuits.
    pub fn fail_srlg(&mut self, name: impl AsRef<str>) -> Result<(), NetworkError> {
        self.set_srlg_state(name.as_ref(), true)
    }

    /// Unfail an SRLG. Member nodes and circuits come back up, unless they are still failed for
    /// another reason.
    pub fn unfail_srlg(&mut self, name: impl AsRef<str>) -> Result<(), NetworkError> {
        self.set_srlg_state(name.as_ref(), false)
    }

    fn set_srlg_state(&mut self, name: &str, failed: bool) -> Result<(), NetworkError> {
        let srlg = self
            .srlgs
            .get_mut(name)
            .ok_or_else(|| NetworkError::SrlgNotFound(name.to_string()))?;
        srlg.failed = failed;
        let nodes: Vec<NodeId> = srlg.nodes.iter().copied().collect();
        let circuits: Vec<CircuitId> = srlg.circuits.iter().copied().collect();
        debug!(
            "{} SRLG {} ({} nodes, {} circuits)",
            if failed { "Fail" } else { "Unfail" },
            name,
            nodes.len(),
            circuits.len()
        );

        let cause = FailureCause::Srlg(name.to_string());
        for n in nodes {
            if failed {
                self.add_node_cause(n, cause.clone());
            } else {
                self.remove_node_cause(n, &cause);
            }
        }
        for c in circuits {
            if failed {
                self.add_circuit_cause(c, cause.clone());
            } else {
                self.remove_circuit_cause(c, &cause);
            }
        }
        self.simulated = false;
        Ok(())
    }

    /// Add a failure cause to a node. If the node transitions to failed, all its interfaces (and
    /// those pointing towards it) are failed with cause [`FailureCause::Node`].
    pub(crate) fn add_node_cause(&mut self, node: NodeId, cause: FailureCause) {
        let Some(n) = self.nodes.get_mut(node.index()) else {
            return;
        };
        if n.add_cause(cause) {
            for iface in self.interfaces.iter_mut() {
                if iface.node == node || iface.remote_node == node {
                    iface.add_cause(FailureCause::Node(node));
                }
            }
        }
    }

    /// Remove a failure cause from a node. If the node transitions to non-failed, the cause
    /// [`FailureCause::Node`] is removed from all its interfaces (and those pointing towards it).
    pub(crate) fn remove_node_cause(&mut self, node: NodeId, cause: &FailureCause) {
        let Some(n) = self.nodes.get_mut(node.index()) else {
            return;
        };
        if n.remove_cause(cause) {
            let cause = FailureCause::Node(node);
            for iface in self.interfaces.iter_mut() {
                if iface.node == node || iface.remote_node == node {
                    iface.remove_cause(&cause);
                }
            }
        }
    }

    pub(crate) fn add_circuit_cause(&mut self, circuit: CircuitId, cause: FailureCause) {
        for i in self.circuit_members(circuit) {
            self.interfaces[i.index()].add_cause(cause.clone());
        }
    }

    pub(crate) fn remove_circuit_cause(&mut self, circuit: CircuitId, cause: &FailureCause) {
        for i in self.circuit_members(circuit) {
            self.interfaces[i.index()].remove_cause(cause);
        }
    }

    /// The interface together with its circuit partner (if any).
    fn with_partner(&self, id: InterfaceId) -> Vec<InterfaceId> {
        std::iter::once(id).chain(self.circuit_partner(id)).collect()
    }
}
