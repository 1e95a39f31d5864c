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

//! Shared risk link groups (SRLGs) and their membership management.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    model::Model,
    types::{CircuitId, FailureCause, NetworkError, NodeId},
};

/// A named group of nodes and circuits that fail together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Srlg {
    pub(crate) name: String,
    pub(crate) failed: bool,
    pub(crate) nodes: BTreeSet<NodeId>,
    pub(crate) circuits: BTreeSet<CircuitId>,
}

impl Srlg {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed: false,
            nodes: BTreeSet::new(),
            circuits: BTreeSet::new(),
        }
    }

    /// Name of the SRLG
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the SRLG is currently failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Member nodes
    pub fn nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    /// Member circuits
    pub fn circuits(&self) -> &BTreeSet<CircuitId> {
        &self.circuits
    }
}

impl Model {
    /// Create a new, empty SRLG. If `failed` is set, the SRLG starts out failed (which only has an
    /// effect once members are added).
    pub fn add_srlg(&mut self, name: impl Into<String>, failed: bool) -> Result<(), NetworkError> {
        let name = name.into();
        if self.srlgs.contains_key(&name) {
            return Err(NetworkError::DuplicateSrlg(name));
        }
        let mut srlg = Srlg::new(name.clone());
        srlg.failed = failed;
        self.srlgs.insert(name, srlg);
        Ok(())
    }

    /// Get the SRLG with the given name.
    pub fn get_srlg_object(&self, name: impl AsRef<str>) -> Result<&Srlg, NetworkError> {
        self.srlgs
            .get(name.as_ref())
            .ok_or_else(|| NetworkError::SrlgNotFound(name.as_ref().to_string()))
    }

    /// Add a node to an SRLG. If the SRLG is failed, the node fails immediately. If `create` is
    /// set, a missing SRLG is created on the fly.
    pub fn add_node_to_srlg(
        &mut self,
        node: impl AsRef<str>,
        srlg: impl AsRef<str>,
        create: bool,
    ) -> Result<(), NetworkError> {
        let node = self.get_node_id(node)?;
        let srlg = srlg.as_ref();
        if create && !self.srlgs.contains_key(srlg) {
            self.add_srlg(srlg, false)?;
        }
        let entry = self
            .srlgs
            .get_mut(srlg)
            .ok_or_else(|| NetworkError::SrlgNotFound(srlg.to_string()))?;
        entry.nodes.insert(node);
        let failed = entry.failed;
        self.nodes[node.index()].srlgs.insert(srlg.to_string());
        debug!("Add node {} to SRLG {}", self.nodes[node.index()].name, srlg);
        if failed {
            self.add_node_cause(node, FailureCause::Srlg(srlg.to_string()));
        }
        self.simulated = false;
        Ok(())
    }

    /// Remove a node from an SRLG. If the SRLG is failed, its failure cause is removed from the
    /// node.
    pub fn remove_node_from_srlg(
        &mut self,
        node: impl AsRef<str>,
        srlg: impl AsRef<str>,
    ) -> Result<(), NetworkError> {
        let node = self.get_node_id(node)?;
        let srlg = srlg.as_ref();
        let entry = self
            .srlgs
            .get_mut(srlg)
            .ok_or_else(|| NetworkError::SrlgNotFound(srlg.to_string()))?;
        entry.nodes.remove(&node);
        self.nodes[node.index()].srlgs.remove(srlg);
        self.remove_node_cause(node, &FailureCause::Srlg(srlg.to_string()));
        self.simulated = false;
        Ok(())
    }

    /// Add the circuit of the interface `interface` on `node` to an SRLG. If the SRLG is failed,
    /// both interfaces of the circuit fail immediately. If `create` is set, a missing SRLG is
    /// created on the fly.
    pub fn add_circuit_to_srlg(
        &mut self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
        srlg: impl AsRef<str>,
        create: bool,
    ) -> Result<(), NetworkError> {
        let circuit = self.circuit_id_of(node.as_ref(), interface.as_ref())?;
        let srlg = srlg.as_ref();
        if create && !self.srlgs.contains_key(srlg) {
            self.add_srlg(srlg, false)?;
        }
        let entry = self
            .srlgs
            .get_mut(srlg)
            .ok_or_else(|| NetworkError::SrlgNotFound(srlg.to_string()))?;
        entry.circuits.insert(circuit);
        debug!("Add circuit {} to SRLG {}", circuit, srlg);
        if entry.failed {
            self.add_circuit_cause(circuit, FailureCause::Srlg(srlg.to_string()));
        }
        self.simulated = false;
        Ok(())
    }

    /// Remove the circuit of the interface `interface` on `node` from an SRLG.
    pub fn remove_circuit_from_srlg(
        &mut self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
        srlg: impl AsRef<str>,
    ) -> Result<(), NetworkError> {
        let circuit = self.circuit_id_of(node.as_ref(), interface.as_ref())?;
        let srlg = srlg.as_ref();
        let entry = self
            .srlgs
            .get_mut(srlg)
            .ok_or_else(|| NetworkError::SrlgNotFound(srlg.to_string()))?;
        entry.circuits.remove(&circuit);
        self.remove_circuit_cause(circuit, &FailureCause::Srlg(srlg.to_string()));
        self.simulated = false;
        Ok(())
    }

    fn circuit_id_of(&self, node: &str, interface: &str) -> Result<CircuitId, NetworkError> {
        let id = self.get_interface_id(node, interface)?;
        self.interfaces[id.index()]
            .circuit_id
            .ok_or_else(|| NetworkError::NoRemoteInterface {
                node: node.to_string(),
                interface: interface.to_string(),
            })
    }
}
