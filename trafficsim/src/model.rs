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

//! # Top-level Model
//!
//! This module represents the model, the main datastructure of this crate. It owns all nodes,
//! interfaces, circuits, SRLGs, demands and RSVP LSPs, and exposes the query surface on top of
//! them. Entities refer to each other by id ([`NodeId`], [`InterfaceId`], [`CircuitId`]) or by
//! key ([`DemandKey`], [`LspKey`]).
//!
//! Mutations (adding elements, failing or unfailing elements) mark the model as *not simulated*.
//! Call [`Model::update_simulation`] to recompute all paths, reservations and traffic.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::{
    circuit::Circuit,
    demand::{Demand, DemandKey, DEFAULT_DEMAND_NAME},
    input::{DemandSpec, InterfaceSpec, LspSpec, NodeSpec},
    interface::Interface,
    node::Node,
    rsvp::{LspKey, RsvpLsp},
    simulation::Reservation,
    srlg::Srlg,
    types::{
        Bandwidth, CircuitId, Cost, IndexType, InterfaceId, NetworkError, NodeId, MAX_COST,
    },
};

/// One end of a circuit, used by [`Model::add_circuit`]: `(node, interface name, cost)`.
pub type CircuitEnd<'a> = (&'a str, &'a str, Cost);

/// # Network capacity model
///
/// See the [module documentation](crate::model) for an overview.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub(crate) nodes: Vec<Node>,
    pub(crate) interfaces: Vec<Interface>,
    pub(crate) circuits: Vec<Circuit>,
    pub(crate) demands: BTreeMap<DemandKey, Demand>,
    pub(crate) lsps: BTreeMap<LspKey, RsvpLsp>,
    pub(crate) srlgs: BTreeMap<String, Srlg>,
    pub(crate) ledger: Vec<Reservation>,
    pub(crate) simulated: bool,
    lut_nodes: HashMap<String, NodeId>,
    lut_interfaces: HashMap<(NodeId, String), InterfaceId>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from plain loader records. Nodes referenced only by interfaces are created,
    /// missing circuit ids are inferred by pairing each interface with its reverse, and SRLGs
    /// mentioned by nodes or interfaces are created. Duplicate nodes or interfaces are not
    /// rejected here; they are reported by the final validation.
    pub fn from_specs(
        nodes: impl IntoIterator<Item = NodeSpec>,
        interfaces: impl IntoIterator<Item = InterfaceSpec>,
        demands: impl IntoIterator<Item = DemandSpec>,
        lsps: impl IntoIterator<Item = LspSpec>,
    ) -> Result<Self, NetworkError> {
        let mut model = Self::new();
        let nodes: Vec<NodeSpec> = nodes.into_iter().collect();
        for spec in nodes.iter() {
            let id = model.push_node(&spec.name)?;
            if let (Some(lat), Some(lon)) = (spec.lat, spec.lon) {
                model.nodes[id.index()].coordinates = Some((lat, lon));
            }
        }
        let interfaces: Vec<InterfaceSpec> = interfaces.into_iter().collect();
        for spec in interfaces.iter() {
            model.push_interface(spec)?;
        }
        model.infer_circuit_ids();
        model.apply_spec_srlgs(&nodes, &interfaces)?;

        for spec in demands {
            let name = spec.name.as_deref().unwrap_or(DEFAULT_DEMAND_NAME);
            model.add_demand(&spec.source, &spec.dest, spec.magnitude, Some(name))?;
        }
        for spec in lsps {
            model.add_rsvp_lsp(
                &spec.source,
                &spec.dest,
                &spec.name,
                spec.configured_setup_bandwidth,
            )?;
        }

        model.validate()?;
        Ok(model)
    }

    /// Returns `true` if the current paths, reservations and traffic reflect the current state of
    /// the model.
    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    // Nodes

    /// Add a new node to the model.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId, NetworkError> {
        let name = name.into();
        if self.lut_nodes.contains_key(&name) {
            return Err(NetworkError::DuplicateNode(name));
        }
        self.simulated = false;
        self.push_node(name)
    }

    /// Set the geographic coordinates of a node.
    pub fn set_node_coordinates(
        &mut self,
        name: impl AsRef<str>,
        lat: f64,
        lon: f64,
    ) -> Result<(), NetworkError> {
        let id = self.get_node_id(name)?;
        self.nodes[id.index()].coordinates = Some((lat, lon));
        Ok(())
    }

    /// Get the id of the node with the given name.
    pub fn get_node_id(&self, name: impl AsRef<str>) -> Result<NodeId, NetworkError> {
        self.lut_nodes
            .get(name.as_ref())
            .copied()
            .ok_or_else(|| NetworkError::NodeNotFound(name.as_ref().to_string()))
    }

    /// Get the name of a node.
    pub fn get_node_name(&self, id: NodeId) -> Result<&str, NetworkError> {
        self.node(id)
            .map(|n| n.name())
            .ok_or_else(|| NetworkError::NodeNotFound(format!("{}", id.index())))
    }

    /// Get the node with the given name.
    pub fn get_node_object(&self, name: impl AsRef<str>) -> Result<&Node, NetworkError> {
        let id = self.get_node_id(name)?;
        Ok(&self.nodes[id.index()])
    }

    /// Get the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes in the model.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes without any interface.
    pub fn get_orphan_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| !self.interfaces.iter().any(|i| i.node == n.id))
            .collect()
    }

    /// Returns `true` if the node has no interface.
    pub fn is_node_an_orphan(&self, name: impl AsRef<str>) -> Result<bool, NetworkError> {
        let id = self.get_node_id(name)?;
        Ok(!self.interfaces.iter().any(|i| i.node == id))
    }

    /// All nodes that are currently failed.
    pub fn get_failed_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.is_failed()).collect()
    }

    /// All nodes that are currently not failed.
    pub fn get_unfailed_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| !n.is_failed()).collect()
    }

    // Interfaces and circuits

    /// Get the interface with the given id.
    pub fn interface(&self, id: InterfaceId) -> Option<&Interface> {
        self.interfaces.get(id.index())
    }

    /// Iterate over all interfaces.
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter()
    }

    /// Get the id of the interface `interface` on node `node`.
    pub fn get_interface_id(
        &self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
    ) -> Result<InterfaceId, NetworkError> {
        let node_id = self.get_node_id(node.as_ref())?;
        self.lut_interfaces
            .get(&(node_id, interface.as_ref().to_string()))
            .copied()
            .ok_or_else(|| NetworkError::InterfaceNotFound {
                node: node.as_ref().to_string(),
                interface: interface.as_ref().to_string(),
            })
    }

    /// Get the interface `interface` on node `node`.
    pub fn get_interface_object(
        &self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
    ) -> Result<&Interface, NetworkError> {
        let id = self.get_interface_id(node, interface)?;
        Ok(&self.interfaces[id.index()])
    }

    /// Get all interfaces from `node` towards `remote_node`.
    pub fn get_interface_objects_from_nodes(
        &self,
        node: impl AsRef<str>,
        remote_node: impl AsRef<str>,
    ) -> Result<Vec<&Interface>, NetworkError> {
        let a = self.get_node_id(node.as_ref())?;
        let b = self.get_node_id(remote_node.as_ref())?;
        let ifaces: Vec<&Interface> = self
            .interfaces
            .iter()
            .filter(|i| i.node == a && i.remote_node == b)
            .collect();
        if ifaces.is_empty() {
            Err(NetworkError::LinkNotFound(
                node.as_ref().to_string(),
                remote_node.as_ref().to_string(),
            ))
        } else {
            Ok(ifaces)
        }
    }

    /// Get all interfaces owned by `node`.
    pub fn get_node_interfaces(
        &self,
        node: impl AsRef<str>,
    ) -> Result<Vec<&Interface>, NetworkError> {
        let id = self.get_node_id(node)?;
        Ok(self.interfaces.iter().filter(|i| i.node == id).collect())
    }

    /// Get the circuit partner of the interface `interface` on `node`.
    pub fn get_remote_interface(
        &self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
    ) -> Result<&Interface, NetworkError> {
        let id = self.get_interface_id(node.as_ref(), interface.as_ref())?;
        self.circuit_partner(id)
            .map(|p| &self.interfaces[p.index()])
            .ok_or_else(|| NetworkError::NoRemoteInterface {
                node: node.as_ref().to_string(),
                interface: interface.as_ref().to_string(),
            })
    }

    /// Get the circuit containing the interface `interface` on `node`.
    pub fn get_circuit_object_from_interface(
        &self,
        node: impl AsRef<str>,
        interface: impl AsRef<str>,
    ) -> Result<&Circuit, NetworkError> {
        let id = self.get_interface_id(node.as_ref(), interface.as_ref())?;
        self.circuits
            .iter()
            .find(|c| c.other(id).is_some())
            .ok_or_else(|| NetworkError::NoRemoteInterface {
                node: node.as_ref().to_string(),
                interface: interface.as_ref().to_string(),
            })
    }

    /// Get the circuit with the given id.
    pub fn get_circuit(&self, id: CircuitId) -> Option<&Circuit> {
        self.circuits.iter().find(|c| c.id == id)
    }

    /// All circuits found by the last validation.
    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    /// All interfaces that are currently failed.
    pub fn get_failed_interfaces(&self) -> Vec<&Interface> {
        self.interfaces.iter().filter(|i| i.is_failed()).collect()
    }

    /// All interfaces that are currently not failed.
    pub fn get_unfailed_interfaces(&self) -> Vec<&Interface> {
        self.interfaces.iter().filter(|i| !i.is_failed()).collect()
    }

    /// Add a circuit between `a` and `b`, each given as `(node, interface name, cost)`. Missing
    /// nodes are created. If `circuit_id` is `None`, the id is chosen as one more than the largest
    /// id in use. The model is validated afterwards, and left unchanged if validation fails.
    pub fn add_circuit(
        &mut self,
        a: CircuitEnd<'_>,
        b: CircuitEnd<'_>,
        capacity: Bandwidth,
        circuit_id: Option<u32>,
    ) -> Result<CircuitId, NetworkError> {
        if capacity < 0.0 {
            return Err(NetworkError::InvalidBandwidth(capacity));
        }
        let circuit_id = circuit_id.unwrap_or_else(|| self.next_circuit_id().0);
        let (node_a, name_a, cost_a) = a;
        let (node_b, name_b, cost_b) = b;
        for (node, name) in [(node_a, name_a), (node_b, name_b)] {
            if self.get_interface_id(node, name).is_ok() {
                return Err(NetworkError::DuplicateInterface {
                    node: node.to_string(),
                    interface: name.to_string(),
                });
            }
        }
        debug!("Add circuit {node_a}:{name_a} -- {node_b}:{name_b}");
        self.transaction(|m| {
            m.push_interface(
                &InterfaceSpec::new(node_a, node_b, name_a, cost_a, capacity)
                    .circuit_id(circuit_id),
            )?;
            m.push_interface(
                &InterfaceSpec::new(node_b, node_a, name_b, cost_b, capacity)
                    .circuit_id(circuit_id),
            )?;
            Ok(())
        })?;
        Ok(CircuitId(circuit_id))
    }

    /// Add a list of interfaces. Nodes referenced by the interfaces are created, missing circuit
    /// ids are inferred, and the model is validated afterwards. If validation fails, the model is
    /// left unchanged.
    pub fn add_network_interfaces_from_list(
        &mut self,
        interfaces: impl IntoIterator<Item = InterfaceSpec>,
    ) -> Result<&mut Self, NetworkError> {
        let interfaces: Vec<InterfaceSpec> = interfaces.into_iter().collect();
        self.transaction(|m| {
            for spec in interfaces.iter() {
                if m.get_interface_id(&spec.node, &spec.name).is_ok() {
                    return Err(NetworkError::DuplicateInterface {
                        node: spec.node.clone(),
                        interface: spec.name.clone(),
                    });
                }
                m.push_interface(spec)?;
            }
            m.infer_circuit_ids();
            m.apply_spec_srlgs(&[], &interfaces)
        })?;
        Ok(self)
    }

    /// Apply `f` and validate the result. On any error, the model is restored to its previous
    /// state.
    fn transaction<F>(&mut self, f: F) -> Result<(), NetworkError>
    where
        F: FnOnce(&mut Self) -> Result<(), NetworkError>,
    {
        let backup = self.clone();
        let result = f(self).and_then(|_| self.validate().map(|_| ()));
        match result {
            Ok(()) => {
                self.simulated = false;
                Ok(())
            }
            Err(e) => {
                *self = backup;
                Err(e)
            }
        }
    }

    // Demands

    /// Add a demand. The name defaults to `"none"`.
    pub fn add_demand(
        &mut self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        magnitude: Bandwidth,
        name: Option<&str>,
    ) -> Result<(), NetworkError> {
        if magnitude.is_nan() || magnitude < 0.0 {
            return Err(NetworkError::InvalidBandwidth(magnitude));
        }
        let key = DemandKey::new(
            self.get_node_id(source.as_ref())?,
            self.get_node_id(dest.as_ref())?,
            name.unwrap_or(DEFAULT_DEMAND_NAME),
        );
        if self.demands.contains_key(&key) {
            return Err(NetworkError::DuplicateDemand {
                src: source.as_ref().to_string(),
                dst: dest.as_ref().to_string(),
                name: key.name,
            });
        }
        self.demands.insert(key.clone(), Demand::new(key, magnitude));
        self.simulated = false;
        Ok(())
    }

    /// Remove a demand from the model.
    pub fn remove_demand(
        &mut self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        name: Option<&str>,
    ) -> Result<Demand, NetworkError> {
        let key = self.demand_key(source.as_ref(), dest.as_ref(), name)?;
        self.simulated = false;
        self.demands
            .remove(&key)
            .ok_or_else(|| NetworkError::DemandNotFound {
                src: source.as_ref().to_string(),
                dst: dest.as_ref().to_string(),
                name: key.name,
            })
    }

    /// Get a demand.
    pub fn get_demand_object(
        &self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        name: Option<&str>,
    ) -> Result<&Demand, NetworkError> {
        let key = self.demand_key(source.as_ref(), dest.as_ref(), name)?;
        self.demands
            .get(&key)
            .ok_or_else(|| NetworkError::DemandNotFound {
                src: source.as_ref().to_string(),
                dst: dest.as_ref().to_string(),
                name: key.name,
            })
    }

    /// Iterate over all demands.
    pub fn demands(&self) -> impl Iterator<Item = &Demand> {
        self.demands.values()
    }

    /// All demands originating at `node`.
    pub fn get_demand_objects_source_node(
        &self,
        node: impl AsRef<str>,
    ) -> Result<Vec<&Demand>, NetworkError> {
        let id = self.get_node_id(node)?;
        Ok(self.demands().filter(|d| d.source() == id).collect())
    }

    /// All demands terminating at `node`.
    pub fn get_demand_objects_dest_node(
        &self,
        node: impl AsRef<str>,
    ) -> Result<Vec<&Demand>, NetworkError> {
        let id = self.get_node_id(node)?;
        Ok(self.demands().filter(|d| d.dest() == id).collect())
    }

    /// All demands that are not routed.
    pub fn get_unrouted_demands(&self) -> Vec<&Demand> {
        self.demands().filter(|d| !d.is_routed()).collect()
    }

    // RSVP LSPs

    /// Add an RSVP LSP. `configured_setup_bandwidth = None` creates an auto-bandwidth LSP.
    pub fn add_rsvp_lsp(
        &mut self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        name: impl Into<String>,
        configured_setup_bandwidth: Option<Bandwidth>,
    ) -> Result<(), NetworkError> {
        if let Some(bw) = configured_setup_bandwidth {
            if bw.is_nan() || bw < 0.0 {
                return Err(NetworkError::InvalidBandwidth(bw));
            }
        }
        let key = LspKey::new(
            self.get_node_id(source.as_ref())?,
            self.get_node_id(dest.as_ref())?,
            name,
        );
        if self.lsps.contains_key(&key) {
            return Err(NetworkError::DuplicateLsp {
                src: source.as_ref().to_string(),
                dst: dest.as_ref().to_string(),
                name: key.name,
            });
        }
        self.lsps
            .insert(key.clone(), RsvpLsp::new(key, configured_setup_bandwidth));
        self.simulated = false;
        Ok(())
    }

    /// Remove an RSVP LSP from the model.
    pub fn remove_rsvp_lsp(
        &mut self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> Result<RsvpLsp, NetworkError> {
        let key = self.lsp_key(source.as_ref(), dest.as_ref(), name.as_ref())?;
        self.simulated = false;
        self.lsps
            .remove(&key)
            .ok_or_else(|| NetworkError::LspNotFound {
                src: source.as_ref().to_string(),
                dst: dest.as_ref().to_string(),
                name: key.name,
            })
    }

    /// Get an RSVP LSP.
    pub fn get_rsvp_lsp(
        &self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> Result<&RsvpLsp, NetworkError> {
        let key = self.lsp_key(source.as_ref(), dest.as_ref(), name.as_ref())?;
        self.lsps.get(&key).ok_or_else(|| NetworkError::LspNotFound {
            src: source.as_ref().to_string(),
            dst: dest.as_ref().to_string(),
            name: key.name,
        })
    }

    /// Iterate over all RSVP LSPs.
    pub fn lsps(&self) -> impl Iterator<Item = &RsvpLsp> {
        self.lsps.values()
    }

    /// All LSPs of the parallel LSP group from `source` to `dest`.
    pub fn get_parallel_lsp_group(
        &self,
        source: impl AsRef<str>,
        dest: impl AsRef<str>,
    ) -> Result<Vec<&RsvpLsp>, NetworkError> {
        let s = self.get_node_id(source)?;
        let d = self.get_node_id(dest)?;
        Ok(self
            .lsps()
            .filter(|l| l.source() == s && l.dest() == d)
            .collect())
    }

    /// All LSPs that are not routed.
    pub fn get_unrouted_lsps(&self) -> Vec<&RsvpLsp> {
        self.lsps().filter(|l| !l.is_routed()).collect()
    }

    // SRLGs

    /// Iterate over all SRLGs.
    pub fn srlgs(&self) -> impl Iterator<Item = &Srlg> {
        self.srlgs.values()
    }

    /// Reservations taken during the last simulation pass.
    pub fn reservations(&self) -> &[Reservation] {
        &self.ledger
    }

    // internal helpers

    pub(crate) fn node_name(&self, id: NodeId) -> &str {
        self.nodes
            .get(id.index())
            .map(|n| n.name.as_str())
            .unwrap_or("?")
    }

    /// The interface with the same circuit id going in the opposite direction.
    pub(crate) fn circuit_partner(&self, id: InterfaceId) -> Option<InterfaceId> {
        let iface = self.interfaces.get(id.index())?;
        let cid = iface.circuit_id?;
        self.interfaces
            .iter()
            .find(|o| {
                o.id != id
                    && o.circuit_id == Some(cid)
                    && o.node == iface.remote_node
                    && o.remote_node == iface.node
            })
            .map(|o| o.id)
    }

    /// All interfaces carrying the given circuit id.
    pub(crate) fn circuit_members(&self, circuit: CircuitId) -> Vec<InterfaceId> {
        self.interfaces
            .iter()
            .filter(|i| i.circuit_id == Some(circuit))
            .map(|i| i.id)
            .collect()
    }

    fn next_circuit_id(&self) -> CircuitId {
        CircuitId(
            self.interfaces
                .iter()
                .filter_map(|i| i.circuit_id)
                .map(|c| c.0)
                .max()
                .map(|x| x + 1)
                .unwrap_or(1),
        )
    }

    fn push_node(&mut self, name: impl Into<String>) -> Result<NodeId, NetworkError> {
        let name = name.into();
        let idx = IndexType::try_from(self.nodes.len())
            .ok()
            .filter(|idx| *idx < IndexType::MAX)
            .ok_or(NetworkError::TooManyNodes)?;
        let id = NodeId::new(idx as usize);
        self.lut_nodes.entry(name.clone()).or_insert(id);
        self.nodes.push(Node::new(id, name));
        Ok(id)
    }

    fn get_or_create_node(&mut self, name: &str) -> Result<NodeId, NetworkError> {
        match self.lut_nodes.get(name) {
            Some(id) => Ok(*id),
            None => self.push_node(name),
        }
    }

    fn push_interface(&mut self, spec: &InterfaceSpec) -> Result<InterfaceId, NetworkError> {
        if spec.capacity.is_nan() || spec.capacity < 0.0 {
            return Err(NetworkError::InvalidBandwidth(spec.capacity));
        }
        if !(0.0..=100.0).contains(&spec.percent_reservable_bandwidth) {
            return Err(NetworkError::InvalidBandwidth(
                spec.percent_reservable_bandwidth,
            ));
        }
        if spec.cost > MAX_COST {
            return Err(NetworkError::InvalidCost(spec.cost));
        }
        let node = self.get_or_create_node(&spec.node)?;
        let remote_node = self.get_or_create_node(&spec.remote_node)?;
        let id = InterfaceId(self.interfaces.len());
        self.lut_interfaces
            .entry((node, spec.name.clone()))
            .or_insert(id);
        self.interfaces.push(Interface {
            id,
            name: spec.name.clone(),
            node,
            remote_node,
            cost: spec.cost,
            capacity: spec.capacity,
            circuit_id: spec.circuit_id.map(CircuitId),
            rsvp_enabled: spec.rsvp_enabled,
            percent_reservable_bandwidth: spec.percent_reservable_bandwidth,
            reserved_bandwidth: 0.0,
            traffic: 0.0,
            failed: Default::default(),
        });
        Ok(id)
    }

    /// Pair interfaces without circuit id with their reverse interface (also without id), in the
    /// order of their ids, and give each pair a fresh circuit id.
    fn infer_circuit_ids(&mut self) {
        for i in 0..self.interfaces.len() {
            if self.interfaces[i].circuit_id.is_some() {
                continue;
            }
            let (node, remote) = (self.interfaces[i].node, self.interfaces[i].remote_node);
            let partner = (i + 1..self.interfaces.len()).find(|j| {
                let o = &self.interfaces[*j];
                o.circuit_id.is_none() && o.node == remote && o.remote_node == node
            });
            if let Some(j) = partner {
                let cid = self.next_circuit_id();
                debug!(
                    "Infer circuit {} for {} -- {}",
                    cid,
                    self.node_name(node),
                    self.node_name(remote)
                );
                self.interfaces[i].circuit_id = Some(cid);
                self.interfaces[j].circuit_id = Some(cid);
            }
        }
    }

    fn apply_spec_srlgs(
        &mut self,
        nodes: &[NodeSpec],
        interfaces: &[InterfaceSpec],
    ) -> Result<(), NetworkError> {
        for spec in nodes {
            for srlg in spec.srlgs.iter() {
                self.add_node_to_srlg(&spec.name, srlg, true)?;
            }
        }
        for spec in interfaces.iter().filter(|s| !s.srlgs.is_empty()) {
            // unpaired interfaces are reported by the validation
            let paired = self
                .get_interface_object(&spec.node, &spec.name)
                .map(|i| i.circuit_id().is_some())
                .unwrap_or(false);
            if !paired {
                debug!(
                    "Skip SRLGs of unpaired interface {} on {}",
                    spec.name, spec.node
                );
                continue;
            }
            for srlg in spec.srlgs.iter() {
                self.add_circuit_to_srlg(&spec.node, &spec.name, srlg, true)?;
            }
        }
        Ok(())
    }

    fn demand_key(
        &self,
        source: &str,
        dest: &str,
        name: Option<&str>,
    ) -> Result<DemandKey, NetworkError> {
        Ok(DemandKey::new(
            self.get_node_id(source)?,
            self.get_node_id(dest)?,
            name.unwrap_or(DEFAULT_DEMAND_NAME),
        ))
    }

    pub(crate) fn lsp_key(
        &self,
        source: &str,
        dest: &str,
        name: &str,
    ) -> Result<LspKey, NetworkError> {
        Ok(LspKey::new(
            self.get_node_id(source)?,
            self.get_node_id(dest)?,
            name,
        ))
    }
}
