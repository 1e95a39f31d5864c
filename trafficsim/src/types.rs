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

//! Module containing all type definitions

use petgraph::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::ValidationErrors;

pub(crate) type IndexType = u32;
/// Node Identification (and index into every graph built from the model)
pub type NodeId = NodeIndex<IndexType>;

/// Routing metric (cost) of an interface.
pub type Cost = u64;

/// Largest cost of a single interface. A path has fewer hops than there are nodes, so the cost of
/// any path fits into a [`Cost`].
pub const MAX_COST: Cost = IndexType::MAX as Cost;

/// Capacity, reservations and traffic are all measured in the same (arbitrary) unit.
pub type Bandwidth = f64;

/// Absolute tolerance used when comparing bandwidth values.
pub(crate) const BW_EPSILON: Bandwidth = 1e-6;

/// Returns `true` if `a <= b`, up to rounding errors.
#[inline]
pub(crate) fn bw_le(a: Bandwidth, b: Bandwidth) -> bool {
    a <= b + BW_EPSILON * b.abs().max(1.0)
}

/// Returns `true` if `a == b`, up to rounding errors.
#[inline]
pub(crate) fn bw_eq(a: Bandwidth, b: Bandwidth) -> bool {
    (a - b).abs() <= BW_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Interface Identification, the position of the interface in the model.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InterfaceId(pub(crate) usize);

impl InterfaceId {
    /// Get the index of the interface.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for InterfaceId {
    fn from(x: usize) -> Self {
        Self(x)
    }
}

/// Circuit Identification. Both interfaces of a circuit carry the same circuit id.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircuitId(pub u32);

impl std::fmt::Display for CircuitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ckt{}", self.0)
    }
}

impl From<u32> for CircuitId {
    fn from(x: u32) -> Self {
        Self(x)
    }
}

impl From<usize> for CircuitId {
    fn from(x: usize) -> Self {
        Self(x as u32)
    }
}

/// The reason why a node or an interface is failed. An element is failed as long as at least one
/// cause is active. Each unfail operation only removes its own cause.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Serialize, Deserialize)]
pub enum FailureCause {
    /// The element itself was failed explicitly.
    Direct,
    /// The interface is failed because one of its endpoint nodes is failed.
    Node(NodeId),
    /// The element is part of a failed SRLG.
    Srlg(String),
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureCause::Direct => f.write_str("direct"),
            FailureCause::Node(n) => write!(f, "node {}", n.index()),
            FailureCause::Srlg(s) => write!(f, "srlg {s}"),
        }
    }
}

/// Network Errors
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// The model violates one or more consistency invariants.
    #[error("Model validation failed: {0}")]
    Validation(ValidationErrors),
    /// Node name is not present in the model
    #[error("Node was not found in the model: {0}")]
    NodeNotFound(String),
    /// Interface is not present in the model
    #[error("Interface {interface} was not found on node {node}")]
    InterfaceNotFound {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
    },
    /// There is no interface from the first node towards the second one.
    #[error("Link does not exist: {0} -- {1}")]
    LinkNotFound(String, String),
    /// The circuit partner of an interface could not be found.
    #[error("Interface {interface} on node {node} has no remote interface")]
    NoRemoteInterface {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
    },
    /// Demand is not present in the model
    #[error("Demand {name} from {src} to {dst} was not found in the model")]
    DemandNotFound {
        /// Name of the source node
        src: String,
        /// Name of the destination node
        dst: String,
        /// Name of the demand
        name: String,
    },
    /// RSVP LSP is not present in the model
    #[error("RSVP LSP {name} from {src} to {dst} was not found in the model")]
    LspNotFound {
        /// Name of the source node
        src: String,
        /// Name of the destination node
        dst: String,
        /// Name of the LSP
        name: String,
    },
    /// SRLG is not present in the model
    #[error("SRLG was not found in the model: {0}")]
    SrlgNotFound(String),
    /// A node with the same name already exists
    #[error("A node with name {0} already exists in the model")]
    DuplicateNode(String),
    /// An interface with the same name already exists on that node
    #[error("Interface {interface} on node {node} already exists in the model")]
    DuplicateInterface {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
    },
    /// A demand with the same key already exists
    #[error("Demand {name} from {src} to {dst} already exists in the model")]
    DuplicateDemand {
        /// Name of the source node
        src: String,
        /// Name of the destination node
        dst: String,
        /// Name of the demand
        name: String,
    },
    /// An RSVP LSP with the same key already exists
    #[error("RSVP LSP {name} from {src} to {dst} already exists in the model")]
    DuplicateLsp {
        /// Name of the source node
        src: String,
        /// Name of the destination node
        dst: String,
        /// Name of the LSP
        name: String,
    },
    /// An SRLG with the same name already exists
    #[error("SRLG with name {0} already exists in the model")]
    DuplicateSrlg(String),
    /// The interface could not be unfailed
    #[error("Cannot unfail interface {interface} on node {node}: {reason}")]
    UnfailBlocked {
        /// Name of the node
        node: String,
        /// Name of the interface
        interface: String,
        /// Why the interface stays failed
        reason: String,
    },
    /// A bandwidth value (capacity, magnitude, percentage) is negative or out of range.
    #[error("Invalid bandwidth value: {0}")]
    InvalidBandwidth(Bandwidth),
    /// The cost of an interface is larger than [`MAX_COST`].
    #[error("Invalid cost: {0} (at most {})", MAX_COST)]
    InvalidCost(Cost),
    /// The model cannot hold any more nodes.
    #[error("Too many nodes in the model")]
    TooManyNodes,
}

impl From<ValidationErrors> for NetworkError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bandwidth_comparison() {
        assert!(bw_le(80.0, 80.0));
        assert!(bw_le(80.000_000_01, 80.0));
        assert!(!bw_le(80.1, 80.0));
        assert!(bw_eq(0.1 + 0.2, 0.3));
        assert!(!bw_eq(40.0, 40.5));
    }
}
