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

//! RSVP label switched paths (LSPs).
//!
//! An LSP reserves its setup bandwidth on every interface of its path. LSPs sharing the same source
//! and destination form a *parallel LSP group*; demands between these nodes are split evenly
//! among the routed members of the group.

use serde::{Deserialize, Serialize};

use crate::types::{Bandwidth, Cost, InterfaceId, NodeId};

/// Identification of an LSP: `(source, dest, name)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LspKey {
    /// Head-end node
    pub source: NodeId,
    /// Tail-end node
    pub dest: NodeId,
    /// Name of the LSP
    pub name: String,
}

impl LspKey {
    /// Create a new LSP key
    pub fn new(source: NodeId, dest: NodeId, name: impl Into<String>) -> Self {
        Self {
            source,
            dest,
            name: name.into(),
        }
    }
}

/// Path of a routed LSP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LspPath {
    /// Sequence of interfaces from source to destination.
    pub interfaces: Vec<InterfaceId>,
    /// Sum of the costs of all interfaces.
    pub cost: Cost,
}

/// An RSVP LSP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpLsp {
    pub(crate) key: LspKey,
    pub(crate) configured_setup_bandwidth: Option<Bandwidth>,
    pub(crate) setup_bandwidth: Bandwidth,
    pub(crate) reserved_bandwidth: Bandwidth,
    pub(crate) path: Option<LspPath>,
}

impl RsvpLsp {
    pub(crate) fn new(key: LspKey, configured_setup_bandwidth: Option<Bandwidth>) -> Self {
        Self {
            key,
            configured_setup_bandwidth,
            setup_bandwidth: 0.0,
            reserved_bandwidth: 0.0,
            path: None,
        }
    }

    /// The key of the LSP
    pub fn key(&self) -> &LspKey {
        &self.key
    }

    /// Head-end node
    pub fn source(&self) -> NodeId {
        self.key.source
    }

    /// Tail-end node
    pub fn dest(&self) -> NodeId {
        self.key.dest
    }

    /// Name of the LSP
    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Statically configured setup bandwidth. `None` means auto-bandwidth.
    pub fn configured_setup_bandwidth(&self) -> Option<Bandwidth> {
        self.configured_setup_bandwidth
    }

    /// Returns `true` if the LSP derives its setup bandwidth from the traffic it carries.
    pub fn is_auto_bandwidth(&self) -> bool {
        self.configured_setup_bandwidth.is_none()
    }

    /// Bandwidth requested during the last simulation pass.
    pub fn setup_bandwidth(&self) -> Bandwidth {
        self.setup_bandwidth
    }

    /// Bandwidth currently reserved along the path.
    pub fn reserved_bandwidth(&self) -> Bandwidth {
        self.reserved_bandwidth
    }

    /// Path of the LSP, or `None` if it is unrouted.
    pub fn path(&self) -> Option<&LspPath> {
        self.path.as_ref()
    }

    /// Returns `true` if the LSP is routed.
    pub fn is_routed(&self) -> bool {
        self.path.is_some()
    }

    /// Returns `true` if `interface` is part of the current path.
    pub fn uses(&self, interface: InterfaceId) -> bool {
        self.path
            .as_ref()
            .map(|p| p.interfaces.contains(&interface))
            .unwrap_or(false)
    }

    pub(crate) fn reset(&mut self) {
        self.setup_bandwidth = 0.0;
        self.reserved_bandwidth = 0.0;
        self.path = None;
    }
}
