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

//! Module defining a node (router) of the model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{FailureCause, NodeId};

/// A node (router) in the model. A node is failed as long as at least one failure cause is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) failed: BTreeSet<FailureCause>,
    pub(crate) coordinates: Option<(f64, f64)>,
    pub(crate) srlgs: BTreeSet<String>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            failed: BTreeSet::new(),
            coordinates: None,
            srlgs: BTreeSet::new(),
        }
    }

    /// Return the id of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Return the name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the node is failed.
    pub fn is_failed(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Return all currently active failure causes of this node.
    pub fn failure_causes(&self) -> &BTreeSet<FailureCause> {
        &self.failed
    }

    /// Return the `(lat, lon)` coordinates of the node, if they are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.coordinates
    }

    /// Names of all SRLGs this node is a member of.
    pub fn srlgs(&self) -> &BTreeSet<String> {
        &self.srlgs
    }

    /// Add a failure cause. Returns `true` if the node was not failed before.
    pub(crate) fn add_cause(&mut self, cause: FailureCause) -> bool {
        let was_failed = self.is_failed();
        self.failed.insert(cause);
        !was_failed
    }

    /// Remove a failure cause. Returns `true` if the node is no longer failed (but was before).
    pub(crate) fn remove_cause(&mut self, cause: &FailureCause) -> bool {
        self.failed.remove(cause) && !self.is_failed()
    }
}
