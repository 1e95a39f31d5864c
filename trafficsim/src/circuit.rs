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

//! A circuit is the bidirectional link formed by two interfaces in opposite directions.

use serde::{Deserialize, Serialize};

use crate::{
    model::Model,
    types::{CircuitId, InterfaceId},
};

/// Pair of interfaces sharing the same circuit id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    pub(crate) id: CircuitId,
    pub(crate) interface_a: InterfaceId,
    pub(crate) interface_b: InterfaceId,
}

impl Circuit {
    /// Id of the circuit
    pub fn id(&self) -> CircuitId {
        self.id
    }

    /// Both interfaces of the circuit.
    pub fn interfaces(&self) -> (InterfaceId, InterfaceId) {
        (self.interface_a, self.interface_b)
    }

    /// Return the other interface of the circuit, or `None` if `interface` is not part of it.
    pub fn other(&self, interface: InterfaceId) -> Option<InterfaceId> {
        if interface == self.interface_a {
            Some(self.interface_b)
        } else if interface == self.interface_b {
            Some(self.interface_a)
        } else {
            None
        }
    }

    /// A circuit is failed if any of its interfaces is failed.
    pub fn is_failed(&self, model: &Model) -> bool {
        [self.interface_a, self.interface_b]
            .into_iter()
            .filter_map(|i| model.interface(i))
            .any(|i| i.is_failed())
    }
}
