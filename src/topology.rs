// CapPlan: Capacity planning for traffic-engineered networks
// Copyright (C) 2023 Tibor Schneider <sctibor@ethz.ch>
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

//! Sample models to run scenarios on.

use clap::ValueEnum;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use trafficsim::{
    builder::{uniform_integer_cost_seeded, uniform_magnitude_seeded, ModelBuilder},
    prelude::*,
};

use crate::Error;

/// Which sample model to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum SampleTopology {
    /// Four nodes with five circuits, two of which share a conduit (SRLG `conduit`). Demands and
    /// LSPs are fixed.
    Square,
    /// Ring of 8 nodes with random costs, a random full mesh of demands, and one auto-bandwidth
    /// LSP between every pair of nodes.
    Ring,
    /// Complete graph of 6 nodes with random costs, a random full mesh of demands, and two
    /// auto-bandwidth LSPs between every pair of nodes.
    Mesh,
}

impl SampleTopology {
    /// Build the model. The `seed` is used for all random choices.
    pub fn build(&self, seed: u64) -> Result<Model, Error> {
        let mut rng = StdRng::seed_from_u64(seed);
        match self {
            Self::Square => square(),
            Self::Ring => {
                let mut model = Model::build_ring(8, 100.0)?;
                model.build_link_costs_seeded(&mut rng, uniform_integer_cost_seeded, (1, 5))?;
                model.build_full_mesh_demands_seeded(
                    &mut rng,
                    uniform_magnitude_seeded,
                    (1.0, 3.0),
                )?;
                model.build_lsp_mesh(1, None)?;
                model.add_circuit_to_srlg("R0", "R0-to-R1", "west", true)?;
                model.add_circuit_to_srlg("R1", "R1-to-R2", "west", true)?;
                Ok(model)
            }
            Self::Mesh => {
                let mut model = Model::build_complete_graph(6, 50.0)?;
                model.build_link_costs_seeded(&mut rng, uniform_integer_cost_seeded, (1, 10))?;
                model.build_full_mesh_demands_seeded(
                    &mut rng,
                    uniform_magnitude_seeded,
                    (0.5, 1.5),
                )?;
                model.build_lsp_mesh(2, None)?;
                Ok(model)
            }
        }
    }
}

/// ```text
///       4 (100)
///   A ----------- B
///   |           / |
/// 1 | (200)    /  | 2 (150)
///   |  10 (100)   |
///   C ----------- D
///       3 (150)
/// ```
fn square() -> Result<Model, Error> {
    let mut model = Model::new();
    for (a, b, cost, capacity) in [
        ("A", "B", 4, 100.0),
        ("A", "C", 1, 200.0),
        ("C", "B", 10, 100.0),
        ("B", "D", 2, 150.0),
        ("C", "D", 3, 150.0),
    ] {
        let (ab, ba) = (format!("{a}-to-{b}"), format!("{b}-to-{a}"));
        model.add_circuit((a, ab.as_str(), cost), (b, ba.as_str(), cost), capacity, None)?;
    }
    model.add_circuit_to_srlg("A", "A-to-C", "conduit", true)?;
    model.add_circuit_to_srlg("C", "C-to-D", "conduit", true)?;

    model.add_demand("A", "D", 80.0, None)?;
    model.add_demand("B", "C", 40.0, None)?;
    model.add_demand("D", "A", 60.0, None)?;
    model.add_rsvp_lsp("A", "D", "lsp_a_d_1", None)?;
    model.add_rsvp_lsp("A", "D", "lsp_a_d_2", None)?;
    model.add_rsvp_lsp("D", "A", "lsp_d_a", Some(50.0))?;
    Ok(model)
}
