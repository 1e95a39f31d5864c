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

//! Module for generating models quickly, according to parameters.

#[cfg(feature = "rand")]
use rand::{
    distributions::{Distribution, Uniform},
    prelude::*,
};

use crate::{
    input::InterfaceSpec,
    model::Model,
    types::{Bandwidth, Cost, NetworkError, NodeId, MAX_COST},
};

/// Trait for generating models quickly. The following example shows how you can setup a basic
/// model:
///
/// ```
/// use trafficsim::prelude::*;
/// use trafficsim::builder::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Create a ring with 5 nodes, each circuit having a capacity of 100.
/// let mut model = Model::build_ring(5, 100.0)?;
/// // set all costs to 10
/// model.build_link_costs(constant_cost, 10)?;
/// // add a demand of 5 between every pair of nodes
/// model.build_full_mesh_demands(constant_magnitude, 5.0)?;
/// // add two auto-bandwidth LSPs between every pair of nodes
/// model.build_lsp_mesh(2, None)?;
/// model.update_simulation()?;
/// assert!(model.get_unrouted_demands().is_empty());
/// # Ok(())
/// # }
/// ```
pub trait ModelBuilder: Sized {
    /// Create a complete graph with `n` nodes (named `R0` to `R{n-1}`), connecting every pair of
    /// nodes by a circuit with the given capacity and cost 1.
    fn build_complete_graph(n: usize, capacity: Bandwidth) -> Result<Self, NetworkError>;

    /// Create a ring with `n` nodes (named `R0` to `R{n-1}`), where `Ri` is connected to `Ri+1`
    /// (and the last one back to `R0`) by a circuit with the given capacity and cost 1.
    fn build_ring(n: usize, capacity: Bandwidth) -> Result<Self, NetworkError>;

    /// Set the cost of every interface according to the function `cost`. The function is called
    /// for every interface with its node and remote node, a reference to the model, and the
    /// argument `a`. See [`constant_cost`] and [`uniform_integer_cost`] (requires the feature
    /// `rand`).
    fn build_link_costs<F, A>(&mut self, cost: F, a: A) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, A) -> Cost;

    /// Set the cost of every interface according to the function `cost`, which takes an RNG as
    /// argument, such that the result can be reproduced. See [`uniform_integer_cost_seeded`].
    #[cfg(feature = "rand")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
    fn build_link_costs_seeded<F, A, Rng>(
        &mut self,
        rng: &mut Rng,
        cost: F,
        a: A,
    ) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, &mut Rng, A) -> Cost,
        Rng: RngCore;

    /// Add a demand (with the default name) between every ordered pair of distinct nodes. The
    /// magnitude is chosen by the function `magnitude`. See [`constant_magnitude`] and
    /// [`uniform_magnitude`] (requires the feature `rand`).
    fn build_full_mesh_demands<F, A>(&mut self, magnitude: F, a: A) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, A) -> Bandwidth;

    /// Add a demand between every ordered pair of distinct nodes, with the magnitude chosen by a
    /// function that takes an RNG as argument. See [`uniform_magnitude_seeded`].
    #[cfg(feature = "rand")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
    fn build_full_mesh_demands_seeded<F, A, Rng>(
        &mut self,
        rng: &mut Rng,
        magnitude: F,
        a: A,
    ) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, &mut Rng, A) -> Bandwidth,
        Rng: RngCore;

    /// Add `k` LSPs between every ordered pair of distinct nodes, named `lsp_{src}_{dst}_{i}`.
    /// `setup_bandwidth = None` creates auto-bandwidth LSPs.
    fn build_lsp_mesh(
        &mut self,
        k: usize,
        setup_bandwidth: Option<Bandwidth>,
    ) -> Result<(), NetworkError>;
}

impl ModelBuilder for Model {
    fn build_complete_graph(n: usize, capacity: Bandwidth) -> Result<Self, NetworkError> {
        let mut interfaces = Vec::new();
        for j in 1..n {
            for i in 0..j {
                interfaces.extend(circuit_specs(i, j, capacity));
            }
        }
        build_from_interfaces(n, interfaces)
    }

    fn build_ring(n: usize, capacity: Bandwidth) -> Result<Self, NetworkError> {
        let mut interfaces = Vec::new();
        if n == 2 {
            interfaces.extend(circuit_specs(0, 1, capacity));
        } else if n > 2 {
            for i in 0..n {
                interfaces.extend(circuit_specs(i, (i + 1) % n, capacity));
            }
        }
        build_from_interfaces(n, interfaces)
    }

    fn build_link_costs<F, A>(&mut self, mut cost: F, a: A) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, A) -> Cost,
    {
        let model: &Model = self;
        let costs: Vec<Cost> = model
            .interfaces
            .iter()
            .map(|i| cost(i.node, i.remote_node, model, a.clone()))
            .collect();
        self.set_link_costs(costs)
    }

    #[cfg(feature = "rand")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
    fn build_link_costs_seeded<F, A, Rng>(
        &mut self,
        rng: &mut Rng,
        mut cost: F,
        a: A,
    ) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, &mut Rng, A) -> Cost,
        Rng: RngCore,
    {
        let model: &Model = self;
        let costs: Vec<Cost> = model
            .interfaces
            .iter()
            .map(|i| cost(i.node, i.remote_node, model, rng, a.clone()))
            .collect();
        self.set_link_costs(costs)
    }

    fn build_full_mesh_demands<F, A>(&mut self, mut magnitude: F, a: A) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, A) -> Bandwidth,
    {
        for (src, dst) in node_pairs(self) {
            let m = magnitude(src, dst, self, a.clone());
            let (s, d) = (self.node_name(src).to_string(), self.node_name(dst).to_string());
            self.add_demand(s, d, m, None)?;
        }
        Ok(())
    }

    #[cfg(feature = "rand")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
    fn build_full_mesh_demands_seeded<F, A, Rng>(
        &mut self,
        rng: &mut Rng,
        mut magnitude: F,
        a: A,
    ) -> Result<(), NetworkError>
    where
        A: Clone,
        F: FnMut(NodeId, NodeId, &Model, &mut Rng, A) -> Bandwidth,
        Rng: RngCore,
    {
        for (src, dst) in node_pairs(self) {
            let m = magnitude(src, dst, self, rng, a.clone());
            let (s, d) = (self.node_name(src).to_string(), self.node_name(dst).to_string());
            self.add_demand(s, d, m, None)?;
        }
        Ok(())
    }

    fn build_lsp_mesh(
        &mut self,
        k: usize,
        setup_bandwidth: Option<Bandwidth>,
    ) -> Result<(), NetworkError> {
        for (src, dst) in node_pairs(self) {
            let (s, d) = (self.node_name(src).to_string(), self.node_name(dst).to_string());
            for i in 0..k {
                self.add_rsvp_lsp(&s, &d, format!("lsp_{s}_{d}_{i}"), setup_bandwidth)?;
            }
        }
        Ok(())
    }
}

impl Model {
    /// Assign `costs` to the interfaces, in the order of their ids. Nothing is changed if any cost
    /// is out of range.
    fn set_link_costs(&mut self, costs: Vec<Cost>) -> Result<(), NetworkError> {
        if let Some(c) = costs.iter().find(|c| **c > MAX_COST) {
            return Err(NetworkError::InvalidCost(*c));
        }
        for (iface, cost) in self.interfaces.iter_mut().zip(costs) {
            iface.cost = cost;
        }
        self.simulated = false;
        Ok(())
    }
}

fn circuit_specs(i: usize, j: usize, capacity: Bandwidth) -> [InterfaceSpec; 2] {
    let (a, b) = (format!("R{i}"), format!("R{j}"));
    [
        InterfaceSpec::new(&a, &b, format!("{a}-to-{b}"), 1, capacity),
        InterfaceSpec::new(&b, &a, format!("{b}-to-{a}"), 1, capacity),
    ]
}

fn build_from_interfaces(
    n: usize,
    interfaces: Vec<InterfaceSpec>,
) -> Result<Model, NetworkError> {
    let mut model = Model::new();
    for i in 0..n {
        model.add_node(format!("R{i}"))?;
    }
    model.add_network_interfaces_from_list(interfaces)?;
    Ok(model)
}

fn node_pairs(model: &Model) -> Vec<(NodeId, NodeId)> {
    let ids: Vec<NodeId> = model.nodes().map(|n| n.id()).collect();
    ids.iter()
        .flat_map(|a| ids.iter().map(move |b| (*a, *b)))
        .filter(|(a, b)| a != b)
        .collect()
}

/// This function will simply return the `cost`. This function can be used for the function
/// [`ModelBuilder::build_link_costs`].
pub fn constant_cost(_src: NodeId, _dst: NodeId, _model: &Model, cost: Cost) -> Cost {
    cost
}

/// This function will return an integer uniformly distributed inside of the `range`. This
/// function can be used for the function [`ModelBuilder::build_link_costs`].
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub fn uniform_integer_cost(
    _src: NodeId,
    _dst: NodeId,
    _model: &Model,
    range: (Cost, Cost),
) -> Cost {
    let mut rng = thread_rng();
    let dist = Uniform::from(range.0..range.1);
    dist.sample(&mut rng)
}

/// This function will return an integer uniformly distributed inside of the `range`. The function
/// takes as arguments an RNG, so it can be used deterministically. This function can be used with
/// [`ModelBuilder::build_link_costs_seeded`].
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub fn uniform_integer_cost_seeded<Rng: RngCore>(
    _src: NodeId,
    _dst: NodeId,
    _model: &Model,
    rng: &mut Rng,
    range: (Cost, Cost),
) -> Cost {
    let dist = Uniform::from(range.0..range.1);
    dist.sample(rng)
}

/// This function will simply return the `magnitude`. This function can be used for the function
/// [`ModelBuilder::build_full_mesh_demands`].
pub fn constant_magnitude(
    _src: NodeId,
    _dst: NodeId,
    _model: &Model,
    magnitude: Bandwidth,
) -> Bandwidth {
    magnitude
}

/// This function will return a magnitude uniformly distributed inside of the `range`. This
/// function can be used for the function [`ModelBuilder::build_full_mesh_demands`].
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub fn uniform_magnitude(
    _src: NodeId,
    _dst: NodeId,
    _model: &Model,
    range: (Bandwidth, Bandwidth),
) -> Bandwidth {
    let mut rng = thread_rng();
    let dist = Uniform::from(range.0..range.1);
    dist.sample(&mut rng)
}

/// This function will return a magnitude uniformly distributed inside of the `range`. The function
/// takes as arguments an RNG, so it can be used deterministically. This function can be used with
/// [`ModelBuilder::build_full_mesh_demands_seeded`].
#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub fn uniform_magnitude_seeded<Rng: RngCore>(
    _src: NodeId,
    _dst: NodeId,
    _model: &Model,
    rng: &mut Rng,
    range: (Bandwidth, Bandwidth),
) -> Bandwidth {
    let dist = Uniform::from(range.0..range.1);
    dist.sample(rng)
}
