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

//! Failure scenarios and their evaluation.
//!
//! A scenario is a list of [`FailureScenario`]s applied to a copy of the model, followed by a full
//! simulation pass. The result is summarized in a [`ScenarioReport`]. Since every scenario works
//! on its own copy, [`sweep`] evaluates many scenarios in parallel using `rayon`.

use std::fmt::Display;

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use trafficsim::prelude::*;

use crate::Error;

/// Number of interfaces listed in [`ScenarioReport::hottest_interfaces`].
pub const HOTTEST_INTERFACES: usize = 5;

/// A single element to fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureScenario {
    /// Fail an interface (and with it, the entire circuit).
    Interface {
        /// Name of the node
        node: String,
        /// Name of the interface on that node
        interface: String,
    },
    /// Fail a node.
    Node(String),
    /// Fail a shared risk link group.
    Srlg(String),
}

impl FailureScenario {
    /// Parse an interface failure from `node:interface`.
    pub fn parse_interface(s: &str) -> Result<Self, Error> {
        match s.split_once(':') {
            Some((node, interface)) if !node.is_empty() && !interface.is_empty() => {
                Ok(Self::Interface {
                    node: node.to_string(),
                    interface: interface.to_string(),
                })
            }
            _ => Err(Error::InvalidInterface(s.to_string())),
        }
    }

    /// Apply the failure to the model. This does not run a simulation pass.
    pub fn apply(&self, model: &mut Model) -> Result<(), Error> {
        match self {
            Self::Interface { node, interface } => model.fail_interface(node, interface)?,
            Self::Node(node) => model.fail_node(node)?,
            Self::Srlg(srlg) => model.fail_srlg(srlg)?,
        }
        Ok(())
    }
}

impl Display for FailureScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interface { node, interface } => write!(f, "interface {node}:{interface}"),
            Self::Node(node) => write!(f, "node {node}"),
            Self::Srlg(srlg) => write!(f, "srlg {srlg}"),
        }
    }
}

/// A demand that could not be routed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnroutedDemand {
    /// Source node
    pub source: String,
    /// Destination node
    pub dest: String,
    /// Name of the demand
    pub name: String,
    /// Traffic that is lost
    pub magnitude: Bandwidth,
}

/// An LSP that could not be signaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnroutedLsp {
    /// Source node
    pub source: String,
    /// Destination node
    pub dest: String,
    /// Name of the LSP
    pub name: String,
    /// Bandwidth the LSP tried to reserve
    pub setup_bandwidth: Bandwidth,
}

/// Load of a single interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceLoad {
    /// Node owning the interface
    pub node: String,
    /// Name of the interface
    pub interface: String,
    /// Node at the other end
    pub remote_node: String,
    /// Capacity of the interface
    pub capacity: Bandwidth,
    /// Traffic on the interface
    pub traffic: Bandwidth,
    /// Reserved bandwidth on the interface
    pub reserved_bandwidth: Bandwidth,
    /// `traffic / capacity`
    pub utilization: f64,
}

/// Result of a single scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// The failures that were applied
    pub failures: Vec<FailureScenario>,
    /// Summary of the simulation pass
    pub summary: SimulationSummary,
    /// All demands that could not be routed
    pub unrouted_demands: Vec<UnroutedDemand>,
    /// All LSPs that could not be routed
    pub unrouted_lsps: Vec<UnroutedLsp>,
    /// The non-failed interfaces with the highest utilization, in descending order.
    pub hottest_interfaces: Vec<InterfaceLoad>,
}

impl ScenarioReport {
    /// Generate the report from a simulated model.
    pub fn new(model: &Model, failures: Vec<FailureScenario>) -> Result<Self, Error> {
        let unrouted_demands = model
            .get_unrouted_demands()
            .into_iter()
            .map(|d| -> Result<_, NetworkError> {
                Ok(UnroutedDemand {
                    source: model.get_node_name(d.source())?.to_string(),
                    dest: model.get_node_name(d.dest())?.to_string(),
                    name: d.name().to_string(),
                    magnitude: d.magnitude(),
                })
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        let unrouted_lsps = model
            .get_unrouted_lsps()
            .into_iter()
            .map(|l| -> Result<_, NetworkError> {
                Ok(UnroutedLsp {
                    source: model.get_node_name(l.source())?.to_string(),
                    dest: model.get_node_name(l.dest())?.to_string(),
                    name: l.name().to_string(),
                    setup_bandwidth: l.setup_bandwidth(),
                })
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        let mut loads = model
            .get_unfailed_interfaces()
            .into_iter()
            .filter_map(|i| i.utilization().map(|u| (i, u)))
            .map(|(i, utilization)| -> Result<_, NetworkError> {
                Ok(InterfaceLoad {
                    node: model.get_node_name(i.node())?.to_string(),
                    interface: i.name().to_string(),
                    remote_node: model.get_node_name(i.remote_node())?.to_string(),
                    capacity: i.capacity(),
                    traffic: i.traffic(),
                    reserved_bandwidth: i.reserved_bandwidth(),
                    utilization,
                })
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;
        loads.sort_by(|a, b| b.utilization.total_cmp(&a.utilization));
        loads.truncate(HOTTEST_INTERFACES);

        Ok(Self {
            failures,
            summary: model.simulation_summary(),
            unrouted_demands,
            unrouted_lsps,
            hottest_interfaces: loads,
        })
    }

    /// Total magnitude of all unrouted demands.
    pub fn lost_traffic(&self) -> Bandwidth {
        self.unrouted_demands.iter().map(|d| d.magnitude).sum()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for ScenarioReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.failures.is_empty() {
            writeln!(f, "Failures: none")?;
        } else {
            writeln!(f, "Failures: {}", self.failures.iter().join(", "))?;
        }
        let s = &self.summary;
        writeln!(
            f,
            "LSPs routed: {}/{}, demands routed: {}/{}, max utilization: {}",
            s.routed_lsps,
            s.routed_lsps + s.unrouted_lsps,
            s.routed_demands,
            s.routed_demands + s.unrouted_demands,
            s.max_utilization
                .map(|u| format!("{:.1}%", u * 100.0))
                .unwrap_or_else(|| "-".to_string())
        )?;
        if !self.unrouted_demands.is_empty() {
            writeln!(f, "Unrouted demands ({} lost):", self.lost_traffic())?;
            for d in self.unrouted_demands.iter() {
                writeln!(f, "    {} -> {} ({}): {}", d.source, d.dest, d.name, d.magnitude)?;
            }
        }
        if !self.unrouted_lsps.is_empty() {
            writeln!(f, "Unrouted LSPs:")?;
            for l in self.unrouted_lsps.iter() {
                writeln!(
                    f,
                    "    {} -> {} ({}): {}",
                    l.source, l.dest, l.name, l.setup_bandwidth
                )?;
            }
        }
        writeln!(f, "Hottest interfaces:")?;
        for i in self.hottest_interfaces.iter() {
            writeln!(
                f,
                "    {}:{} -> {}: {} / {} ({:.1}%)",
                i.node,
                i.interface,
                i.remote_node,
                i.traffic,
                i.capacity,
                i.utilization * 100.0
            )?;
        }
        Ok(())
    }
}

/// Apply all `failures` to a copy of `model`, run the simulation, and report the result.
pub fn run_scenario(model: &Model, failures: &[FailureScenario]) -> Result<ScenarioReport, Error> {
    let mut model = model.clone();
    for failure in failures {
        failure.apply(&mut model)?;
    }
    model.update_simulation()?;
    debug!(
        "Scenario [{}]: {} unrouted demands",
        failures.iter().join(", "),
        model.get_unrouted_demands().len()
    );
    ScenarioReport::new(&model, failures.to_vec())
}

/// All single failures of the model: every circuit (failed by its first interface), every node,
/// and every SRLG.
pub fn single_failure_scenarios(model: &Model) -> Result<Vec<FailureScenario>, Error> {
    let mut scenarios = Vec::new();
    for circuit in model.circuits() {
        let (a, _) = circuit.interfaces();
        if let Some(iface) = model.interface(a) {
            scenarios.push(FailureScenario::Interface {
                node: model.get_node_name(iface.node())?.to_string(),
                interface: iface.name().to_string(),
            });
        }
    }
    scenarios.extend(model.nodes().map(|n| FailureScenario::Node(n.name().to_string())));
    scenarios.extend(model.srlgs().map(|s| FailureScenario::Srlg(s.name().to_string())));
    Ok(scenarios)
}

/// Evaluate every scenario in `scenarios` on top of the `base` failures, in parallel. The reports
/// are returned in the order of `scenarios`.
pub fn sweep(
    model: &Model,
    base: &[FailureScenario],
    scenarios: &[FailureScenario],
) -> Result<Vec<ScenarioReport>, Error> {
    info!("Sweep over {} scenarios", scenarios.len());
    let mut reports: Vec<Result<ScenarioReport, Error>> = Vec::new();
    scenarios
        .par_iter()
        .map(|s| {
            let failures: Vec<FailureScenario> =
                base.iter().chain(std::iter::once(s)).cloned().collect();
            run_scenario(model, &failures)
        })
        .collect_into_vec(&mut reports);
    reports.into_iter().collect()
}

/// The scenario that loses the most traffic. Ties are broken by the highest utilization.
pub fn worst_case(reports: &[ScenarioReport]) -> Option<&ScenarioReport> {
    reports.iter().max_by(|a, b| {
        a.lost_traffic().total_cmp(&b.lost_traffic()).then_with(|| {
            let (ua, ub) = (
                a.summary.max_utilization.unwrap_or(0.0),
                b.summary.max_utilization.unwrap_or(0.0),
            );
            ua.total_cmp(&ub)
        })
    })
}
