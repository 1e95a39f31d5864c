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

//! Scenarios on the square sample topology.

use pretty_assertions::assert_eq;
use test_log::test;
use trafficsim::types::NetworkError;

use crate::{
    scenario::{
        run_scenario, single_failure_scenarios, sweep, worst_case, FailureScenario,
        ScenarioReport, UnroutedDemand, HOTTEST_INTERFACES,
    },
    topology::SampleTopology,
    Error,
};

fn node(n: &str) -> FailureScenario {
    FailureScenario::Node(n.to_string())
}

fn hottest(report: &ScenarioReport) -> Vec<&str> {
    report
        .hottest_interfaces
        .iter()
        .map(|i| i.interface.as_str())
        .collect()
}

#[test]
fn baseline() {
    let model = SampleTopology::Square.build(0).unwrap();
    let report = run_scenario(&model, &[]).unwrap();

    assert_eq!(report.summary.routed_lsps, 3);
    assert_eq!(report.summary.unrouted_lsps, 0);
    assert_eq!(report.summary.routed_demands, 3);
    assert_eq!(report.summary.unrouted_demands, 0);
    assert_eq!(report.summary.max_utilization, Some(80.0 / 150.0));
    assert!(report.unrouted_demands.is_empty());
    assert_eq!(report.lost_traffic(), 0.0);

    assert_eq!(report.hottest_interfaces.len(), HOTTEST_INTERFACES);
    assert_eq!(hottest(&report)[..3], ["C-to-D", "D-to-C", "A-to-C"]);
    assert_eq!(report.hottest_interfaces[0].traffic, 80.0);
    // the LSPs reserve 80, the demands they carry fill up the rest
    assert_eq!(report.hottest_interfaces[0].reserved_bandwidth, 150.0);

    // the original model is left untouched
    assert!(!model.is_simulated());
}

#[test]
fn node_failure() {
    let model = SampleTopology::Square.build(0).unwrap();
    let report = run_scenario(&model, &[node("B")]).unwrap();

    assert_eq!(report.failures, vec![node("B")]);
    assert_eq!(report.summary.failed_nodes, 1);
    assert_eq!(
        report.unrouted_demands,
        vec![UnroutedDemand {
            source: "B".to_string(),
            dest: "C".to_string(),
            name: "none".to_string(),
            magnitude: 40.0
        }]
    );
    assert_eq!(report.lost_traffic(), 40.0);
    assert!(report.unrouted_lsps.is_empty());

    let text = report.to_string();
    assert!(text.contains("Failures: node B"));
    assert!(text.contains("B -> C (none): 40"));
}

#[test]
fn srlg_failure() {
    let model = SampleTopology::Square.build(0).unwrap();
    let report = run_scenario(&model, &[FailureScenario::Srlg("conduit".to_string())]).unwrap();

    assert_eq!(report.summary.failed_srlgs, 1);
    assert_eq!(report.summary.failed_interfaces, 4);
    assert!(report.unrouted_demands.is_empty());
    assert!(report.unrouted_lsps.is_empty());
    assert_eq!(hottest(&report)[0], "A-to-B");
    assert_eq!(report.summary.max_utilization, Some(0.8));
}

#[test]
fn interface_failure() {
    let model = SampleTopology::Square.build(0).unwrap();
    let failure = FailureScenario::parse_interface("D:D-to-C").unwrap();
    let report = run_scenario(&model, &[failure]).unwrap();
    assert_eq!(report.summary.failed_interfaces, 2);
    assert!(report.unrouted_demands.is_empty());
    assert!(!hottest(&report).contains(&"C-to-D"));
}

#[test]
fn parse_interface() {
    assert_eq!(
        FailureScenario::parse_interface("A:A-to-B").unwrap(),
        FailureScenario::Interface {
            node: "A".to_string(),
            interface: "A-to-B".to_string()
        }
    );
    assert!(matches!(
        FailureScenario::parse_interface("A-to-B"),
        Err(Error::InvalidInterface(_))
    ));
    assert!(matches!(
        FailureScenario::parse_interface(":A-to-B"),
        Err(Error::InvalidInterface(_))
    ));
}

#[test]
fn unknown_element() {
    let model = SampleTopology::Square.build(0).unwrap();
    assert!(matches!(
        run_scenario(&model, &[node("X")]),
        Err(Error::Network(NetworkError::NodeNotFound(_)))
    ));
    assert!(matches!(
        run_scenario(&model, &[FailureScenario::Srlg("X".to_string())]),
        Err(Error::Network(NetworkError::SrlgNotFound(_)))
    ));
}

#[test]
fn single_failures() {
    let model = SampleTopology::Square.build(0).unwrap();
    let scenarios = single_failure_scenarios(&model).unwrap();
    assert_eq!(scenarios.len(), 10);
    assert_eq!(
        scenarios[0],
        FailureScenario::Interface {
            node: "A".to_string(),
            interface: "A-to-B".to_string()
        }
    );
    assert_eq!(scenarios[5..9], [node("A"), node("B"), node("C"), node("D")]);
    assert_eq!(scenarios[9], FailureScenario::Srlg("conduit".to_string()));
}

#[test]
fn sweep_matches_sequential() {
    let model = SampleTopology::Square.build(0).unwrap();
    let scenarios = single_failure_scenarios(&model).unwrap();
    let reports = sweep(&model, &[], &scenarios).unwrap();

    assert_eq!(reports.len(), scenarios.len());
    for (s, r) in scenarios.iter().zip(reports.iter()) {
        assert_eq!(r, &run_scenario(&model, std::slice::from_ref(s)).unwrap());
    }

    let worst = worst_case(&reports).unwrap();
    assert_eq!(worst.failures, vec![node("D")]);
    assert_eq!(worst.lost_traffic(), 140.0);
    assert_eq!(worst.unrouted_lsps.len(), 3);
}

#[test]
fn sweep_on_top_of_failures() {
    let model = SampleTopology::Square.build(0).unwrap();
    let reports = sweep(&model, &[node("B")], &[node("C")]).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].failures, vec![node("B"), node("C")]);
    assert_eq!(reports[0].summary.failed_nodes, 2);
    // A and D are disconnected
    assert_eq!(reports[0].lost_traffic(), 180.0);
}

#[test]
fn json() {
    let model = SampleTopology::Square.build(0).unwrap();
    let report = run_scenario(&model, &[node("A")]).unwrap();
    let json = report.to_json().unwrap();
    assert!(json.contains("\"hottest_interfaces\""));
    let parsed: ScenarioReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
