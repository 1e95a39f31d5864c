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

use approx::assert_relative_eq;
use maplit::btreeset;
use pretty_assertions::assert_eq;

use crate::{
    demand::{DemandPath, DEFAULT_DEMAND_NAME},
    input::{DemandSpec, InterfaceSpec, LspSpec, NodeSpec},
    model::Model,
    test::square,
    types::{CircuitId, NetworkError, MAX_COST},
    validate::{ValidationErrors, Violation},
};

#[test]
fn add_circuit() {
    let mut m = Model::new();
    assert_eq!(
        m.add_circuit(("A", "A-to-B", 1), ("B", "B-to-A", 2), 100.0, None),
        Ok(CircuitId(1))
    );
    assert_eq!(
        m.add_circuit(("B", "B-to-C", 1), ("C", "C-to-B", 1), 100.0, Some(10)),
        Ok(CircuitId(10))
    );
    assert_eq!(
        m.add_circuit(("C", "C-to-D", 1), ("D", "D-to-C", 1), 100.0, None),
        Ok(CircuitId(11))
    );
    assert!(!m.is_simulated());
    assert_eq!(m.num_nodes(), 4);
    assert_eq!(m.circuits().len(), 3);

    let ab = m.get_interface_object("A", "A-to-B").unwrap();
    let ba = m.get_interface_object("B", "B-to-A").unwrap();
    assert_eq!(ab.cost(), 1);
    assert_eq!(ba.cost(), 2);
    assert_eq!(ab.circuit_id(), Some(CircuitId(1)));
    assert_eq!(ab.remote_node(), m.get_node_id("B").unwrap());
    assert!(ab.rsvp_enabled());
    assert_eq!(ab.percent_reservable_bandwidth(), 100.0);
}

#[test]
fn add_circuit_errors() {
    let mut m = square();
    assert_eq!(
        m.add_circuit(("A", "A-to-B", 1), ("X", "X-to-A", 1), 100.0, None),
        Err(NetworkError::DuplicateInterface {
            node: "A".to_string(),
            interface: "A-to-B".to_string()
        })
    );
    assert_eq!(
        m.add_circuit(("A", "A-to-X", 1), ("X", "X-to-A", 1), -1.0, None),
        Err(NetworkError::InvalidBandwidth(-1.0))
    );
    assert_eq!(
        m.add_circuit(("A", "A-to-X", MAX_COST + 1), ("X", "X-to-A", 1), 100.0, None),
        Err(NetworkError::InvalidCost(MAX_COST + 1))
    );
    assert!(m.get_node_id("X").is_err());
    assert_eq!(m.interfaces().count(), 10);
}

#[test]
fn lookups() {
    let m = square();
    let a = m.get_node_id("A").unwrap();
    assert_eq!(m.get_node_name(a), Ok("A"));
    assert_eq!(m.node(a).unwrap().name(), "A");
    assert_eq!(m.get_node_object("A").unwrap().id(), a);
    assert!(m.get_node_name(100.into()).is_err());

    let ifaces = m.get_interface_objects_from_nodes("A", "B").unwrap();
    assert_eq!(ifaces.len(), 1);
    assert_eq!(ifaces[0].name(), "A-to-B");
    assert_eq!(ifaces[0].capacity(), 100.0);
    assert_eq!(
        m.get_interface_objects_from_nodes("A", "D"),
        Err(NetworkError::LinkNotFound("A".to_string(), "D".to_string()))
    );

    let mut names: Vec<&str> = m
        .get_node_interfaces("B")
        .unwrap()
        .into_iter()
        .map(|i| i.name())
        .collect();
    names.sort();
    assert_eq!(names, vec!["B-to-A", "B-to-C", "B-to-D"]);

    assert_eq!(m.get_remote_interface("A", "A-to-B").unwrap().name(), "B-to-A");
    let circuit = m.get_circuit_object_from_interface("C", "C-to-D").unwrap();
    assert_eq!(m.get_circuit(circuit.id()), Some(circuit));
    let (x, y) = circuit.interfaces();
    let mut names = vec![m.interface(x).unwrap().name(), m.interface(y).unwrap().name()];
    names.sort();
    assert_eq!(names, vec!["C-to-D", "D-to-C"]);
    assert!(!circuit.is_failed(&m));
}

#[test]
fn orphan_nodes() {
    let mut m = square();
    assert!(m.get_orphan_nodes().is_empty());
    m.add_node("Z").unwrap();
    assert_eq!(
        m.add_node("Z"),
        Err(NetworkError::DuplicateNode("Z".to_string()))
    );
    assert_eq!(m.is_node_an_orphan("Z"), Ok(true));
    assert_eq!(m.is_node_an_orphan("A"), Ok(false));
    let orphans: Vec<&str> = m.get_orphan_nodes().into_iter().map(|n| n.name()).collect();
    assert_eq!(orphans, vec!["Z"]);

    m.set_node_coordinates("Z", 47.4, 8.5).unwrap();
    assert_eq!(m.get_node_object("Z").unwrap().coordinates(), Some((47.4, 8.5)));
}

#[test]
fn demands() {
    let mut m = square();
    m.add_demand("A", "D", 10.0, None).unwrap();
    m.add_demand("A", "D", 20.0, Some("video")).unwrap();
    m.add_demand("B", "D", 30.0, None).unwrap();

    assert_eq!(
        m.add_demand("A", "D", 5.0, None),
        Err(NetworkError::DuplicateDemand {
            src: "A".to_string(),
            dst: "D".to_string(),
            name: DEFAULT_DEMAND_NAME.to_string()
        })
    );
    assert_eq!(
        m.add_demand("A", "D", -5.0, Some("bad")),
        Err(NetworkError::InvalidBandwidth(-5.0))
    );
    assert_eq!(
        m.add_demand("A", "X", 5.0, None),
        Err(NetworkError::NodeNotFound("X".to_string()))
    );

    let d = m.get_demand_object("A", "D", None).unwrap();
    assert_eq!(d.name(), "none");
    assert_eq!(d.magnitude(), 10.0);
    assert_eq!(d.path(), &DemandPath::Unrouted);
    assert_eq!(m.get_demand_object("A", "D", Some("video")).unwrap().magnitude(), 20.0);

    assert_eq!(m.get_demand_objects_source_node("A").unwrap().len(), 2);
    assert_eq!(m.get_demand_objects_dest_node("D").unwrap().len(), 3);
    assert!(m.get_demand_objects_dest_node("A").unwrap().is_empty());
    assert_eq!(m.get_unrouted_demands().len(), 3);

    let removed = m.remove_demand("A", "D", Some("video")).unwrap();
    assert_eq!(removed.magnitude(), 20.0);
    assert!(matches!(
        m.get_demand_object("A", "D", Some("video")),
        Err(NetworkError::DemandNotFound { .. })
    ));
    assert_eq!(m.demands().count(), 2);
}

#[test]
fn lsps() {
    let mut m = square();
    m.add_rsvp_lsp("A", "D", "lsp1", None).unwrap();
    m.add_rsvp_lsp("A", "D", "lsp2", Some(20.0)).unwrap();
    m.add_rsvp_lsp("D", "A", "lsp1", None).unwrap();

    assert_eq!(
        m.add_rsvp_lsp("A", "D", "lsp1", None),
        Err(NetworkError::DuplicateLsp {
            src: "A".to_string(),
            dst: "D".to_string(),
            name: "lsp1".to_string()
        })
    );
    assert_eq!(
        m.add_rsvp_lsp("A", "D", "lsp3", Some(-1.0)),
        Err(NetworkError::InvalidBandwidth(-1.0))
    );

    let lsp = m.get_rsvp_lsp("A", "D", "lsp2").unwrap();
    assert!(!lsp.is_auto_bandwidth());
    assert_eq!(lsp.configured_setup_bandwidth(), Some(20.0));
    assert_eq!(lsp.name(), "lsp2");
    assert!(!lsp.is_routed());

    let group: Vec<&str> = m
        .get_parallel_lsp_group("A", "D")
        .unwrap()
        .into_iter()
        .map(|l| l.name())
        .collect();
    assert_eq!(group, vec!["lsp1", "lsp2"]);
    assert_eq!(m.get_unrouted_lsps().len(), 3);

    m.remove_rsvp_lsp("A", "D", "lsp1").unwrap();
    assert!(matches!(
        m.remove_rsvp_lsp("A", "D", "lsp1"),
        Err(NetworkError::LspNotFound { .. })
    ));
    assert_eq!(m.lsps().count(), 2);
}

#[test]
fn from_specs() {
    let m = Model::from_specs(
        [
            NodeSpec::new("A").coordinates(47.4, 8.5),
            NodeSpec {
                srlgs: vec!["site".to_string()],
                ..NodeSpec::new("B")
            },
            NodeSpec::new("E"),
        ],
        [
            InterfaceSpec::new("A", "B", "A-to-B", 10, 100.0),
            InterfaceSpec::new("A", "C", "A-to-C", 10, 100.0).srlg("conduit"),
            InterfaceSpec::new("C", "A", "C-to-A", 10, 100.0),
            InterfaceSpec::new("B", "A", "B-to-A", 10, 100.0),
            InterfaceSpec::new("B", "C", "B-to-C", 10, 100.0).circuit_id(7),
            InterfaceSpec::new("C", "B", "C-to-B", 10, 100.0).circuit_id(7),
        ],
        [DemandSpec::new("A", "C", 40.0).name("dmd_a_c")],
        [LspSpec::new("A", "C", "lsp_a_c")],
    )
    .unwrap();

    assert_eq!(m.num_nodes(), 4);
    assert_eq!(m.circuits().len(), 3);
    assert_eq!(m.get_orphan_nodes().len(), 1);
    assert_eq!(m.get_node_object("A").unwrap().coordinates(), Some((47.4, 8.5)));

    // circuit ids are inferred by pairing reverse interfaces
    let ab = m.get_interface_object("A", "A-to-B").unwrap().circuit_id();
    let ba = m.get_interface_object("B", "B-to-A").unwrap().circuit_id();
    let ac = m.get_interface_object("A", "A-to-C").unwrap().circuit_id();
    assert!(ab.is_some());
    assert_eq!(ab, ba);
    assert_ne!(ab, ac);
    assert_eq!(
        m.get_interface_object("B", "B-to-C").unwrap().circuit_id(),
        Some(CircuitId(7))
    );

    let site = m.get_srlg_object("site").unwrap();
    assert_eq!(site.nodes(), &btreeset! {m.get_node_id("B").unwrap()});
    assert_eq!(
        m.get_node_object("B").unwrap().srlgs(),
        &btreeset! {"site".to_string()}
    );
    let conduit = m.get_srlg_object("conduit").unwrap();
    assert_eq!(conduit.circuits().len(), 1);
    assert!(conduit.circuits().contains(&ac.unwrap()));

    assert!(m.get_demand_object("A", "C", Some("dmd_a_c")).is_ok());
    assert!(m.get_rsvp_lsp("A", "C", "lsp_a_c").unwrap().is_auto_bandwidth());
    assert!(!m.is_simulated());
}

#[test]
fn from_specs_reports_all_violations() {
    let r = Model::from_specs(
        [NodeSpec::new("X"), NodeSpec::new("X")],
        [InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0).srlg("s1")],
        [],
        [],
    );
    let violations = match r {
        Err(NetworkError::Validation(ValidationErrors(v))) => v,
        r => panic!("unexpected result: {r:?}"),
    };
    assert_eq!(violations.len(), 2);
    assert!(violations.contains(&Violation::DuplicateNode("X".to_string())));
    assert!(violations.contains(&Violation::UnpairedInterface {
        node: "A".to_string(),
        interface: "A-to-B".to_string()
    }));
}

#[test]
fn interface_utilization() {
    let mut m = square();
    m.add_demand("A", "B", 25.0, None).unwrap();
    m.update_simulation().unwrap();

    let ab = m.get_interface_object("A", "A-to-B").unwrap();
    assert_relative_eq!(ab.utilization().unwrap(), 0.25);
    assert_relative_eq!(ab.reservable_bandwidth(), 75.0);
    assert_relative_eq!(ab.max_reservable_bandwidth(), 100.0);
    let ba = m.get_interface_object("B", "B-to-A").unwrap();
    assert_relative_eq!(ba.utilization().unwrap(), 0.0);
}
