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

use std::fmt::Debug;

use pretty_assertions::assert_eq;

use crate::{
    input::{InterfaceSpec, NodeSpec},
    model::Model,
    test::{line, square},
    types::{CircuitId, NetworkError},
    validate::{ValidationErrors, Violation},
};

fn violations<T: Debug>(r: Result<T, NetworkError>) -> Vec<Violation> {
    match r.unwrap_err() {
        NetworkError::Validation(ValidationErrors(v)) => v,
        e => panic!("unexpected error: {e:?}"),
    }
}

fn unpaired(node: &str, interface: &str) -> Violation {
    Violation::UnpairedInterface {
        node: node.to_string(),
        interface: interface.to_string(),
    }
}

#[test]
fn valid_model() {
    let mut m = square();
    assert!(m.validate().is_ok());
    assert_eq!(m.circuits().len(), 5);
    for c in m.circuits() {
        let (a, b) = c.interfaces();
        assert_eq!(m.interface(a).unwrap().node(), m.interface(b).unwrap().remote_node());
        assert_eq!(c.other(a), Some(b));
        assert_eq!(c.other(b), Some(a));
    }
}

#[test]
fn unpaired_interface() {
    let r = Model::from_specs(
        [],
        [InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0)],
        [],
        [],
    );
    assert_eq!(violations(r), vec![unpaired("A", "A-to-B")]);
}

#[test]
fn unpaired_interface_rolls_back() {
    let mut m = line(&["A", "B"], 100.0);
    let r = m.add_network_interfaces_from_list([InterfaceSpec::new("A", "C", "A-to-C", 1, 100.0)]);
    assert_eq!(violations(r), vec![unpaired("A", "A-to-C")]);
    assert_eq!(m.interfaces().count(), 2);
    assert_eq!(m.num_nodes(), 2);
    assert!(m.get_interface_object("A", "A-to-C").is_err());
}

#[test]
fn mismatching_circuit_ids() {
    let r = Model::from_specs(
        [],
        [
            InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0).circuit_id(1),
            InterfaceSpec::new("B", "A", "B-to-A", 1, 100.0).circuit_id(2),
        ],
        [],
        [],
    );
    assert_eq!(
        violations(r),
        vec![unpaired("A", "A-to-B"), unpaired("B", "B-to-A")]
    );
}

#[test]
fn capacity_mismatch() {
    let r = Model::from_specs(
        [],
        [
            InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0),
            InterfaceSpec::new("B", "A", "B-to-A", 1, 50.0),
        ],
        [],
        [],
    );
    assert_eq!(
        violations(r),
        vec![Violation::CapacityMismatch {
            circuit: CircuitId(1),
            capacity_a: 100.0,
            capacity_b: 50.0
        }]
    );
}

#[test]
fn duplicate_node() {
    let r = Model::from_specs([NodeSpec::new("A"), NodeSpec::new("A")], [], [], []);
    assert_eq!(violations(r), vec![Violation::DuplicateNode("A".to_string())]);
}

#[test]
fn duplicate_interface() {
    let r = Model::from_specs(
        [],
        [
            InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0),
            InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0),
            InterfaceSpec::new("B", "A", "B-to-A", 1, 100.0),
        ],
        [],
        [],
    );
    assert_eq!(
        violations(r),
        vec![
            unpaired("A", "A-to-B"),
            Violation::DuplicateInterface {
                node: "A".to_string(),
                interface: "A-to-B".to_string()
            },
            Violation::ParallelCircuits {
                node: "A".to_string(),
                remote_node: "B".to_string(),
                count: 2
            },
        ]
    );
}

#[test]
fn parallel_circuits() {
    let mut m = line(&["A", "B"], 100.0);
    let r = m.add_circuit(("A", "A-to-B-2", 1), ("B", "B-to-A-2", 1), 100.0, None);
    assert_eq!(
        violations(r),
        vec![
            Violation::ParallelCircuits {
                node: "A".to_string(),
                remote_node: "B".to_string(),
                count: 2
            },
            Violation::ParallelCircuits {
                node: "B".to_string(),
                remote_node: "A".to_string(),
                count: 2
            },
        ]
    );
    assert_eq!(m.interfaces().count(), 2);
    assert_eq!(m.circuits().len(), 1);
}

#[test]
fn reservations_are_checked() {
    let mut m = line(&["A", "B"], 100.0);
    m.add_demand("A", "B", 100.0, None).unwrap();
    m.update_simulation().unwrap();

    // rounding errors are tolerated
    m.interfaces[0].reserved_bandwidth = 100.0 + 1e-9;
    assert!(m.validate().is_ok());

    m.interfaces[0].reserved_bandwidth = 150.0;
    assert_eq!(
        violations(m.validate()),
        vec![
            Violation::ReservedBandwidthTooHigh {
                node: "A".to_string(),
                interface: "A-to-B".to_string(),
                reserved: 150.0,
                limit: 100.0,
            },
            Violation::ReservedBandwidthSumMismatch {
                node: "A".to_string(),
                interface: "A-to-B".to_string(),
                reserved: 150.0,
                recorded: 100.0,
            },
        ]
    );
}

#[test]
fn reservation_limit_respects_percentage() {
    let mut m = Model::new();
    m.add_network_interfaces_from_list([
        InterfaceSpec::new("A", "B", "A-to-B", 1, 100.0).percent_reservable_bandwidth(50.0),
        InterfaceSpec::new("B", "A", "B-to-A", 1, 100.0).percent_reservable_bandwidth(50.0),
    ])
    .unwrap();
    m.add_demand("A", "B", 60.0, None).unwrap();
    m.update_simulation().unwrap();

    // only half of the capacity may be reserved
    m.interfaces[0].reserved_bandwidth = 60.0;
    m.ledger.clear();
    let v = violations(m.validate());
    assert!(v.contains(&Violation::ReservedBandwidthTooHigh {
        node: "A".to_string(),
        interface: "A-to-B".to_string(),
        reserved: 60.0,
        limit: 50.0,
    }));
}

#[test]
fn srlg_back_reference() {
    let mut m = square();
    m.add_node_to_srlg("C", "s1", true).unwrap();
    assert!(m.validate().is_ok());

    m.nodes[2].srlgs.clear();
    assert_eq!(
        violations(m.validate()),
        vec![Violation::SrlgNodeMissingBackReference {
            srlg: "s1".to_string(),
            node: "C".to_string()
        }]
    );
}

#[test]
fn display() {
    let errors = ValidationErrors(vec![
        unpaired("A", "A-to-B"),
        Violation::DuplicateNode("A".to_string()),
    ]);
    assert_eq!(
        errors.to_string(),
        "2 violation(s): interface A-to-B on A is not part of a circuit; node A exists multiple times"
    );
    assert_eq!(errors.len(), 2);
    assert!(!errors.is_empty());
}
