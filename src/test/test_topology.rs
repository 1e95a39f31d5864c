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

use maplit::btreeset;
use pretty_assertions::assert_eq;
use test_log::test;
use trafficsim::model::Model;

use crate::{scenario::run_scenario, topology::SampleTopology};

fn magnitudes(model: &Model) -> Vec<f64> {
    model.demands().map(|d| d.magnitude()).collect()
}

#[test]
fn square() {
    let model = SampleTopology::Square.build(0).unwrap();
    assert_eq!(model.num_nodes(), 4);
    assert_eq!(model.circuits().len(), 5);
    assert_eq!(model.demands().count(), 3);
    assert_eq!(model.lsps().count(), 3);
    let conduit = model.get_srlg_object("conduit").unwrap();
    let ac = model
        .get_interface_object("A", "A-to-C")
        .unwrap()
        .circuit_id()
        .unwrap();
    let cd = model
        .get_interface_object("C", "C-to-D")
        .unwrap()
        .circuit_id()
        .unwrap();
    assert_eq!(conduit.circuits(), &btreeset! {ac, cd});
}

#[test]
fn random_topologies_are_reproducible() {
    for topo in [SampleTopology::Ring, SampleTopology::Mesh] {
        let a = SampleTopology::build(&topo, 7).unwrap();
        let b = SampleTopology::build(&topo, 7).unwrap();
        let c = SampleTopology::build(&topo, 8).unwrap();
        assert_eq!(magnitudes(&a), magnitudes(&b));
        assert_ne!(magnitudes(&a), magnitudes(&c));
    }
}

#[test]
fn ring() {
    let model = SampleTopology::Ring.build(42).unwrap();
    assert_eq!(model.num_nodes(), 8);
    assert_eq!(model.circuits().len(), 8);
    assert_eq!(model.demands().count(), 56);
    assert_eq!(model.lsps().count(), 56);
    assert_eq!(model.get_srlg_object("west").unwrap().circuits().len(), 2);
    assert!(model.interfaces().all(|i| (1..5).contains(&i.cost())));

    let report = run_scenario(&model, &[]).unwrap();
    assert!(report.unrouted_demands.is_empty());
}

#[test]
fn mesh() {
    let model = SampleTopology::Mesh.build(42).unwrap();
    assert_eq!(model.num_nodes(), 6);
    assert_eq!(model.circuits().len(), 15);
    assert_eq!(model.demands().count(), 30);
    assert_eq!(model.lsps().count(), 60);

    let report = run_scenario(&model, &[]).unwrap();
    assert!(report.unrouted_demands.is_empty());
}
