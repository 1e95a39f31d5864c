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

use crate::{
    model::Model,
    types::{Bandwidth, InterfaceId},
};

/// Convert a list of paths into interface names, for readable assertions.
fn paths_names(paths: &[Vec<InterfaceId>], model: &Model) -> Vec<Vec<String>> {
    paths.iter().map(|p| path_names(p, model)).collect()
}

fn path_names(path: &[InterfaceId], model: &Model) -> Vec<String> {
    path.iter()
        .map(|i| {
            model
                .interface(*i)
                .map(|i| i.name().to_string())
                .unwrap_or_else(|| "?".to_string())
        })
        .collect()
}

/// Compare a list of paths (as interface ids) to the expected interface names.
macro_rules! assert_paths {
    ($model: expr, $paths: expr, []) => {
        pretty_assertions::assert_eq!(
            crate::test::paths_names(&$paths, &$model),
            Vec::<Vec<String>>::new()
        )
    };
    ($model: expr, $paths: expr, [$([$($exp:expr),*]),+ $(,)?]) => {
        pretty_assertions::assert_eq!(
            crate::test::paths_names(&$paths, &$model),
            vec![$(vec![$($exp.to_string()),*]),+]
        )
    };
}

/// Reserved bandwidth of `node:interface`.
fn reserved(model: &Model, node: &str, interface: &str) -> Bandwidth {
    model
        .get_interface_object(node, interface)
        .unwrap()
        .reserved_bandwidth()
}

/// Traffic on `node:interface`.
fn traffic(model: &Model, node: &str, interface: &str) -> Bandwidth {
    model.get_interface_object(node, interface).unwrap().traffic()
}

/// Add a circuit between `a` and `b` with interfaces named `a-to-b` and `b-to-a`.
fn link(model: &mut Model, a: &str, b: &str, cost: u64, capacity: Bandwidth) {
    let (ab, ba) = (format!("{a}-to-{b}"), format!("{b}-to-{a}"));
    model
        .add_circuit((a, ab.as_str(), cost), (b, ba.as_str(), cost), capacity, None)
        .unwrap();
}

/// The square topology used throughout the tests. Each link is labelled with `cost (capacity)`.
///
/// ```text
///       4 (100)
///   A ----------- B
///   |           / |
/// 1 | (200)    /  | 2 (150)
///   |  10 (100)   |
///   C ----------- D
///       3 (150)
/// ```
fn square() -> Model {
    let mut m = Model::new();
    link(&mut m, "A", "B", 4, 100.0);
    link(&mut m, "A", "C", 1, 200.0);
    link(&mut m, "C", "B", 10, 100.0);
    link(&mut m, "B", "D", 2, 150.0);
    link(&mut m, "C", "D", 3, 150.0);
    m
}

/// A line of nodes, each link with cost 1 and the given capacity.
///
/// ```text
/// X -- Y -- Z
/// ```
fn line(nodes: &[&str], capacity: Bandwidth) -> Model {
    let mut m = Model::new();
    for w in nodes.windows(2) {
        link(&mut m, w[0], w[1], 1, capacity);
    }
    m
}

/// Two equal-cost paths between `A` and `D`, all links with cost 1 and capacity 100.
///
/// ```text
///     B
///    / \
///   A   D
///    \ /
///     C
/// ```
fn diamond() -> Model {
    let mut m = Model::new();
    link(&mut m, "A", "B", 1, 100.0);
    link(&mut m, "A", "C", 1, 100.0);
    link(&mut m, "B", "D", 1, 100.0);
    link(&mut m, "C", "D", 1, 100.0);
    m
}

mod test_model;
mod test_validate;
