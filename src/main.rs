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

use clap::Parser;
use itertools::Itertools;

use capplan::{
    scenario::{run_scenario, single_failure_scenarios, sweep, worst_case, FailureScenario},
    topology::SampleTopology,
};

/// Simulate failures on a traffic-engineered network and report the impact on traffic.
#[derive(Debug, Parser)]
struct Cli {
    /// Sample topology to use.
    #[clap(long = "topo", short = 't', default_value = "square")]
    topo: SampleTopology,
    /// Fail a node. Can be given multiple times.
    #[clap(long = "fail-node", value_name = "NODE")]
    fail_node: Vec<String>,
    /// Fail an interface, together with its circuit. Can be given multiple times.
    #[clap(long = "fail-interface", value_name = "NODE:INTERFACE")]
    fail_interface: Vec<String>,
    /// Fail a shared risk link group. Can be given multiple times.
    #[clap(long = "fail-srlg", value_name = "SRLG")]
    fail_srlg: Vec<String>,
    /// Additionally evaluate every single circuit, node and SRLG failure on top of the given
    /// failures, and report the worst case.
    #[clap(short, long)]
    sweep: bool,
    /// Print the reports as JSON.
    #[clap(short, long)]
    json: bool,
    /// Seed for generating random costs and demands.
    #[clap(long, default_value = "42")]
    seed: u64,
    /// Number of workers to use in parallel. If not specified, it will use all available workers.
    #[clap(short = 'T', long)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    let args = Cli::parse();

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let model = args.topo.build(args.seed)?;

    let mut failures: Vec<FailureScenario> = args
        .fail_node
        .iter()
        .map(|n| FailureScenario::Node(n.clone()))
        .collect();
    for i in args.fail_interface.iter() {
        failures.push(FailureScenario::parse_interface(i)?);
    }
    failures.extend(args.fail_srlg.iter().map(|s| FailureScenario::Srlg(s.clone())));

    let base = run_scenario(&model, &failures)?;

    if !args.sweep {
        if args.json {
            println!("{}", base.to_json()?);
        } else {
            println!("{base}");
        }
        return Ok(());
    }

    let scenarios = single_failure_scenarios(&model)?
        .into_iter()
        .filter(|s| !failures.contains(s))
        .collect_vec();
    let reports = sweep(&model, &failures, &scenarios)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("{base}");
    for report in reports.iter().filter(|r| r.lost_traffic() > 0.0) {
        println!(
            "{}: {} demands unrouted ({} lost)",
            report.failures.iter().join(", "),
            report.unrouted_demands.len(),
            report.lost_traffic()
        );
    }
    if let Some(worst) = worst_case(&reports) {
        println!("\nWorst case:\n{worst}");
    }

    Ok(())
}
