mod chart;
mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};
use serde::Serialize;

use crate::{
    cli::{Args, Command, PlanArgs},
    core::{
        benchmark::{Benchmark, against_references},
        demand::NETWORK_DEMAND,
        evaluation::{Evaluation, evaluate},
    },
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Plan(args) => plan(&args)?,
        Command::Curves => curves(),
    }

    info!("done!");
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    evaluation: &'a Evaluation,
    benchmarks: &'a [Benchmark; 3],
}

#[instrument(skip_all)]
fn plan(args: &PlanArgs) -> Result {
    let inputs = args.inputs()?;
    let evaluation = evaluate(&inputs);
    let benchmarks = against_references(&evaluation.delivered());
    info!(
        contract = inputs.contract.label(),
        annual_revenue = %evaluation.summary.annual_revenue,
        co2_avoided = %evaluation.summary.co2_avoided,
        "evaluated",
    );

    if args.json {
        let report = Report { evaluation: &evaluation, benchmarks: &benchmarks };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", tables::build_plan_table(&evaluation));
    println!("{}", tables::build_summary_table(&evaluation.summary));
    println!();
    println!(
        "{}",
        chart::render(&[
            ("Production", &evaluation.production()),
            ("Delivered", &evaluation.delivered()),
            ("DH demand", &NETWORK_DEMAND),
        ]),
    );
    println!();
    println!("{}", tables::build_benchmark_table(&benchmarks, inputs.contract));
    Ok(())
}

fn curves() {
    println!("{}", tables::build_reference_curves_table());
    println!("{}", tables::build_fuel_table());
}
