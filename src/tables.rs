use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{
        benchmark::Benchmark,
        contract::{ContractTerms, SEASONAL_REFERENCE_PRICES},
        demand::NETWORK_DEMAND,
        evaluation::{AnnualSummary, Evaluation},
        fuel::Fuel,
        month::Month,
    },
    quantity::{energy::MegawattHours, rate::EuroPerMegawattHour},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_plan_table(evaluation: &Evaluation) -> Table {
    let median_price = evaluation
        .months
        .iter()
        .map(|row| row.price)
        .sorted()
        .nth(6)
        .unwrap_or(EuroPerMegawattHour::ZERO);

    let mut table = new_table();
    table.set_header(vec![
        "Month",
        "Production",
        "Delivered",
        "DH demand",
        "Price",
        "Revenue",
    ]);
    for row in evaluation.months.iter() {
        let month = if row.production == MegawattHours::ZERO {
            Cell::new(row.month).add_attribute(Attribute::Dim)
        } else {
            Cell::new(row.month)
        };
        let delivered = Cell::new(row.delivered).set_alignment(CellAlignment::Right).fg(
            if row.draws_from_storage() {
                Color::Cyan
            } else {
                Color::Reset
            },
        );
        table.add_row(vec![
            month,
            Cell::new(row.production).set_alignment(CellAlignment::Right),
            delivered,
            Cell::new(row.demand_reference)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(row.price).set_alignment(CellAlignment::Right).fg(
                if row.price >= median_price && row.price > EuroPerMegawattHour::ZERO {
                    Color::Green
                } else {
                    Color::Reset
                },
            ),
            Cell::new(row.revenue).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &AnnualSummary) -> Table {
    let mut table = new_table();
    table
        .set_header(vec!["Annual revenue", "CO₂ avoided", "Displaced fuel"])
        .add_row(vec![
            Cell::new(summary.annual_revenue).fg(Color::Green),
            Cell::new(summary.co2_avoided),
            Cell::new(format!("{} ({})", summary.displaced_fuel, summary.emission_factor)),
        ]);
    table
}

pub fn build_benchmark_table(benchmarks: &[Benchmark; 3], live: ContractTerms) -> Table {
    let live_row = match live {
        ContractTerms::FixedPrice { .. } => Some(0),
        ContractTerms::SeasonalPrice => Some(1),
        ContractTerms::CapacityPlusEnergy { .. } => Some(2),
        ContractTerms::Unknown => None,
    };

    let mut table = new_table();
    table.set_header(vec!["Contract", "Reference terms", "Simulated annual revenue"]);
    for (index, benchmark) in benchmarks.iter().enumerate() {
        let mut name = Cell::new(benchmark.contract);
        if live_row == Some(index) {
            name = name.add_attribute(Attribute::Bold).fg(Color::Green);
        }
        table.add_row(vec![
            name,
            Cell::new(benchmark.terms).add_attribute(Attribute::Dim),
            Cell::new(benchmark.revenue).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// The built-in reference data, for the `curves` command.
pub fn build_reference_curves_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Seasonal price", "DH demand"]);
    for month in Month::ALL {
        table.add_row(vec![
            Cell::new(month),
            Cell::new(SEASONAL_REFERENCE_PRICES[month]).set_alignment(CellAlignment::Right),
            Cell::new(NETWORK_DEMAND[month]).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_fuel_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Displaced fuel", "Emission factor"]);
    for fuel in Fuel::ALL {
        table.add_row(vec![
            Cell::new(fuel),
            Cell::new(fuel.emission_factor()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
