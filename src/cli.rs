use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use enumset::EnumSet;
use serde::Deserialize;

use crate::{
    core::{
        contract::ContractTerms,
        fuel::Fuel,
        month::Month,
        plan::{ActivityPlan, PlanInputs},
        storage::StorageConfig,
    },
    prelude::*,
    quantity::energy::MegawattHours,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a monthly production plan and render the sales dashboard.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Print the built-in reference curves and emission factors.
    #[clap(name = "curves")]
    Curves,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Months with no production. Pass the bare flag to run all twelve.
    #[clap(
        long,
        env = "SHUTDOWN_MONTHS",
        value_delimiter = ',',
        num_args = 0..,
        default_value = "jul"
    )]
    pub shutdown: Vec<Month>,

    /// Waste heat produced per active day, in MWh.
    #[clap(
        long = "daily-output",
        env = "DAILY_OUTPUT_MWH",
        default_value = "7.5",
        value_parser = parse_daily_output
    )]
    pub daily_output: MegawattHours,

    #[clap(flatten)]
    pub contract: ContractArgs,

    #[clap(flatten)]
    pub storage: StorageArgs,

    /// Fuel the delivered heat displaces in the network.
    #[clap(long, env = "DISPLACED_FUEL", value_enum, default_value = "natural-gas")]
    pub fuel: Fuel,

    /// Load the whole input set from a TOML file instead of the flags above.
    #[clap(long, env = "PLAN_INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Print the evaluation as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn inputs(&self) -> Result<PlanInputs> {
        if let Some(path) = &self.input {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            let file: PlanFile = toml::from_str(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display()))?;
            return file.into_inputs();
        }

        let shutdown: EnumSet<Month> = self.shutdown.iter().copied().collect();
        Ok(PlanInputs::builder()
            .active(ActivityPlan::from_shutdowns(shutdown))
            .daily_output(self.daily_output)
            .contract(self.contract.terms())
            .storage(self.storage.config())
            .fuel(self.fuel)
            .build())
    }
}

#[derive(Copy, Clone, Parser)]
pub struct ContractArgs {
    /// Contract kind; each reveals its own price parameters.
    #[clap(long, env = "CONTRACT_TYPE", value_enum, default_value = "fixed")]
    pub contract: ContractKind,

    /// Selling price under a fixed-price contract, in €/MWh.
    #[clap(
        long,
        env = "FIXED_PRICE_EUR",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(20..=100)
    )]
    pub fixed_price: u32,

    /// Annual capacity payment under a capacity + energy contract, in €.
    #[clap(
        long,
        env = "CAPACITY_PAYMENT_EUR",
        default_value_t = 10_000,
        value_parser = clap::value_parser!(u32).range(1_000..=50_000)
    )]
    pub capacity_payment: u32,

    /// Energy payment under a capacity + energy contract, in €/MWh.
    #[clap(
        long,
        env = "ENERGY_PRICE_EUR",
        default_value_t = 35,
        value_parser = clap::value_parser!(u32).range(20..=60)
    )]
    pub energy_price: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ContractKind {
    Fixed,
    Seasonal,
    CapacityEnergy,
    Unknown,
}

impl ContractArgs {
    pub fn terms(self) -> ContractTerms {
        match self.contract {
            ContractKind::Fixed => ContractTerms::FixedPrice { price: self.fixed_price.into() },
            ContractKind::Seasonal => ContractTerms::SeasonalPrice,
            ContractKind::CapacityEnergy => ContractTerms::CapacityPlusEnergy {
                capacity_payment: self.capacity_payment.into(),
                energy_price: self.energy_price.into(),
            },
            ContractKind::Unknown => ContractTerms::Unknown,
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct StorageArgs {
    /// Disable the thermal store: shutdown months then deliver nothing.
    #[clap(long = "no-storage")]
    pub no_storage: bool,

    /// Thermal store capacity, in MWh.
    #[clap(
        long,
        env = "STORAGE_CAPACITY_MWH",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(0..=200)
    )]
    pub storage_capacity: u32,
}

impl StorageArgs {
    pub fn config(self) -> StorageConfig {
        StorageConfig { enabled: !self.no_storage, capacity: self.storage_capacity.into() }
    }
}

fn parse_daily_output(value: &str) -> Result<MegawattHours> {
    let rate: f64 = value.parse()?;
    ensure!(
        (1.0..=20.0).contains(&rate),
        "daily output must be between 1 and 20 MWh, got {rate}",
    );
    Ok(rate.into())
}

/// The flag set, as a TOML file. Same defaults as the flags.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlanFile {
    #[serde(default = "PlanFile::default_shutdown")]
    shutdown: Vec<Month>,

    #[serde(default = "PlanFile::default_daily_output")]
    daily_output: f64,

    #[serde(default)]
    contract: ContractTerms,

    #[serde(default)]
    storage: StorageConfig,

    #[serde(default)]
    fuel: Fuel,
}

impl PlanFile {
    fn default_shutdown() -> Vec<Month> {
        vec![Month::Jul]
    }

    const fn default_daily_output() -> f64 {
        7.5
    }

    /// Validate against the same ranges the flags enforce.
    pub fn into_inputs(self) -> Result<PlanInputs> {
        ensure!(
            (1.0..=20.0).contains(&self.daily_output),
            "daily output must be between 1 and 20 MWh, got {}",
            self.daily_output,
        );
        match self.contract {
            ContractTerms::FixedPrice { price } => {
                ensure!(
                    (20.0..=100.0).contains(&price.into_inner()),
                    "fixed price must be between 20 and 100 €/MWh, got {price}",
                );
            }
            ContractTerms::CapacityPlusEnergy { capacity_payment, energy_price } => {
                ensure!(
                    (1_000.0..=50_000.0).contains(&capacity_payment.into_inner()),
                    "capacity payment must be between 1 000 and 50 000 €, got {capacity_payment}",
                );
                ensure!(
                    (20.0..=60.0).contains(&energy_price.into_inner()),
                    "energy payment must be between 20 and 60 €/MWh, got {energy_price}",
                );
            }
            ContractTerms::SeasonalPrice | ContractTerms::Unknown => {}
        }
        ensure!(
            (0.0..=200.0).contains(&self.storage.capacity.into_inner()),
            "storage capacity must be between 0 and 200 MWh, got {}",
            self.storage.capacity,
        );

        let shutdown: EnumSet<Month> = self.shutdown.iter().copied().collect();
        Ok(PlanInputs::builder()
            .active(ActivityPlan::from_shutdowns(shutdown))
            .daily_output(MegawattHours::new(self.daily_output))
            .contract(self.contract)
            .storage(self.storage)
            .fuel(self.fuel)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{money::Euros, rate::EuroPerMegawattHour};

    fn plan_args(arguments: &[&str]) -> PlanArgs {
        let args =
            Args::try_parse_from(["varme", "plan"].iter().chain(arguments)).expect("parse failed");
        match args.command {
            Command::Plan(plan) => *plan,
            Command::Curves => panic!("expected the plan command"),
        }
    }

    #[test]
    fn test_defaults() {
        let inputs = plan_args(&[]).inputs().unwrap();
        assert!(!inputs.active.is_active(Month::Jul));
        assert!(inputs.active.is_active(Month::Jun));
        assert_eq!(inputs.daily_output, MegawattHours::new(7.5));
        assert_eq!(
            inputs.contract,
            ContractTerms::FixedPrice { price: EuroPerMegawattHour::new(50.0) },
        );
        assert!(inputs.storage.enabled);
        assert_eq!(inputs.storage.capacity, MegawattHours::new(50.0));
        assert_eq!(inputs.fuel, Fuel::NaturalGas);
    }

    #[test]
    fn test_shutdown_list() {
        let inputs = plan_args(&["--shutdown", "jul,aug"]).inputs().unwrap();
        assert!(!inputs.active.is_active(Month::Jul));
        assert!(!inputs.active.is_active(Month::Aug));
        assert!(inputs.active.is_active(Month::Sep));
    }

    #[test]
    fn test_bare_shutdown_flag_clears_the_stop() {
        let inputs = plan_args(&["--shutdown"]).inputs().unwrap();
        assert!(Month::ALL.iter().all(|month| inputs.active.is_active(*month)));
    }

    #[test]
    fn test_capacity_contract() {
        let inputs = plan_args(&[
            "--contract",
            "capacity-energy",
            "--capacity-payment",
            "20000",
            "--energy-price",
            "40",
        ])
        .inputs()
        .unwrap();
        assert_eq!(
            inputs.contract,
            ContractTerms::CapacityPlusEnergy {
                capacity_payment: Euros::new(20_000.0),
                energy_price: EuroPerMegawattHour::new(40.0),
            },
        );
    }

    #[test]
    fn test_no_storage() {
        let inputs = plan_args(&["--no-storage"]).inputs().unwrap();
        assert!(!inputs.storage.enabled);
    }

    #[test]
    fn test_out_of_range_daily_output_is_rejected() {
        assert!(Args::try_parse_from(["varme", "plan", "--daily-output", "25"]).is_err());
        assert!(Args::try_parse_from(["varme", "plan", "--daily-output", "0.5"]).is_err());
    }

    #[test]
    fn test_out_of_range_prices_are_rejected() {
        assert!(Args::try_parse_from(["varme", "plan", "--fixed-price", "15"]).is_err());
        assert!(Args::try_parse_from(["varme", "plan", "--storage-capacity", "500"]).is_err());
    }

    #[test]
    fn test_plan_file() {
        let file: PlanFile = toml::from_str(
            r#"
            shutdown = ["jul", "aug"]
            daily-output = 10.0
            fuel = "biomass"

            [contract]
            kind = "seasonal-price"

            [storage]
            enabled = true
            capacity = 80
            "#,
        )
        .unwrap();
        let inputs = file.into_inputs().unwrap();
        assert!(!inputs.active.is_active(Month::Aug));
        assert_eq!(inputs.daily_output, MegawattHours::new(10.0));
        assert_eq!(inputs.contract, ContractTerms::SeasonalPrice);
        assert_eq!(inputs.storage.capacity, MegawattHours::new(80.0));
        assert_eq!(inputs.fuel, Fuel::Biomass);
    }

    #[test]
    fn test_plan_file_defaults() {
        let file: PlanFile = toml::from_str("").unwrap();
        let inputs = file.into_inputs().unwrap();
        assert_eq!(inputs, PlanInputs::builder().build());
    }

    #[test]
    fn test_plan_file_range_check() {
        let file: PlanFile = toml::from_str("daily-output = 40.0").unwrap();
        assert!(file.into_inputs().is_err());

        let file: PlanFile =
            toml::from_str("[contract]\nkind = \"fixed-price\"\nprice = 10\n").unwrap();
        assert!(file.into_inputs().is_err());
    }
}
