//! Legal-regime configuration for the labor cost engine.
//!
//! Every calculator takes a [`LaborRegime`] by reference. The built-in
//! Korea 2025 bundle is available from [`LaborRegime::korea_2025`]; the same
//! bundle can be loaded from YAML files with [`ConfigLoader`].
//!
//! # Example
//!
//! ```no_run
//! use labor_cost_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/kr2025").unwrap();
//! println!("Loaded regime: {}", loader.regime().metadata.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BudgetSettings, InsuranceRates, LaborRegime, RegimeMetadata, Thresholds, TimeConstants,
    WageConstants,
};
