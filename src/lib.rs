#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::toml_config::CalcConfig;
pub use core::{
    age::AgeCalculator,
    clock::{FixedClock, SystemClock},
};
pub use domain::{model::Square, ports::{Clock, Shape}};
pub use utils::error::{CalcError, Result};
