use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Compute ages from birthdates and areas of shapes")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Age in years for a YYYY-MM-DD birthdate
    Age {
        birthdate: String,

        /// Use this year as "now" instead of the system clock
        #[arg(long, allow_negative_numbers = true)]
        reference_year: Option<i32>,

        /// Print -1 instead of failing when the birthdate has no year segment
        #[arg(long)]
        legacy_sentinel: bool,
    },

    /// Area of a square
    Area {
        #[arg(long, allow_negative_numbers = true)]
        side: f64,
    },
}
