use crate::config::cli::Command;
use crate::config::toml_config::{CalcConfig, MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR};
use crate::core::age::AgeCalculator;
use crate::domain::model::Square;
use crate::domain::ports::{Clock, Shape};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_range;

/// Runs one subcommand and returns the line to print.
pub fn run(command: Command, config: &CalcConfig) -> Result<String> {
    match command {
        Command::Age {
            birthdate,
            reference_year,
            legacy_sentinel,
        } => {
            if let Some(year) = reference_year {
                validate_range(
                    "--reference-year",
                    year,
                    MIN_REFERENCE_YEAR,
                    MAX_REFERENCE_YEAR,
                )?;
            }

            // 命令列參數優先於配置檔
            let age = match reference_year.or(config.reference_year()) {
                Some(year) => {
                    tracing::debug!("Using reference year {}", year);
                    let calculator = AgeCalculator::with_reference_year(year);
                    compute_age(&calculator, &birthdate, legacy_sentinel)?
                }
                None => compute_age(&AgeCalculator::new(), &birthdate, legacy_sentinel)?,
            };
            Ok(age.to_string())
        }
        Command::Area { side } => Ok(Square::new(side).calculate_area().to_string()),
    }
}

fn compute_age<C: Clock>(
    calculator: &AgeCalculator<C>,
    birthdate: &str,
    legacy_sentinel: bool,
) -> Result<i32> {
    if legacy_sentinel {
        calculator.get_age_or_sentinel(birthdate)
    } else {
        calculator.get_age(birthdate)
    }
}

/// 1 for bad input, 2 for configuration problems.
pub fn exit_code(error: &CalcError) -> i32 {
    if error.is_input_error() {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::CliConfig;
    use clap::Parser;

    fn command(args: &[&str]) -> Command {
        let argv = std::iter::once("small-calc").chain(args.iter().copied());
        CliConfig::try_parse_from(argv).unwrap().command
    }

    fn config_with_year(year: i32) -> CalcConfig {
        CalcConfig::from_toml_str(&format!("[age]\nreference_year = {}\n", year)).unwrap()
    }

    #[test]
    fn test_age_uses_config_reference_year() {
        let output = run(command(&["age", "2000-06-23"]), &config_with_year(2030)).unwrap();
        assert_eq!(output, "30");
    }

    #[test]
    fn test_cli_reference_year_overrides_config() {
        let output = run(
            command(&["age", "2000-06-23", "--reference-year", "2024"]),
            &config_with_year(2030),
        )
        .unwrap();
        assert_eq!(output, "24");
    }

    #[test]
    fn test_cli_reference_year_out_of_range() {
        for year in ["0", "10000", "-2"] {
            let err = run(
                command(&["age", "2000-06-23", "--reference-year", year]),
                &CalcConfig::default(),
            )
            .unwrap_err();

            assert!(matches!(
                err,
                CalcError::InvalidConfigValueError { ref field, .. } if field == "--reference-year"
            ));
            assert_eq!(exit_code(&err), 2);
        }
    }

    #[test]
    fn test_legacy_sentinel_prints_minus_one() {
        let config = config_with_year(2024);

        let output = run(command(&["age", "-", "--legacy-sentinel"]), &config).unwrap();
        assert_eq!(output, "-1");

        let err = run(command(&["age", "-"]), &config).unwrap_err();
        assert!(matches!(err, CalcError::MissingYear { .. }));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_invalid_birthdate_exit_code() {
        let err = run(command(&["age", "200O-06-23"]), &config_with_year(2024)).unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = CalcConfig::from_toml_str("[age").unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_area_command() {
        let output = run(command(&["area", "--side", "3"]), &CalcConfig::default()).unwrap();
        assert_eq!(output, "9");

        let output = run(command(&["area", "--side", "-2"]), &CalcConfig::default()).unwrap();
        assert_eq!(output, "4");
    }
}
