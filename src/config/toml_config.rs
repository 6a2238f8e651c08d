use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_REFERENCE_YEAR: i32 = 1;
pub const MAX_REFERENCE_YEAR: i32 = 9999;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub age: AgeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeConfig {
    /// 固定的「今年」，未設定時使用系統時鐘
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
}

impl CalcConfig {
    /// 從檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn reference_year(&self) -> Option<i32> {
        self.age.reference_year
    }
}

impl Validate for CalcConfig {
    fn validate(&self) -> Result<()> {
        if let Some(year) = self.age.reference_year {
            validate_range(
                "age.reference_year",
                year,
                MIN_REFERENCE_YEAR,
                MAX_REFERENCE_YEAR,
            )?;
        }
        Ok(())
    }
}
