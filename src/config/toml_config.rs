use crate::config::OUTPUT_FORMATS;
use crate::domain::model::ParamValue;
use crate::utils::error::{RpcError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
    /// 以參數名稱為鍵的預設參數值，`plan` 未給位置參數時使用
    pub defaults: Option<HashMap<String, ParamValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

fn placeholder_regex() -> Result<Regex> {
    Regex::new(r"\$\{([^}]+)\}").map_err(|e| RpcError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })
}

/// 找出替換後仍殘留的 `${VAR}`，即未設定的環境變數
fn unresolved_vars(value: &str) -> Result<Vec<String>> {
    let re = placeholder_regex()?;
    Ok(re
        .captures_iter(value)
        .map(|caps| caps[1].to_string())
        .collect())
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RpcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INFUSIONSOFT_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = placeholder_regex()?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;

        if let Some(defaults) = &self.defaults {
            for (name, value) in defaults {
                if let ParamValue::String(s) = value {
                    validate_non_empty_string(&format!("defaults.{}", name), s)?;
                    let unset = unresolved_vars(s)?;
                    if !unset.is_empty() {
                        return Err(RpcError::InvalidConfigValueError {
                            field: format!("defaults.{}", name),
                            value: s.clone(),
                            reason: format!(
                                "Environment variable(s) not set: {}",
                                unset.join(", ")
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
