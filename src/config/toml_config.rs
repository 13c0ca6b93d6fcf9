use crate::core::{MenuProvider, ThaliRecord};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    pub receipt: Option<ReceiptConfig>,
    #[serde(default)]
    pub thalis: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptConfig {
    pub customer: Option<String>,
}

impl MenuConfig {
    /// 依副檔名載入菜單 (.json 或 TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(KitError::IoError)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::info!("📋 Loaded {} thalis from {}", config.thalis.len(), path.display());
        Ok(config)
    }

    /// 從 TOML 字串解析菜單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// JSON 可以是 thali 陣列，或帶有 `thalis` 欄位的物件
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Array(thalis) => Ok(Self {
                receipt: None,
                thalis,
            }),
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(KitError::ConfigError {
                message: format!("Expected a list of thalis or an object, got {}", other),
            }),
        }
    }

    /// 替換環境變數 (例如 ${CUSTOMER})，找不到時保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.thalis.is_empty() {
            return Err(KitError::ConfigError {
                message: "menu has no thalis".to_string(),
            });
        }

        for (index, thali) in self.thalis.iter().enumerate() {
            ThaliRecord::from_value(thali).map_err(|e| KitError::ConfigError {
                message: format!("thalis[{}]: {}", index, e),
            })?;
        }

        if let Some(customer) = self.customer_name() {
            validate_non_empty_string("receipt.customer", customer)?;
        }

        Ok(())
    }

    /// Thalis as one JSON list, the shape the catalog operations take.
    pub fn thalis_value(&self) -> Value {
        Value::Array(self.thalis.clone())
    }
}

impl MenuProvider for MenuConfig {
    fn thalis(&self) -> &[Value] {
        &self.thalis
    }

    fn customer_name(&self) -> Option<&str> {
        self.receipt.as_ref().and_then(|r| r.customer.as_deref())
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MENU_TOML: &str = r#"
[receipt]
customer = "shubham"

[[thalis]]
name = "Rajasthani Thali"
items = ["dal baati", "churma", "papad"]
price = 250
isVeg = true

[[thalis]]
name = "Punjabi Thali"
items = ["butter chicken", "naan"]
price = 350.5
isVeg = false
"#;

    #[test]
    fn test_parse_toml_menu() {
        let config = MenuConfig::from_toml_str(MENU_TOML).unwrap();

        assert_eq!(config.thalis.len(), 2);
        assert_eq!(config.thalis[0]["name"], "Rajasthani Thali");
        assert_eq!(config.thalis[1]["price"].as_f64(), Some(350.5));
        assert_eq!(config.customer_name(), Some("shubham"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("THALI_KIT_TEST_CUSTOMER", "Meera");

        let toml_content = r#"
[receipt]
customer = "${THALI_KIT_TEST_CUSTOMER}"

[[thalis]]
name = "Gujarati Thali"
items = ["dhokla"]
price = 200
isVeg = true
"#;
        let config = MenuConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.customer_name(), Some("Meera"));

        std::env::remove_var("THALI_KIT_TEST_CUSTOMER");
    }

    #[test]
    fn test_validation_rejects_bad_records() {
        let toml_content = r#"
[[thalis]]
name = "Broken Thali"
items = ["rice"]
price = "cheap"
isVeg = true
"#;
        let config = MenuConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("thalis[0]"));

        assert!(MenuConfig::default().validate().is_err());
    }

    #[test]
    fn test_json_menu_shapes() {
        let list = MenuConfig::from_json_str(
            r#"[{"name": "A", "items": [], "price": 100, "isVeg": true}]"#,
        )
        .unwrap();
        assert_eq!(list.thalis.len(), 1);
        assert_eq!(list.customer_name(), None);

        let object = MenuConfig::from_json_str(
            r#"{"receipt": {"customer": "Guddu"}, "thalis": [{"name": "B", "items": [], "price": 1, "isVeg": false}]}"#,
        )
        .unwrap();
        assert_eq!(object.customer_name(), Some("Guddu"));

        assert!(MenuConfig::from_json_str("42").is_err());
    }

    #[test]
    fn test_menu_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MENU_TOML.as_bytes()).unwrap();

        let config = MenuConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.thalis.len(), 2);
        assert_eq!(config.thalis_value().as_array().map(Vec::len), Some(2));
    }
}
