use crate::core::runner::InterfaceSettings;
use crate::core::DemoKind;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoPlan {
    pub plan: PlanSection,
    #[serde(default)]
    pub interface: Option<InterfaceSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSection {
    pub name: String,
    pub description: Option<String>,
    pub demos: Vec<DemoKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceSection {
    #[serde(default)]
    pub entities: Vec<String>,
    pub repeat: Option<usize>,
}

impl DemoPlan {
    /// 從 TOML 檔案載入計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        // 計畫檔讀取失敗視為設定錯誤
        let content = std::fs::read_to_string(path).map_err(|e| DemoError::ConfigError {
            message: format!("cannot read plan '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn repeat(&self) -> usize {
        self.interface
            .as_ref()
            .and_then(|section| section.repeat)
            .unwrap_or(1)
    }

    pub fn entities(&self) -> &[String] {
        self.interface
            .as_ref()
            .map(|section| section.entities.as_slice())
            .unwrap_or(&[])
    }

    pub fn interface_settings(&self) -> InterfaceSettings {
        InterfaceSettings {
            entities: self.entities().to_vec(),
            repeat: self.repeat(),
        }
    }
}

impl Validate for DemoPlan {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("plan.name", &self.plan.name)?;
        validate_non_empty_list("plan.demos", &self.plan.demos)?;
        validate_positive_number("interface.repeat", self.repeat(), 1)?;
        for entity in self.entities() {
            validate_non_empty_string("interface.entities", entity)?;
        }
        Ok(())
    }
}
