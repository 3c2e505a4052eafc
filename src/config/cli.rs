use crate::config::plan::DemoPlan;
use crate::core::runner::InterfaceSettings;
use crate::core::{DemoKind, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_path, validate_positive_number,
    Validate,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "capability-demo")]
#[command(about = "Classroom demos of capability dispatch and fault handling")]
pub struct CliConfig {
    #[arg(long, value_enum, value_delimiter = ',', default_value = "interface")]
    pub demo: Vec<DemoKind>,

    #[arg(long, value_delimiter = ',', help = "Entities for the interface demo (default: all)")]
    pub entities: Vec<String>,

    #[arg(long, default_value = "1")]
    pub repeat: usize,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "TOML demo plan; overrides --demo, --entities and --repeat")]
    pub plan: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Demo selection from the plan file when given, otherwise from the flags.
    pub fn resolve(&self) -> Result<(Vec<DemoKind>, InterfaceSettings)> {
        match &self.plan {
            Some(path) => {
                let plan = DemoPlan::from_file(path)?;
                plan.validate()?;
                tracing::info!("📄 Loaded plan '{}' from {}", plan.plan.name, path.display());
                Ok((plan.plan.demos.clone(), plan.interface_settings()))
            }
            None => Ok((
                self.demo.clone(),
                InterfaceSettings {
                    entities: self.entities.clone(),
                    repeat: self.repeat,
                },
            )),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("demo", &self.demo)?;
        validate_positive_number("repeat", self.repeat, 1)?;
        for entity in &self.entities {
            validate_non_empty_string("entities", entity)?;
        }
        if let Some(path) = &self.plan {
            validate_path("plan", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
