pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryConsole, StdConsole};
pub use config::DemoPlan;
pub use crate::core::{
    dispatch::Dispatcher,
    registry::{CapabilityRegistry, RegistryEntry},
    runner::{DemoRunner, InterfaceSettings},
};
pub use domain::model::{Behavior, DemoKind, OutputFormat, Utterance};
pub use domain::ports::{Animal, Console};
pub use utils::error::{DemoError, Result};
