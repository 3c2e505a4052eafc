use crate::app::{inheritance, servlets};
use crate::core::dispatch::Dispatcher;
use crate::core::faults;
use crate::core::registry::CapabilityRegistry;
use crate::core::{Console, DemoKind};
use crate::utils::error::Result;

/// What the interface demo dispatches and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSettings {
    pub entities: Vec<String>,
    pub repeat: usize,
}

impl Default for InterfaceSettings {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            repeat: 1,
        }
    }
}

/// Runs demos one after another. Demos share the console and nothing else.
pub struct DemoRunner<C: Console> {
    registry: CapabilityRegistry,
    settings: InterfaceSettings,
    console: C,
}

impl<C: Console> DemoRunner<C> {
    pub fn new(registry: CapabilityRegistry, console: C) -> Self {
        Self {
            registry,
            settings: InterfaceSettings::default(),
            console,
        }
    }

    pub fn with_settings(mut self, settings: InterfaceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self, demo: DemoKind) -> Result<()> {
        tracing::info!("▶️ Running {} demo", demo);

        match demo {
            DemoKind::Interface => {
                let mut dispatcher = Dispatcher::new(&mut self.console);
                let emitted = dispatcher.run_registry(
                    &self.registry,
                    &self.settings.entities,
                    self.settings.repeat,
                )?;
                tracing::debug!("Interface demo emitted {} lines", emitted);
            }
            DemoKind::FinalMethod => inheritance::run(&mut self.console)?,
            DemoKind::Abstract => servlets::run(&mut self.console)?,
            DemoKind::Exceptions => {
                let outcomes = faults::run_recoverable(&mut self.console)?;
                tracing::debug!("Exceptions demo outcomes: {:?}", outcomes);
            }
            DemoKind::Throw => faults::run_unrecoverable()?,
        }

        Ok(())
    }

    /// Stops at the first demo that fails.
    pub fn run_all(&mut self, demos: &[DemoKind]) -> Result<()> {
        for demo in demos {
            self.run(*demo)?;
        }
        tracing::info!("✅ Completed {} demo(s)", demos.len());
        Ok(())
    }
}
