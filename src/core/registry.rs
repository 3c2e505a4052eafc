use crate::app::{Cat, Human};
use crate::core::Animal;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::validate_non_empty_string;

pub struct RegistryEntry {
    name: String,
    entity: Box<dyn Animal>,
}

impl RegistryEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity(&self) -> &dyn Animal {
        self.entity.as_ref()
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Named entities in registration order.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    entries: Vec<RegistryEntry>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `cat` then `human`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.entries.push(RegistryEntry {
            name: "cat".to_string(),
            entity: Box::new(Cat),
        });
        registry.entries.push(RegistryEntry {
            name: "human".to_string(),
            entity: Box::new(Human),
        });
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, entity: Box<dyn Animal>) -> Result<()> {
        let name = name.into();
        validate_non_empty_string("entity name", &name)?;

        if self.get(&name).is_some() {
            return Err(DemoError::DuplicateEntity { name });
        }

        tracing::debug!("Registered entity '{}'", name);
        self.entries.push(RegistryEntry { name, entity });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves names in the requested order. An empty selection means every entry.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&RegistryEntry>> {
        if names.is_empty() {
            return Ok(self.entries.iter().collect());
        }

        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name).ok_or_else(|| DemoError::UnknownEntity {
                    name: name.to_string(),
                })
            })
            .collect()
    }
}
