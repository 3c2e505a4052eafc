use crate::core::registry::{CapabilityRegistry, RegistryEntry};
use crate::core::{Animal, Behavior, Console, Utterance};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;

impl Behavior {
    pub fn invoke(self, entity: &dyn Animal) -> String {
        match self {
            Behavior::Speak => entity.speak(),
            Behavior::Walk => entity.walk(),
        }
    }
}

/// Invokes the capability contract on any entity and surfaces the output.
pub struct Dispatcher<C: Console> {
    console: C,
}

impl<C: Console> Dispatcher<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn speak_then_walk(&mut self, entity: &dyn Animal) -> Result<()> {
        self.emit(None, entity)
    }

    pub fn dispatch_entry(&mut self, entry: &RegistryEntry) -> Result<()> {
        self.emit(Some(entry.name()), entry.entity())
    }

    /// Dispatches the selected entries `repeat` times and returns the number of lines emitted.
    pub fn run_registry<S: AsRef<str>>(
        &mut self,
        registry: &CapabilityRegistry,
        names: &[S],
        repeat: usize,
    ) -> Result<usize> {
        validate_positive_number("repeat", repeat, 1)?;
        let selected = registry.select(names)?;

        tracing::info!(
            "Dispatching {} entities x {} rounds",
            selected.len(),
            repeat
        );

        let mut emitted = 0;
        for round in 1..=repeat {
            tracing::debug!("Round {}/{}", round, repeat);
            for entry in &selected {
                self.dispatch_entry(entry)?;
                emitted += Behavior::ORDER.len();
            }
        }

        Ok(emitted)
    }

    fn emit(&mut self, name: Option<&str>, entity: &dyn Animal) -> Result<()> {
        for behavior in Behavior::ORDER {
            let text = behavior.invoke(entity);
            tracing::debug!(entity = name.unwrap_or("<anonymous>"), %behavior, "{}", text);
            self.console.utter(&Utterance::new(name, behavior, text))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;
    use crate::app::{Cat, Human};
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
    }

    impl Animal for Counting {
        fn speak(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("speak #{}", self.calls.get())
        }

        fn walk(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("walk #{}", self.calls.get())
        }
    }

    #[test]
    fn test_speak_runs_before_walk() {
        let probe = Counting {
            calls: Cell::new(0),
        };
        let mut dispatcher = Dispatcher::new(MemoryConsole::new());
        dispatcher.speak_then_walk(&probe).unwrap();

        assert_eq!(dispatcher.console().lines(), ["speak #1", "walk #2"]);
    }

    #[test]
    fn test_same_code_path_for_every_variant() {
        let entities: [&dyn Animal; 2] = [&Cat, &Human];
        let mut dispatcher = Dispatcher::new(MemoryConsole::new());

        for entity in entities {
            dispatcher.speak_then_walk(entity).unwrap();
        }

        let console = dispatcher.into_console();
        assert_eq!(
            console.lines(),
            [
                "Meow",
                "cat walks with four leg",
                "Human makes unnecesary noise",
                "human walks with 2 leg",
            ]
        );
        assert!(console.utterances().iter().all(|u| u.entity.is_none()));
    }

    #[test]
    fn test_run_registry_counts_lines() {
        let registry = CapabilityRegistry::standard();
        let mut dispatcher = Dispatcher::new(MemoryConsole::new());

        let emitted = dispatcher.run_registry(&registry, &["human"], 3).unwrap();
        assert_eq!(emitted, 6);
        assert_eq!(dispatcher.console().lines().len(), 6);
        assert_eq!(
            dispatcher.console().utterances()[0].entity.as_deref(),
            Some("human")
        );
    }

    #[test]
    fn test_run_registry_rejects_zero_repeat() {
        let registry = CapabilityRegistry::standard();
        let mut dispatcher = Dispatcher::new(MemoryConsole::new());

        assert!(dispatcher.run_registry::<&str>(&registry, &[], 0).is_err());
        assert!(dispatcher.console().lines().is_empty());
    }
}
