use anyhow::Result;
use capability_demo::app::{Cat, Human};
use capability_demo::{
    Animal, Behavior, CapabilityRegistry, DemoKind, DemoRunner, Dispatcher, MemoryConsole,
};

const CAT_LINES: [&str; 2] = ["Meow", "cat walks with four leg"];
const HUMAN_LINES: [&str; 2] = ["Human makes unnecesary noise", "human walks with 2 leg"];

#[test]
fn test_end_to_end_four_lines() -> Result<()> {
    let mut runner = DemoRunner::new(CapabilityRegistry::standard(), MemoryConsole::new());
    runner.run_all(&[DemoKind::Interface])?;

    let console = runner.into_console();
    let expected: Vec<&str> = CAT_LINES.iter().chain(HUMAN_LINES.iter()).copied().collect();
    assert_eq!(console.lines(), expected.as_slice());
    assert!(console.errors().is_empty());
    Ok(())
}

#[test]
fn test_each_variant_emits_speak_then_walk() -> Result<()> {
    let cases: [(Box<dyn Animal>, [&str; 2]); 2] =
        [(Box::new(Cat), CAT_LINES), (Box::new(Human), HUMAN_LINES)];

    for (entity, expected) in cases {
        let mut dispatcher = Dispatcher::new(MemoryConsole::new());
        dispatcher.speak_then_walk(entity.as_ref())?;

        let console = dispatcher.into_console();
        assert_eq!(console.lines(), expected);
        let behaviors: Vec<Behavior> = console.utterances().iter().map(|u| u.behavior).collect();
        assert_eq!(behaviors, [Behavior::Speak, Behavior::Walk]);
    }
    Ok(())
}

#[test]
fn test_dispatch_is_idempotent() -> Result<()> {
    let mut dispatcher = Dispatcher::new(MemoryConsole::new());
    let cat = Cat;

    dispatcher.speak_then_walk(&cat)?;
    let first = dispatcher.console().lines().to_vec();
    dispatcher.speak_then_walk(&cat)?;

    let lines = dispatcher.console().lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(&lines[..2], first.as_slice());
    assert_eq!(&lines[2..], first.as_slice());
    Ok(())
}

#[test]
fn test_rebinding_contract_reference_changes_only_output() -> Result<()> {
    let mut dispatcher = Dispatcher::new(MemoryConsole::new());

    let mut bound: &dyn Animal = &Cat;
    dispatcher.speak_then_walk(bound)?;
    bound = &Human;
    dispatcher.speak_then_walk(bound)?;

    let lines = dispatcher.console().lines();
    assert_eq!(&lines[..2], CAT_LINES);
    assert_eq!(&lines[2..], HUMAN_LINES);
    Ok(())
}

#[test]
fn test_registry_entries_tag_utterances() -> Result<()> {
    let registry = CapabilityRegistry::standard();
    let mut dispatcher = Dispatcher::new(MemoryConsole::new());
    let emitted = dispatcher.run_registry::<&str>(&registry, &[], 1)?;

    assert_eq!(emitted, 4);
    let names: Vec<Option<&str>> = dispatcher
        .console()
        .utterances()
        .iter()
        .map(|u| u.entity.as_deref())
        .collect();
    assert_eq!(
        names,
        [Some("cat"), Some("cat"), Some("human"), Some("human")]
    );
    Ok(())
}
