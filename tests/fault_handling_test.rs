use capability_demo::core::faults::{self, FaultOutcome, MISMATCH_MESSAGE, MISSING_RESOURCE_PATH};
use capability_demo::utils::error::ErrorSeverity;
use capability_demo::{CapabilityRegistry, DemoError, DemoKind, DemoRunner, MemoryConsole};

#[test]
fn test_missing_file_is_caught_and_execution_continues() {
    let mut runner = DemoRunner::new(CapabilityRegistry::standard(), MemoryConsole::new());
    runner
        .run_all(&[DemoKind::Exceptions, DemoKind::FinalMethod])
        .unwrap();

    let console = runner.console();
    assert_eq!(console.lines(), ["After Catch Block", "Child Method Test"]);
    assert!(console
        .errors()
        .iter()
        .any(|line| line.contains(MISSING_RESOURCE_PATH)));
    assert!(console
        .errors()
        .iter()
        .any(|line| line.trim_start().starts_with("Caused by:")));
}

#[test]
fn test_open_resource_succeeds_for_existing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(faults::open_resource(file.path()).is_ok());

    let mut console = MemoryConsole::new();
    let outcome = faults::recover(&mut console, faults::open_resource(file.path())).unwrap();
    assert_eq!(outcome, FaultOutcome::Completed);
    assert!(console.errors().is_empty());
}

#[test]
fn test_throw_demo_is_unrecoverable() {
    let mut runner = DemoRunner::new(CapabilityRegistry::standard(), MemoryConsole::new());
    let err = runner.run(DemoKind::Throw).unwrap_err();

    assert_eq!(err.to_string(), MISMATCH_MESSAGE);
    assert!(!err.is_recoverable());
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert_ne!(err.severity().exit_code(), 0);
    assert!(runner.console().lines().is_empty());
}

#[test]
fn test_unknown_entity_selection_fails_before_output() {
    let mut runner = DemoRunner::new(CapabilityRegistry::standard(), MemoryConsole::new())
        .with_settings(capability_demo::InterfaceSettings {
            entities: vec!["cat".to_string(), "dragon".to_string()],
            repeat: 1,
        });

    let err = runner.run(DemoKind::Interface).unwrap_err();
    assert!(matches!(err, DemoError::UnknownEntity { ref name } if name == "dragon"));
    assert!(runner.console().lines().is_empty());
}
