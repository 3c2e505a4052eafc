use serde::{Deserialize, Serialize};
use std::fmt;

/// The two behaviors of the capability contract, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    Speak,
    Walk,
}

impl Behavior {
    pub const ORDER: [Behavior; 2] = [Behavior::Speak, Behavior::Walk];

    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Speak => "speak",
            Behavior::Walk => "walk",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observable output of a behavior call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub entity: Option<String>,
    pub behavior: Behavior,
    pub text: String,
}

impl Utterance {
    pub fn new(entity: Option<&str>, behavior: Behavior, text: String) -> Self {
        Self {
            entity: entity.map(str::to_string),
            behavior,
            text,
        }
    }
}

/// Classroom demos that can be selected from the CLI or a plan file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    /// Polymorphic dispatch over the capability contract
    Interface,
    /// Overridable behavior next to a fixed one
    FinalMethod,
    /// Abstract service contract with tagged variants
    Abstract,
    /// Recoverable faults caught at the call site
    Exceptions,
    /// Unrecoverable custom fault
    Throw,
}

impl DemoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DemoKind::Interface => "interface",
            DemoKind::FinalMethod => "final-method",
            DemoKind::Abstract => "abstract",
            DemoKind::Exceptions => "exceptions",
            DemoKind::Throw => "throw",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
