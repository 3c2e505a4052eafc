pub mod dispatch;
pub mod faults;
pub mod registry;
pub mod runner;

pub use crate::domain::model::{Behavior, DemoKind, OutputFormat, Utterance};
pub use crate::domain::ports::{Animal, Console};
pub use crate::utils::error::Result;
