// Adapters layer: concrete implementations of the domain ports.

pub mod console;

pub use console::{MemoryConsole, StdConsole};
