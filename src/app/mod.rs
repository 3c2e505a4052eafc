// Application layer: concrete implementations of the domain contracts used by the demos.

pub mod animals;
pub mod inheritance;
pub mod servlets;

pub use animals::{Cat, Human};
