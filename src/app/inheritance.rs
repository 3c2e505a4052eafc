//! Overridable behavior next to one that implementors cannot replace.
//!
//! `Inherited::describe` has a parent default that implementors may override.
//! `Fixed::describe_fixed` is blanket-implemented for every `Inherited` type, so a
//! second impl for a concrete type would conflict and fail to compile.

use crate::domain::ports::Console;
use crate::utils::error::Result;

pub const PARENT_TEXT: &str = "Parent Method Test";
pub const CHILD_TEXT: &str = "Child Method Test";

pub trait Inherited {
    fn describe(&self) -> String {
        PARENT_TEXT.to_string()
    }
}

pub trait Fixed {
    fn describe_fixed(&self) -> String;
}

impl<T: Inherited + ?Sized> Fixed for T {
    fn describe_fixed(&self) -> String {
        PARENT_TEXT.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BaseAnimal;

impl Inherited for BaseAnimal {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Person;

impl Inherited for Person {
    fn describe(&self) -> String {
        CHILD_TEXT.to_string()
    }
}

pub fn run<C: Console>(console: &mut C) -> Result<()> {
    let person = Person;
    tracing::debug!("Calling overridden behavior on Person");
    console.write_line(&person.describe())
}
