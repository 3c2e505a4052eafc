use crate::domain::ports::Animal;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> String {
        "Meow".to_string()
    }

    fn walk(&self) -> String {
        "cat walks with four leg".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Human;

impl Animal for Human {
    fn speak(&self) -> String {
        "Human makes unnecesary noise".to_string()
    }

    fn walk(&self) -> String {
        "human walks with 2 leg".to_string()
    }
}
