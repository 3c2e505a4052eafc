use crate::domain::model::Utterance;
use crate::utils::error::Result;

/// Capability contract: every entity speaks and walks, with no default for either.
pub trait Animal {
    fn speak(&self) -> String;
    fn walk(&self) -> String;
}

/// Output sink for demo text.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn write_error(&mut self, line: &str) -> Result<()>;

    fn utter(&mut self, utterance: &Utterance) -> Result<()> {
        self.write_line(&utterance.text)
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        (**self).write_error(line)
    }

    fn utter(&mut self, utterance: &Utterance) -> Result<()> {
        (**self).utter(utterance)
    }
}
