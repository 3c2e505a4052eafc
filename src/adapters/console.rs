use crate::domain::model::{OutputFormat, Utterance};
use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Writes demo output to `out` (stdout by default) and fault reports to stderr.
#[derive(Debug)]
pub struct StdConsole<W: Write = io::Stdout> {
    format: OutputFormat,
    out: W,
}

impl StdConsole<io::Stdout> {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(format, io::stdout())
    }
}

impl<W: Write> StdConsole<W> {
    pub fn with_writer(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for StdConsole<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", line)?;
        Ok(())
    }

    fn utter(&mut self, utterance: &Utterance) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_line(&utterance.text),
            OutputFormat::Json => {
                let line = serde_json::to_string(utterance)?;
                self.write_line(&line)
            }
        }
    }
}

/// Collects everything in memory; used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Vec<String>,
    errors: Vec<String>,
    utterances: Vec<Utterance>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.errors.clear();
        self.utterances.clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        self.errors.push(line.to_string());
        Ok(())
    }

    fn utter(&mut self, utterance: &Utterance) -> Result<()> {
        self.utterances.push(utterance.clone());
        self.write_line(&utterance.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Cat;
    use crate::core::dispatch::Dispatcher;
    use crate::domain::model::Behavior;

    fn captured(console: StdConsole<Vec<u8>>) -> Vec<String> {
        String::from_utf8(console.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_json_format_emits_one_object_per_utterance() {
        let console = StdConsole::with_writer(OutputFormat::Json, Vec::new());
        let mut dispatcher = Dispatcher::new(console);
        dispatcher.speak_then_walk(&Cat).unwrap();

        let lines = captured(dispatcher.into_console());
        assert_eq!(lines.len(), 2);

        let speak: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(speak, serde_json::json!({"behavior": "speak", "text": "Meow"}));
        let walk: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(
            walk,
            serde_json::json!({"behavior": "walk", "text": "cat walks with four leg"})
        );
    }

    #[test]
    fn test_json_format_keeps_plain_lines_as_text() {
        let mut console = StdConsole::with_writer(OutputFormat::Json, Vec::new());
        console.write_line("After Catch Block").unwrap();

        assert_eq!(captured(console), ["After Catch Block"]);
    }

    #[test]
    fn test_text_format_writes_utterance_text() {
        let mut console = StdConsole::with_writer(OutputFormat::Text, Vec::new());
        let utterance = Utterance::new(
            Some("human"),
            Behavior::Walk,
            "human walks with 2 leg".to_string(),
        );
        console.utter(&utterance).unwrap();

        assert_eq!(captured(console), ["human walks with 2 leg"]);
    }

    #[test]
    fn test_memory_console_separates_streams() {
        let mut console = MemoryConsole::new();
        console.write_line("hello").unwrap();
        console.write_error("oops").unwrap();
        console
            .utter(&Utterance::new(Some("cat"), Behavior::Speak, "Meow".to_string()))
            .unwrap();

        assert_eq!(console.lines(), ["hello", "Meow"]);
        assert_eq!(console.errors(), ["oops"]);
        assert_eq!(console.utterances().len(), 1);

        console.clear();
        assert!(console.lines().is_empty());
    }
}
