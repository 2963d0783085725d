use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use yansi::Paint;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before the form was complete")]
    Closed,
}

/// Line-based questions on the terminal.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Asks once. An empty answer takes `default` when there is one.
    pub async fn ask(&mut self, label: &str, default: Option<&str>) -> Result<String, WizardError> {
        match default {
            Some(d) if !d.is_empty() => print!("{} [{}]: ", Paint::new(label).bold(), Paint::new(d).dim()),
            _ => print!("{}: ", Paint::new(label).bold()),
        }
        std::io::stdout().flush()?;

        let line = self.lines.next_line().await?.ok_or(WizardError::Closed)?;
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer.to_string())
    }
}
