use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin, stdin};

use crate::errors::ShopperError;

/// Asks the user one question and returns the raw answer
#[async_trait]
pub(crate) trait Prompter: Send {
    async fn ask(&mut self, question: &str) -> Result<String, ShopperError>;
}

pub(crate) struct StdinPrompter {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinPrompter {
    pub(crate) fn new() -> Self {
        Self {
            lines: BufReader::new(stdin()).lines(),
        }
    }
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn ask(&mut self, question: &str) -> Result<String, ShopperError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(ShopperError::InputClosed),
        }
    }
}
