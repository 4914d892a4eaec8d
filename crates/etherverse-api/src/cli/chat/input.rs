//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so Ctrl+D ends the session and Ctrl+C
//! only abandons the current line.

use console::style;
use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

use etherverse_types::wallet::WalletAccount;

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (already trimmed).
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Returns the input handler and a `SharedWriter` that prints without
    /// clobbering the prompt.
    pub fn new(wallet: &WalletAccount) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt_for(wallet))?;
        Ok((Self { rl }, stdout))
    }

    /// Re-render the prompt after the wallet changes.
    pub fn refresh_prompt(&mut self, wallet: &WalletAccount) {
        let _ = self.rl.update_prompt(&prompt_for(wallet));
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let trimmed = line.trim().to_string();
                if !trimmed.is_empty() {
                    self.rl.add_history_entry(trimmed.clone());
                }
                InputEvent::Message(trimmed)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}

fn prompt_for(wallet: &WalletAccount) -> String {
    if wallet.is_connected() {
        format!(
            "  {} {} ",
            style(format!("[{}]", wallet.display())).dim(),
            style("You >").green().bold()
        )
    } else {
        format!("  {} ", style("You >").green().bold())
    }
}
