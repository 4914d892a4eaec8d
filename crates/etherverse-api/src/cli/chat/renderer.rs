//! Terminal markdown rendering with syntax-highlighted code blocks.
//!
//! `ChatRenderer` combines `termimad` for prose and `syntect` for fenced code.
//! Answers arrive whole, so each one is rendered once after it lands.

use console::style;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;
use termimad::crossterm::style::Color;

use etherverse_core::chat::{MarkdownBlock, split_blocks};
use etherverse_types::chat::{ChatMessage, Notice};
use etherverse_types::wallet::shorten_hex;

const THEME: &str = "base16-ocean.dark";

pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render an assistant answer: prose through termimad, fences through syntect.
    pub fn render_markdown(&self, markdown: &str) -> String {
        let mut output = String::new();
        for block in split_blocks(markdown) {
            match block {
                MarkdownBlock::Paragraph(text) => {
                    output.push_str(&self.skin.term_text(&text).to_string());
                }
                MarkdownBlock::Code { language, code } => {
                    output.push_str(&self.highlight_code(&code, &language));
                }
            }
        }
        output
    }

    /// Print one transcript message with its role label.
    pub fn print_message(&self, message: &ChatMessage) {
        if message.is_user {
            println!("\n  {} {}", style("You").green().bold(), message.text);
            return;
        }

        println!("\n  {}", style("Etherverse").cyan().bold());
        for line in self.render_markdown(&message.text).lines() {
            println!("  {line}");
        }
        if let Some(receipt) = receipt_line(message) {
            println!("{receipt}");
        }
    }

    /// Print a notice the way a toast would surface it.
    pub fn print_notice(&self, notice: &Notice) {
        eprintln!(
            "\n  {} {}: {}",
            style("!").red().bold(),
            style(&notice.title).red().bold(),
            notice.description
        );
    }

    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let mut output = String::new();
        let label = if lang.is_empty() { "code" } else { lang };
        output.push_str(&format!("{}\n", style(format!("--- {label} ---")).dim()));

        let Some(theme) = self.theme_set.themes.get(THEME) else {
            output.push_str(code);
            return output;
        };
        let mut h = HighlightLines::new(syntax, theme);

        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = h
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("{escaped}\x1b[0m\n"));
        }

        output
    }
}

/// Footer line linking an answer to its on-chain record, if it has one.
pub fn receipt_line(message: &ChatMessage) -> Option<String> {
    let tx_hash = message.tx_hash.as_deref()?;
    let link = message.explorer_link.as_deref()?;
    Some(format!(
        "  {} Recorded onchain: {} {}",
        style("|").dim(),
        style(shorten_hex(tx_hash)).yellow(),
        style(link).dim().underlined()
    ))
}
