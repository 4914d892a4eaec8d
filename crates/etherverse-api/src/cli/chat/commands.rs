//! Slash command parsing and execution for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the transcript
//! and the attached wallet.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Show the conversation so far.
    History,
    /// Attach a wallet address to subsequent requests.
    Connect(String),
    /// Detach the wallet.
    Disconnect,
    /// Show the attached wallet.
    Wallet,
    /// A known command used without its required argument; carries the usage line.
    Usage(&'static str),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(' ') {
        Some((cmd, arg)) => (cmd.to_lowercase(), arg.trim()),
        None => (trimmed.to_lowercase(), ""),
    };

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/clear" | "/cls" => ChatCommand::Clear,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        "/history" => ChatCommand::History,
        "/connect" if arg.is_empty() => ChatCommand::Usage("/connect <address>"),
        "/connect" => ChatCommand::Connect(arg.to_string()),
        "/disconnect" => ChatCommand::Disconnect,
        "/wallet" => ChatCommand::Wallet,
        other => ChatCommand::Unknown(other.to_string()),
    };
    Some(command)
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    let rows = [
        ("/help", "Show this help message"),
        ("/clear", "Clear the screen"),
        ("/exit", "End the chat session"),
        ("/history", "Show the conversation so far"),
        ("/connect <address>", "Attach a wallet address"),
        ("/disconnect", "Detach the wallet"),
        ("/wallet", "Show the attached wallet"),
    ];
    for (name, help) in rows {
        println!("  {:<20} {}", style(name).cyan(), help);
    }
    println!();
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C safe (no message loss)").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_connect() {
        assert_eq!(
            parse("/connect  0x5c527b6950F9FF2144eD138bCB1adDE703f81Af3 "),
            Some(ChatCommand::Connect(
                "0x5c527b6950F9FF2144eD138bCB1adDE703f81Af3".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_connect_without_address() {
        assert_eq!(
            parse("/connect"),
            Some(ChatCommand::Usage("/connect <address>"))
        );
    }

    #[test]
    fn test_parse_wallet_commands() {
        assert_eq!(parse("/disconnect"), Some(ChatCommand::Disconnect));
        assert_eq!(parse("/wallet"), Some(ChatCommand::Wallet));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("what is the merge?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo bar"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
