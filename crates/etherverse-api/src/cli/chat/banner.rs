//! Welcome banner display for chat sessions.

use console::style;

use etherverse_core::chat::GREETING;
use etherverse_types::wallet::WalletAccount;

/// Print the welcome banner at the start of a chat session.
///
/// Shows where turns are sent and which wallet is attached, followed by the
/// greeting every conversation opens with.
pub fn print_welcome_banner(backend: &str, wallet: &WalletAccount) {
    println!();
    println!("  {} {}", style("Ξ").cyan(), style("Etherverse").cyan().bold());
    println!("  {}", style("Ask anything about Ethereum").dim());
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(backend).dim());
    println!("  {}   {}", style("Wallet:").bold(), style(wallet.display()).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
    println!("  {} {}", style("Etherverse").cyan().bold(), GREETING);
    println!();
}
