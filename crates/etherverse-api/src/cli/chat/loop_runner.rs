//! Main chat loop orchestration.
//!
//! Picks a backend (a running server, or the upstream directly), prints the
//! banner, then reads lines until the user exits. Each line is either a slash
//! command or a chat turn folded into a [`Conversation`].

use console::style;
use tracing::info;

use etherverse_core::ask::AskService;
use etherverse_core::chat::{ChatBackend, Conversation};
use etherverse_infra::proxy_client::ProxyClient;
use etherverse_infra::upstream::HttpAskUpstream;
use etherverse_types::chat::ChatMessage;
use etherverse_types::config::EtherverseConfig;
use etherverse_types::wallet::WalletAccount;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

const HISTORY_LIMIT: usize = 20;
const PREVIEW_CHARS: usize = 100;

/// Run the interactive chat loop.
///
/// With `server` set, turns go to that server's `/api/ask`; otherwise an
/// in-process [`AskService`] talks to the configured upstream.
pub async fn run_chat_loop(
    config: &EtherverseConfig,
    server: Option<String>,
    address: Option<String>,
) -> anyhow::Result<()> {
    let mut wallet = WalletAccount::disconnected();
    if let Some(address) = address.or_else(|| config.chat.address.clone()) {
        wallet.connect(&address)?;
    }

    match server {
        Some(url) => {
            let backend = ProxyClient::new(&url)?;
            info!(url = backend.ask_url(), "Chatting through a running server");
            chat(&backend, &config.chat.context, wallet).await
        }
        None => {
            let upstream = HttpAskUpstream::new(&config.upstream)?;
            let backend = AskService::from_config(upstream, &config.upstream);
            chat(&backend, &config.chat.context, wallet).await
        }
    }
}

async fn chat<B: ChatBackend>(
    backend: &B,
    context: &str,
    mut wallet: WalletAccount,
) -> anyhow::Result<()> {
    let mut conversation = Conversation::new(context);
    let renderer = ChatRenderer::new();

    print_welcome_banner(&backend.describe(), &wallet);

    let (mut chat_input, _writer) = ChatInput::new(&wallet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::History => print_history(conversation.recent(HISTORY_LIMIT)),
                ChatCommand::Connect(address) => match wallet.connect(&address) {
                    Ok(()) => {
                        chat_input.refresh_prompt(&wallet);
                        println!(
                            "\n  {} Connected {}\n",
                            style("*").green().bold(),
                            style(wallet.display()).cyan()
                        );
                    }
                    Err(e) => println!("\n  {} {e}\n", style("!").red().bold()),
                },
                ChatCommand::Disconnect => {
                    wallet.disconnect();
                    chat_input.refresh_prompt(&wallet);
                    println!("\n  {} Wallet disconnected\n", style("*").green().bold());
                }
                ChatCommand::Wallet => match wallet.address() {
                    Some(address) => {
                        println!("\n  {}  {}\n", style("Wallet:").bold(), style(address).cyan());
                    }
                    None => println!(
                        "\n  {}  {} {}\n",
                        style("Wallet:").bold(),
                        wallet.display(),
                        style("(use /connect <address>)").dim()
                    ),
                },
                ChatCommand::Usage(usage) => {
                    println!("\n  {} Usage: {}\n", style("?").yellow().bold(), style(usage).cyan());
                }
                ChatCommand::Unknown(cmd_name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(cmd_name).dim()
                    );
                }
            }
            continue;
        }

        let Some(request) = conversation.begin_turn(&text, &wallet) else {
            continue;
        };

        let spinner = crate::cli::spinner("thinking...");
        let outcome = backend.send(&request).await;
        spinner.finish_and_clear();

        let notice = conversation.complete_turn(outcome);
        if let Some(answer) = conversation.messages().last() {
            renderer.print_message(answer);
        }
        if let Some(notice) = notice {
            renderer.print_notice(&notice);
        }
        println!();
    }

    info!(
        turns = conversation.messages().iter().filter(|m| m.is_user).count(),
        session_id = conversation.session_id().unwrap_or_default(),
        "Chat session ended"
    );
    println!("\n  {}", style("Session ended.").dim());
    Ok(())
}

fn print_history(messages: &[ChatMessage]) {
    println!();
    for msg in messages {
        let role_label = if msg.is_user {
            style("You").green()
        } else {
            style("Etherverse").cyan()
        };
        println!("  {} {}", role_label.bold(), preview(&msg.text));
    }
    println!();
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > PREVIEW_CHARS {
        let head: String = flat.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{head}...")
    } else {
        flat
    }
}
