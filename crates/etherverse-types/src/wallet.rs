//! Wallet account state as seen by the chat client.
//!
//! Connection itself is owned by an external wallet provider; Etherverse only
//! records the account address it was handed and whether it is connected.

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    address: Option<String>,
}

impl WalletAccount {
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Record a connected account. Expects `0x` followed by 40 hex digits.
    pub fn connect(&mut self, address: &str) -> Result<(), WalletError> {
        let address = address.trim();
        if !is_valid_address(address) {
            return Err(WalletError::InvalidAddress(address.to_string()));
        }
        self.address = Some(address.to_string());
        Ok(())
    }

    pub fn disconnect(&mut self) {
        self.address = None;
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Shortened address for display, or "Not connected".
    pub fn display(&self) -> String {
        match &self.address {
            Some(addr) => shorten_hex(addr),
            None => "Not connected".to_string(),
        }
    }
}

/// Shorten a hash or address to `first6...last4`.
///
/// Strings of ten characters or fewer are returned unchanged.
pub fn shorten_hex(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 10 {
        return value.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
