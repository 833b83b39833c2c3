use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One named cheat code from the external code list.
///
/// `block` is the opcode text exactly as loaded: 8-hex-digit 32-bit words
/// separated by whitespace or newlines. Only `enabled` is ever rewritten;
/// name and block text round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub name: String,
    pub block: String,
    pub enabled: bool,
}

impl Code {
    /// Tokenize the opcode text into 32-bit words.
    pub fn words(&self) -> Result<Vec<u32>> {
        tokenize_block(&self.block).map_err(|e| {
            Error::Validation(format!("code '{}': {e}", self.name))
        })
    }
}

/// Split an opcode block on whitespace/newlines and parse each token as one
/// 8-hex-digit word.
pub fn tokenize_block(block: &str) -> Result<Vec<u32>> {
    block
        .split_whitespace()
        .map(|token| {
            if token.len() != 8 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(Error::Validation(format!(
                    "'{token}' is not an 8-hex-digit opcode word"
                )));
            }
            u32::from_str_radix(token, 16)
                .map_err(|_| Error::Validation(format!("'{token}' is not a hex word")))
        })
        .collect()
}
