// ============================================================================
// Currency Domain Model
// Tokens, native currencies and the union amounts are usually keyed by
// ============================================================================

use super::weth9::weth9;
use crate::interfaces::Currency;
use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type ChainId = u64;

// ============================================================================
// Token
// ============================================================================

/// A contract token with a unique address on its chain.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub chain_id: ChainId,
    pub address: String,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    /// Create a token, checking the address is `0x` followed by 40 hex digits.
    ///
    /// # Errors
    /// Returns `Parse` for a malformed address.
    pub fn new(chain_id: ChainId, address: impl Into<String>, decimals: u8) -> NumericResult<Self> {
        let address = address.into();
        validate_address(&address)?;
        Ok(Self::new_unchecked(chain_id, address, decimals))
    }

    /// Create a token from an address already known to be valid.
    pub fn new_unchecked(chain_id: ChainId, address: impl Into<String>, decimals: u8) -> Self {
        Self {
            chain_id,
            address: address.into(),
            decimals,
            symbol: None,
            name: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True if this token's address sorts before `other`'s, ignoring case.
    ///
    /// # Errors
    /// - `ChainMismatch` if the tokens live on different chains
    /// - `Parse` if both tokens have the same address
    pub fn sorts_before(&self, other: &Token) -> NumericResult<bool> {
        if self.chain_id != other.chain_id {
            return Err(NumericError::ChainMismatch {
                expected: self.chain_id,
                found: other.chain_id,
            });
        }

        let ours = self.address.to_ascii_lowercase();
        let theirs = other.address.to_ascii_lowercase();
        if ours == theirs {
            return Err(NumericError::Parse(format!(
                "tokens share address {}",
                self.address
            )));
        }
        Ok(ours < theirs)
    }
}

fn validate_address(address: &str) -> NumericResult<()> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or("");

    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(NumericError::Parse(format!(
            "{:?} is not a valid address",
            address
        )));
    }
    Ok(())
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Eq for Token {}

impl Currency for Token {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}@{}", self.address, self.chain_id),
        }
    }
}

// ============================================================================
// Native Currency
// ============================================================================

/// The chain's own currency, which has no contract address.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeCurrency {
    pub chain_id: ChainId,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl NativeCurrency {
    pub fn new(
        chain_id: ChainId,
        decimals: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    /// Ether on `chain_id`: 18 decimals, `ETH`.
    pub fn ether(chain_id: ChainId) -> Self {
        Self::new(chain_id, 18, "ETH", "Ether")
    }

    /// The canonical wrapped token for this currency's chain.
    ///
    /// # Errors
    /// Returns `UnsupportedChain` if no wrapped token is known.
    pub fn wrapped(&self) -> NumericResult<Token> {
        weth9(self.chain_id).ok_or(NumericError::UnsupportedChain(self.chain_id))
    }
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeCurrency {}

impl Currency for NativeCurrency {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn symbol(&self) -> Option<&str> {
        Some(&self.symbol)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl fmt::Display for NativeCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

// ============================================================================
// Any Currency
// ============================================================================

/// Either a native currency or a token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnyCurrency {
    Native(NativeCurrency),
    Token(Token),
}

impl AnyCurrency {
    pub fn chain_id(&self) -> ChainId {
        match self {
            AnyCurrency::Native(native) => native.chain_id,
            AnyCurrency::Token(token) => token.chain_id,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AnyCurrency::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, AnyCurrency::Token(_))
    }

    /// The token form of this currency on `chain_id`.
    ///
    /// Tokens return themselves, natives return their wrapped token.
    ///
    /// # Errors
    /// - `ChainMismatch` if the currency lives on another chain
    /// - `UnsupportedChain` if a native currency has no known wrapped token
    pub fn wrapped(&self, chain_id: ChainId) -> NumericResult<Token> {
        if self.chain_id() != chain_id {
            return Err(NumericError::ChainMismatch {
                expected: chain_id,
                found: self.chain_id(),
            });
        }

        match self {
            AnyCurrency::Native(native) => native.wrapped(),
            AnyCurrency::Token(token) => Ok(token.clone()),
        }
    }
}

impl Currency for AnyCurrency {
    fn decimals(&self) -> u8 {
        match self {
            AnyCurrency::Native(native) => native.decimals,
            AnyCurrency::Token(token) => token.decimals,
        }
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn symbol(&self) -> Option<&str> {
        match self {
            AnyCurrency::Native(native) => native.symbol(),
            AnyCurrency::Token(token) => token.symbol(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            AnyCurrency::Native(native) => native.name(),
            AnyCurrency::Token(token) => token.name(),
        }
    }
}

impl fmt::Display for AnyCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyCurrency::Native(native) => fmt::Display::fmt(native, f),
            AnyCurrency::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}

impl From<Token> for AnyCurrency {
    fn from(token: Token) -> Self {
        AnyCurrency::Token(token)
    }
}

impl From<NativeCurrency> for AnyCurrency {
    fn from(native: NativeCurrency) -> Self {
        AnyCurrency::Native(native)
    }
}

/// Fails with `CurrencyMismatch` unless the two currencies are the same.
pub(crate) fn ensure_same_currency<C: Currency>(expected: &C, found: &C) -> NumericResult<()> {
    if expected.equals(found) {
        return Ok(());
    }

    tracing::debug!(%expected, %found, "currency mismatch");
    Err(NumericError::CurrencyMismatch {
        expected: expected.to_string(),
        found: found.to_string(),
    })
}
