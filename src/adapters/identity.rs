//! Operator Identity - Ed25519 Key Loading
//!
//! Turns the operator's hex-encoded secret key seed (`PRIVATE_KEY_HEX`)
//! into an `ic-agent` signing identity and its self-authenticating
//! principal. The key is never logged.

use std::fmt;

use candid::Principal;
use ed25519_consensus::SigningKey;
use ic_agent::Identity;
use ic_agent::identity::BasicIdentity;
use thiserror::Error;

/// Ed25519 secret key seed length.
pub const SEED_LEN: usize = 32;

/// Errors raised while loading the operator key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
  /// A byte group contains a character outside `[0-9a-f]`.
  #[error("invalid hex byte {group:?} at byte {index}")]
  InvalidHexByte {
    /// Position of the group in the decoded byte sequence.
    index: usize,
    /// The offending (normalized) group.
    group: String,
  },

  /// The decoded key is not a 32-byte Ed25519 seed.
  #[error("expected a 32-byte Ed25519 seed, got {0} bytes")]
  InvalidSeedLength(usize),

  /// The identity could not report its principal.
  #[error("failed to derive principal: {0}")]
  Principal(String),
}

/// Decode a hex private key.
///
/// The input is trimmed, lowercased and stripped of all whitespace, then
/// read two characters at a time. A trailing single character is read as
/// its own byte.
///
/// # Errors
/// Returns [`IdentityError::InvalidHexByte`] for any non-hex character.
pub fn decode_private_key_hex(input: &str) -> Result<Vec<u8>, IdentityError> {
  let normalized: Vec<char> = input
    .trim()
    .to_lowercase()
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect();

  normalized
    .chunks(2)
    .enumerate()
    .map(|(index, pair)| {
      let group: String = pair.iter().collect();
      if !pair.iter().all(char::is_ascii_hexdigit) {
        return Err(IdentityError::InvalidHexByte { index, group });
      }
      u8::from_str_radix(&group, 16).map_err(|_| IdentityError::InvalidHexByte { index, group })
    })
    .collect()
}

/// Operator signing identity plus its derived principal.
pub struct OperatorIdentity {
  principal: Principal,
  inner: BasicIdentity,
}

impl OperatorIdentity {
  /// Build the identity from a hex-encoded 32-byte seed.
  ///
  /// # Errors
  /// Fails on malformed hex, a seed that is not 32 bytes, or a principal
  /// that cannot be derived.
  pub fn from_private_key_hex(private_key_hex: &str) -> Result<Self, IdentityError> {
    let bytes = decode_private_key_hex(private_key_hex)?;
    Self::from_seed(&bytes)
  }

  /// Build the identity from raw seed bytes.
  ///
  /// # Errors
  /// Fails when `seed` is not exactly [`SEED_LEN`] bytes.
  pub fn from_seed(seed: &[u8]) -> Result<Self, IdentityError> {
    let seed: [u8; SEED_LEN] = seed
      .try_into()
      .map_err(|_| IdentityError::InvalidSeedLength(seed.len()))?;

    let inner = BasicIdentity::from_signing_key(SigningKey::from(seed));
    let principal = inner.sender().map_err(IdentityError::Principal)?;

    Ok(Self { principal, inner })
  }

  /// Self-authenticating principal of this key.
  pub const fn principal(&self) -> Principal {
    self.principal
  }

  /// Hand the signer over to an agent.
  pub fn into_inner(self) -> BasicIdentity {
    self.inner
  }
}

impl fmt::Debug for OperatorIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OperatorIdentity")
      .field("principal", &self.principal.to_text())
      .finish_non_exhaustive()
  }
}
