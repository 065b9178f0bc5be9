//! StrKey encoding for signing seeds and account ids
//!
//! A StrKey is the unpadded RFC 4648 base32 encoding of a version byte, a
//! 32 byte Ed25519 key and a little-endian CRC16-XModem checksum of the first
//! two parts.

use data_encoding::BASE32_NOPAD;
use ed25519_dalek::SigningKey;
use std::fmt;

use crate::shared::error::StrKeyError;

/// Version byte of an account id (encodes to a leading `G`)
pub const VERSION_ACCOUNT_ID: u8 = 6 << 3;

/// Version byte of a secret seed (encodes to a leading `S`)
pub const VERSION_SEED: u8 = 18 << 3;

const PAYLOAD_LEN: usize = 32;
const DECODED_LEN: usize = 1 + PAYLOAD_LEN + 2;

/// Length of an encoded StrKey in characters
pub const ENCODED_LEN: usize = 56;

/// CRC16-XModem (poly 0x1021, init 0, no reflection)
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Encode a 32 byte payload under the given version byte
pub fn encode_check(version: u8, payload: &[u8; PAYLOAD_LEN]) -> String {
    let mut raw = Vec::with_capacity(DECODED_LEN);
    raw.push(version);
    raw.extend_from_slice(payload);
    let checksum = crc16_xmodem(&raw);
    raw.extend_from_slice(&checksum.to_le_bytes());
    BASE32_NOPAD.encode(&raw)
}

/// Decode a StrKey and return its payload if the version byte and checksum match
pub fn decode_check(version: u8, encoded: &str) -> Result<[u8; PAYLOAD_LEN], StrKeyError> {
    if encoded.len() != ENCODED_LEN {
        return Err(StrKeyError::InvalidLength {
            expected: ENCODED_LEN,
            actual: encoded.len(),
        });
    }

    let raw = BASE32_NOPAD
        .decode(encoded.as_bytes())
        .map_err(|e| StrKeyError::InvalidEncoding(e.to_string()))?;
    if raw.len() != DECODED_LEN {
        return Err(StrKeyError::InvalidEncoding(format!(
            "decoded to {} bytes, expected {}",
            raw.len(),
            DECODED_LEN
        )));
    }

    if raw[0] != version {
        return Err(StrKeyError::InvalidVersionByte {
            expected: version,
            actual: raw[0],
        });
    }

    let (body, checksum) = raw.split_at(DECODED_LEN - 2);
    let expected = crc16_xmodem(body);
    if checksum != expected.to_le_bytes() {
        return Err(StrKeyError::InvalidChecksum);
    }

    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&body[1..]);
    Ok(payload)
}

/// A decoded signing seed
#[derive(Clone)]
pub struct SigningSeed {
    key: SigningKey,
}

impl SigningSeed {
    /// Parse an `S...` StrKey
    pub fn parse(encoded: &str) -> Result<Self, StrKeyError> {
        let secret = decode_check(VERSION_SEED, encoded)?;
        Ok(Self {
            key: SigningKey::from_bytes(&secret),
        })
    }

    /// Public account id (`G...`) that signatures from this seed verify against
    pub fn account_id(&self) -> String {
        encode_check(VERSION_ACCOUNT_ID, self.key.verifying_key().as_bytes())
    }
}

// Never print the secret.
impl fmt::Debug for SigningSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSeed")
            .field("account_id", &self.account_id())
            .finish()
    }
}
