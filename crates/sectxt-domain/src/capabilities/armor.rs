use crate::model::{BEGIN_SIGNATURE, BEGIN_SIGNED_MESSAGE, END_SIGNATURE};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// OpenPGP packet tag for signature packets (RFC 4880 §5.2).
const SIGNATURE_PACKET_TAG: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArmorError {
    /// The document does not contain a complete ASCII-armored cleartext signature.
    #[error("not an ASCII-armored PGP message: {0}")]
    NotArmored(&'static str),
    /// The armor is present but its payload does not decode or parse.
    #[error("PGP message failed to parse: {0}")]
    Malformed(String),
}

pub trait ArmorChecker: Send + Sync {
    /// Structural check of the whole document; signatures are not verified.
    fn check(&self, document: &str) -> Result<(), ArmorError>;
}

/// Structural checker for RFC 4880 §7 cleartext-signed messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct CleartextArmor;

impl ArmorChecker for CleartextArmor {
    fn check(&self, document: &str) -> Result<(), ArmorError> {
        let lines: Vec<&str> = document.lines().map(str::trim_end).collect();

        let start = lines
            .iter()
            .position(|l| *l == BEGIN_SIGNED_MESSAGE)
            .ok_or(ArmorError::NotArmored("missing signed-message header"))?;

        // Armor headers ("Hash: SHA256") run up to the first blank line.
        let mut idx = start + 1;
        while idx < lines.len() && !lines[idx].is_empty() {
            if !lines[idx].contains(": ") {
                return Err(ArmorError::NotArmored("malformed armor header"));
            }
            idx += 1;
        }
        if idx >= lines.len() {
            return Err(ArmorError::NotArmored("missing blank line after armor headers"));
        }

        let sig_start = find_from(&lines, idx, BEGIN_SIGNATURE)
            .ok_or(ArmorError::NotArmored("missing signature block"))?;
        let sig_end = find_from(&lines, sig_start, END_SIGNATURE)
            .ok_or(ArmorError::NotArmored("missing end-of-signature marker"))?;

        decode_signature_block(&lines[sig_start + 1..sig_end])
    }
}

fn find_from(lines: &[&str], from: usize, marker: &str) -> Option<usize> {
    lines[from..]
        .iter()
        .position(|l| *l == marker)
        .map(|p| p + from)
}

fn decode_signature_block(block: &[&str]) -> Result<(), ArmorError> {
    let mut body = block;
    if let Some(blank) = block.iter().position(|l| l.is_empty())
        && block[..blank].iter().all(|l| l.contains(": "))
    {
        body = &block[blank + 1..];
    }

    let mut payload = String::new();
    let mut checksum = None;
    for line in body {
        if line.is_empty() {
            continue;
        }
        if let Some(crc) = line.strip_prefix('=') {
            checksum = Some(crc);
            break;
        }
        payload.push_str(line);
    }

    let bytes = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| ArmorError::Malformed(format!("invalid radix-64 data: {e}")))?;
    let Some(&header) = bytes.first() else {
        return Err(ArmorError::Malformed("empty signature payload".to_string()));
    };

    if let Some(crc) = checksum {
        let expected = STANDARD
            .decode(crc.as_bytes())
            .map_err(|e| ArmorError::Malformed(format!("invalid armor checksum: {e}")))?;
        let actual = crc24(&bytes).to_be_bytes();
        if expected.as_slice() != &actual[1..] {
            return Err(ArmorError::Malformed("armor checksum mismatch".to_string()));
        }
    }

    match packet_tag(header) {
        Some(SIGNATURE_PACKET_TAG) => Ok(()),
        Some(tag) => Err(ArmorError::Malformed(format!(
            "expected a signature packet, found packet tag {tag}"
        ))),
        None => Err(ArmorError::Malformed("invalid packet header".to_string())),
    }
}

fn packet_tag(header: u8) -> Option<u8> {
    if header & 0x80 == 0 {
        return None;
    }
    if header & 0x40 != 0 {
        Some(header & 0x3f)
    } else {
        Some((header >> 2) & 0x0f)
    }
}

/// CRC-24 as used for the OpenPGP armor checksum (RFC 4880 §6.1).
pub fn crc24(data: &[u8]) -> u32 {
    const INIT: u32 = 0x00B7_04CE;
    const POLY: u32 = 0x0186_4CFB;

    let mut crc = INIT;
    for &byte in data {
        crc ^= u32::from(byte) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0x0100_0000 != 0 {
                crc ^= POLY;
            }
        }
    }
    crc & 0x00FF_FFFF
}
