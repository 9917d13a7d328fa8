use crate::types::Address;
use thiserror::Error;
use web3::signing::{hash_message, recover};

pub use alloy_dyn_abi::TypedData;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Signature is not valid hex: {0}")]
    InvalidHex(String),
    #[error("Signature must be 65 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Invalid recovery id {0}")]
    InvalidRecoveryId(u8),
    #[error("Could not hash typed data: {0}")]
    TypedData(String),
    #[error("Could not recover signer")]
    Recovery,
    #[error("Signed by `{recovered:#x}` instead of `{expected:#x}`")]
    Mismatch {
        expected: Address,
        recovered: Address,
    },
}

/// r || s and the normalized recovery id.
fn parse_signature(signature: &str) -> Result<([u8; 64], i32), SignatureError> {
    let raw = signature.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(raw).map_err(|e| SignatureError::InvalidHex(e.to_string()))?;

    if bytes.len() != 65 {
        return Err(SignatureError::InvalidLength(bytes.len()));
    }

    let recovery_id = match bytes[64] {
        v @ (0 | 1) => v,
        v @ (27 | 28) => v - 27,
        v => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    let mut rs = [0u8; 64];
    rs.copy_from_slice(&bytes[..64]);

    Ok((rs, recovery_id as i32))
}

fn check_signer(digest: &[u8], signature: &str, expected: Address) -> Result<(), SignatureError> {
    let (rs, recovery_id) = parse_signature(signature)?;
    let recovered = recover(digest, &rs, recovery_id).map_err(|_| SignatureError::Recovery)?;

    if recovered != expected {
        return Err(SignatureError::Mismatch {
            expected,
            recovered,
        });
    }

    Ok(())
}

/// Checks that `signature` is an `eth_sign`/`personal_sign` signature of
/// `message` by `expected`.
pub fn verify_personal_sign(
    message: &str,
    signature: &str,
    expected: Address,
) -> Result<(), SignatureError> {
    check_signer(
        hash_message(message.as_bytes()).as_bytes(),
        signature,
        expected,
    )
}

/// Checks an `eth_signTypedData_v4` signature. The domain separator is
/// derived from the fields present in `typed.domain`.
pub fn verify_typed_data(
    typed: &TypedData,
    signature: &str,
    expected: Address,
) -> Result<(), SignatureError> {
    let digest = typed
        .eip712_signing_hash()
        .map_err(|e| SignatureError::TypedData(e.to_string()))?;

    check_signer(digest.as_slice(), signature, expected)
}
