use crate::constants::{EPHEMERAL_KEY_SIZE, IDENTITY_DIGEST_SIZE, LOGIN_SALT_SIZE};
use crate::error::{MedisError, MedisResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Public half of a simulated ephemeral keypair. The value is random
/// bytes, not a point on any curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EphemeralPublicKey(pub [u8; EPHEMERAL_KEY_SIZE]);

impl EphemeralPublicKey {
    pub fn from_bytes(bytes: [u8; EPHEMERAL_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; EPHEMERAL_KEY_SIZE] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    pub fn from_base64(s: &str) -> MedisResult<Self> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| MedisError::Auth(e.to_string()))?;
        if bytes.len() != EPHEMERAL_KEY_SIZE {
            return Err(MedisError::Auth("Invalid public key length".into()));
        }
        let mut arr = [0u8; EPHEMERAL_KEY_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for EphemeralPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralPublicKey({})", hex::encode(self.0))
    }
}

impl fmt::Display for EphemeralPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

/// Private half of a simulated ephemeral keypair. Held only for the
/// lifetime of one login run and wiped on drop.
#[derive(Clone)]
pub struct EphemeralPrivateKey(pub [u8; EPHEMERAL_KEY_SIZE]);

impl EphemeralPrivateKey {
    pub fn from_bytes(bytes: [u8; EPHEMERAL_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; EPHEMERAL_KEY_SIZE] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl fmt::Debug for EphemeralPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralPrivateKey([REDACTED])")
    }
}

impl Drop for EphemeralPrivateKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[derive(Clone, Debug)]
pub struct EphemeralKeyPair {
    pub public: EphemeralPublicKey,
    pub private: EphemeralPrivateKey,
}

/// Per-run blinding factor mixed into the identity derivation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LoginSalt(pub [u8; LOGIN_SALT_SIZE]);

impl LoginSalt {
    pub fn from_bytes(bytes: [u8; LOGIN_SALT_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; LOGIN_SALT_SIZE] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    pub fn from_base64(s: &str) -> MedisResult<Self> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| MedisError::Auth(e.to_string()))?;
        if bytes.len() != LOGIN_SALT_SIZE {
            return Err(MedisError::Auth("Invalid salt length".into()));
        }
        let mut arr = [0u8; LOGIN_SALT_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for LoginSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoginSalt({}...)", &hex::encode(self.0)[..8])
    }
}

/// Opaque three-segment identity assertion. Structurally JWT-shaped,
/// cryptographically meaningless.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityToken(pub String);

impl IdentityToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityToken({}...)", self.0.get(..12).unwrap_or(&self.0))
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Claims carried in the fabricated token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    pub email: String,
    pub name: String,
    pub picture: String,
}

impl TokenClaims {
    pub fn is_expired_at(&self, unix_secs: i64) -> bool {
        unix_secs >= self.exp
    }
}

/// Stable pseudonymous identifier derived from (token, salt, public key).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityDigest(pub [u8; IDENTITY_DIGEST_SIZE]);

impl IdentityDigest {
    pub fn from_bytes(bytes: [u8; IDENTITY_DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDENTITY_DIGEST_SIZE] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    pub fn from_base64(s: &str) -> MedisResult<Self> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| MedisError::Auth(e.to_string()))?;
        if bytes.len() != IDENTITY_DIGEST_SIZE {
            return Err(MedisError::Auth("Invalid digest length".into()));
        }
        let mut arr = [0u8; IDENTITY_DIGEST_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for IdentityDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityDigest({})", hex::encode(self.0))
    }
}

impl fmt::Display for IdentityDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

/// Opaque mock proof artifact returned by the simulated prover.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginProof(pub String);

impl LoginProof {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LoginProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoginProof({}...)", self.0.get(..16).unwrap_or(&self.0))
    }
}

impl fmt::Display for LoginProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
