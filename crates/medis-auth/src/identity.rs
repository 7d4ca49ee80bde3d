use medis_types::{EphemeralPublicKey, IdentityDigest, IdentityToken, LoginSalt};
use sha2::{Digest, Sha256};

/// Derive the stable pseudonymous login identifier from the session
/// materials. Deterministic in its inputs; the salt keeps the value
/// uncorrelated across services.
pub fn derive_login_identity(
    token: &IdentityToken,
    salt: &LoginSalt,
    public: &EphemeralPublicKey,
) -> IdentityDigest {
    let material = format!(
        "{}-{}-{}",
        token.as_str(),
        salt.to_base64(),
        public.to_base64()
    );

    let hash = Sha256::digest(material.as_bytes());
    IdentityDigest::from_bytes(hash.into())
}
