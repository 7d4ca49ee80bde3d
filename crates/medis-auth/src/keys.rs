use crate::random_bytes;
use medis_types::{EphemeralKeyPair, EphemeralPrivateKey, EphemeralPublicKey, LoginSalt};

/// Generate the per-run keypair. Both halves are independent random
/// values standing in for a client-held signing key; they are related to
/// each other by nothing but the run that produced them.
pub fn generate_ephemeral_keypair() -> EphemeralKeyPair {
    let private = EphemeralPrivateKey::from_bytes(random_bytes());
    let public = EphemeralPublicKey::from_bytes(random_bytes());

    EphemeralKeyPair { public, private }
}

/// Random per-run blinding factor for the identity derivation.
pub fn generate_login_salt() -> LoginSalt {
    LoginSalt::from_bytes(random_bytes())
}
