use medis_types::{EphemeralPublicKey, IdentityToken, LoginProof, LoginSalt, MedisResult};
use std::time::Duration;

/// Fixed marker identifying artifacts produced by the simulated prover.
pub const MOCK_PROOF_MARKER: &str = "mock-zk-proof";

/// Simulated prover round trip. The delay stands in for proof
/// generation; the artifact merely echoes fragments of its inputs and
/// verifies nothing.
pub async fn request_proof(
    token: &IdentityToken,
    public: &EphemeralPublicKey,
    salt: &LoginSalt,
    delay: Duration,
) -> MedisResult<LoginProof> {
    tokio::time::sleep(delay).await;

    let token_fragment: String = token.as_str().chars().take(10).collect();
    let key_fragment: String = public.to_base64().chars().take(10).collect();

    Ok(LoginProof::new(format!(
        "{}-{}-{}-{}",
        MOCK_PROOF_MARKER,
        token_fragment,
        key_fragment,
        salt.to_base64()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medis_types::{EPHEMERAL_KEY_SIZE, LOGIN_SALT_SIZE};

    #[tokio::test]
    async fn test_proof_carries_marker_and_inputs() {
        let token = IdentityToken::new("aaa.bbb.ccc");
        let public = EphemeralPublicKey::from_bytes([0x22; EPHEMERAL_KEY_SIZE]);
        let salt = LoginSalt::from_bytes([0x11; LOGIN_SALT_SIZE]);

        let proof = request_proof(&token, &public, &salt, Duration::ZERO)
            .await
            .unwrap();

        assert!(proof.as_str().starts_with(MOCK_PROOF_MARKER));
        assert!(proof.as_str().contains(&salt.to_base64()));
    }
}
