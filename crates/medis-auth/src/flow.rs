use crate::identity::derive_login_identity;
use crate::keys::{generate_ephemeral_keypair, generate_login_salt};
use crate::prover::request_proof;
use crate::token::{decode_claims, MockIdentityProvider};
use medis_types::{
    EphemeralKeyPair, IdentityDigest, IdentityToken, LoginProof, LoginSalt, MedisError,
    MedisResult,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    Running,
    Complete,
    Failed,
}

#[derive(Clone, Debug)]
pub struct FlowConfig {
    /// Stand-in for the OAuth redirect round trip.
    pub oauth_delay: Duration,
    /// Stand-in for proof generation at the prover service.
    pub prover_delay: Duration,
    pub provider: MockIdentityProvider,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            oauth_delay: Duration::from_millis(1000),
            prover_delay: Duration::from_millis(1500),
            provider: MockIdentityProvider::default(),
        }
    }
}

impl FlowConfig {
    /// Zero-latency configuration for tests and demos.
    pub fn immediate() -> Self {
        Self {
            oauth_delay: Duration::ZERO,
            prover_delay: Duration::ZERO,
            provider: MockIdentityProvider::default(),
        }
    }
}

/// Snapshot of one login run. All five fields are published together
/// when a run completes; a partially populated session is never
/// observable.
#[derive(Clone, Debug, Default)]
pub struct LoginSession {
    pub token: Option<IdentityToken>,
    pub keypair: Option<EphemeralKeyPair>,
    pub salt: Option<LoginSalt>,
    pub identity: Option<IdentityDigest>,
    pub proof: Option<LoginProof>,
}

impl LoginSession {
    pub fn is_complete(&self) -> bool {
        self.token.is_some()
            && self.keypair.is_some()
            && self.salt.is_some()
            && self.identity.is_some()
            && self.proof.is_some()
    }
}

struct FlowState {
    phase: FlowPhase,
    session: LoginSession,
    error: Option<String>,
    epoch: u64,
}

impl FlowState {
    fn initial() -> Self {
        Self {
            phase: FlowPhase::Idle,
            session: LoginSession::default(),
            error: None,
            epoch: 0,
        }
    }
}

/// Drives the five-step simulated login sequence: ephemeral keypair,
/// salt, identity token, derived identity, mock proof.
///
/// Clones share one underlying state, matching a provider handing the
/// same flow to every screen; separately constructed instances stay
/// fully isolated from each other.
#[derive(Clone)]
pub struct LoginFlow {
    state: Arc<RwLock<FlowState>>,
    config: FlowConfig,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}

impl LoginFlow {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(FlowState::initial())),
            config,
        }
    }

    pub async fn phase(&self) -> FlowPhase {
        self.state.read().await.phase
    }

    pub async fn is_loading(&self) -> bool {
        self.phase().await == FlowPhase::Running
    }

    pub async fn session(&self) -> LoginSession {
        self.state.read().await.session.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Run the full sequence. Rejects with [`MedisError::FlowBusy`] if a
    /// run is already in flight, and with [`MedisError::FlowCancelled`]
    /// if [`LoginFlow::reset`] invalidated this run before it could
    /// publish its result.
    pub async fn start(&self) -> MedisResult<LoginSession> {
        let run_epoch = {
            let mut state = self.state.write().await;
            if state.phase == FlowPhase::Running {
                return Err(MedisError::FlowBusy);
            }
            state.phase = FlowPhase::Running;
            state.error = None;
            state.epoch += 1;
            state.epoch
        };

        info!("Starting simulated login flow");
        let outcome = self.run_steps().await;

        let mut state = self.state.write().await;
        if state.epoch != run_epoch {
            debug!("Discarding login run superseded by reset");
            return Err(MedisError::FlowCancelled);
        }

        match outcome {
            Ok(session) => {
                state.session = session.clone();
                state.phase = FlowPhase::Complete;
                info!("Login flow complete");
                Ok(session)
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Login flow failed: {}", message);
                state.error = Some(message);
                state.phase = FlowPhase::Failed;
                Err(e)
            }
        }
    }

    async fn run_steps(&self) -> MedisResult<LoginSession> {
        let keypair = generate_ephemeral_keypair();
        debug!("Generated ephemeral keypair");

        let salt = generate_login_salt();
        debug!("Generated login salt");

        let token = self
            .config
            .provider
            .fetch_token(self.config.oauth_delay)
            .await?;
        let claims = decode_claims(&token)?;
        debug!("Obtained identity token for {}", claims.email);

        let identity = derive_login_identity(&token, &salt, &keypair.public);

        let proof = request_proof(&token, &keypair.public, &salt, self.config.prover_delay).await?;
        debug!("Received mock proof");

        Ok(LoginSession {
            token: Some(token),
            keypair: Some(keypair),
            salt: Some(salt),
            identity: Some(identity),
            proof: Some(proof),
        })
    }

    /// Clear everything back to the initial shape, regardless of the
    /// current phase. Any run still in flight is invalidated and will
    /// not publish its result afterwards.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.epoch += 1;
        state.phase = FlowPhase::Idle;
        state.session = LoginSession::default();
        state.error = None;
        info!("Login flow reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prover::MOCK_PROOF_MARKER;

    fn test_flow() -> LoginFlow {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        LoginFlow::new(FlowConfig::immediate())
    }

    #[tokio::test]
    async fn test_start_populates_every_field() {
        let flow = test_flow();
        let session = flow.start().await.unwrap();

        assert!(session.is_complete());
        assert_eq!(flow.phase().await, FlowPhase::Complete);
        assert!(!flow.is_loading().await);
        assert!(flow.last_error().await.is_none());

        assert!(!session.identity.unwrap().to_base64().is_empty());
        assert!(session
            .proof
            .unwrap()
            .as_str()
            .starts_with(MOCK_PROOF_MARKER));
    }

    #[tokio::test]
    async fn test_reset_restores_initial_shape() {
        let flow = test_flow();
        flow.start().await.unwrap();
        flow.reset().await;

        let session = flow.session().await;
        assert!(session.token.is_none());
        assert!(session.keypair.is_none());
        assert!(session.salt.is_none());
        assert!(session.identity.is_none());
        assert!(session.proof.is_none());
        assert_eq!(flow.phase().await, FlowPhase::Idle);
        assert!(flow.last_error().await.is_none());
        assert!(!flow.is_loading().await);
    }

    #[tokio::test]
    async fn test_runs_use_fresh_material() {
        let flow = test_flow();
        let first = flow.start().await.unwrap();
        let second = flow.start().await.unwrap();

        assert_ne!(first.salt.unwrap(), second.salt.unwrap());
        assert_ne!(
            first.keypair.unwrap().public,
            second.keypair.unwrap().public
        );
    }

    #[tokio::test]
    async fn test_second_start_while_running_is_rejected() {
        let mut config = FlowConfig::immediate();
        config.oauth_delay = Duration::from_secs(30);
        let flow = LoginFlow::new(config);

        let running = flow.clone();
        let handle = tokio::spawn(async move { running.start().await });

        while flow.phase().await != FlowPhase::Running {
            tokio::task::yield_now().await;
        }

        assert!(matches!(flow.start().await, Err(MedisError::FlowBusy)));
        handle.abort();
    }

    #[tokio::test]
    async fn test_reset_during_run_discards_result() {
        let mut config = FlowConfig::immediate();
        config.prover_delay = Duration::from_millis(200);
        let flow = LoginFlow::new(config);

        let running = flow.clone();
        let handle = tokio::spawn(async move { running.start().await });

        while flow.phase().await != FlowPhase::Running {
            tokio::task::yield_now().await;
        }
        flow.reset().await;

        let outcome = handle.await.unwrap();
        assert!(matches!(outcome, Err(MedisError::FlowCancelled)));

        assert!(!flow.session().await.is_complete());
        assert_eq!(flow.phase().await, FlowPhase::Idle);
    }

    #[tokio::test]
    async fn test_shared_clones_observe_one_state() {
        let flow = test_flow();
        let screen_a = flow.clone();
        let screen_b = flow.clone();

        screen_a.start().await.unwrap();
        assert_eq!(screen_b.phase().await, FlowPhase::Complete);

        let isolated = LoginFlow::new(FlowConfig::immediate());
        assert_eq!(isolated.phase().await, FlowPhase::Idle);
    }
}
