#![forbid(unsafe_code)]
#![warn(clippy::all)]

//! End-to-end simulation of a privacy-preserving login flow. Every step
//! fabricates believable-looking material (keys, tokens, proofs) from
//! random bytes and timers; nothing here is cryptographically meaningful.

pub mod flow;
pub mod identity;
pub mod keys;
pub mod prover;
pub mod token;

pub use flow::*;
pub use identity::*;
pub use keys::*;
pub use prover::*;
pub use token::*;

pub fn random_bytes<const N: usize>() -> [u8; N] {
    use rand::RngCore;
    let mut bytes = [0u8; N];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes
}
