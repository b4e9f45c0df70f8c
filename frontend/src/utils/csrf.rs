//! Anti-forgery tokens for the contact form.
//!
//! Entropy and time are injected so the generator can be exercised without a browser.
//! When the entropy source fails the token is still produced, but it is marked `Weak`
//! and a warning is logged. A weak token must not be trusted for server-side checks.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::warn;
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

pub const TOKEN_BYTES: usize = 32;
const FALLBACK_BYTES: usize = 16;

static FALLBACK_SEQUENCE: AtomicU64 = AtomicU64::new(0);

pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error>;
}

pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// `crypto.getRandomValues` in the browser, the OS generator natively.
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(buf)
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStrength {
    Strong,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    value: String,
    strength: TokenStrength,
}

impl CsrfToken {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn strength(&self) -> TokenStrength {
        self.strength
    }
}

impl fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

pub fn generate_csrf_token() -> CsrfToken {
    generate_csrf_token_with(&mut SystemEntropy, &SystemClock)
}

pub fn generate_csrf_token_with(entropy: &mut dyn EntropySource, clock: &dyn Clock) -> CsrfToken {
    let mut bytes = [0u8; TOKEN_BYTES];
    match entropy.fill(&mut bytes) {
        Ok(()) => CsrfToken {
            value: hex::encode(bytes),
            strength: TokenStrength::Strong,
        },
        Err(e) => {
            warn!("Secure random source unavailable ({}), issuing weak CSRF token", e);
            fallback_token(clock.now_millis())
        }
    }
}

fn fallback_token(now_millis: i64) -> CsrfToken {
    let sequence = FALLBACK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let seed = (now_millis as u64) ^ sequence.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut bytes = [0u8; FALLBACK_BYTES];
    rng.fill_bytes(&mut bytes);
    CsrfToken {
        value: format!("{}{:x}", hex::encode(bytes), now_millis),
        strength: TokenStrength::Weak,
    }
}
