use crate::algorithm::{Algorithm, RSA_ALGS};

/// Ceiling applied to each decoded header and payload unless configured.
pub const DEFAULT_MAX_DECODED_BYTES: usize = 1024 * 1024;

/// Upper bounds on decoded segment sizes, checked before any segment is
/// decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JwsLimits {
    pub max_header_bytes: usize,
    pub max_payload_bytes: usize,
}

impl Default for JwsLimits {
    fn default() -> Self {
        Self {
            max_header_bytes: DEFAULT_MAX_DECODED_BYTES,
            max_payload_bytes: DEFAULT_MAX_DECODED_BYTES,
        }
    }
}

/// Verification policy. The allow-list is always explicit; an empty list
/// rejects every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwsVerifyOptions {
    allowed_algs: Vec<Algorithm>,
    limits: JwsLimits,
}

impl JwsVerifyOptions {
    pub fn new(allowed_algs: impl IntoIterator<Item = Algorithm>) -> Self {
        let mut algs = Vec::new();
        for alg in allowed_algs {
            if !algs.contains(&alg) {
                algs.push(alg);
            }
        }
        Self {
            allowed_algs: algs,
            limits: JwsLimits::default(),
        }
    }

    /// RS256, RS384 and RS512.
    pub fn rsa_only() -> Self {
        Self::new(RSA_ALGS.iter().copied())
    }

    pub fn with_limits(mut self, limits: JwsLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_max_header_bytes(mut self, max: usize) -> Self {
        self.limits.max_header_bytes = max;
        self
    }

    pub fn with_max_payload_bytes(mut self, max: usize) -> Self {
        self.limits.max_payload_bytes = max;
        self
    }

    pub fn allowed_algs(&self) -> &[Algorithm] {
        &self.allowed_algs
    }

    pub fn limits(&self) -> &JwsLimits {
        &self.limits
    }

    pub fn allows(&self, alg: Algorithm) -> bool {
        self.allowed_algs.contains(&alg)
    }
}
