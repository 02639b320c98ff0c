use crate::serde::{CodecError, Result};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for decoding untrusted buffers.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DecodeConfig {
    /// How many `Sequence`s may enclose one another. `0` forbids `Sequence`s altogether.
    pub max_depth: usize,

    /// Whether a `Container` buffer may carry bytes after its last declared member.
    pub allow_trailing_bytes: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_bytes: false,
        }
    }
}

/// Carried through nested decode calls.
#[derive(Clone, Copy, Debug)]
pub struct DecodeCtx {
    config: DecodeConfig,
    depth: usize,
}

impl From<DecodeConfig> for DecodeCtx {
    fn from(config: DecodeConfig) -> Self {
        Self { config, depth: 0 }
    }
}

impl DecodeCtx {
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// The context for the members of a `Sequence` being entered.
    pub fn enter_sequence(self) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            return Err(CodecError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        }
        Ok(Self { depth, ..self })
    }
}
