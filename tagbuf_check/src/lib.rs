//! Reads a container buffer from disk, decodes it, re-encodes it,
//! and reports whether the re-encoding is byte-identical to what was read.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use tagbuf_types::serde::DecodeConfig;
use tagbuf_types::types::Container;
use tracing::{debug, info};

pub const ENV_VAR_INPUT: &str = "TAGBUF_INPUT";
pub const ENV_VAR_MAX_DEPTH: &str = "TAGBUF_MAX_DEPTH";

pub const DEFAULT_INPUT: &str = "raw.bin";

#[derive(Debug)]
pub struct CheckConfig {
    pub input: PathBuf,
    pub decode: DecodeConfig,
}

impl CheckConfig {
    /// The first positional argument takes precedence over [`ENV_VAR_INPUT`].
    pub fn from_env(args: impl Iterator<Item = String>) -> Result<Self> {
        Self::from_sources(args, |key| env::var(key).ok())
    }

    /// Trailing bytes are always accepted; they show up as a non-identical re-encoding instead.
    pub fn from_sources(
        mut args: impl Iterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let input = args
            .next()
            .or_else(|| lookup(ENV_VAR_INPUT))
            .map_or_else(|| PathBuf::from(DEFAULT_INPUT), PathBuf::from);

        let mut decode = DecodeConfig {
            allow_trailing_bytes: true,
            ..DecodeConfig::default()
        };
        if let Some(s) = lookup(ENV_VAR_MAX_DEPTH) {
            decode.max_depth = s
                .trim()
                .parse()
                .with_context(|| format!("Parsing {ENV_VAR_MAX_DEPTH}={s:?}"))?;
        }

        Ok(Self { input, decode })
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct RoundTrip {
    pub members: usize,
    pub input_len: usize,
    pub reencoded_len: usize,
    pub identical: bool,
}

pub fn round_trip(buf: &[u8], config: DecodeConfig) -> Result<RoundTrip> {
    let cont = Container::decode_with(buf, config)?;
    let reencoded = cont.encode();
    Ok(RoundTrip {
        members: cont.len(),
        input_len: buf.len(),
        reencoded_len: reencoded.len(),
        identical: reencoded == buf,
    })
}

pub fn check_file(config: &CheckConfig) -> Result<RoundTrip> {
    let buf = fs::read(&config.input).with_context(|| format!("Reading {:?}", config.input))?;
    debug!(path = ?config.input, len = buf.len(), "Read input.");

    let report = round_trip(&buf, config.decode)
        .with_context(|| format!("Round-tripping {:?}", config.input))?;
    info!(
        members = report.members,
        input_len = report.input_len,
        reencoded_len = report.reencoded_len,
        identical = report.identical,
        "Round trip finished."
    );

    Ok(report)
}
