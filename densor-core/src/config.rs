//! Runtime configuration.
//!
//! Elementwise operators switch to rayon parallel iterators once an operand holds
//! at least [`Config::par_threshold`] elements. The threshold is read once from the
//! `DENSOR_PAR_THRESHOLD` environment variable, or can be pinned by the
//! application with [`set_global`] before the first operator runs.

use std::sync::OnceLock;

use crate::{bail, Context, Result};

/// Environment variable holding the parallel threshold, in elements.
pub const PAR_THRESHOLD_ENV: &str = "DENSOR_PAR_THRESHOLD";

pub const DEFAULT_PAR_THRESHOLD: usize = 32 * 1024;

static GLOBAL: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum element count for which operators run in parallel.
    pub par_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            par_threshold: DEFAULT_PAR_THRESHOLD,
        }
    }
}

impl Config {
    /// Build a config from an optional raw threshold value.
    pub fn parse(par_threshold: Option<&str>) -> Result<Self> {
        let Some(raw) = par_threshold else {
            return Ok(Self::default());
        };
        let par_threshold = raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid {PAR_THRESHOLD_ENV} value {raw:?}"))?;
        Ok(Self { par_threshold })
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(PAR_THRESHOLD_ENV).ok();
        Self::parse(raw.as_deref())
    }

    pub(crate) fn should_parallelize(&self, len: usize) -> bool {
        len >= self.par_threshold
    }
}

/// The process-wide config, resolved from the environment on first use.
pub fn global() -> &'static Config {
    GLOBAL.get_or_init(|| {
        let cfg = Config::from_env().unwrap_or_else(|err| {
            tracing::warn!("{err}, falling back to the default config");
            Config::default()
        });
        tracing::debug!(par_threshold = cfg.par_threshold, "resolved densor config");
        cfg
    })
}

/// Pin the process-wide config. Fails once the config has been resolved.
pub fn set_global(cfg: Config) -> Result<()> {
    if GLOBAL.set(cfg).is_err() {
        bail!(
            "densor config already resolved as {:?}",
            GLOBAL.get().copied().unwrap_or_default()
        );
    }
    tracing::debug!(par_threshold = cfg.par_threshold, "pinned densor config");
    Ok(())
}
