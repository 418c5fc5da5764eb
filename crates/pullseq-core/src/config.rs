//! Library configuration that downstream crates can serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqConfig {
    /// Bounded buffer between a `to_channel` worker and its reader.
    pub channel_capacity: usize,

    /// Thread name given to `to_channel` workers.
    pub worker_name: String,
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            worker_name: "pullseq-worker".to_string(),
        }
    }
}

static GLOBAL: Lazy<SeqConfig> = Lazy::new(SeqConfig::from_env);

impl SeqConfig {
    /// Process-wide config, read from the environment on first use.
    pub fn global() -> &'static SeqConfig {
        &GLOBAL
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PULLSEQ_CHANNEL_CAPACITY`: bounded channel size for `to_channel`
    /// - `PULLSEQ_WORKER_NAME`: worker thread name
    ///
    /// Unparsable or invalid values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("PULLSEQ_CHANNEL_CAPACITY") {
            match s.parse::<usize>() {
                Ok(v) if v > 0 => cfg.channel_capacity = v,
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(value = %s, "ignoring invalid PULLSEQ_CHANNEL_CAPACITY");
                }
            }
        }

        if let Ok(s) = std::env::var("PULLSEQ_WORKER_NAME") {
            if !s.trim().is_empty() {
                cfg.worker_name = s;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    pub fn with_worker_name(mut self, name: impl Into<String>) -> Self {
        self.worker_name = name.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_capacity == 0 {
            return Err(Error::Config("channel_capacity must be at least 1".into()));
        }
        if self.worker_name.trim().is_empty() {
            return Err(Error::Config("worker_name must not be empty".into()));
        }
        Ok(())
    }
}
