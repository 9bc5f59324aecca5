//! Checkpoint - Save/Load Generator State
//!
//! Captures a TinyMT32 engine mid-stream so it can be stored or sent and
//! later resumed exactly where it left off.
//!
//! # Critical Invariants
//!
//! - **Continuation**: a restored engine yields the same words the
//!   captured engine would have yielded next
//! - **Config Matching**: a snapshot can only be restored against the seed
//!   tuple it was captured with
//! - **Period**: a degenerate (all-zero) state is never restored

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::{is_degenerate, SeedConfig, TinyMt32};

/// Errors that can occur when capturing or restoring a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config hash mismatch: snapshot has {expected}, config has {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("Snapshot tempering parameters do not match the seed config")]
    ParameterMismatch,

    #[error("Snapshot state is degenerate")]
    DegenerateState,
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete engine state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// State words at time of snapshot
    pub state: [u32; 4],

    pub mat1: u32,
    pub mat2: u32,
    pub tmat: u32,

    /// SHA256 hash of the seed config (for validation)
    pub config_hash: String,
}

impl GeneratorSnapshot {
    /// Capture the current state of `engine`, built from `config`
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::checkpoint::GeneratorSnapshot;
    /// use random_generator_core_rs::rng::{EntropySource, SeedConfig, TinyMt32};
    ///
    /// let config = SeedConfig::new(42);
    /// let mut engine = TinyMt32::new(config);
    /// engine.next_u32();
    ///
    /// let snapshot = GeneratorSnapshot::capture(&engine, &config).unwrap();
    /// let mut resumed = snapshot.restore(&config).unwrap();
    /// assert_eq!(engine.next_u32(), resumed.next_u32());
    /// ```
    pub fn capture(engine: &TinyMt32, config: &SeedConfig) -> Result<Self, CheckpointError> {
        let (mat1, mat2, tmat) = engine.parameters();
        if (mat1, mat2, tmat) != (config.mat1, config.mat2, config.tmat) {
            return Err(CheckpointError::ParameterMismatch);
        }

        let snapshot = Self {
            state: engine.state(),
            mat1,
            mat2,
            tmat,
            config_hash: compute_config_hash(config)?,
        };
        tracing::debug!(config_hash = %snapshot.config_hash, "captured generator snapshot");
        Ok(snapshot)
    }

    /// Rebuild the engine, validating the snapshot against `config`
    pub fn restore(&self, config: &SeedConfig) -> Result<TinyMt32, CheckpointError> {
        if let Err(e) = self.validate(config) {
            tracing::warn!(error = %e, "rejected generator snapshot");
            return Err(e);
        }

        tracing::debug!(config_hash = %self.config_hash, "restored generator snapshot");
        Ok(TinyMt32::from_parts(self.state, self.mat1, self.mat2, self.tmat))
    }

    fn validate(&self, config: &SeedConfig) -> Result<(), CheckpointError> {
        let actual = compute_config_hash(config)?;
        if actual != self.config_hash {
            return Err(CheckpointError::ConfigMismatch {
                expected: self.config_hash.clone(),
                actual,
            });
        }

        if (self.mat1, self.mat2, self.tmat) != (config.mat1, config.mat2, config.tmat) {
            return Err(CheckpointError::ParameterMismatch);
        }

        if is_degenerate(&self.state) {
            return Err(CheckpointError::DegenerateState);
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| {
            CheckpointError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| {
            CheckpointError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute SHA256 hash of a seed config
///
/// Keys are sorted before hashing, so the hash does not depend on field
/// order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, CheckpointError> {
    use serde_json::Value;

    let value = serde_json::to_value(config).map_err(|e| {
        CheckpointError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map.into_iter().collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                Value::Object(
                    entries
                        .into_iter()
                        .map(|(k, v)| (k, canonicalize(v)))
                        .collect(),
                )
            }
            Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        CheckpointError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
