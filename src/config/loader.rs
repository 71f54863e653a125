//! Settings file loading.
//!
//! This module provides the [`SettingsLoader`] type for loading per-worker
//! settings from a YAML or JSON file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{FinanceSettings, ThresholdSettings};

/// On-disk shape of a per-worker settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkerSettingsFile {
    #[serde(default)]
    thresholds: ThresholdSettings,
    #[serde(default)]
    finance: FinanceSettings,
}

/// Loads and provides access to per-worker settings.
///
/// The loader reads a single settings file with two optional sections,
/// `thresholds` and `finance`. Absent sections and absent fields take the
/// documented defaults, and malformed numeric fields coerce to zero, so a
/// partially filled file still yields usable settings.
///
/// # File format
///
/// ```yaml
/// thresholds:
///   regularHoursThreshold: 8
///   exemptOvertimeThreshold: 10
///   annualExemptLimit: 200
/// finance:
///   hourlyRate: 12.5
///   taxDeductionMode: both
///   socialSecurityRate: 11
/// ```
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
///
/// # Example
///
/// ```no_run
/// use earnings_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./settings/worker_001.yaml")?;
/// println!("hourly rate: {}", loader.finance().hourly_rate);
/// # Ok::<(), earnings_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    thresholds: ThresholdSettings,
    finance: FinanceSettings,
}

impl SettingsLoader {
    /// Loads settings from the specified file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SettingsNotFound`] if the file cannot be
    /// read, or [`EngineError::SettingsParseError`] if it is not valid
    /// YAML/JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        let file: WorkerSettingsFile = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
        };

        debug!(
            path = %path_str,
            irs_strategy = ?file.finance.irs_strategy(),
            "worker settings loaded"
        );

        Ok(Self {
            thresholds: file.thresholds,
            finance: file.finance,
        })
    }

    /// Returns the threshold settings.
    pub fn thresholds(&self) -> &ThresholdSettings {
        &self.thresholds
    }

    /// Returns the finance settings.
    pub fn finance(&self) -> &FinanceSettings {
        &self.finance
    }

    /// Consumes the loader, returning both settings objects.
    pub fn into_parts(self) -> (ThresholdSettings, FinanceSettings) {
        (self.thresholds, self.finance)
    }
}
