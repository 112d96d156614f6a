use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};

/// Default placeholder written into missing price and date cells.
pub const DEFAULT_MISSING_MARKER: &str = "Missing";

/// Value written into missing quantity cells under every policy.
pub const QUANTITY_FILL_VALUE: &str = "0";

/// How missing price values are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Price and date cells get the missing marker, quantity cells get `0`.
    #[default]
    Sentinel,
    /// Price cells get the median of the valid prices, quantity cells get `0`.
    /// Date cells are left untouched.
    Median,
}

impl FillPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sentinel => "sentinel",
            Self::Median => "median",
        }
    }
}

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Fill policy for missing and non-numeric values.
    pub fill_policy: FillPolicy,

    /// Placeholder for missing price and date cells. Also used for prices
    /// under [`FillPolicy::Median`] when no valid price exists.
    pub missing_marker: String,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            fill_policy: FillPolicy::default(),
            missing_marker: DEFAULT_MISSING_MARKER.to_string(),
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fill_policy(mut self, policy: FillPolicy) -> Self {
        self.fill_policy = policy;
        self
    }

    #[must_use]
    pub fn with_missing_marker(mut self, marker: impl Into<String>) -> Self {
        self.missing_marker = marker.into();
        self
    }

    /// Checks that the options can produce a table satisfying the cleaning
    /// invariants.
    pub fn validate(&self) -> Result<()> {
        if self.missing_marker.trim().is_empty() {
            return Err(NormalizationError::BlankMissingMarker);
        }
        Ok(())
    }
}
