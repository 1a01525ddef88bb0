//! Correction-index rate table.
//!
//! The periodic rates here are static placeholders for the usual contract
//! correction indexes; live index fetching is out of scope. The table is
//! injected into the orchestrator so rate sources can be swapped or tested
//! independently instead of living as process-wide constants.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Percent;

/// Which index corrects the financed installments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionIndex {
    /// Interbank deposit rate.
    Cdi,
    /// General market price index.
    Igpm,
    /// Construction cost index.
    Incc,
    /// Caller-supplied fixed periodic rate.
    Fixed,
}

/// Periodic rate per correction index, in percent per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub cdi: Percent,
    pub igpm: Percent,
    pub incc: Percent,
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            cdi: dec!(0.87),
            igpm: dec!(1.04),
            incc: dec!(0.68),
        }
    }
}

impl RateTable {
    /// Resolve the periodic rate for an index. `Fixed` bypasses the table
    /// and uses the caller-supplied rate.
    pub fn periodic_rate(&self, index: CorrectionIndex, custom_rate: Percent) -> Percent {
        match index {
            CorrectionIndex::Cdi => self.cdi,
            CorrectionIndex::Igpm => self.igpm,
            CorrectionIndex::Incc => self.incc,
            CorrectionIndex::Fixed => custom_rate,
        }
    }
}
