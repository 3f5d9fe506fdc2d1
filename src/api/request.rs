//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structure for the
//! `/payroll/calculate` endpoint.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollSnapshot;

/// Request body for the `/payroll/calculate` endpoint.
///
/// Carries the full state snapshot plus the target month and any manual
/// exchange-rate overrides. Any date inside the target month identifies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Any date within the month to compute.
    pub target_date: NaiveDate,
    /// Manual exchange-rate overrides, shadowing the configured rates.
    #[serde(default)]
    pub manual_rates: HashMap<String, Decimal>,
    /// The full state snapshot to compute over.
    #[serde(flatten)]
    pub snapshot: PayrollSnapshot,
}
