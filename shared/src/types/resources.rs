//! Historical and resource inputs supplied by the request layer

use serde::{Deserialize, Serialize};

/// One observation of a department's historical series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Period label, e.g. "2024-Q1" or "2025-01". Never parsed; order is taken from the sequence.
    pub period: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// Historical financial series for one department, in chronological order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepartmentHistoricalData {
    pub department: String,
    pub series: Vec<TimeSeriesPoint>,
}

impl DepartmentHistoricalData {
    /// Build a series with generated `t0, t1, ...` period labels
    pub fn from_values(department: impl Into<String>, values: &[f64]) -> Self {
        Self {
            department: department.into(),
            series: values
                .iter()
                .enumerate()
                .map(|(i, value)| TimeSeriesPoint::new(format!("t{i}"), *value))
                .collect(),
        }
    }

    /// Observed values in series order
    pub fn values(&self) -> Vec<f64> {
        self.series.iter().map(|p| p.value).collect()
    }
}

/// Staffing information; carried through the pipeline untouched
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HumanResourceData {
    pub department: String,
    pub headcount: u32,
    pub utilization_rate: f64,
}

/// Equipment and facility information; carried through the pipeline untouched
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalResourceData {
    pub resource: String,
    pub quantity: f64,
    pub utilization_rate: f64,
}
