//! Linear trend forecasting of department time series
//!
//! Fits `value = intercept + slope * index` by ordinary least squares over the
//! 0-indexed period axis and projects it forward. Projections are floored at
//! zero since a department's future value cannot be negative.

use shared::TimeSeriesPoint;

/// Closed-form least-squares line over indices `0..n`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub intercept: f64,
    pub slope: f64,
    /// Number of observations the trend was fitted on
    pub observations: usize,
}

impl LinearTrend {
    /// Fit a trend to the observed values.
    ///
    /// An empty series fits the zero line and a single observation fits a flat
    /// line through it.
    pub fn fit(values: &[f64]) -> Self {
        let n = values.len();
        match n {
            0 => Self {
                intercept: 0.0,
                slope: 0.0,
                observations: 0,
            },
            1 => Self {
                intercept: values[0],
                slope: 0.0,
                observations: 1,
            },
            _ => {
                let nf = n as f64;
                let x_sum = (nf - 1.0) * nf / 2.0;
                let x2_sum = (nf - 1.0) * nf * (2.0 * nf - 1.0) / 6.0;
                let y_sum: f64 = values.iter().sum();
                let xy_sum: f64 = values.iter().enumerate().map(|(i, y)| i as f64 * y).sum();

                let denom = nf * x2_sum - x_sum * x_sum;
                let slope = if denom == 0.0 {
                    0.0
                } else {
                    (nf * xy_sum - x_sum * y_sum) / denom
                };
                let intercept = (y_sum - slope * x_sum) / nf;

                Self {
                    intercept,
                    slope,
                    observations: n,
                }
            }
        }
    }

    /// Value of the line at `index`, floored at zero
    pub fn project(&self, index: usize) -> f64 {
        (self.intercept + self.slope * index as f64).max(0.0)
    }

    /// Project `steps_ahead` periods past the last observation
    pub fn project_ahead(&self, steps_ahead: usize) -> Vec<f64> {
        (0..steps_ahead)
            .map(|k| self.project(self.observations.saturating_add(k)))
            .collect()
    }
}

/// Forecast the next `steps_ahead` values of a series
pub fn forecast(values: &[f64], steps_ahead: usize) -> Vec<f64> {
    LinearTrend::fit(values).project_ahead(steps_ahead)
}

/// Forecast from labelled points. Labels are not parsed; sequence order is chronological.
pub fn forecast_series(series: &[TimeSeriesPoint], steps_ahead: usize) -> Vec<f64> {
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    forecast(&values, steps_ahead)
}

/// Total projected value over the forecast horizon
pub fn estimate_future_impact(values: &[f64], steps_ahead: usize) -> f64 {
    let trend = LinearTrend::fit(values);
    (0..steps_ahead).map(|k| trend.project(trend.observations.saturating_add(k))).sum()
}
