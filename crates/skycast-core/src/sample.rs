// File: crates/skycast-core/src/sample.rs
// Summary: Labeled sample series forming the chart's x-axis (order = position).

use crate::model::HourlyEntry;

/// One labeled value on the curve (e.g., an hour label and a temperature).
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered sequence of samples. Position on the x-axis is the sample index;
/// an empty series is valid and renders to nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build a temperature series from hourly forecast entries.
    pub fn from_hourly(hours: &[HourlyEntry]) -> Self {
        Self {
            samples: hours
                .iter()
                .map(|h| Sample::new(h.time.clone(), h.temp))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Min and max value across the series, or `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.samples.iter().map(|s| s.value);
        let first = it.next()?;
        let mut min_v = first;
        let mut max_v = first;
        for v in it {
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }
        Some((min_v, max_v))
    }
}
