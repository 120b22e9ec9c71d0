use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// Streaming mean: `mean = sum / len`.
///
/// Unlike a plain division, an empty accumulator reports `0.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningMean {
    len: usize,
    sum: f64,
}

impl RunningMean {
    #[inline]
    pub fn add(&mut self, v: f64) {
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            0.0
        }
    }
}

impl Extend<f64> for RunningMean {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub count: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "count={}, mean={:.6}", self.count, self.mean)
    }
}

pub fn summarize(values: &[f64]) -> Summary {
    let mut acc = RunningMean::default();
    acc.extend(values.iter().copied());
    Summary {
        mean: acc.mean(),
        count: acc.len(),
    }
}
