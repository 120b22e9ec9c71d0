//! Default binning for text surfaces.
//!
//! Bin count follows Sturges' rule (`ceil(log2 n) + 1`), bins are equal width
//! over `[min, max]` and the last bin is closed on the right.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bins {
    bins: Vec<Bin>,
}

pub fn sturges_bin_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (n as f64).log2().ceil() as usize + 1
}

impl Bins {
    pub fn auto(values: &[f64]) -> Self {
        let finite = values.iter().filter(|v| v.is_finite()).count();
        Self::with_count(values, sturges_bin_count(finite))
    }

    /// Equal-width bins; non-finite values are skipped.
    pub fn with_count(values: &[f64], count: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || count == 0 {
            return Self::default();
        }

        let (min, max) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        if min == max {
            return Self {
                bins: vec![Bin {
                    lower: min,
                    upper: max,
                    count: finite.len(),
                }],
            };
        }

        let width = (max - min) / count as f64;
        let mut bins: Vec<Bin> = (0..count)
            .map(|i| Bin {
                lower: min + width * i as f64,
                upper: if i + 1 == count {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for v in finite {
            let idx = (((v - min) / width) as usize).min(count - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
