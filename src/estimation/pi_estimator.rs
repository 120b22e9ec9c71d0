use crate::estimation::{EstimateError, ensure_positive};
use crate::sources::UniformSource;

/// Counts of draws that landed inside the quarter circle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub inside: u64,
    pub total: u64,
}

impl Tally {
    #[inline]
    pub fn record(&mut self, x: f64, y: f64) {
        self.total += 1;
        if is_inside_quarter_circle(x, y) {
            self.inside += 1;
        }
    }

    /// `4 * inside / total`, or `None` before the first draw.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(4.0 * self.inside as f64 / self.total as f64)
    }
}

/// Strict inclusion test against the unit circle.
///
/// Points exactly on the boundary count as outside.
#[inline]
pub fn is_inside_quarter_circle(x: f64, y: f64) -> bool {
    x * x + y * y < 1.0
}

/// Produces one estimate of pi from `sample_count` points in the unit square.
///
/// Each point takes two consecutive draws from `source` (x first, then y).
/// Since both coordinates are in `[0, 1)` only the first quadrant is sampled,
/// and the inside fraction approximates `pi / 4`.
///
/// Returns [`EstimateError::InvalidArgument`] when `sample_count` is zero.
pub fn estimate<S>(source: &mut S, sample_count: u64) -> Result<f64, EstimateError>
where
    S: UniformSource + ?Sized,
{
    ensure_positive("sample_count", sample_count)?;

    let mut tally = Tally::default();
    while tally.total < sample_count {
        let x = source.next_unit();
        let y = source.next_unit();
        tally.record(x, y);
    }

    // total == sample_count > 0 here
    Ok(tally.ratio().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::RandomSource;
    use crate::testing::ScriptedSource;
    use std::f64::consts::PI;

    #[test]
    fn four_point_scenario_yields_three() {
        let mut source =
            ScriptedSource::from_points(&[(0.1, 0.1), (0.9, 0.9), (0.5, 0.5), (0.99, 0.01)]);
        let got = estimate(&mut source, 4).unwrap();
        assert_eq!(got, 3.0);
        assert_eq!(source.draws(), 8);
    }

    #[test]
    fn zero_samples_is_invalid_argument() {
        let mut source = RandomSource::seeded(1);
        let err = estimate(&mut source, 0).unwrap_err();
        assert_eq!(
            err,
            EstimateError::InvalidArgument {
                name: "sample_count",
                value: 0
            }
        );
    }

    #[test]
    fn boundary_point_is_outside() {
        assert!(!is_inside_quarter_circle(1.0, 0.0));
        assert!(!is_inside_quarter_circle(0.6, 0.8));
        assert!(is_inside_quarter_circle(0.0, 0.0));
        assert!(is_inside_quarter_circle(0.6, 0.79));
    }

    #[test]
    fn all_inside_gives_four_all_outside_gives_zero() {
        let mut inside = ScriptedSource::new(vec![0.0]);
        assert_eq!(estimate(&mut inside, 10).unwrap(), 4.0);

        let mut outside = ScriptedSource::new(vec![0.99]);
        assert_eq!(estimate(&mut outside, 10).unwrap(), 0.0);
    }

    #[test]
    fn estimates_stay_in_closed_range() {
        let mut source = RandomSource::seeded(99);
        for n in [1u64, 2, 3, 7, 50, 1_000] {
            let v = estimate(&mut source, n).unwrap();
            assert!((0.0..=4.0).contains(&v), "n={n} v={v}");
        }
    }

    #[test]
    fn large_sample_converges_to_pi() {
        let mut source = RandomSource::seeded(2024);
        let v = estimate(&mut source, 1_000_000).unwrap();
        assert!((v - PI).abs() < 0.01, "estimate={v}");
    }

    #[test]
    fn tally_ratio_none_when_empty() {
        let mut t = Tally::default();
        assert_eq!(t.ratio(), None);
        t.record(0.1, 0.1);
        t.record(0.9, 0.9);
        assert_eq!(t, Tally { inside: 1, total: 2 });
        assert_eq!(t.ratio(), Some(2.0));
    }
}
