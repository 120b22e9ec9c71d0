use crate::sources::UniformSource;

/// Replays a fixed list of draws, wrapping around at the end.
pub struct ScriptedSource {
    values: Vec<f64>,
    idx: usize,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self {
            values,
            idx: 0,
            draws: 0,
        }
    }

    /// Flattens `(x, y)` pairs into the draw order the estimator uses.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().flat_map(|&(x, y)| [x, y]).collect())
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.idx];
        self.idx = (self.idx + 1) % self.values.len();
        self.draws += 1;
        v
    }

    fn restart(&mut self) {
        self.idx = 0;
        self.draws = 0;
    }
}
