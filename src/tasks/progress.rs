use std::fmt::{Display, Formatter, Result};

/// Point-in-time view of a running series, sent over the progress channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Progress {
    pub completed: u64,
    pub total: u64,
    pub latest: f64,
    pub elapsed_seconds: f64,
}

impl Progress {
    pub fn is_final(&self) -> bool {
        self.completed == self.total
    }

    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "done={}/{}, latest={:.6}, t={:.3}s",
            self.completed, self.total, self.latest, self.elapsed_seconds
        )
    }
}
