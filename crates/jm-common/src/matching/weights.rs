/// Rule-based estimator weights (final deterministic score).
/// Field carries the most signal; salary the least.
pub const RULE_WEIGHTS: Weights = Weights {
    field: 0.35,
    skills: 0.25,
    experience: 0.15,
    education: 0.10,
    location: 0.10,
    salary: 0.05,
};

/// Weights quoted to the remote model as scoring guidance, and used by
/// the local fallback when the remote call yields no usable signal.
///
/// Intentionally NOT the same table as [`RULE_WEIGHTS`]: the two
/// estimators inherited slightly different weightings and both are
/// preserved as-is for behavioral parity.
pub const REMOTE_FALLBACK_WEIGHTS: Weights = Weights {
    field: 0.30,
    skills: 0.25,
    experience: 0.20,
    education: 0.05,
    location: 0.15,
    salary: 0.05,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub field: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
    pub salary: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.field + self.skills + self.experience + self.education + self.location + self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((RULE_WEIGHTS.sum() - 1.0).abs() < 1e-6);
        assert!((REMOTE_FALLBACK_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
