/// Minimum percentage that counts as a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassPolicy {
    threshold_percent: u32,
}

impl PassPolicy {
    /// Pass mark used for IC38 practice when nothing else is configured.
    pub const DEFAULT_THRESHOLD_PERCENT: u32 = 35;

    /// Threshold values above 100 are clamped.
    #[must_use]
    pub fn new(threshold_percent: u32) -> Self {
        Self {
            threshold_percent: threshold_percent.min(100),
        }
    }

    #[must_use]
    pub fn threshold_percent(&self) -> u32 {
        self.threshold_percent
    }

    #[must_use]
    pub fn passes(&self, percentage: u32) -> bool {
        percentage >= self.threshold_percent
    }
}

impl Default for PassPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD_PERCENT)
    }
}

/// Score of a submitted attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub passed: bool,
}

impl ScoreReport {
    #[must_use]
    pub fn new(score: usize, total: usize, policy: &PassPolicy) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            passed: policy.passes(percentage),
        }
    }
}

/// `round(100 * score / total)`, rounding halves up; 0 for an empty attempt.
#[must_use]
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * score + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(7, 10), 70);
        assert_eq!(percentage(30, 30), 100);
        assert_eq!(percentage(0, 30), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn default_pass_mark_is_35() {
        let policy = PassPolicy::default();
        assert_eq!(policy.threshold_percent(), 35);
        assert!(policy.passes(35));
        assert!(!policy.passes(34));
    }

    #[test]
    fn report_uses_policy() {
        let report = ScoreReport::new(7, 10, &PassPolicy::default());
        assert_eq!(report.percentage, 70);
        assert!(report.passed);

        let strict = ScoreReport::new(7, 10, &PassPolicy::new(75));
        assert!(!strict.passed);

        let borderline = ScoreReport::new(10, 30, &PassPolicy::default());
        assert_eq!(borderline.percentage, 33);
        assert!(!borderline.passed);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(PassPolicy::new(250).threshold_percent(), 100);
    }
}
