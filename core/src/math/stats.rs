pub struct StatsHelper;

impl StatsHelper {
    pub fn total(samples: &[f64]) -> f64 {
        samples.iter().sum()
    }

    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        Self::total(samples) / samples.len() as f64
    }

    pub fn peak(samples: &[f64]) -> Option<f64> {
        samples.iter().cloned().reduce(f64::max)
    }

    pub fn shares(values: &[f64]) -> Vec<f64> {
        let total = Self::total(values);
        if total <= 0.0 {
            return vec![0.0; values.len()];
        }
        values.iter().map(|value| value / total * 100.0).collect()
    }
}
