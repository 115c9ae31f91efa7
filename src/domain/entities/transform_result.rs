use std::time::Duration;

/// Output of one codec run with its timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    output: Vec<u8>,
    elapsed: Duration,
}

impl TransformResult {
    pub fn new(output: Vec<u8>, elapsed: Duration) -> Self {
        Self { output, elapsed }
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Output size in KiB, fractional
    pub fn output_kib(&self) -> f64 {
        self.output.len() as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_result_sizes() {
        let result = TransformResult::new(vec![0u8; 1536], Duration::from_millis(3));
        assert_eq!(result.output_len(), 1536);
        assert!((result.output_kib() - 1.5).abs() < f64::EPSILON);
        assert_eq!(result.elapsed(), Duration::from_millis(3));
        assert_eq!(result.into_output().len(), 1536);
    }
}
