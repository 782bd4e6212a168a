/// Benchmark parameters, passed explicitly into the driver.
///
/// The whole harness configuration travels through this one struct; there
/// is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Square matrix dimensions to measure.
    pub sizes: Vec<usize>,
    /// Measured iterations per size.
    pub iterations: u32,
    /// Untimed warmup iterations per size.
    pub warmup_iterations: u32,
    /// Seed for the left operand.
    pub seed_a: u64,
    /// Seed for the right operand.
    pub seed_b: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: vec![128, 256, 512, 1024],
            iterations: 5,
            warmup_iterations: 3,
            seed_a: 42,
            seed_b: 43,
        }
    }
}

/// Stdout rendering mode for the driver binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse a CLI argument. Unknown values fall back to `Text`.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "csv" => OutputFormat::Csv,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes, vec![128, 256, 512, 1024]);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.warmup_iterations, 3);
        assert_eq!(config.seed_a, 42);
        assert_eq!(config.seed_b, 43);
    }

    #[test]
    fn test_format_from_arg() {
        assert_eq!(OutputFormat::from_arg("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_arg("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_arg("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_arg("bogus"), OutputFormat::Text);
    }
}
