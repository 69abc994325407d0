//! Tests for configuration constants and explorer defaults

#[cfg(test)]
mod tests {
    use tessera::explore::ExplorerConfig;
    use tessera::io::configuration::{
        DEFAULT_LOG_FILTER, DEFAULT_MAX_STEPS, DEFAULT_MIN_SIMILARITY, DEFAULT_STOP_ON_RETURN,
        SIMILARITY_SCALE, VERBOSE_LOG_FILTER,
    };
    use tessera::tiles::Similarity;

    // Tests the explorer default configuration mirrors the constants
    // Verified by hard-coding a different default budget
    #[test]
    fn test_explorer_defaults() {
        let config = ExplorerConfig::default();

        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
        assert!((config.min_similarity - DEFAULT_MIN_SIMILARITY).abs() < f32::EPSILON);
        assert_eq!(config.stop_on_return, DEFAULT_STOP_ON_RETURN);
        assert!(config.validate().is_ok());
    }

    // Tests the similarity scale defines the full score
    // Verified by quantizing to tenths
    #[test]
    fn test_similarity_scale() {
        assert_eq!(Similarity::ONE.hundredths(), SIMILARITY_SCALE);
        assert_eq!(Similarity::from_ratio(1, 3).hundredths(), 33);
    }

    // Tests log filters target this crate
    // Verified by filtering a different target
    #[test]
    fn test_log_filters() {
        assert!(DEFAULT_LOG_FILTER.starts_with("tessera="));
        assert!(VERBOSE_LOG_FILTER.starts_with("tessera="));
        assert_ne!(DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER);
    }
}
