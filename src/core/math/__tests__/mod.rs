pub mod metrics_test;
pub mod normalize_test;
