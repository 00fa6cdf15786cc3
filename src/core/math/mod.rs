//! # 수치 단계
//!
//! 정규화, 균일도 평가, 재가중, 회절 효율

pub mod metrics;
pub mod normalize;
pub mod weighting;

pub use metrics::{efficiency, uniformity};
pub use normalize::{min_max, normalize};
pub use weighting::apply_weights;

#[cfg(test)]
mod __tests__;
