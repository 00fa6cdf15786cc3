//! # 목표 패턴
//!
//! 외부 프레임을 목표 패턴으로 바꾸는 규칙과 합성 목표 생성기

pub mod generator;
pub mod pattern;

pub use generator::{dot_grid, gaussian_spot, DotGrid, SpotPath};
pub use pattern::{MaskPolicy, TargetPattern, DEFAULT_BINARIZE_THRESHOLD};

#[cfg(test)]
mod __tests__;
