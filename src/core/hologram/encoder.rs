//! # 위상 → 8비트 홀로그램
//!
//! 음의 위상에 2π를 더해 [0, 2π)로 접고, 정규화 후 255를 곱해 절삭한다.

use crate::core::error::Result;
use crate::core::math::normalize;
use ndarray::{Array2, ArrayView2};
use std::f64::consts::TAU;

/// 위상 격자를 8비트 홀로그램으로 양자화
///
/// 상수 위상 격자는 정규화할 수 없으므로 `NumericDegeneracy`.
pub fn encode_hologram(phase: ArrayView2<f64>) -> Result<Array2<u8>> {
    let wrapped = phase.mapv(|p| p.rem_euclid(TAU));
    let norm = normalize(wrapped.view())?;
    Ok(norm.mapv(|v| (v * 255.0) as u8))
}

/// 재구성 미리보기: 정규화 광강도 × 255 (절삭)
pub fn reconstruct(norm_intensity: ArrayView2<f64>) -> Array2<u8> {
    norm_intensity.mapv(|v| (v.clamp(0.0, 1.0) * 255.0) as u8)
}
