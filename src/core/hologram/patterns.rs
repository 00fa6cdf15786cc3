//! # 보정용 8비트 위상 패턴과 홀로그램 후처리
//!
//! 8비트 값 한 단계는 2π/256 위상이므로 패턴 합성은 256 모듈로 덧셈이다.

use crate::core::error::{ensure_same_shape, HoloError, Result};
use ndarray::{s, Array2, ArrayView2, Zip};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// 격자 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GratingAxis {
    /// 열을 따라 톱니가 반복 (세로 줄무늬)
    Vertical,
    /// 행을 따라 톱니가 반복 (가로 줄무늬)
    Horizontal,
}

/// 톱니형 블레이즈 격자, `period` 픽셀마다 0 → 255
pub fn blazed_grating(rows: usize, cols: usize, period: usize, axis: GratingAxis) -> Result<Array2<u8>> {
    if period == 0 {
        return Err(HoloError::InputShape("격자 주기는 1 이상이어야 함".to_string()));
    }
    Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
        let coord = match axis {
            GratingAxis::Vertical => c,
            GratingAxis::Horizontal => r,
        };
        ((coord % period) * 256 / period) as u8
    }))
}

/// 프레넬 렌즈 위상 `strength · ρ²` (ρ는 중앙으로부터 픽셀 거리), 2π로 접어 8비트로
pub fn fresnel_lens(rows: usize, cols: usize, strength: f64) -> Result<Array2<u8>> {
    if !strength.is_finite() {
        return Err(HoloError::InvalidConfig(format!(
            "렌즈 세기가 유한하지 않음: {}",
            strength
        )));
    }
    let (cy, cx) = ((rows / 2) as f64, (cols / 2) as f64);
    Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
        let dy = r as f64 - cy;
        let dx = c as f64 - cx;
        let phase = (strength * (dx * dx + dy * dy)).rem_euclid(TAU);
        ((phase / TAU * 256.0) as usize).min(255) as u8
    }))
}

/// 홀로그램에 위상 패턴을 더한다 (256 모듈로)
pub fn overlay(holo: ArrayView2<u8>, pattern: ArrayView2<u8>) -> Result<Array2<u8>> {
    ensure_same_shape("오버레이 패턴", holo.dim(), pattern.dim())?;
    Ok(Zip::from(holo)
        .and(pattern)
        .map_collect(|&h, &p| h.wrapping_add(p)))
}

/// 패널 방향에 맞춰 시계 방향 90° 회전
pub fn rotate_clockwise(holo: ArrayView2<u8>) -> Array2<u8> {
    holo.slice(s![..;-1, ..]).t().as_standard_layout().into_owned()
}
