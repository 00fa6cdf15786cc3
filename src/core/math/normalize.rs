//! 최소/최대 기반 [0, 1] 정규화

use crate::core::error::{HoloError, Result};
use ndarray::{Array2, ArrayView2, Zip};

/// 격자의 (최소, 최대). 비어 있으면 형상 오류, NaN/무한대가 있으면 수치 퇴화.
pub fn min_max(grid: ArrayView2<f64>) -> Result<(f64, f64)> {
    if grid.is_empty() {
        return Err(HoloError::InputShape("빈 격자의 최소/최대".to_string()));
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in grid.iter() {
        if !v.is_finite() {
            return Err(HoloError::NumericDegeneracy(format!("유한하지 않은 값: {}", v)));
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok((lo, hi))
}

/// `(x − min) / (max − min)`
///
/// 상수 격자(max == min)는 0 나눗셈이므로 `NumericDegeneracy`.
pub fn normalize(grid: ArrayView2<f64>) -> Result<Array2<f64>> {
    let (lo, hi) = min_max(grid)?;
    let span = hi - lo;
    if span == 0.0 {
        return Err(HoloError::NumericDegeneracy(format!(
            "상수 격자는 정규화할 수 없음 (값 {})",
            lo
        )));
    }
    Ok(Zip::from(grid).par_map_collect(|&v| (v - lo) / span))
}
