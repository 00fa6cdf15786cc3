//! # 수렴 지표와 회절 효율

use super::normalize::min_max;
use crate::core::error::{ensure_same_shape, HoloError, Result};
use crate::core::target::TargetPattern;
use ndarray::{ArrayView2, Zip};

/// 균일도 `1 − (maxI − minI)/(maxI + minI)`
///
/// 광강도를 전체 최대값으로 나눈 뒤, 마스크가 선택한 픽셀에서만 최대/최소를 구한다.
/// 1이면 완전 균일. 병적인 입력에서는 음수가 될 수 있다.
pub fn uniformity(intensity: ArrayView2<f64>, target: &TargetPattern) -> Result<f64> {
    ensure_same_shape("균일도 광강도 격자", target.shape(), intensity.dim())?;

    let (_, global_max) = min_max(intensity)?;
    if global_max == 0.0 {
        return Err(HoloError::NumericDegeneracy("광강도 최대값이 0".to_string()));
    }

    let mut max_i = f64::NEG_INFINITY;
    let mut min_i = f64::INFINITY;
    let mut count = 0usize;
    Zip::from(intensity).and(target.mask()).for_each(|&v, &selected| {
        if selected {
            let scaled = v / global_max;
            max_i = max_i.max(scaled);
            min_i = min_i.min(scaled);
            count += 1;
        }
    });

    if count == 0 {
        return Err(HoloError::EmptyMask);
    }
    let sum = max_i + min_i;
    if sum == 0.0 {
        return Err(HoloError::NumericDegeneracy(
            "선택된 픽셀의 광강도가 모두 0".to_string(),
        ));
    }
    Ok(1.0 - (max_i - min_i) / sum)
}

/// 회절 효율: 선택 픽셀의 정규화 광강도 합 / 선택 픽셀 수
pub fn efficiency(norm_intensity: ArrayView2<f64>, target: &TargetPattern) -> Result<f64> {
    ensure_same_shape("효율 광강도 격자", target.shape(), norm_intensity.dim())?;

    let mut total = 0.0;
    let mut count = 0usize;
    Zip::from(norm_intensity)
        .and(target.mask())
        .for_each(|&v, &selected| {
            if selected {
                total += v;
                count += 1;
            }
        });

    if count == 0 {
        return Err(HoloError::EmptyMask);
    }
    Ok(total / count as f64)
}
