//! # 가중 GS 재가중 법칙
//!
//! 선택 픽셀에서 `weighted = sqrt(target / normIntensity) · targetU`.
//! 선택되지 않은 픽셀은 건드리지 않으므로 `weighted`는 호출 전에 결정적으로 초기화되어 있어야 한다.
//! 결과는 다음 반복의 `targetU`로 쓰기 전에 다시 정규화해야 한다.

use crate::core::error::{ensure_same_shape, HoloError, Result};
use crate::core::target::TargetPattern;
use ndarray::{Array2, ArrayView2, Zip};

pub fn apply_weights(
    weighted: &mut Array2<f64>,
    target: &TargetPattern,
    target_u: ArrayView2<f64>,
    norm_intensity: ArrayView2<f64>,
) -> Result<()> {
    let shape = target.shape();
    ensure_same_shape("가중 광장", shape, weighted.dim())?;
    ensure_same_shape("목표 광장", shape, target_u.dim())?;
    ensure_same_shape("정규화 광강도", shape, norm_intensity.dim())?;

    // 부분 갱신을 막기 위해 쓰기 전에 검사
    let degenerate = target
        .mask()
        .iter()
        .zip(norm_intensity.iter())
        .any(|(&selected, &n)| selected && n == 0.0);
    if degenerate {
        return Err(HoloError::NumericDegeneracy(
            "선택된 픽셀의 정규화 광강도가 0".to_string(),
        ));
    }

    Zip::from(weighted)
        .and(target.mask())
        .and(target.weights())
        .and(target_u)
        .and(norm_intensity)
        .for_each(|w, &selected, &t, &u, &n| {
            if selected {
                *w = (t / n).sqrt() * u;
            }
        });
    Ok(())
}
