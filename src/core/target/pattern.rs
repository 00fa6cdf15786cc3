//! # 목표 광강도 패턴
//!
//! 연속 세기 가중치 격자와, 가중치 알고리즘이 실제로 쓰는 선택 마스크를 함께 보관한다.
//! 마스크는 생성 시 한 번 계산되므로 이후 단계는 부동소수 동치 비교에 의존하지 않는다.

use crate::core::error::{HoloError, Result};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// 이진화 기본 임계값 (이 값을 초과하는 픽셀은 255로 올림)
pub const DEFAULT_BINARIZE_THRESHOLD: u8 = 150;

/// 가중치 → 선택 마스크 변환 규칙
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaskPolicy {
    /// `w == 1.0` 정확히 같은 픽셀만 선택
    Exact,
    /// `|w − 1| ≤ eps` 인 픽셀 선택
    Tolerance(f64),
}

impl Default for MaskPolicy {
    fn default() -> Self {
        MaskPolicy::Exact
    }
}

impl MaskPolicy {
    pub fn selects(&self, weight: f64) -> bool {
        match *self {
            MaskPolicy::Exact => weight == 1.0,
            MaskPolicy::Tolerance(eps) => (weight - 1.0).abs() <= eps,
        }
    }
}

/// 목표 패턴 (실행 동안 크기 고정, 읽기 전용)
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPattern {
    weights: Array2<f64>,
    mask: Array2<bool>,
    selected: usize,
}

impl TargetPattern {
    /// [0, 1] 가중치 격자로부터 생성
    pub fn from_weights(weights: Array2<f64>, policy: MaskPolicy) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || cols == 0 {
            return Err(HoloError::InputShape(format!(
                "목표 격자는 비어 있을 수 없음: {}×{}",
                rows, cols
            )));
        }
        if let MaskPolicy::Tolerance(eps) = policy {
            if !eps.is_finite() || eps < 0.0 {
                return Err(HoloError::InvalidConfig(format!("마스크 허용오차가 잘못됨: {}", eps)));
            }
        }
        if let Some(bad) = weights.iter().find(|w| !(0.0..=1.0).contains(*w)) {
            return Err(HoloError::InputShape(format!(
                "목표 가중치는 [0, 1] 범위여야 함: {}",
                bad
            )));
        }

        let mask = weights.mapv(|w| policy.selects(w));
        let selected = mask.iter().filter(|&&m| m).count();
        if selected == 0 {
            return Err(HoloError::EmptyMask);
        }

        Ok(Self {
            weights,
            mask,
            selected,
        })
    }

    /// 8비트 회색조 프레임을 이진화·정규화해 생성
    ///
    /// `threshold`를 초과하는 픽셀은 255로 올리고, 모든 픽셀을 255로 나눈다.
    /// 임계값 이하 픽셀은 연속 가중치로 남지만 마스크에서는 빠진다.
    pub fn from_gray_frame(frame: ArrayView2<u8>, threshold: u8, policy: MaskPolicy) -> Result<Self> {
        let weights = frame.mapv(|p| {
            let level = if p > threshold { 255 } else { p };
            level as f64 / 255.0
        });
        Self::from_weights(weights, policy)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.weights.dim()
    }

    pub fn weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    pub fn mask(&self) -> ArrayView2<'_, bool> {
        self.mask.view()
    }

    pub fn selected_count(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.mask.get((row, col)).copied().unwrap_or(false)
    }
}
