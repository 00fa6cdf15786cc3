//! 실행 결과

use crate::core::error::Result;
use crate::core::hologram::encode_hologram;
use crate::core::math::efficiency;
use crate::core::target::TargetPattern;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 종료 상태. 둘 다 정상 종료이며 결과 모양이 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalState {
    /// 균일도 ≥ 임계값
    Converged,
    /// 임계값에 못 미친 채 최대 반복 도달
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GsOutcome {
    /// LCOS 평면 위상 (−π, π]
    pub phase: Array2<f64>,
    /// 마지막 반복의 목표 평면 정규화 광강도
    pub norm_intensity: Array2<f64>,
    /// 반복마다 하나씩 기록된 균일도
    pub history: Vec<f64>,
    pub terminal: TerminalState,
}

impl GsOutcome {
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    pub fn final_uniformity(&self) -> Option<f64> {
        self.history.last().copied()
    }

    pub fn converged(&self) -> bool {
        self.terminal == TerminalState::Converged
    }

    /// 8비트 홀로그램
    pub fn hologram(&self) -> Result<Array2<u8>> {
        encode_hologram(self.phase.view())
    }

    pub fn efficiency(&self, target: &TargetPattern) -> Result<f64> {
        efficiency(self.norm_intensity.view(), target)
    }
}
