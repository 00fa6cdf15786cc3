//! # 반복 구성
//!
//! 실행마다 컨트롤러에 넘기는 불변 구성 값. 전역 상태 없음.

use crate::core::error::{HoloError, Result};
use crate::core::target::MaskPolicy;
use anyhow::Context;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::path::Path;

/// 초기 위상 분포
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialPhase {
    /// [0, 1) 균등 분포
    UnitInterval,
    /// [0, 2π) 균등 분포
    FullCircle,
}

impl Default for InitialPhase {
    fn default() -> Self {
        InitialPhase::UnitInterval
    }
}

impl InitialPhase {
    /// 행 우선 순서로 `shape` 크기의 위상 격자를 뽑는다
    pub fn sample<R: Rng>(&self, shape: (usize, usize), rng: &mut R) -> Array2<f64> {
        let scale = match self {
            InitialPhase::UnitInterval => 1.0,
            InitialPhase::FullCircle => TAU,
        };
        Array2::from_shape_simple_fn(shape, || scale * rng.gen::<f64>())
    }
}

/// 가중 GS 반복 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GsConfig {
    /// 최대 반복 수 (≥ 1)
    pub max_iterations: usize,
    /// 균일도 목표 (이 값 이상이면 수렴)
    pub uniformity_threshold: f64,
    /// 초기 위상 분포
    pub initial_phase: InitialPhase,
    /// 초기 위상 난수 시드 (없으면 엔트로피)
    pub seed: Option<u64>,
    /// 목표 마스크 규칙
    pub mask_policy: MaskPolicy,
}

impl Default for GsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            uniformity_threshold: 0.66,
            initial_phase: InitialPhase::UnitInterval,
            seed: None,
            mask_policy: MaskPolicy::Exact,
        }
    }
}

impl GsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_uniformity_threshold(mut self, threshold: f64) -> Self {
        self.uniformity_threshold = threshold;
        self
    }

    pub fn with_initial_phase(mut self, initial_phase: InitialPhase) -> Self {
        self.initial_phase = initial_phase;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_mask_policy(mut self, policy: MaskPolicy) -> Self {
        self.mask_policy = policy;
        self
    }

    /// 구성 검증
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations < 1 {
            return Err(HoloError::InputShape(
                "max_iterations는 1 이상이어야 함".to_string(),
            ));
        }
        let t = self.uniformity_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(HoloError::InvalidConfig(format!(
                "uniformity_threshold는 [0, 1] 범위여야 함: {}",
                t
            )));
        }
        if let MaskPolicy::Tolerance(eps) = self.mask_policy {
            if !eps.is_finite() || eps < 0.0 {
                return Err(HoloError::InvalidConfig(format!(
                    "마스크 허용오차가 잘못됨: {}",
                    eps
                )));
            }
        }
        Ok(())
    }

    /// JSON 파일에서 구성 로드 (누락 필드는 기본값)
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("구성 파일을 읽을 수 없음: {}", path.display()))?;
        let config: GsConfig = serde_json::from_str(&text)
            .with_context(|| format!("구성 파일 파싱 실패: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
