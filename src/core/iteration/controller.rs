//! # 가중 Gerchberg–Saxton 반복 컨트롤러
//!
//! 상태 `{phase, weighted_target, history}`를 한 실행 동안 독점 소유한다.
//! 한 반복:
//! 1. 단위 진폭 광장 → 정방향 전파
//! 2. 전파된 광장의 위상 = 작업 위상
//! 3. |u|² 정규화 → `norm_intensity`
//! 4. 균일도 평가, 이력 기록
//! 5. 재가중 후 정규화 → 다음 `weighted_target`
//! 6. 작업 위상 + `weighted_target` 진폭 → 역방향 전파
//! 7. 역전파 광장의 위상 = 다음 반복 위상
//! 8. 균일도 ≥ 임계값이면 수렴, 반복 수 소진이면 종료
//!
//! 각 반복은 자기 완결적이라 어느 반복 뒤에 멈춰도 상태가 깨지지 않는다.

use super::config::GsConfig;
use super::outcome::{GsOutcome, TerminalState};
use crate::core::error::{ensure_same_shape, Result};
use crate::core::field::{FieldCodec, FourierPropagator, ScratchArena};
use crate::core::math::{apply_weights, normalize, uniformity};
use crate::core::target::TargetPattern;
use log::{debug, info};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct IterationController {
    config: GsConfig,
}

impl IterationController {
    /// 구성을 검증하고 컨트롤러 생성
    pub fn new(config: GsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GsConfig {
        &self.config
    }

    /// 임시 아레나로 한 번 실행
    pub fn run(&self, target: &TargetPattern) -> Result<GsOutcome> {
        let mut arena = ScratchArena::new();
        self.run_with_arena(target, &mut arena)
    }

    /// 구성된 분포에서 초기 위상을 뽑아 실행
    pub fn run_with_arena(&self, target: &TargetPattern, arena: &mut ScratchArena) -> Result<GsOutcome> {
        let phase = self.initial_phase(target.shape());
        self.run_from_phase(target, phase, arena)
    }

    /// 주어진 초기 위상에서 실행
    pub fn run_from_phase(
        &self,
        target: &TargetPattern,
        initial_phase: Array2<f64>,
        arena: &mut ScratchArena,
    ) -> Result<GsOutcome> {
        let (rows, cols) = target.shape();
        ensure_same_shape("초기 위상", (rows, cols), initial_phase.dim())?;

        let propagator = FourierPropagator::new(rows, cols)?;
        let threshold = self.config.uniformity_threshold;
        let max_iterations = self.config.max_iterations;

        let mut phase = initial_phase;
        let mut weighted_target = target.weights().to_owned();
        // 마스크 밖 픽셀은 갱신되지 않으므로 0으로 시작
        let mut weighted = Array2::<f64>::zeros((rows, cols));
        let mut history = Vec::with_capacity(max_iterations);

        loop {
            let field = FieldCodec::encode_unit(phase.view());
            let propagated = propagator.forward(&field, arena)?;
            let working_phase = FieldCodec::decode_phase(&propagated);

            let norm_intensity = normalize(propagated.intensity().view())?;
            // 원시 광강도가 아닌 정규화 광강도로 평가
            let current = uniformity(norm_intensity.view(), target)?;
            history.push(current);

            apply_weights(&mut weighted, target, weighted_target.view(), norm_intensity.view())?;
            weighted_target = normalize(weighted.view())?;

            let field = FieldCodec::encode(working_phase.view(), Some(weighted_target.view()))?;
            let returned = propagator.backward(&field, arena)?;
            phase = FieldCodec::decode_phase(&returned);

            debug!("반복 {}: 균일도 {:.6}", history.len(), current);

            let terminal = if current >= threshold {
                Some(TerminalState::Converged)
            } else if history.len() >= max_iterations {
                Some(TerminalState::Exhausted)
            } else {
                None
            };

            if let Some(terminal) = terminal {
                info!(
                    "{:?}: 반복 {}회, 균일도 {:.4}",
                    terminal,
                    history.len(),
                    current
                );
                return Ok(GsOutcome {
                    phase,
                    norm_intensity,
                    history,
                    terminal,
                });
            }
        }
    }

    fn initial_phase(&self, shape: (usize, usize)) -> Array2<f64> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.config.initial_phase.sample(shape, &mut rng)
    }
}
