//! # 프레임 순차 처리
//!
//! 영상/카메라에서 온 8비트 프레임을 하나씩 독립 실행으로 처리한다.
//! 프레임 사이에 공유되는 가변 상태는 작업 버퍼 아레나뿐이며, 매 프레임 끝에 회수한다.
//! 한 프레임의 오류는 그 프레임에만 기록하고 다음 프레임으로 넘어간다.

use super::sink::HologramSink;
use crate::core::error::{ErrorKind, HoloError, Result};
use crate::core::field::ScratchArena;
use crate::core::iteration::{GsConfig, IterationController, TerminalState};
use crate::core::target::TargetPattern;
use anyhow::Context;
use log::{info, warn};
use ndarray::{Array2, ArrayView2};
use serde::Serialize;
use std::time::{Duration, Instant};

/// 성공한 프레임의 통계
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameStats {
    pub iterations: usize,
    pub uniformity: f64,
    pub efficiency: f64,
    pub terminal: TerminalState,
}

/// 실패한 프레임의 사유
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameFailure {
    /// 핵심 연산 오류이면 그 종류, 수신자 오류이면 None
    pub kind: Option<ErrorKind>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub index: usize,
    pub elapsed: Duration,
    pub result: std::result::Result<FrameStats, FrameFailure>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub reports: Vec<FrameReport>,
}

impl BatchSummary {
    pub fn frames(&self) -> usize {
        self.reports.len()
    }

    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.frames() - self.succeeded()
    }

    /// 성공한 프레임의 평균 최종 균일도
    pub fn mean_uniformity(&self) -> Option<f64> {
        let values: Vec<f64> = self
            .reports
            .iter()
            .filter_map(|r| r.result.as_ref().ok().map(|s| s.uniformity))
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

pub struct FrameProcessor {
    config: GsConfig,
    threshold: u8,
    arena: ScratchArena,
}

impl FrameProcessor {
    /// `threshold`: 프레임 이진화 임계값
    pub fn new(config: GsConfig, threshold: u8) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            threshold,
            arena: ScratchArena::new(),
        })
    }

    pub fn arena(&self) -> &ScratchArena {
        &self.arena
    }

    /// 프레임을 순서대로 처리
    pub fn process<I, S>(&mut self, frames: I, sink: &mut S) -> BatchSummary
    where
        I: IntoIterator<Item = Array2<u8>>,
        S: HologramSink + ?Sized,
    {
        let mut summary = BatchSummary::default();

        for (index, frame) in frames.into_iter().enumerate() {
            let started = Instant::now();
            let result = self.process_frame(index, frame.view(), sink);
            self.arena.release_all();
            let elapsed = started.elapsed();

            let result = match result {
                Ok(stats) => {
                    info!(
                        "프레임 {:03}: 반복 {}, 균일도 {:.4}, 효율 {:.4}, {:.2}s",
                        index,
                        stats.iterations,
                        stats.uniformity,
                        stats.efficiency,
                        elapsed.as_secs_f64()
                    );
                    Ok(stats)
                }
                Err(e) => {
                    warn!("프레임 {:03} 건너뜀: {:#}", index, e);
                    Err(FrameFailure {
                        kind: e.downcast_ref::<HoloError>().map(HoloError::kind),
                        message: format!("{:#}", e),
                    })
                }
            };
            summary.reports.push(FrameReport {
                index,
                elapsed,
                result,
            });
        }
        summary
    }

    fn process_frame<S>(&mut self, index: usize, frame: ArrayView2<u8>, sink: &mut S) -> anyhow::Result<FrameStats>
    where
        S: HologramSink + ?Sized,
    {
        let target = TargetPattern::from_gray_frame(frame, self.threshold, self.config.mask_policy)?;

        let mut config = self.config.clone();
        if let Some(seed) = self.config.seed {
            config = config.with_seed(seed.wrapping_add(index as u64));
        }
        let controller = IterationController::new(config)?;

        let outcome = controller.run_with_arena(&target, &mut self.arena)?;
        let holo = outcome.hologram()?;
        let efficiency = outcome.efficiency(&target)?;
        sink.accept(index, &holo)
            .with_context(|| format!("프레임 {} 홀로그램 전달 실패", index))?;

        Ok(FrameStats {
            iterations: outcome.iterations(),
            uniformity: outcome.final_uniformity().unwrap_or(f64::NAN),
            efficiency,
            terminal: outcome.terminal,
        })
    }
}
