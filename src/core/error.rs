//! # 위상 복원 오류 분류
//!
//! 모든 오류는 해당 연산 지점에서 즉시 감지되어 호출자에게 전달된다.
//! 수렴 실패(최대 반복 도달)는 오류가 아니라 정상 종료 상태다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 핵심 연산 오류
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoloError {
    /// 격자 크기가 잘못되었거나 단계 간 불일치, 또는 `max_iterations < 1`
    #[error("입력 형상 오류: {0}")]
    InputShape(String),
    /// 목표 패턴에 선택된 픽셀이 하나도 없음
    #[error("목표 마스크가 비어 있음 (선택된 픽셀 없음)")]
    EmptyMask,
    /// 상수/영 필드로 인한 0 나눗셈
    #[error("수치 퇴화: {0}")]
    NumericDegeneracy(String),
    /// 범위를 벗어난 구성 값
    #[error("잘못된 구성: {0}")]
    InvalidConfig(String),
}

/// 보고용 오류 종류 (메시지 없이 비교 가능)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InputShape,
    EmptyMask,
    NumericDegeneracy,
    InvalidConfig,
}

impl HoloError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HoloError::InputShape(_) => ErrorKind::InputShape,
            HoloError::EmptyMask => ErrorKind::EmptyMask,
            HoloError::NumericDegeneracy(_) => ErrorKind::NumericDegeneracy,
            HoloError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

pub type Result<T> = std::result::Result<T, HoloError>;

/// 두 격자의 형상이 같은지 확인
pub(crate) fn ensure_same_shape(
    what: &str,
    expected: (usize, usize),
    actual: (usize, usize),
) -> Result<()> {
    if expected != actual {
        return Err(HoloError::InputShape(format!(
            "{}: 기대 {:?}, 실제 {:?}",
            what, expected, actual
        )));
    }
    Ok(())
}
