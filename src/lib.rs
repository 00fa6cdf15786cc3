//! 가중 Gerchberg–Saxton 위상 홀로그램 라이브러리
//!
//! 공간 광 변조기(SLM)에 올릴 위상 전용 홀로그램을 계산해, 푸리에 평면의 목표 점들에
//! 최대한 균일한 광강도를 만든다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 목표와 구성
    GsConfig, InitialPhase, MaskPolicy, TargetPattern,
    // 반복과 결과
    GsOutcome, IterationController, TerminalState,
    // 광장과 전파
    ComplexField, FieldCodec, FourierPropagator, ScratchArena,
    // 출력
    encode_hologram, reconstruct,
    // 일괄 처리
    BatchSummary, FrameProcessor, FrameReport, HologramSink, MemorySink, PgmDirSink,
    // 오류
    ErrorKind, HoloError, Result,
};
