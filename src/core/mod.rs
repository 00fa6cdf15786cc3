//! # 가중 GS 위상 복원 핵심 모듈
//!
//! 목표 패턴 → 반복 위상 복원 → 8비트 홀로그램

pub mod batch;
pub mod error;
pub mod field;
pub mod hologram;
pub mod iteration;
pub mod math;
pub mod target;

// 주요 타입들 재수출
pub use batch::{BatchSummary, FrameProcessor, FrameReport, HologramSink, MemorySink, PgmDirSink};
pub use error::{ErrorKind, HoloError, Result};
pub use field::{ComplexField, FieldCodec, FourierPropagator, ScratchArena};
pub use hologram::{encode_hologram, reconstruct};
pub use iteration::{GsConfig, GsOutcome, InitialPhase, IterationController, TerminalState};
pub use target::{MaskPolicy, TargetPattern};
