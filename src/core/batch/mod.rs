//! # 프레임 일괄 처리
//!
//! 연속 프레임을 순차적으로 처리하고 결과 홀로그램을 수신자에게 넘긴다.

pub mod frame_processor;
pub mod sink;

pub use frame_processor::{BatchSummary, FrameFailure, FrameProcessor, FrameReport, FrameStats};
pub use sink::{write_pgm, HologramSink, MemorySink, PgmDirSink};
