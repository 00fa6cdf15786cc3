//! # 반복 제어
//!
//! 구성, 가중 GS 루프, 종료 결과

pub mod config;
pub mod controller;
pub mod outcome;

pub use config::{GsConfig, InitialPhase};
pub use controller::IterationController;
pub use outcome::{GsOutcome, TerminalState};
