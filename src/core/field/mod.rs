//! # 광장 표현과 전파
//!
//! 위상 ↔ 복소 광장 변환, 2D 푸리에 전파, FFT 작업 버퍼

pub mod arena;
pub mod codec;
pub mod propagator;

pub use arena::ScratchArena;
pub use codec::{Complex64, ComplexField, FieldCodec};
pub use propagator::FourierPropagator;

#[cfg(test)]
mod __tests__;
