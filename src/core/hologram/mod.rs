//! # 홀로그램 출력
//!
//! 수렴 위상의 8비트 양자화, 재구성 미리보기, 보정 패턴 합성

pub mod encoder;
pub mod patterns;

pub use encoder::{encode_hologram, reconstruct};
pub use patterns::{blazed_grating, fresnel_lens, overlay, rotate_clockwise, GratingAxis};

#[cfg(test)]
mod __tests__;
