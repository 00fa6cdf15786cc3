//! # 렌즈 전달 함수 모델 (2D FFT + 중심 이동)
//!
//! 정방향: LCOS 평면 → 광트랩(목표) 평면, `fftshift(fft2(u))`
//! 역방향: 목표 평면 → LCOS 평면, `ifft2(ifftshift(u))`
//!
//! 정규화 규약: 정방향은 비정규화, 역방향은 `1/(rows·cols)` 스케일.

use super::arena::ScratchArena;
use super::codec::{Complex64, ComplexField};
use crate::core::error::{ensure_same_shape, HoloError, Result};
use ndarray::Array2;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// 고정 격자 크기에 대한 전파기. FFT 계획은 생성 시 한 번만 세운다.
pub struct FourierPropagator {
    rows: usize,
    cols: usize,
    row_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    col_forward: Arc<dyn Fft<f64>>,
    col_inverse: Arc<dyn Fft<f64>>,
}

impl FourierPropagator {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(HoloError::InputShape(format!(
                "전파 격자는 비어 있을 수 없음: {}×{}",
                rows, cols
            )));
        }

        let mut planner = FftPlanner::<f64>::new();
        Ok(Self {
            rows,
            cols,
            row_forward: planner.plan_fft_forward(cols),
            row_inverse: planner.plan_fft_inverse(cols),
            col_forward: planner.plan_fft_forward(rows),
            col_inverse: planner.plan_fft_inverse(rows),
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// 목표 평면으로 정방향 전파 (DC 성분이 중앙으로 옴)
    pub fn forward(&self, field: &ComplexField, arena: &mut ScratchArena) -> Result<ComplexField> {
        ensure_same_shape("정방향 전파 입력", self.shape(), field.shape())?;

        let mut buffer: Vec<Complex64> = field.view().iter().copied().collect();
        self.transform_2d(&mut buffer, Direction::Forward, arena);
        let shifted = roll(&buffer, self.rows, self.cols, self.rows / 2, self.cols / 2);

        self.into_field(shifted)
    }

    /// LCOS 평면으로 역방향 전파
    pub fn backward(&self, field: &ComplexField, arena: &mut ScratchArena) -> Result<ComplexField> {
        ensure_same_shape("역방향 전파 입력", self.shape(), field.shape())?;

        let flat: Vec<Complex64> = field.view().iter().copied().collect();
        // ifftshift = fftshift의 정확한 역 (홀수 크기 포함)
        let mut buffer = roll(
            &flat,
            self.rows,
            self.cols,
            self.rows - self.rows / 2,
            self.cols - self.cols / 2,
        );
        self.transform_2d(&mut buffer, Direction::Inverse, arena);

        let scale = 1.0 / (self.rows * self.cols) as f64;
        buffer.iter_mut().for_each(|v| *v *= scale);

        self.into_field(buffer)
    }

    fn into_field(&self, buffer: Vec<Complex64>) -> Result<ComplexField> {
        Array2::from_shape_vec((self.rows, self.cols), buffer)
            .map(ComplexField::from_array)
            .map_err(|e| HoloError::InputShape(e.to_string()))
    }

    /// 행 방향 FFT → 전치 → 열 방향 FFT → 전치 복원
    fn transform_2d(&self, buffer: &mut [Complex64], direction: Direction, arena: &mut ScratchArena) {
        let (row_fft, col_fft) = match direction {
            Direction::Forward => (&self.row_forward, &self.col_forward),
            Direction::Inverse => (&self.row_inverse, &self.col_inverse),
        };
        let scratch_len = row_fft
            .get_inplace_scratch_len()
            .max(col_fft.get_inplace_scratch_len());
        let (scratch, transposed) = arena.buffers(scratch_len, buffer.len());

        // 버퍼 길이가 행 길이의 배수이므로 모든 행을 한 번에 처리
        row_fft.process_with_scratch(buffer, scratch);

        transpose(buffer, transposed, self.rows, self.cols);
        col_fft.process_with_scratch(transposed, scratch);
        transpose(transposed, buffer, self.cols, self.rows);
    }
}

/// `src`(rows×cols)를 `dst`(cols×rows)로 전치
fn transpose(src: &[Complex64], dst: &mut [Complex64], rows: usize, cols: usize) {
    for r in 0..rows {
        for c in 0..cols {
            dst[c * rows + r] = src[r * cols + c];
        }
    }
}

/// 순환 이동: 인덱스 (r, c) → ((r + dr) mod rows, (c + dc) mod cols)
fn roll(src: &[Complex64], rows: usize, cols: usize, dr: usize, dc: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); src.len()];
    for r in 0..rows {
        let target_row = (r + dr) % rows;
        for c in 0..cols {
            out[target_row * cols + (c + dc) % cols] = src[r * cols + c];
        }
    }
    out
}
