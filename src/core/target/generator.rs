//! # 합성 목표 이미지 생성기
//!
//! 광트랩 배열 실험용 8비트 프레임: 점 격자, 가우시안 스폿, 중심으로 이동하는 스폿 경로

use crate::core::error::{HoloError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 점 격자 배치
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotGrid {
    pub rows: usize,
    pub cols: usize,
    /// (세로, 가로) 여백
    pub margin: (usize, usize),
    /// (세로, 가로) 점 간격
    pub spacing: (usize, usize),
    /// 채워진 원의 반지름
    pub radius: usize,
}

impl Default for DotGrid {
    fn default() -> Self {
        Self {
            rows: 1080,
            cols: 1920,
            margin: (50, 50),
            spacing: (100, 100),
            radius: 2,
        }
    }
}

/// 여백부터 일정 간격으로 채워진 원(값 255)을 찍은 프레임
pub fn dot_grid(grid: &DotGrid) -> Result<Array2<u8>> {
    if grid.rows == 0 || grid.cols == 0 {
        return Err(HoloError::InputShape(format!(
            "점 격자 크기가 비어 있음: {}×{}",
            grid.rows, grid.cols
        )));
    }
    if grid.spacing.0 == 0 || grid.spacing.1 == 0 {
        return Err(HoloError::InputShape("점 간격은 1 이상이어야 함".to_string()));
    }

    let mut frame = Array2::<u8>::zeros((grid.rows, grid.cols));
    // 끝 범위를 한 간격 넘겨 잡아 마지막 줄이 가장자리에 걸쳐도 잘려서 그려진다
    let row_end = grid.rows.saturating_sub(grid.margin.0) + grid.spacing.0;
    let col_end = grid.cols.saturating_sub(grid.margin.1) + grid.spacing.1;

    for cy in (grid.margin.0..row_end).step_by(grid.spacing.0) {
        for cx in (grid.margin.1..col_end).step_by(grid.spacing.1) {
            fill_disc(&mut frame, cy, cx, grid.radius);
        }
    }
    Ok(frame)
}

fn fill_disc(frame: &mut Array2<u8>, cy: usize, cx: usize, radius: usize) {
    let (rows, cols) = frame.dim();
    let r = radius as isize;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let y = cy as isize + dy;
            let x = cx as isize + dx;
            if y >= 0 && x >= 0 && (y as usize) < rows && (x as usize) < cols {
                frame[[y as usize, x as usize]] = 255;
            }
        }
    }
}

/// 중심이 밝고 가장자리로 갈수록 어두운 가우시안 스폿
///
/// `2·radius` 정사각 패치를 `center`에 붙이며, 밝기 `255·exp(−½(d/σ)²)`,
/// `σ = ⌊1.5·radius/4⌋` (최소 1). 0인 픽셀은 배경을 덮지 않는다.
pub fn gaussian_spot(rows: usize, cols: usize, center: (usize, usize), radius: usize) -> Result<Array2<u8>> {
    if rows == 0 || cols == 0 {
        return Err(HoloError::InputShape(format!(
            "스폿 프레임 크기가 비어 있음: {}×{}",
            rows, cols
        )));
    }
    if radius == 0 {
        return Err(HoloError::InputShape("스폿 반지름은 1 이상이어야 함".to_string()));
    }

    let mut frame = Array2::<u8>::zeros((rows, cols));
    let sigma = ((radius as f64 * 1.5) / 4.0).floor().max(1.0);
    let side = 2 * radius as isize;
    let half = radius as isize;

    for py in 0..side {
        for px in 0..side {
            let dy = (py - half) as f64;
            let dx = (px - half) as f64;
            let distance = (dx * dx + dy * dy).sqrt();
            let brightness = (255.0 * (-0.5 * (distance / sigma).powi(2)).exp()) as u8;
            if brightness == 0 {
                continue;
            }

            let y = center.0 as isize - half + py;
            let x = center.1 as isize - half + px;
            if y >= 0 && x >= 0 && (y as usize) < rows && (x as usize) < cols {
                frame[[y as usize, x as usize]] = brightness;
            }
        }
    }
    Ok(frame)
}

/// 시작점에서 프레임 중심으로 한 걸음씩 다가가는 스폿 위치 열
///
/// 축마다 `step` 픽셀씩 이동하고, 중심 10 픽셀 이내에서는 보폭을 절반으로 줄인다.
/// 시작점을 먼저 내고 중심에 도달한 위치를 마지막으로 낸다.
#[derive(Debug, Clone)]
pub struct SpotPath {
    position: Option<(usize, usize)>,
    center: (usize, usize),
    step: usize,
}

impl SpotPath {
    pub fn new(start: (usize, usize), rows: usize, cols: usize, step: usize) -> Self {
        Self {
            position: Some(start),
            center: (rows / 2, cols / 2),
            step: step.max(1),
        }
    }

    fn advance(&self, from: usize, to: usize) -> usize {
        let distance = from.abs_diff(to);
        let stride = if distance < 10 { (self.step / 2).max(1) } else { self.step };
        let stride = stride.min(distance);
        if from < to {
            from + stride
        } else {
            from - stride
        }
    }
}

impl Iterator for SpotPath {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.position?;
        self.position = if current == self.center {
            None
        } else {
            Some((
                self.advance(current.0, self.center.0),
                self.advance(current.1, self.center.1),
            ))
        };
        Some(current)
    }
}
