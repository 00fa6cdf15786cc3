//! # FFT 작업 버퍼 아레나
//!
//! 호출자가 소유하는 재사용 버퍼 풀. 프레임 경계마다 `release_all()`로
//! 명시적으로 회수해야 연속 처리 중 메모리가 무한히 늘지 않는다.

use super::codec::Complex64;
use std::mem::size_of;

#[derive(Debug, Default)]
pub struct ScratchArena {
    /// rustfft in-place 스크래치
    fft_scratch: Vec<Complex64>,
    /// 열 방향 변환용 전치 버퍼
    transpose: Vec<Complex64>,
    /// 지금까지의 최대 점유 바이트
    high_water_bytes: usize,
    /// `release_all` 호출 횟수
    releases: usize,
}

impl ScratchArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필요한 길이만큼 두 버퍼를 확보해 빌려준다 (필요할 때만 늘림)
    pub(crate) fn buffers(
        &mut self,
        scratch_len: usize,
        transpose_len: usize,
    ) -> (&mut [Complex64], &mut [Complex64]) {
        let zero = Complex64::new(0.0, 0.0);
        if self.fft_scratch.len() < scratch_len {
            self.fft_scratch.resize(scratch_len, zero);
        }
        if self.transpose.len() < transpose_len {
            self.transpose.resize(transpose_len, zero);
        }
        self.high_water_bytes = self.high_water_bytes.max(self.allocated_bytes());

        (
            &mut self.fft_scratch[..scratch_len],
            &mut self.transpose[..transpose_len],
        )
    }

    /// 현재 점유 중인 바이트 수
    pub fn allocated_bytes(&self) -> usize {
        (self.fft_scratch.capacity() + self.transpose.capacity()) * size_of::<Complex64>()
    }

    pub fn high_water_bytes(&self) -> usize {
        self.high_water_bytes
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    /// 모든 버퍼 해제
    pub fn release_all(&mut self) {
        self.fft_scratch = Vec::new();
        self.transpose = Vec::new();
        self.releases += 1;
    }
}
