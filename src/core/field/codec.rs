//! 위상 ↔ 복소 광장 변환 (오일러 형식)

use crate::core::error::{ensure_same_shape, Result};
use ndarray::{Array2, ArrayView2, Zip};
use rustfft::num_complex::Complex;

pub type Complex64 = Complex<f64>;

/// 복소 진폭 격자
///
/// 매 반복마다 새로 만들어지는 불변 값. 반복 사이에 버퍼를 공유하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    data: Array2<Complex64>,
}

impl ComplexField {
    pub fn from_array(data: Array2<Complex64>) -> Self {
        Self { data }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn view(&self) -> ArrayView2<'_, Complex64> {
        self.data.view()
    }

    pub fn into_inner(self) -> Array2<Complex64> {
        self.data
    }

    /// 광강도 I = |u|²
    pub fn intensity(&self) -> Array2<f64> {
        Zip::from(&self.data).par_map_collect(|u| u.norm_sqr())
    }
}

/// 위상 배열과 복소 광장 사이의 변환기
pub struct FieldCodec;

impl FieldCodec {
    /// `real = A·cos(φ)`, `imag = A·sin(φ)`. 진폭이 없으면 A = 1.
    pub fn encode(
        phase: ArrayView2<f64>,
        amplitude: Option<ArrayView2<f64>>,
    ) -> Result<ComplexField> {
        match amplitude {
            None => Ok(Self::encode_unit(phase)),
            Some(amplitude) => {
                ensure_same_shape("진폭 격자", phase.dim(), amplitude.dim())?;
                let data = Zip::from(phase)
                    .and(amplitude)
                    .par_map_collect(|&p, &a| Complex64::new(a * p.cos(), a * p.sin()));
                Ok(ComplexField::from_array(data))
            }
        }
    }

    /// 단위 진폭 광장 (LCOS 입사광 상대 강도 1)
    pub fn encode_unit(phase: ArrayView2<f64>) -> ComplexField {
        let data = Zip::from(phase).par_map_collect(|&p| Complex64::new(p.cos(), p.sin()));
        ComplexField::from_array(data)
    }

    /// 원소별 `atan2(imag, real)`, 범위 (−π, π]
    pub fn decode_phase(field: &ComplexField) -> Array2<f64> {
        Zip::from(&field.data).par_map_collect(|u| u.im.atan2(u.re))
    }
}
