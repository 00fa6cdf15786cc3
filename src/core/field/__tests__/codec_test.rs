use super::super::{Complex64, ComplexField, FieldCodec};
use crate::core::error::HoloError;
use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};
use std::f64::consts::PI;

#[test]
fn 단위진폭_인코딩_테스트() {
    let phase = array![[0.0, PI / 2.0], [PI, -PI / 2.0]];
    let field = FieldCodec::encode(phase.view(), None).unwrap();

    let expected = [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 1.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, -1.0),
    ];
    for (u, e) in field.view().iter().zip(expected.iter()) {
        assert_abs_diff_eq!(u.re, e.re, epsilon = 1e-12);
        assert_abs_diff_eq!(u.im, e.im, epsilon = 1e-12);
    }
}

#[test]
fn 진폭_인코딩_후_위상_복원_테스트() {
    let phase = Array2::from_shape_fn((3, 5), |(r, c)| -3.0 + 0.4 * (r * 5 + c) as f64);
    let amplitude = Array2::from_shape_fn((3, 5), |(r, c)| 0.25 + 0.1 * (r + c) as f64);
    let field = FieldCodec::encode(phase.view(), Some(amplitude.view())).unwrap();

    let intensity = field.intensity();
    let decoded = FieldCodec::decode_phase(&field);
    for ((p, d), (a, i)) in phase
        .iter()
        .zip(decoded.iter())
        .zip(amplitude.iter().zip(intensity.iter()))
    {
        assert_abs_diff_eq!(p, d, epsilon = 1e-12);
        assert_abs_diff_eq!(a * a, *i, epsilon = 1e-12);
    }
}

#[test]
fn 위상_범위_테스트() {
    // 3π/2 는 (−π, π] 범위의 −π/2 로 돌아와야 함
    let phase = array![[3.0 * PI / 2.0, 2.0 * PI]];
    let decoded = FieldCodec::decode_phase(&FieldCodec::encode_unit(phase.view()));
    assert_abs_diff_eq!(decoded[[0, 0]], -PI / 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(decoded[[0, 1]], 0.0, epsilon = 1e-12);
    assert!(decoded.iter().all(|&p| p > -PI - 1e-12 && p <= PI));
}

#[test]
fn 진폭_형상_불일치_테스트() {
    let phase = Array2::<f64>::zeros((4, 4));
    let amplitude = Array2::<f64>::ones((4, 3));
    let err = FieldCodec::encode(phase.view(), Some(amplitude.view())).unwrap_err();
    assert!(matches!(err, HoloError::InputShape(_)));
}

#[test]
fn 복소광장_값_의미_테스트() {
    let data = Array2::from_elem((2, 2), Complex64::new(3.0, 4.0));
    let field = ComplexField::from_array(data.clone());
    assert_eq!(field.shape(), (2, 2));
    assert!(field.intensity().iter().all(|&i| i == 25.0));
    assert_eq!(field.into_inner(), data);
}
