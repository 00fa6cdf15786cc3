use super::super::{encode_hologram, reconstruct};
use crate::core::error::HoloError;
use ndarray::{array, Array2};
use std::f64::consts::TAU;

fn 기준_위상() -> Array2<f64> {
    Array2::from_shape_fn((3, 4), |(r, c)| -3.0 + 0.5 * (r * 4 + c) as f64)
}

#[test]
fn 홀로그램_양자화_테스트() {
    let holo = encode_hologram(기준_위상().view()).unwrap();
    assert_eq!(holo.dim(), (3, 4));
    assert_eq!(
        holo,
        array![
            [144, 166, 188, 210],
            [232, 255, 0, 22],
            [44, 66, 88, 110]
        ]
    );
}

#[test]
fn 위상_2파이_주기성_테스트() {
    let phase = 기준_위상();
    let reference = encode_hologram(phase.view()).unwrap();

    for k in [1i32, -1, 2, -3, 5] {
        let shifted = phase.mapv(|p| p + k as f64 * TAU);
        assert_eq!(
            encode_hologram(shifted.view()).unwrap(),
            reference,
            "2π × {} 이동 후 홀로그램이 달라짐",
            k
        );
    }
}

#[test]
fn 상수위상_퇴화_테스트() {
    let constant = Array2::from_elem((4, 4), 0.3);
    assert!(matches!(
        encode_hologram(constant.view()),
        Err(HoloError::NumericDegeneracy(_))
    ));
}

#[test]
fn 재구성_미리보기_테스트() {
    let norm = array![[0.0, 0.5], [1.0, 0.999]];
    assert_eq!(reconstruct(norm.view()), array![[0u8, 127], [255, 254]]);
}
