use super::super::{efficiency, uniformity};
use crate::core::error::HoloError;
use crate::core::target::{MaskPolicy, TargetPattern};
use approx::assert_relative_eq;
use ndarray::{array, Array2};

fn 블록_목표() -> TargetPattern {
    let mut weights = Array2::<f64>::zeros((4, 4));
    for r in 1..3 {
        for c in 1..3 {
            weights[[r, c]] = 1.0;
        }
    }
    TargetPattern::from_weights(weights, MaskPolicy::Exact).unwrap()
}

#[test]
fn 균일도_공식_테스트() {
    let target = 블록_목표();
    let mut intensity = Array2::from_elem((4, 4), 0.1);
    intensity[[1, 1]] = 2.0;
    intensity[[1, 2]] = 4.0;
    intensity[[2, 1]] = 3.0;
    intensity[[2, 2]] = 4.0;
    // 마스크 밖 최대값이 정규화 기준
    intensity[[0, 0]] = 8.0;

    // maxI = 0.5, minI = 0.25 → 1 − 0.25/0.75
    let u = uniformity(intensity.view(), &target).unwrap();
    assert_relative_eq!(u, 1.0 - 0.25 / 0.75, epsilon = 1e-12);
    assert!(u <= 1.0);
}

#[test]
fn 동일광강도_완전균일_테스트() {
    let target = 블록_목표();
    let mut intensity = Array2::from_elem((4, 4), 0.3);
    for r in 1..3 {
        for c in 1..3 {
            intensity[[r, c]] = 0.8;
        }
    }
    assert_eq!(uniformity(intensity.view(), &target).unwrap(), 1.0);
}

#[test]
fn 단일픽셀_완전균일_테스트() {
    let target = TargetPattern::from_weights(array![[0.0, 1.0], [0.0, 0.0]], MaskPolicy::Exact).unwrap();
    let intensity = array![[0.9, 0.2], [0.4, 0.0]];
    assert_eq!(uniformity(intensity.view(), &target).unwrap(), 1.0);
}

#[test]
fn 균일도_퇴화_테스트() {
    let target = 블록_목표();

    let zeros = Array2::<f64>::zeros((4, 4));
    assert!(matches!(
        uniformity(zeros.view(), &target),
        Err(HoloError::NumericDegeneracy(_))
    ));

    // 선택 픽셀만 모두 0
    let mut dark_spots = Array2::from_elem((4, 4), 1.0);
    for r in 1..3 {
        for c in 1..3 {
            dark_spots[[r, c]] = 0.0;
        }
    }
    assert!(matches!(
        uniformity(dark_spots.view(), &target),
        Err(HoloError::NumericDegeneracy(_))
    ));

    let wrong = Array2::<f64>::ones((3, 4));
    assert!(matches!(
        uniformity(wrong.view(), &target),
        Err(HoloError::InputShape(_))
    ));
}

#[test]
fn 회절효율_테스트() {
    let target = 블록_목표();
    let mut norm = Array2::<f64>::zeros((4, 4));
    norm[[1, 1]] = 1.0;
    norm[[1, 2]] = 0.5;
    norm[[2, 1]] = 0.5;
    norm[[2, 2]] = 0.2;
    norm[[3, 3]] = 0.9;

    let eff = efficiency(norm.view(), &target).unwrap();
    assert_relative_eq!(eff, 2.2 / 4.0, epsilon = 1e-12);
    assert!(eff > 0.0 && eff <= 1.0);
}
