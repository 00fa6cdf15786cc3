use super::super::{blazed_grating, fresnel_lens, overlay, rotate_clockwise, GratingAxis};
use crate::core::error::HoloError;
use ndarray::array;

#[test]
fn 블레이즈_격자_테스트() {
    let vertical = blazed_grating(2, 8, 4, GratingAxis::Vertical).unwrap();
    assert_eq!(vertical.row(0).to_vec(), vec![0, 64, 128, 192, 0, 64, 128, 192]);
    assert_eq!(vertical.row(0), vertical.row(1));

    let horizontal = blazed_grating(4, 2, 2, GratingAxis::Horizontal).unwrap();
    assert_eq!(horizontal.column(0).to_vec(), vec![0, 128, 0, 128]);

    assert!(matches!(
        blazed_grating(2, 2, 0, GratingAxis::Vertical),
        Err(HoloError::InputShape(_))
    ));
}

#[test]
fn 프레넬_렌즈_테스트() {
    let lens = fresnel_lens(9, 9, 0.05).unwrap();
    assert_eq!(lens[[4, 4]], 0, "중앙 위상은 0");
    // 중앙 대칭
    assert_eq!(lens[[4, 0]], lens[[4, 8]]);
    assert_eq!(lens[[0, 4]], lens[[8, 4]]);
    assert!(lens[[4, 6]] > lens[[4, 5]]);

    assert!(fresnel_lens(4, 4, f64::NAN).is_err());
}

#[test]
fn 오버레이_모듈로_덧셈_테스트() {
    let holo = array![[250u8, 10], [0, 128]];
    let pattern = array![[10u8, 20], [255, 128]];
    assert_eq!(
        overlay(holo.view(), pattern.view()).unwrap(),
        array![[4u8, 30], [255, 0]]
    );

    let wrong = array![[1u8, 2, 3]];
    assert!(matches!(
        overlay(holo.view(), wrong.view()),
        Err(HoloError::InputShape(_))
    ));
}

#[test]
fn 시계방향_회전_테스트() {
    let holo = array![[1u8, 2, 3], [4, 5, 6]];
    let rotated = rotate_clockwise(holo.view());
    assert_eq!(rotated, array![[4u8, 1], [5, 2], [6, 3]]);
}
