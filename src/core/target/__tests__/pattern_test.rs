use super::super::{MaskPolicy, TargetPattern, DEFAULT_BINARIZE_THRESHOLD};
use crate::core::error::HoloError;
use ndarray::{array, Array2};

#[test]
fn 정확일치_마스크_테스트() {
    let weights = array![[0.0, 1.0, 0.5], [1.0, 0.999_999, 0.0]];
    let target = TargetPattern::from_weights(weights, MaskPolicy::Exact).unwrap();

    assert_eq!(target.shape(), (2, 3));
    assert_eq!(target.selected_count(), 2);
    assert!(target.is_selected(0, 1));
    assert!(target.is_selected(1, 0));
    assert!(!target.is_selected(1, 1), "1에 가깝지만 같지 않은 값은 빠져야 함");
    assert!(!target.is_selected(5, 5));
}

#[test]
fn 허용오차_마스크_테스트() {
    let weights = array![[0.0, 1.0, 0.5], [1.0, 0.999_999, 0.0]];
    let target = TargetPattern::from_weights(weights, MaskPolicy::Tolerance(1e-3)).unwrap();
    assert_eq!(target.selected_count(), 3);
    assert!(target.is_selected(1, 1));
}

#[test]
fn 빈_마스크_테스트() {
    let err = TargetPattern::from_weights(Array2::zeros((4, 4)), MaskPolicy::Exact).unwrap_err();
    assert_eq!(err, HoloError::EmptyMask);
}

#[test]
fn 잘못된_입력_테스트() {
    assert!(matches!(
        TargetPattern::from_weights(Array2::zeros((0, 4)), MaskPolicy::Exact),
        Err(HoloError::InputShape(_))
    ));
    assert!(matches!(
        TargetPattern::from_weights(array![[1.0, 1.5]], MaskPolicy::Exact),
        Err(HoloError::InputShape(_))
    ));
    assert!(matches!(
        TargetPattern::from_weights(array![[1.0, f64::NAN]], MaskPolicy::Exact),
        Err(HoloError::InputShape(_))
    ));
    assert!(matches!(
        TargetPattern::from_weights(array![[1.0]], MaskPolicy::Tolerance(-0.1)),
        Err(HoloError::InvalidConfig(_))
    ));
}

#[test]
fn 회색조_프레임_이진화_테스트() {
    let frame: Array2<u8> = array![[0, 150, 151], [255, 100, 200]];
    let target =
        TargetPattern::from_gray_frame(frame.view(), DEFAULT_BINARIZE_THRESHOLD, MaskPolicy::Exact)
            .unwrap();

    let weights = target.weights();
    assert_eq!(weights[[0, 0]], 0.0);
    assert_eq!(weights[[0, 1]], 150.0 / 255.0);
    assert_eq!(weights[[0, 2]], 1.0);
    assert_eq!(weights[[1, 0]], 1.0);
    assert_eq!(weights[[1, 1]], 100.0 / 255.0);
    assert_eq!(weights[[1, 2]], 1.0);

    // 임계값 초과 픽셀만 정확히 1.0 → 마스크
    assert_eq!(target.selected_count(), 3);
    assert!(!target.is_selected(0, 1));
}
