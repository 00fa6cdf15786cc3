use super::super::{min_max, normalize};
use crate::core::error::HoloError;
use approx::assert_relative_eq;
use ndarray::{array, Array2};

#[test]
fn 최소최대_정규화_테스트() {
    let grid = array![[2.0, 4.0], [6.0, 10.0]];
    assert_eq!(min_max(grid.view()).unwrap(), (2.0, 10.0));

    let norm = normalize(grid.view()).unwrap();
    assert_eq!(norm[[0, 0]], 0.0);
    assert_eq!(norm[[1, 1]], 1.0);
    assert_relative_eq!(norm[[0, 1]], 0.25);
    assert_relative_eq!(norm[[1, 0]], 0.5);
}

#[test]
fn 상수격자_퇴화_테스트() {
    let constant = Array2::from_elem((3, 3), 0.7);
    assert!(matches!(
        normalize(constant.view()),
        Err(HoloError::NumericDegeneracy(_))
    ));
}

#[test]
fn 비정상값_테스트() {
    let empty = Array2::<f64>::zeros((0, 3));
    assert!(matches!(min_max(empty.view()), Err(HoloError::InputShape(_))));

    let nan = array![[0.0, f64::NAN]];
    assert!(matches!(
        normalize(nan.view()),
        Err(HoloError::NumericDegeneracy(_))
    ));
}
