use distree::{DistanceMatrix, MatrixError, MatrixErrorKind};

fn additive_example() -> DistanceMatrix {
    DistanceMatrix::new(vec![
        vec![0.0, 13.0, 21.0, 22.0],
        vec![13.0, 0.0, 12.0, 13.0],
        vec![21.0, 12.0, 0.0, 13.0],
        vec![22.0, 13.0, 13.0, 0.0],
    ])
}

// --- DISPLAY ---
#[test]
fn test_display() {
    let d = DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 0.0]]);
    assert_eq!(d.to_string(), "[0 3]\n[3 0]");

    let odd = DistanceMatrix::new(vec![vec![0.5, 0.25], vec![f64::INFINITY, f64::NAN]]);
    assert_eq!(odd.to_string(), "[0.5 0.25]\n[inf NaN]");

    assert_eq!(DistanceMatrix::default().to_string(), "");
}

// --- PREDICATES ---
#[test]
fn test_square() {
    assert!(DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).is_square());
    assert!(DistanceMatrix::default().is_square());
    assert!(!DistanceMatrix::new(vec![vec![0.0], vec![3.0, 0.0]]).is_square());
}

#[test]
fn test_non_negative() {
    assert!(!DistanceMatrix::new(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]).is_non_negative());
    assert!(DistanceMatrix::new(vec![vec![0.0], vec![1.0, 2.0]]).is_non_negative());
    assert!(DistanceMatrix::default().is_non_negative());
    // NaN weak
    assert!(DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![3.0, 0.0]]).is_non_negative());
}

#[test]
fn test_zero_diagonal() {
    assert!(DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).has_zero_diagonal());
    assert!(DistanceMatrix::new(vec![vec![0.0], vec![7.0, 0.0]]).has_zero_diagonal());
    assert!(DistanceMatrix::default().has_zero_diagonal());
    assert!(!DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 1e-300]]).has_zero_diagonal());
    assert!(!DistanceMatrix::new(vec![vec![f64::NAN, 3.0], vec![3.0, 0.0]]).has_zero_diagonal());
}

#[test]
fn test_symmetric() {
    assert!(DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).is_symmetric());
    assert!(!DistanceMatrix::new(vec![vec![0.0, 3.0], vec![7.0, 0.0]]).is_symmetric());
    // NaNs do not compare equal
    assert!(!DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]]).is_symmetric());
    // Diagonal is not checked
    assert!(DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, f64::NAN]]).is_symmetric());
}

#[test]
fn test_triangle_inequality() {
    assert_eq!(additive_example().triangle_inequality(), Ok(()));
    assert_eq!(DistanceMatrix::default().triangle_inequality(), Ok(()));

    // NaN weak
    let mut with_nan = additive_example();
    with_nan[(0, 3)] = f64::NAN;
    assert_eq!(with_nan.triangle_inequality(), Ok(()));

    let violating = DistanceMatrix::new(vec![
        vec![0.0, 4.0, 6.0, 1.0],
        vec![4.0, 0.0, 3.0, 2.0],
        vec![6.0, 3.0, 0.0, 5.0],
        vec![1.0, 2.0, 5.0, 0.0],
    ]);
    assert_eq!(
        violating.triangle_inequality(),
        Err(MatrixError::TriangleInequality { i: 1, j: 3, k: 0 })
    );
}

// --- VALIDATE ---
#[test]
fn test_validate_accepts_metric() {
    assert_eq!(additive_example().validate(), Ok(()));
    assert_eq!(distree::validate(&DistanceMatrix::default()), Ok(()));
}

#[test]
fn test_validate_reports_triangle_inequality() {
    let d = DistanceMatrix::new(vec![
        vec![0.0, 4.0, 6.0, 1.0],
        vec![4.0, 0.0, 3.0, 2.0],
        vec![6.0, 3.0, 0.0, 5.0],
        vec![1.0, 2.0, 5.0, 0.0],
    ]);
    let error = d.validate().unwrap_err();
    assert_eq!(error.kind(), MatrixErrorKind::TriangleInequality);
    assert_eq!(error.indices(), vec![1, 3, 0]);
    assert_eq!(
        error.to_string(),
        "triangle inequality not satisfied: d[1][3] + d[3][0] < d[1][0]"
    );
}

#[test]
fn test_validate_single_broken_cell() {
    // Break exactly one condition at a time
    let mut ragged = additive_example().into_rows();
    ragged[2].pop();
    assert_eq!(
        DistanceMatrix::new(ragged).validate(),
        Err(MatrixError::NotSquare { row: 2, len: 3, size: 4 })
    );

    let mut negative = additive_example();
    negative.set_symmetric(1, 3, -1.0);
    assert_eq!(negative.validate(), Err(MatrixError::NegativeElement { i: 1, j: 3 }));

    let mut asymmetric = additive_example();
    asymmetric[(3, 1)] = 14.0;
    assert_eq!(asymmetric.validate(), Err(MatrixError::NotSymmetric { i: 3, j: 1 }));

    let mut diagonal = additive_example();
    diagonal[(2, 2)] = 0.5;
    assert_eq!(diagonal.validate(), Err(MatrixError::NonZeroDiagonal { i: 2 }));

    let mut triangle = additive_example();
    triangle.set_symmetric(0, 1, 50.0);
    assert_eq!(
        triangle.validate().map_err(|e| e.kind()),
        Err(MatrixErrorKind::TriangleInequality)
    );
}

#[test]
fn test_validate_checks_in_order() {
    // Negative and asymmetric at once: negative is reported first
    let d = DistanceMatrix::new(vec![vec![0.0, -1.0], vec![2.0, 0.0]]);
    assert_eq!(d.validate().unwrap_err().kind(), MatrixErrorKind::NegativeElement);
}

// --- ADDITIVE ---
#[test]
fn test_additive() {
    assert_eq!(additive_example().additive(), Ok(()));
    assert_eq!(distree::is_additive(&DistanceMatrix::default()), Ok(()));
}

#[test]
fn test_additive_with_fractional_weights() {
    // Quartet ((0, 1), (2, 3)) with leaf edges 0.1, 0.2, 0.1, 0.2 and inner
    // edge 0.3; d[2][1] + d[0][3] and d[2][0] + d[1][3] differ in the last bit
    let d = DistanceMatrix::new(vec![
        vec![0.0, 0.1 + 0.2, 0.1 + 0.3 + 0.1, 0.1 + 0.3 + 0.2],
        vec![0.1 + 0.2, 0.0, 0.2 + 0.3 + 0.1, 0.2 + 0.3 + 0.2],
        vec![0.1 + 0.3 + 0.1, 0.2 + 0.3 + 0.1, 0.0, 0.1 + 0.2],
        vec![0.1 + 0.3 + 0.2, 0.2 + 0.3 + 0.2, 0.1 + 0.2, 0.0],
    ]);
    assert_ne!(d[(2, 1)] + d[(0, 3)], d[(2, 0)] + d[(1, 3)]);
    assert_eq!(d.additive(), Ok(()));

    let tree = d.additive_tree();
    for i in 0..4 {
        for j in 0..4 {
            assert!((tree.path_length(i, j).unwrap() - d[(i, j)]).abs() < 1e-12);
        }
    }
}

#[test]
fn test_not_additive() {
    let d = DistanceMatrix::new(vec![
        vec![0.0, 3.0, 4.0, 3.0],
        vec![3.0, 0.0, 4.0, 5.0],
        vec![4.0, 4.0, 0.0, 2.0],
        vec![3.0, 5.0, 2.0, 0.0],
    ]);
    // d[2][1] + d[0][3] = 7, d[2][0] + d[1][3] = 9, d[2][3] + d[1][0] = 5
    assert_eq!(d.additive(), Err(MatrixError::NotAdditive { i: 2, j: 1, k: 0, l: 3 }));
}

#[test]
fn test_additive_requires_square() {
    let d = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]);
    assert_eq!(d.additive().unwrap_err().kind(), MatrixErrorKind::NotSquare);
}
