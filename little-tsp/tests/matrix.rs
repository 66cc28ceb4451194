use little_tsp::Matrix;

#[test]
fn test_matrix_layout() {
    let mut matrix = Matrix::from_fn(2, 3, |row, column| row * 10 + column);

    assert_eq!(matrix.num_rows(), 2);
    assert_eq!(matrix.num_columns(), 3);
    assert_eq!(matrix.len(), 6);
    assert!(!matrix.is_empty());
    assert_eq!(matrix.as_slice(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(matrix[(1, 2)], 12);
    assert_eq!(matrix.get(1, 0), Some(&10));
    assert_eq!(matrix.get(2, 0), None);
    assert_eq!(matrix.get(0, 3), None);

    *matrix.get_mut(0, 1).unwrap() = 7;
    matrix[(1, 1)] += 1;
    matrix.as_mut_slice()[5] = 0;
    assert_eq!(matrix.as_slice(), &[0, 7, 2, 10, 12, 0]);
}

#[test]
fn test_empty_matrix() {
    let matrix: Matrix<u32> = Matrix::from_fn(0, 4, |_, _| 1);

    assert!(matrix.is_empty());
    assert_eq!(matrix.num_columns(), 4);
    assert_eq!(matrix.get(0, 0), None);
}

#[test]
#[should_panic]
fn test_index_out_of_bounds() {
    let matrix = Matrix::from_fn(2, 2, |_, _| 0u32);
    let _value = matrix[(0, 2)];
}
