// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    error::MatrixError,
    matrix::{Matrix, Matrix2, Matrix3, Matrix4},
    utils::num::checked::CheckedDivAssign,
};
use alloc::{format, vec};
use approx::assert_relative_eq;

#[test]
fn test_matrix_access() {
    #[rustfmt::skip]
    let mut matrix = Matrix::new([
        [01, 02, 03, 04],
        [05, 06, 07, 08],
        [09, 10, 11, 12],
    ]);

    assert_eq!(matrix.rows(), 3);
    assert_eq!(matrix.cols(), 4);
    assert_eq!(matrix.len(), 12);
    assert_eq!(matrix.row(1), [05, 06, 07, 08]);
    assert_eq!(matrix.col(3), [04, 08, 12]);
    assert_eq!(matrix[(2, 1)], 10);
    assert_eq!(matrix[2][1], 10);

    assert_eq!(matrix.element(0, 3), Ok(4));
    assert_eq!(matrix.get(3, 0), Err(MatrixError::IndexOutOfRange {
        row: 3,
        col: 0,
        rows: 3,
        cols: 4
    }));
    assert_eq!(matrix.element(0, 4), Err(MatrixError::IndexOutOfRange {
        row: 0,
        col: 4,
        rows: 3,
        cols: 4
    }));

    assert_eq!(matrix.set(1, 1, 99), Ok(()));
    assert_eq!(matrix[1][1], 99);

    assert!(matrix.set(5, 5, -1).is_err());
    assert_eq!(matrix.as_slice().iter().filter(|elem| **elem == -1).count(), 0);

    *matrix.get_mut(0, 0).unwrap() = 42;
    assert_eq!(matrix.as_slice()[0], 42);

    matrix.fill(7);
    assert_eq!(matrix, Matrix::<i32, 3, 4>::splat(7));
}

#[test]
#[should_panic]
fn test_row_index_out_of_range() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);
    let _row = matrix[2];
}

#[test]
#[should_panic]
fn test_element_index_out_of_range() {
    let mut matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    matrix[(1, 3)] = 0;
}

#[test]
fn test_construction() {
    let matrix = Matrix2::<i32>::try_from_slice(&[1, 2, 3, 4]);
    assert_eq!(matrix, Ok(Matrix::new([[1, 2], [3, 4]])));

    let surplus = Matrix2::<i32>::try_from_slice(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(surplus, Ok(Matrix::new([[1, 2], [3, 4]])));

    let short = Matrix2::<f32>::try_from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(short, Err(MatrixError::InsufficientElements {
        expected: 4,
        found: 3,
    }));

    let from_vec = Matrix::<u8, 1, 3>::try_from(vec![3, 2, 1]);
    assert_eq!(from_vec, Ok(Matrix::new([[3, 2, 1]])));

    let rows: [&[i32]; 2] = [&[1, 2], &[3, 4]];
    assert_eq!(Matrix2::<i32>::try_from_rows(&rows), Ok(Matrix::new([[1, 2], [3, 4]])));

    let too_many: [&[i32]; 3] = [&[1, 2], &[3, 4], &[5, 6]];
    assert_eq!(
        Matrix2::<i32>::try_from_rows(&too_many),
        Err(MatrixError::ShapeMismatch {
            expected_rows: 2,
            expected_cols: 2,
            found_rows: 3,
            found_cols: 2,
        })
    );

    let floats = Matrix::new([[1.9_f64, -0.5], [250.0, 3.0]]);
    let bytes: Matrix<i8, 2, 2> = Matrix::from_matrix(floats);
    assert_eq!(bytes, Matrix::new([[1_i8, 0], [127, 3]]));
    assert_eq!(Matrix::new([[1_u16, 2]]).cast::<f32>(), Matrix::new([[1.0_f32, 2.0]]));

    assert_eq!(Matrix3::<f64>::default(), Matrix3::<f64>::zeros());
}

#[test]
fn test_equality_across_shapes() {
    let square = Matrix::new([[1, 2], [3, 4]]);
    let row = Matrix::new([[1, 2, 3, 4]]);

    assert_ne!(square, row);
    assert_eq!(square, square.transpose().transpose());
    assert_ne!(square, square.transpose());
}

#[test]
fn test_display() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);
    assert_eq!(format!("{matrix}"), "[ 1, 2 ]\n[ 3, 4 ]");

    let floats = Matrix::new([[1.0_f32, 2.5, -3.26]]);
    assert_eq!(format!("{floats}"), "[ 1, 2.5, -3.26 ]");
    assert_eq!(format!("{floats:.1}"), "[ 1.0, 2.5, -3.3 ]");

    let no_cols = Matrix::<i32, 2, 0>::new([[], []]);
    assert_eq!(format!("{no_cols}"), "[ ]\n[ ]");

    let no_rows = Matrix::<i32, 0, 3>::new([]);
    assert_eq!(format!("{no_rows}"), "");
}

#[test]
fn test_determinant() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1.0, 2.0],
        [3.0, 4.0],
    ]);
    assert_eq!(matrix.determinant(), -2.0);

    #[rustfmt::skip]
    let matrix = Matrix::new([
        [6, 1, 1],
        [4, -2, 5],
        [2, 8, 7],
    ]);
    assert_eq!(matrix.determinant(), -306);
    assert_eq!(matrix.transpose().determinant(), -306);

    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 0, 2, -1],
        [3, 0, 0, 5],
        [2, 1, 4, -3],
        [1, 0, 5, 0],
    ]);
    assert_eq!(matrix.determinant(), 30);
    assert_eq!(matrix.determinant(), matrix.transpose().determinant());

    assert_eq!(Matrix::new([[-7]]).determinant(), -7);
    assert_eq!(Matrix::<f32, 0, 0>::new([]).determinant(), 1.0);

    assert_eq!(Matrix2::<f32>::identity().determinant(), 1.0);
    assert_eq!(Matrix3::<i64>::identity().determinant(), 1);
    assert_eq!(Matrix4::<f64>::identity().determinant(), 1.0);
    assert_eq!(Matrix::<i32, 6, 6>::identity().determinant(), 1);
}

#[test]
fn test_minors_and_cofactors() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [2, 0, 1],
        [1, 3, 2],
        [1, 1, 2],
    ]);

    assert_eq!(matrix.minor::<2>(1, 0), Ok(Matrix::new([[0, 1], [1, 2]])));
    assert_eq!(matrix.minor::<2>(2, 2), Ok(Matrix::new([[2, 0], [1, 3]])));
    assert_eq!(
        matrix.minor::<2>(3, 0),
        Err(MatrixError::IndexOutOfRange {
            row: 3,
            col: 0,
            rows: 3,
            cols: 3,
        })
    );

    assert_eq!(matrix.matrix_of_minors(), Matrix::new([
        [4, 0, -2],
        [-1, 3, 2],
        [-3, 3, 6],
    ]));

    assert_eq!(matrix.cofactor_matrix(), Matrix::new([
        [4, 0, -2],
        [1, 3, -2],
        [-3, -3, 6],
    ]));

    assert_eq!(matrix.adjugate(), matrix.cofactor_matrix().transpose());
    assert_eq!(Matrix::new([[9]]).adjugate(), Matrix::new([[1]]));

    let two = Matrix::new([[1, 2], [3, 4]]);
    assert_eq!(two.cofactor_matrix(), Matrix::new([[4, -3], [-2, 1]]));
    assert_eq!(two.matrix_of_minors(), Matrix::new([[4, 3], [2, 1]]));
}

#[test]
fn test_inverse() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1.0, 2.0],
        [3.0, 4.0],
    ]);

    assert_eq!(matrix.inverse(), Ok(Matrix::new([
        [-2.0, 1.0],
        [1.5, -0.5],
    ])));

    #[rustfmt::skip]
    let matrix = Matrix::new([
        [2.0, 0.0, 1.0],
        [1.0, 3.0, 2.0],
        [1.0, 1.0, 2.0],
    ]);
    let inverse = matrix.inverse().unwrap();

    assert_relative_eq!(inverse, Matrix::new([
        [2.0 / 3.0, 1.0 / 6.0, -0.5],
        [0.0, 0.5, -0.5],
        [-1.0 / 3.0, -1.0 / 3.0, 1.0],
    ]), epsilon = 1e-12);
    assert_relative_eq!(matrix * inverse, Matrix3::<f64>::identity(), epsilon = 1e-12);
    assert_relative_eq!(inverse * matrix, Matrix3::<f64>::identity(), epsilon = 1e-12);

    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1.0, 0.0, 2.0, -1.0],
        [3.0, 0.0, 0.0, 5.0],
        [2.0, 1.0, 4.0, -3.0],
        [1.0, 0.0, 5.0, 0.0],
    ]);
    assert!(matrix.has_inverse());
    assert_relative_eq!(
        matrix * matrix.inverse().unwrap(),
        Matrix4::<f64>::identity(),
        epsilon = 1e-12
    );

    assert_eq!(Matrix::new([[4.0_f32]]).inverse(), Ok(Matrix::new([[0.25_f32]])));

    let identity = Matrix4::<f32>::identity();
    assert_eq!(identity.inverse(), Ok(identity));

    let unimodular = Matrix::new([[2, 1], [1, 1]]);
    assert_eq!(unimodular.inverse(), Ok(Matrix::new([[1, -1], [-1, 2]])));
}

#[test]
fn test_singular_matrix() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [2.0, 0.0, 1.0],
        [1.0, 3.0, 2.0],
        [1.0, 1.0, 1.0],
    ]);

    assert_eq!(matrix.determinant(), 0.0);
    assert!(!matrix.has_inverse());
    assert_eq!(matrix.inverse(), Err(MatrixError::Singular));
    assert_eq!(Matrix3::<f64>::identity() / matrix, Err(MatrixError::Singular));

    let zeros = Matrix2::<f32>::zeros();
    assert_eq!(zeros.inverse(), Err(MatrixError::Singular));
}

#[test]
fn test_transpose() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    let transposed: Matrix<i32, 3, 2> = matrix.transpose();
    assert_eq!(transposed, Matrix::new([[1, 4], [2, 5], [3, 6]]));
    assert_eq!(transposed.transpose(), matrix);

    let square = Matrix4::<i32>::from_fn(|row, col| (row * 4 + col) as i32);
    assert_eq!(square.transpose().transpose(), square);
    assert_eq!(square.transpose().diagonal(), square.diagonal());
}

#[test]
fn test_trace() {
    assert_eq!(Matrix2::<i32>::identity().trace(), 2);
    assert_eq!(Matrix3::<f32>::identity().trace(), 3.0);
    assert_eq!(Matrix4::<u32>::identity().trace(), 4);

    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 1, 1, 1],
        [2, 2, 2, 2],
        [3, 3, 3, 3],
        [4, 4, 4, 4],
    ]);
    assert_eq!(matrix.diagonal(), [1, 2, 3, 4]);
    assert_eq!(matrix.trace(), 10);
}

#[test]
fn test_min_max() {
    #[rustfmt::skip]
    let matrix = Matrix::new([
        [3.5, -1.0, 8.0],
        [0.0, 12.25, -4.5],
    ]);

    assert_eq!(matrix.min(), -4.5);
    assert_eq!(matrix.max(), 12.25);

    let single = Matrix::new([[9_u8]]);
    assert_eq!(single.min(), 9);
    assert_eq!(single.max(), 9);
}

#[test]
fn test_mul() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let b = Matrix::new([[0, 1], [1, 0]]);
    let c = Matrix::new([[2, -1], [5, 3]]);

    assert_eq!((a * b) * c, a * (b * c));
    assert_eq!((a * b) * c, Matrix::new([[9, 1], [23, 5]]));

    assert_eq!(a * b, Matrix::new([[2, 1], [4, 3]]));
    assert_eq!(b * a, Matrix::new([[3, 4], [1, 2]]));
    assert_ne!(a * b, b * a);

    #[rustfmt::skip]
    let lhs = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);
    let rhs = Matrix::new([[7], [8], [9]]);
    let product: Matrix<i32, 2, 1> = lhs * rhs;
    assert_eq!(product, Matrix::new([[50], [122]]));

    assert_eq!(a * Matrix2::<i32>::identity(), a);
    assert_eq!(a * 3, Matrix::new([[3, 6], [9, 12]]));

    let mut d = a;
    d *= b;
    assert_eq!(d, a * b);
    d *= 2;
    assert_eq!(d, Matrix::new([[4, 2], [8, 6]]));
}

#[test]
fn test_add_sub_neg() {
    let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::new([[0.5, 0.5], [-1.0, 2.0]]);

    assert_eq!(a + b, Matrix::new([[1.5, 2.5], [2.0, 6.0]]));
    assert_eq!(a - b, Matrix::new([[0.5, 1.5], [4.0, 2.0]]));
    assert_eq!(a + 1.0, Matrix::new([[2.0, 3.0], [4.0, 5.0]]));
    assert_eq!(a - 1.0, Matrix::new([[0.0, 1.0], [2.0, 3.0]]));
    assert_eq!(-a, Matrix::new([[-1.0, -2.0], [-3.0, -4.0]]));

    let mut c = a;
    c += b;
    c -= 0.5;
    assert_eq!(c, Matrix::new([[1.0, 2.0], [1.5, 5.5]]));
    c -= b;
    c += 0.5;
    assert_eq!(c, a);
}

#[test]
fn test_div() {
    let a = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);

    assert_eq!(a / 2.0, Ok(Matrix::new([[1.0, 2.0], [3.0, 4.0]])));
    assert_eq!(a / 0.0, Err(MatrixError::DivideByZero));

    let ints = Matrix::new([[7, 9], [-4, 1]]);
    assert_eq!(ints / 2, Ok(Matrix::new([[3, 4], [-2, 0]])));
    assert_eq!(ints / 0, Err(MatrixError::DivideByZero));

    let divisor = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let quotient = (a / divisor).unwrap();
    assert_relative_eq!(quotient * divisor, a, epsilon = 1e-12);

    let mut b = a;
    assert_eq!(b.checked_div_assign(0.0), Err(MatrixError::DivideByZero));
    assert_eq!(b, a);
    assert_eq!(b.checked_div_assign(4.0), Ok(()));
    assert_eq!(b, Matrix::new([[0.5, 1.0], [1.5, 2.0]]));

    let singular = Matrix::new([[1.0, 1.0], [1.0, 1.0]]);
    assert_eq!(b.checked_div_assign(singular), Err(MatrixError::Singular));
    assert_eq!(b.checked_div_assign(Matrix2::<f64>::identity()), Ok(()));
    assert_eq!(b, Matrix::new([[0.5, 1.0], [1.5, 2.0]]));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);

    let json = serde_json::to_string(&matrix).unwrap();
    assert_eq!(json, "[1,2,3,4,5,6]");

    let parsed: Matrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, matrix);

    let short = serde_json::from_str::<Matrix<i32, 2, 3>>("[1,2,3]");
    assert!(short.is_err());
}

#[cfg(feature = "mint")]
#[test]
fn test_mint_conversion() {
    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

    let row_matrix: mint::RowMatrix3<i32> = matrix.into();
    assert_eq!(row_matrix.y, mint::Vector3 { x: 4, y: 5, z: 6 });
    assert_eq!(Matrix::from(row_matrix), matrix);
}
