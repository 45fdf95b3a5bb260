mod error;
pub mod filter;
mod loader;
mod matrix;

pub use crate::error::{GError, GResult};
pub use crate::loader::Loader;
pub use crate::matrix::Matrix;
use num_traits::{One, Zero};
use std::fmt;

/// Builds a [`Matrix`] from row literals.
///
/// ```
/// let m = densemat::matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[macro_export]
macro_rules! matrix {
    () => {{
        $crate::Matrix::empty()
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from(vec![$([$($x,)*],)*])
    }};
}

/// Element types a [`Matrix`] can multiply and render: an additive zero, a
/// multiplicative one, `+`, `*` and `Display`.
///
/// Implemented for every type meeting the bounds, which covers the primitive
/// numbers, `half::f16` and `num_complex::Complex<T>`.
pub trait MatrixElem: Clone + Zero + One + fmt::Display {}

impl<T> MatrixElem for T where T: Clone + Zero + One + fmt::Display {}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;
    use num_complex::Complex64;

    fn assert_elem<T: MatrixElem>() {}

    #[test]
    fn test_elem_types() {
        assert_elem::<i32>();
        assert_elem::<u64>();
        assert_elem::<f32>();
        assert_elem::<f16>();
        assert_elem::<Complex64>();
    }

    #[test]
    fn test_macro() {
        let m = matrix![[1.0, 2.0], [3.0, 4.0],];
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m[(1, 0)], 3.0);
        let e: Matrix<i32> = matrix![];
        assert!(e.is_empty());
    }

    #[test]
    fn test_demo_product() {
        let mut m1 = Matrix::<f64>::new(2, 3);
        m1.fill([1.0, 1.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
        let mut m2 = Matrix::<f64>::new(3, 4);
        m2.fill([1.0, 2.0, 3.0, 4.0].repeat(3)).unwrap();
        let m3 = (&m1 * &m2).unwrap();
        assert_eq!(m3.to_string(), "|3, 6, 9, 12|\n|6, 12, 18, 24|\n");
    }

    #[test]
    fn test_complex_render() {
        let m = matrix![[Complex64::new(1.0, 1.0), Complex64::new(2.0, -2.0)]];
        assert_eq!(m.to_string(), "|1+1i, 2-2i|\n");
    }
}
