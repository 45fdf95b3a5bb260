use crate::error::{GError, GResult};
use crate::MatrixElem;
use log::{debug, trace};
use num_traits::Zero;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

// cols == 0 means a square matrix of side `rows`
#[inline]
fn square_cols(rows: usize, cols: usize) -> usize {
    if cols == 0 {
        rows
    } else {
        cols
    }
}

#[inline]
fn elem_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols).unwrap_or_else(|| capacity_overflow())
}

/// Dense row-major matrix that owns its storage.
///
/// `data.len() == rows * cols` holds for every instance. Two matrices never
/// share a buffer: `clone` allocates and copies element by element.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Matrix<A> {
    data: Vec<A>,
    rows: usize,
    cols: usize,
}

impl<A> Matrix<A> {
    /// A 0x0 matrix with no storage.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Zero-filled matrix. `cols == 0` yields a square `rows x rows` matrix.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        A: Zero + Clone,
    {
        Self::zeros(rows, square_cols(rows, cols))
    }

    pub fn square(n: usize) -> Self
    where
        A: Zero + Clone,
    {
        Self::zeros(n, n)
    }

    // exact shape, no square shorthand
    fn zeros(rows: usize, cols: usize) -> Self
    where
        A: Zero + Clone,
    {
        let len = elem_count(rows, cols);
        trace!("alloc matrix {}x{}", rows, cols);
        Self {
            data: vec![A::zero(); len],
            rows,
            cols,
        }
    }

    /// Copies `rows * cols` elements from `src` in row-major order. The
    /// square shorthand of [`Matrix::new`] applies.
    pub fn from_slice(rows: usize, cols: usize, src: &[A]) -> GResult<Self>
    where
        A: Clone,
    {
        let cols = square_cols(rows, cols);
        let len = elem_count(rows, cols);
        if src.len() != len {
            debug!(
                "rejecting {}-element source for {}x{} matrix",
                src.len(),
                rows,
                cols
            );
            return Err(GError::LengthMismatch {
                expected: len,
                got: src.len(),
            });
        }
        trace!("alloc matrix {}x{} from slice", rows, cols);
        Ok(Self {
            data: src.to_vec(),
            rows,
            cols,
        })
    }

    /// Takes ownership of a row-major buffer without copying.
    pub fn from_vec(rows: usize, cols: usize, v: Vec<A>) -> GResult<Self> {
        let cols = square_cols(rows, cols);
        let len = elem_count(rows, cols);
        if v.len() != len {
            debug!(
                "rejecting {}-element vec for {}x{} matrix",
                v.len(),
                rows,
                cols
            );
            return Err(GError::LengthMismatch {
                expected: len,
                got: v.len(),
            });
        }
        Ok(Self { data: v, rows, cols })
    }

    /// Zeros everywhere except the first `min(rows, cols)` diagonal cells,
    /// which are one. Non-square shapes get a partial diagonal.
    pub fn identity(rows: usize, cols: usize) -> Self
    where
        A: MatrixElem,
    {
        let mut m = Self::new(rows, cols);
        let n = m.rows.min(m.cols);
        for i in 0..n {
            m[(i, i)] = A::one();
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> GResult<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn at(&self, row: usize, col: usize) -> GResult<&A> {
        let o = self.offset(row, col)?;
        Ok(&self.data[o])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> GResult<&mut A> {
        let o = self.offset(row, col)?;
        Ok(&mut self.data[o])
    }

    /// The `cols` elements of row `i`. Column indexing into the returned
    /// slice is bounds-checked like any slice.
    pub fn row(&self, i: usize) -> GResult<&[A]> {
        if i < self.rows {
            let start = i * self.cols;
            Ok(&self.data[start..start + self.cols])
        } else {
            Err(GError::RowOutOfRange {
                row: i,
                rows: self.rows,
            })
        }
    }

    pub fn row_mut(&mut self, i: usize) -> GResult<&mut [A]> {
        if i < self.rows {
            let start = i * self.cols;
            Ok(&mut self.data[start..start + self.cols])
        } else {
            Err(GError::RowOutOfRange {
                row: i,
                rows: self.rows,
            })
        }
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[A]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    pub fn as_slice_mut(&mut self) -> &mut [A] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<A> {
        self.data
    }

    /// Replaces the contents with a deep copy of `src`.
    ///
    /// The copy is built before the old buffer is dropped, so a panic while
    /// cloning an element leaves `self` unchanged. `src` cannot alias `self`
    /// here: the borrow rules reject `m.assign(&m)`.
    pub fn assign(&mut self, src: &Self)
    where
        A: Clone,
    {
        let fresh = src.clone();
        *self = fresh;
    }

    /// Classic triple loop: `dst(i, j) = sum_k self(i, k) * rhs(k, j)`.
    ///
    /// Products are taken in operand order, so element types with a
    /// non-commutative `*` are handled correctly.
    pub fn matmul(&self, rhs: &Matrix<A>) -> GResult<Matrix<A>>
    where
        A: MatrixElem,
    {
        if self.cols != rhs.rows {
            debug!(
                "matmul shape mismatch: {:?} x {:?}",
                self.shape(),
                rhs.shape()
            );
            return Err(GError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
                op: "matmul",
            });
        }
        trace!("matmul {:?} x {:?}", self.shape(), rhs.shape());
        let mut dst = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = A::zero();
                for k in 0..self.cols {
                    acc = acc + self.at(i, k)?.clone() * rhs.at(k, j)?.clone();
                }
                *dst.at_mut(i, j)? = acc;
            }
        }
        Ok(dst)
    }
}

impl<A> Default for Matrix<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Clone> Clone for Matrix<A> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source)
    }
}

impl<A, const N: usize> From<Vec<[A; N]>> for Matrix<A> {
    fn from(xs: Vec<[A; N]>) -> Self {
        let rows = xs.len();
        let data: Vec<A> = xs.into_iter().flatten().collect();
        Self {
            data,
            rows,
            cols: N,
        }
    }
}

impl<A> Index<(usize, usize)> for Matrix<A> {
    type Output = A;

    fn index(&self, (row, col): (usize, usize)) -> &A {
        match self.offset(row, col) {
            Ok(o) => &self.data[o],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<A> IndexMut<(usize, usize)> for Matrix<A> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut A {
        match self.offset(row, col) {
            Ok(o) => &mut self.data[o],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<A: MatrixElem> Mul<&Matrix<A>> for &Matrix<A> {
    type Output = GResult<Matrix<A>>;

    fn mul(self, rhs: &Matrix<A>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<A: MatrixElem> Mul<Matrix<A>> for Matrix<A> {
    type Output = GResult<Matrix<A>>;

    fn mul(self, rhs: Matrix<A>) -> Self::Output {
        self.matmul(&rhs)
    }
}

// |a, b, c|
// |d, e, f|
impl<A: fmt::Display> fmt::Display for Matrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]\n");
        }
        for i in 0..self.rows {
            f.write_str("|")?;
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str(", ")?;
                }
                let v = self.at(i, j).map_err(|_| fmt::Error)?;
                write!(f, "{}", v)?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}
