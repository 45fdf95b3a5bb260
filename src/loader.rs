use crate::error::{GError, GResult};
use crate::Matrix;
use log::debug;

/// Writes values one at a time into a matrix in row-major order.
///
/// ```
/// use densemat::Matrix;
///
/// let mut m = Matrix::<i32>::new(2, 2);
/// m.loader().put(1)?.put(2)?.put(3)?.put(4)?;
/// assert_eq!(m.to_string(), "|1, 2|\n|3, 4|\n");
/// # Ok::<(), densemat::GError>(())
/// ```
pub struct Loader<'a, A> {
    buf: &'a mut [A],
    cursor: usize,
}

impl<'a, A> Loader<'a, A> {
    pub(crate) fn new(buf: &'a mut [A]) -> Self {
        Self { buf, cursor: 0 }
    }

    /// Writes `val` at the cursor and advances it. Fails without writing
    /// once every cell has been loaded.
    pub fn put(&mut self, val: A) -> GResult<&mut Self> {
        if self.cursor >= self.buf.len() {
            debug!("loader overflow at capacity {}", self.buf.len());
            return Err(GError::LoaderOverflow {
                capacity: self.buf.len(),
            });
        }
        self.buf[self.cursor] = val;
        self.cursor += 1;
        Ok(self)
    }

    pub fn put_all<I>(&mut self, vals: I) -> GResult<&mut Self>
    where
        I: IntoIterator<Item = A>,
    {
        for v in vals {
            self.put(v)?;
        }
        Ok(self)
    }

    /// Number of cells written so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    pub fn is_full(&self) -> bool {
        self.cursor == self.buf.len()
    }
}

impl<A> Matrix<A> {
    /// Starts loading values from cell (0, 0).
    pub fn loader(&mut self) -> Loader<'_, A> {
        Loader::new(self.as_slice_mut())
    }

    /// Loads `values` in row-major order and returns how many were written.
    /// Cells past the last value keep their current contents. Supplying more
    /// than `rows * cols` values fails with [`GError::LoaderOverflow`] after
    /// every cell has been filled.
    pub fn fill<I>(&mut self, values: I) -> GResult<usize>
    where
        I: IntoIterator<Item = A>,
    {
        let mut loader = self.loader();
        loader.put_all(values)?;
        Ok(loader.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        let mut m = Matrix::<i32>::new(2, 2);
        m.loader().put(1).unwrap().put(2).unwrap().put(3).unwrap().put(4).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(*m.at(1, 0).unwrap(), 3);
    }

    #[test]
    fn test_cursor() {
        let mut m = Matrix::<i32>::new(2, 3);
        let mut l = m.loader();
        assert_eq!(l.remaining(), 6);
        l.put_all([9, 8]).unwrap();
        assert_eq!(l.position(), 2);
        assert_eq!(l.remaining(), 4);
        assert!(!l.is_full());
        l.put_all([7, 6, 5, 4]).unwrap();
        assert!(l.is_full());
    }

    #[test]
    fn test_fill_underfill_keeps_rest() {
        let mut m = Matrix::<i32>::new(2, 2);
        m[(1, 1)] = 77;
        assert_eq!(m.fill([5, 6]).unwrap(), 2);
        assert_eq!(m.as_slice(), &[5, 6, 0, 77]);
    }

    #[test]
    fn test_overflow() {
        let mut m = Matrix::<i32>::new(2, 2);
        let r = m.fill(1..=5);
        assert_eq!(r, Err(GError::LoaderOverflow { capacity: 4 }));
        assert!(r.unwrap_err().is_out_of_range());
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_overflow_chain() {
        let mut m = Matrix::<f64>::new(1, 2);
        let mut l = m.loader();
        l.put(1.0).unwrap().put(2.0).unwrap();
        assert!(l.put(3.0).is_err());
        assert_eq!(l.position(), 2);
        assert_eq!(m.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_empty_matrix_rejects_first_value() {
        let mut m = Matrix::<i32>::empty();
        assert_eq!(
            m.fill([1]),
            Err(GError::LoaderOverflow { capacity: 0 })
        );
        assert_eq!(m.fill(Vec::new()).unwrap(), 0);
    }
}
