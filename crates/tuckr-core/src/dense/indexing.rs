//! Indexing operations on order-3 tensors
//!
//! Direct element access is bounds-checked: `get`/`get_mut` return `None` out
//! of range, the `Index`/`IndexMut` operators panic.

use super::types::Tensor3;
use scirs2_core::numeric::Num;

impl<T> Tensor3<T>
where
    T: Clone + Num,
{
    /// Get an element by index without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let tensor = Tensor3::from_vec(vec![1.0, 2.0, 3.0, 4.0], (1, 2, 2)).unwrap();
    /// assert_eq!(tensor.get(0, 1, 1), Some(&4.0));
    /// assert_eq!(tensor.get(5, 0, 0), None);
    /// ```
    pub fn get(&self, i1: usize, i2: usize, i3: usize) -> Option<&T> {
        self.data.get([i1, i2, i3])
    }

    /// Get a mutable reference to an element by index without panicking
    pub fn get_mut(&mut self, i1: usize, i2: usize, i3: usize) -> Option<&mut T> {
        self.data.get_mut([i1, i2, i3])
    }
}

impl<T> std::ops::Index<[usize; 3]> for Tensor3<T> {
    type Output = T;

    fn index(&self, index: [usize; 3]) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<[usize; 3]> for Tensor3<T> {
    fn index_mut(&mut self, index: [usize; 3]) -> &mut Self::Output {
        &mut self.data[index]
    }
}
