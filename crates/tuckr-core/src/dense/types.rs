//! Order-3 tensor type definition and basic operations
//!
//! This module defines the core `Tensor3<T>` type and provides creation and
//! accessor methods. Matricization, indexing, and arithmetic live in sibling
//! modules.

use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, Ix3};
use scirs2_core::numeric::Num;

/// Dense order-3 tensor backed by scirs2_core's ndarray
///
/// Extents `(I1, I2, I3)` are fixed at construction and never change; every
/// operation that assumes shape conformance checks it. The element type is
/// typically `f32` or `f64`.
///
/// # Memory Layout
///
/// Tensors use C-contiguous (row-major) layout. Element iteration order is
/// the logical row-major order regardless of internal strides.
///
/// # Examples
///
/// ```
/// use tuckr_core::Tensor3;
///
/// let tensor = Tensor3::<f64>::zeros((2, 3, 4));
/// assert_eq!(tensor.dims(), (2, 3, 4));
/// assert_eq!(tensor.len(), 24);
/// ```
#[derive(Clone)]
pub struct Tensor3<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, Ix3>,
}

impl<T> Tensor3<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing order-3 ndarray
    pub fn from_array(array: Array<T, Ix3>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a flat vector in row-major order
    ///
    /// # Errors
    ///
    /// Fails when `vec.len() != i1 * i2 * i3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let tensor = Tensor3::from_vec(data, (1, 2, 3)).unwrap();
    /// assert_eq!(tensor[[0, 1, 2]], 6.0);
    /// ```
    pub fn from_vec(vec: Vec<T>, dims: (usize, usize, usize)) -> anyhow::Result<Self> {
        let total = dims.0 * dims.1 * dims.2;
        if vec.len() != total {
            anyhow::bail!(
                "Dims {:?} require {} elements, but got {}",
                dims,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(dims, vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with a specific value
    pub fn from_elem(dims: (usize, usize, usize), value: T) -> Self {
        Self {
            data: Array::from_elem(dims, value),
        }
    }

    /// Create a tensor of zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let tensor = Tensor3::<f64>::zeros((2, 3, 4));
    /// assert_eq!(tensor[[0, 0, 0]], 0.0);
    /// ```
    pub fn zeros(dims: (usize, usize, usize)) -> Self {
        Self {
            data: Array::zeros(dims),
        }
    }

    /// Create a tensor of ones
    pub fn ones(dims: (usize, usize, usize)) -> Self {
        Self {
            data: Array::ones(dims),
        }
    }

    /// Get the extents `(I1, I2, I3)` of this tensor
    pub fn dims(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Get the shape as a slice (always length 3)
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor has zero elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, Ix3> {
        &self.data
    }

    /// Get a mutable reference to the underlying ndarray
    pub fn as_array_mut(&mut self) -> &mut Array<T, Ix3> {
        &mut self.data
    }

    /// Get an immutable view of the tensor
    pub fn view(&self) -> ArrayView<'_, T, Ix3> {
        self.data.view()
    }

    /// Get a mutable view of the tensor
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, Ix3> {
        self.data.view_mut()
    }

    /// Convert the tensor to a flat vector in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let tensor = Tensor3::from_vec(vec![1.0, 2.0, 3.0, 4.0], (1, 2, 2)).unwrap();
    /// assert_eq!(tensor.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Create an iterator over all elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Create a mutable iterator over all elements in row-major order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Fill the tensor with values produced by a function of the index
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let mut tensor = Tensor3::<f64>::zeros((2, 2, 2));
    /// tensor.fill_with(|i1, i2, i3| (i1 + i2 + i3) as f64);
    /// assert_eq!(tensor[[1, 1, 1]], 3.0);
    /// ```
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let (i1, i2, i3) = self.dims();
        for a in 0..i1 {
            for b in 0..i2 {
                for c in 0..i3 {
                    self.data[[a, b, c]] = f(a, b, c);
                }
            }
        }
    }

    /// Check if two tensors have the same extents
    pub fn same_dims(&self, other: &Self) -> bool {
        self.dims() == other.dims()
    }
}
