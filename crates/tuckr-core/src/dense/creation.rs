//! Random tensor creation
//!
//! Uses scirs2_core::random for RNG (never rand/rand_distr directly).

use super::types::Tensor3;
use scirs2_core::ndarray_ext::Array;
use scirs2_core::numeric::{Num, NumCast};

impl<T> Tensor3<T>
where
    T: Clone + Num + NumCast,
{
    /// Create a tensor with random values from a uniform distribution
    ///
    /// # Arguments
    ///
    /// * `dims` - The extents of the tensor
    /// * `low` - Lower bound (inclusive)
    /// * `high` - Upper bound (exclusive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let tensor = Tensor3::<f64>::random_uniform((2, 3, 4), 0.0, 1.0);
    /// assert_eq!(tensor.dims(), (2, 3, 4));
    /// ```
    pub fn random_uniform(dims: (usize, usize, usize), low: f64, high: f64) -> Self
    where
        T: From<f64>,
    {
        use scirs2_core::random::quick::random_f64;
        let total = dims.0 * dims.1 * dims.2;
        let range = high - low;
        let data: Vec<T> = (0..total)
            .map(|_| {
                let sample: f64 = low + random_f64() * range;
                <T as From<f64>>::from(sample)
            })
            .collect();
        Self {
            data: Array::from_shape_vec(dims, data).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_uniform_range() {
        let tensor = Tensor3::<f64>::random_uniform((4, 4, 4), -1.0, 1.0);
        assert_eq!(tensor.len(), 64);
        for &x in tensor.iter() {
            assert!((-1.0..1.0).contains(&x));
        }
    }
}
