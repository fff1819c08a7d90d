//! Norms over order-3 tensors

use super::types::Tensor3;
use scirs2_core::numeric::Num;

impl<T> Tensor3<T>
where
    T: Clone + Num + std::iter::Sum,
{
    /// Compute the Frobenius norm of the tensor.
    ///
    /// The Frobenius norm is the square root of the sum of squared elements.
    /// It is the approximation-quality metric used by the decomposition
    /// algorithms.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    ///
    /// let tensor = Tensor3::<f64>::ones((2, 3, 1));
    /// let norm = tensor.frobenius_norm();
    /// assert!((norm - (6.0_f64).sqrt()).abs() < 1e-10);
    /// ```
    pub fn frobenius_norm(&self) -> T
    where
        T: scirs2_core::numeric::Float,
    {
        self.data.iter().map(|&x| x * x).sum::<T>().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frobenius_norm_zeros() {
        let tensor = Tensor3::<f64>::zeros((3, 3, 3));
        assert_eq!(tensor.frobenius_norm(), 0.0);
    }

    #[test]
    fn test_frobenius_norm_known() {
        // 3-4-12 triple: sqrt(9 + 16 + 144) = 13
        let tensor = Tensor3::<f64>::from_vec(vec![3.0, 4.0, 12.0], (3, 1, 1)).unwrap();
        assert!((tensor.frobenius_norm() - 13.0).abs() < 1e-12);
    }
}
