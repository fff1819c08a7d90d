//! Flat export/import of Tucker3 models
//!
//! The wire layout is a single ordered sequence of elements: all of u1, then
//! u2, then u3, then the core, each component flattened in its container's
//! natural (row-major) element order. Import consumes exactly that many
//! elements into a model of identical shape; any other length is a contract
//! violation.

use crate::tucker::{Tucker3, TuckerError};
use scirs2_core::numeric::Float;

impl<T> Tucker3<T>
where
    T: Clone + Float,
{
    /// Number of elements [`export_to`](Self::export_to) produces and
    /// [`import_from`](Self::import_from) expects:
    /// `I1*J1 + I2*J2 + I3*J3 + J1*J2*J3`.
    pub fn export_len(&self) -> usize {
        self.u1.len() + self.u2.len() + self.u3.len() + self.core.len()
    }

    /// Serialize the model to a flat vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuckr_core::Tensor3;
    /// use tuckr_decomp::tucker3_hosvd;
    ///
    /// let tensor = Tensor3::<f64>::random_uniform((4, 4, 4), 0.0, 1.0);
    /// let model = tucker3_hosvd(&tensor, (2, 2, 2)).unwrap();
    ///
    /// let flat = model.export_to();
    /// assert_eq!(flat.len(), model.export_len());
    /// ```
    pub fn export_to(&self) -> Vec<T> {
        let mut data = Vec::with_capacity(self.export_len());
        data.extend(self.u1.iter().cloned());
        data.extend(self.u2.iter().cloned());
        data.extend(self.u3.iter().cloned());
        data.extend(self.core.iter().cloned());
        data
    }

    /// Fill the model's bases and core from a flat sequence produced by
    /// [`export_to`](Self::export_to) on a model of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`TuckerError::ImportLength`] unless `data` holds exactly
    /// [`export_len`](Self::export_len) elements.
    pub fn import_from(&mut self, data: &[T]) -> Result<(), TuckerError> {
        let expected = self.export_len();
        if data.len() != expected {
            return Err(TuckerError::ImportLength {
                expected,
                actual: data.len(),
            });
        }

        let mut values = data.iter();
        for slot in self.u1.iter_mut() {
            *slot = *values.next().unwrap();
        }
        for slot in self.u2.iter_mut() {
            *slot = *values.next().unwrap();
        }
        for slot in self.u3.iter_mut() {
            *slot = *values.next().unwrap();
        }
        for slot in self.core.iter_mut() {
            *slot = *values.next().unwrap();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::tucker::{tucker3_hosvd, Tucker3, TuckerError};
    use tuckr_core::Tensor3;

    #[test]
    fn test_export_import_roundtrip() {
        let tensor = Tensor3::<f64>::random_uniform((4, 5, 6), 0.0, 1.0);
        let model = tucker3_hosvd(&tensor, (2, 3, 3)).unwrap();

        let flat = model.export_to();
        assert_eq!(flat.len(), 4 * 2 + 5 * 3 + 6 * 3 + 2 * 3 * 3);

        let mut restored = Tucker3::<f64>::zeros((4, 5, 6), (2, 3, 3)).unwrap();
        restored.import_from(&flat).unwrap();

        assert_eq!(restored.u1(), model.u1());
        assert_eq!(restored.u2(), model.u2());
        assert_eq!(restored.u3(), model.u3());
        for (a, b) in restored.core().iter().zip(model.core().iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_import_rejects_short_input() {
        let mut model = Tucker3::<f64>::zeros((3, 3, 3), (2, 2, 2)).unwrap();
        let short = vec![0.0; model.export_len() - 1];

        assert!(matches!(
            model.import_from(&short),
            Err(TuckerError::ImportLength { .. })
        ));
    }

    #[test]
    fn test_import_rejects_long_input() {
        let mut model = Tucker3::<f64>::zeros((3, 3, 3), (2, 2, 2)).unwrap();
        let long = vec![0.0; model.export_len() + 1];

        assert!(model.import_from(&long).is_err());
    }

    #[test]
    fn test_export_order_is_bases_then_core() {
        let mut model = Tucker3::<f64>::zeros((2, 2, 2), (1, 1, 1)).unwrap();
        let payload: Vec<f64> = (0..model.export_len()).map(|x| x as f64).collect();
        model.import_from(&payload).unwrap();

        // u1 holds the first I1*J1 = 2 values, core holds the last one
        assert_eq!(model.u1()[[0, 0]], 0.0);
        assert_eq!(model.u1()[[1, 0]], 1.0);
        assert_eq!(model.u2()[[0, 0]], 2.0);
        assert_eq!(model.u3()[[1, 0]], 5.0);
        assert_eq!(model.core()[[0, 0, 0]], 6.0);

        assert_eq!(model.export_to(), payload);
    }
}
