//! Elementwise arithmetic operators for order-3 tensors
//!
//! Extents are fixed per the data model, so binary operators require exact
//! shape equality and panic otherwise.

use super::types::Tensor3;
use scirs2_core::numeric::Num;

impl<'b, T> std::ops::Sub<&'b Tensor3<T>> for &Tensor3<T>
where
    T: Clone + Num,
{
    type Output = Tensor3<T>;

    fn sub(self, rhs: &'b Tensor3<T>) -> Self::Output {
        assert_eq!(
            self.dims(),
            rhs.dims(),
            "Shape mismatch in tensor subtraction"
        );
        Tensor3 {
            data: &self.data - &rhs.data,
        }
    }
}

impl<'b, T> std::ops::Add<&'b Tensor3<T>> for &Tensor3<T>
where
    T: Clone + Num,
{
    type Output = Tensor3<T>;

    fn add(self, rhs: &'b Tensor3<T>) -> Self::Output {
        assert_eq!(self.dims(), rhs.dims(), "Shape mismatch in tensor addition");
        Tensor3 {
            data: &self.data + &rhs.data,
        }
    }
}

impl<T> std::ops::Mul<T> for &Tensor3<T>
where
    T: Clone + Num + scirs2_core::ndarray_ext::ScalarOperand,
{
    type Output = Tensor3<T>;

    fn mul(self, scalar: T) -> Self::Output {
        Tensor3 {
            data: &self.data * scalar,
        }
    }
}

impl<T> std::ops::Div<T> for &Tensor3<T>
where
    T: Clone + Num + scirs2_core::ndarray_ext::ScalarOperand,
{
    type Output = Tensor3<T>;

    fn div(self, scalar: T) -> Self::Output {
        Tensor3 {
            data: &self.data / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_add() {
        let a = Tensor3::from_vec(vec![5.0, 6.0, 7.0, 8.0], (2, 2, 1)).unwrap();
        let b = Tensor3::from_vec(vec![1.0, 2.0, 3.0, 4.0], (2, 2, 1)).unwrap();

        let diff = &a - &b;
        assert_eq!(diff.to_vec(), vec![4.0, 4.0, 4.0, 4.0]);

        let sum = &diff + &b;
        assert_eq!(sum.to_vec(), a.to_vec());
    }

    #[test]
    fn test_scalar_ops() {
        let a = Tensor3::from_vec(vec![2.0, 4.0], (2, 1, 1)).unwrap();
        assert_eq!((&a * 3.0).to_vec(), vec![6.0, 12.0]);
        assert_eq!((&a / 2.0).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch")]
    fn test_sub_shape_mismatch() {
        let a = Tensor3::<f64>::zeros((2, 2, 2));
        let b = Tensor3::<f64>::zeros((2, 2, 3));
        let _ = &a - &b;
    }
}
