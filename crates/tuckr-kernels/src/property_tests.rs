//! Property-based tests for the tensor-times-matrix kernels

#[cfg(test)]
mod tests {
    use crate::{matmul, nmode_product, transpose, tucker_product};
    use proptest::prelude::*;
    use scirs2_core::ndarray_ext::Array2;
    use tuckr_core::Tensor3;

    fn proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 16,
            ..ProptestConfig::default()
        }
    }

    fn identity(n: usize) -> Array2<f64> {
        let mut eye = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            eye[[i, i]] = 1.0;
        }
        eye
    }

    // Property: the identity matrix is neutral for the n-mode product
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn nmode_identity_is_neutral(
            i1 in 1usize..5,
            i2 in 1usize..5,
            i3 in 1usize..5,
            mode in 0usize..3,
        ) {
            let tensor = Tensor3::<f64>::random_uniform((i1, i2, i3), -1.0, 1.0);
            let extent = [i1, i2, i3][mode];

            let result = nmode_product(&tensor, &identity(extent).view(), mode).unwrap();
            prop_assert_eq!(result.to_vec(), tensor.to_vec());
        }
    }

    // Property: an all-identity Tucker product is the core itself
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn tucker_product_identity_is_core(
            j1 in 1usize..4,
            j2 in 1usize..4,
            j3 in 1usize..4,
        ) {
            let core = Tensor3::<f64>::random_uniform((j1, j2, j3), -1.0, 1.0);

            let result = tucker_product(
                &core,
                &identity(j1).view(),
                &identity(j2).view(),
                &identity(j3).view(),
            )
            .unwrap();
            prop_assert_eq!(result.to_vec(), core.to_vec());
        }
    }

    // Property: n-mode product agrees with the direct contraction
    // sum_r M[j, r] * X[.., r, ..]
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn nmode_matches_direct_contraction(
            i1 in 1usize..4,
            i2 in 1usize..4,
            i3 in 1usize..4,
            rows in 1usize..4,
        ) {
            let tensor = Tensor3::<f64>::random_uniform((i1, i2, i3), -1.0, 1.0);
            let matrix = {
                use scirs2_core::random::quick::random_f64;
                let mut m = Array2::<f64>::zeros((rows, i2));
                for r in 0..rows {
                    for c in 0..i2 {
                        m[[r, c]] = random_f64() * 2.0 - 1.0;
                    }
                }
                m
            };

            let result = nmode_product(&tensor, &matrix.view(), 1).unwrap();
            prop_assert_eq!(result.dims(), (i1, rows, i3));

            for a in 0..i1 {
                for j in 0..rows {
                    for c in 0..i3 {
                        let direct: f64 = (0..i2)
                            .map(|r| matrix[[j, r]] * tensor[[a, r, c]])
                            .sum();
                        prop_assert!((result[[a, j, c]] - direct).abs() < 1e-10);
                    }
                }
            }
        }
    }

    // Property: transpose is an involution and matmul respects it:
    // (A . B)^T == B^T . A^T
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn matmul_transpose_identity(
            m in 1usize..4,
            k in 1usize..4,
            n in 1usize..4,
        ) {
            use scirs2_core::random::quick::random_f64;
            let mut a = Array2::<f64>::zeros((m, k));
            let mut b = Array2::<f64>::zeros((k, n));
            for x in a.iter_mut().chain(b.iter_mut()) {
                *x = random_f64() * 2.0 - 1.0;
            }

            prop_assert_eq!(&transpose(&transpose(&a.view()).view()), &a);

            let lhs = transpose(&matmul(&a.view(), &b.view()).unwrap().view());
            let rhs = matmul(&transpose(&b.view()).view(), &transpose(&a.view()).view()).unwrap();
            for (x, y) in lhs.iter().zip(rhs.iter()) {
                prop_assert!((x - y).abs() < 1e-12);
            }
        }
    }
}
