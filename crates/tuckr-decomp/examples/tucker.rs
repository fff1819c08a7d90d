//! Tucker3 Decomposition Example
//!
//! Demonstrates HOSVD, ALS refinement, and reconstruction quality on random
//! third-order data.
//!
//! Run with:
//! ```bash
//! cargo run --example tucker
//! ```

use tuckr_core::Tensor3;
use tuckr_decomp::{tucker3_als, tucker3_decompose, tucker3_hosvd};

fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(70));
    println!("Tucker3 Decomposition Example");
    println!("{}", "=".repeat(70));
    println!();

    // ========================================================================
    // Example 1: Default decomposition
    // ========================================================================
    println!("Example 1: Default decomposition");
    println!("{}", "-".repeat(70));

    let dims = (24, 20, 16);
    let ranks = (8, 8, 8);
    let tensor = Tensor3::<f64>::random_uniform(dims, 0.0, 1.0);

    println!("Tensor extents: {:?}", dims);
    println!("Target ranks: {:?}", ranks);

    let start = std::time::Instant::now();
    let model = tucker3_decompose(&tensor, ranks)?;
    let elapsed = start.elapsed();

    println!("  - Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!("  - Iterations: {}", model.iters());
    println!("  - Core extents: {:?}", model.core().dims());
    println!("  - Compression ratio: {:.2}x", model.compression_ratio());
    println!(
        "  - Relative error: {:.6}",
        model.relative_error(&tensor)?
    );
    println!();

    // ========================================================================
    // Example 2: HOSVD vs ALS
    // ========================================================================
    println!("Example 2: HOSVD vs ALS refinement");
    println!("{}", "-".repeat(70));

    let tensor = Tensor3::<f64>::random_uniform((16, 16, 16), 0.0, 1.0);
    let ranks = (6, 6, 6);

    let hosvd = tucker3_hosvd(&tensor, ranks)?;
    let hosvd_error = hosvd.relative_error(&tensor)?;

    let als = tucker3_als(&tensor, ranks, 10, 1e-6)?;
    let als_error = als.relative_error(&tensor)?;

    println!("HOSVD relative error: {:.6}", hosvd_error);
    println!(
        "ALS relative error:   {:.6} ({} iterations)",
        als_error,
        als.iters()
    );
    println!();

    // ========================================================================
    // Example 3: Compression vs accuracy trade-off
    // ========================================================================
    println!("Example 3: Compression vs accuracy trade-off");
    println!("{}", "-".repeat(70));

    let tensor = Tensor3::<f64>::random_uniform((20, 20, 20), 0.0, 1.0);

    println!("Rank | Compression | Rel. Error");
    println!("{}", "-".repeat(40));
    for &r in &[2, 4, 8, 12, 16] {
        let model = tucker3_hosvd(&tensor, (r, r, r))?;
        println!(
            "{:4} | {:10.2}x | {:10.6}",
            r,
            model.compression_ratio(),
            model.relative_error(&tensor)?
        );
    }
    println!();

    // ========================================================================
    // Example 4: Exactly representable data
    // ========================================================================
    println!("Example 4: Constant data is exact at any rank");
    println!("{}", "-".repeat(70));

    let constant = Tensor3::<f64>::ones((12, 12, 12));
    let model = tucker3_decompose(&constant, (2, 2, 2))?;
    println!(
        "All-ones 12x12x12 at ranks (2,2,2): relative error {:.2e}",
        model.relative_error(&constant)?
    );

    println!();
    println!("{}", "=".repeat(70));
    println!("Done");

    Ok(())
}
