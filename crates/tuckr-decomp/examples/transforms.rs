//! Cross-model transform example
//!
//! Shows how an already-computed Tucker3 model can be reshaped without
//! re-decomposing the raw data: rank reduction, spatial subsampling, and
//! region-of-interest extraction.
//!
//! Run with:
//! ```bash
//! cargo run --example transforms
//! ```

use tuckr_core::Tensor3;
use tuckr_decomp::tucker3_decompose;

fn main() -> anyhow::Result<()> {
    let tensor = Tensor3::<f64>::random_uniform((16, 16, 16), 0.0, 1.0);
    let model = tucker3_decompose(&tensor, (8, 8, 8))?;

    println!(
        "Source model: extents {:?}, ranks {:?}, error {:.4}",
        model.dims(),
        model.ranks(),
        model.relative_error(&tensor)?
    );

    // Cheaper model from the same decomposition
    let reduced = model.reduce_ranks((4, 4, 4))?;
    println!(
        "Rank-reduced: ranks {:?}, compression {:.2}x, error {:.4}",
        reduced.ranks(),
        reduced.compression_ratio(),
        reduced.relative_error(&tensor)?
    );

    // Half-resolution models, nearest and averaged
    let nearest = model.subsample(2)?;
    println!(
        "Subsampled (nearest): extents {:?}",
        nearest.reconstruct()?.dims()
    );

    let averaged = model.subsample_mean(2)?;
    println!(
        "Subsampled (averaged): extents {:?}",
        averaged.reconstruct()?.dims()
    );

    // A window into the volume
    let roi = model.region_of_interest((4, 12), (4, 12), (0, 8))?;
    println!("Region of interest: extents {:?}", roi.reconstruct()?.dims());

    Ok(())
}
