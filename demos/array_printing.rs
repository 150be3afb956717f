use anyhow::{Context, Result};
use modeling_utils::format::{array2string, array_repr_oneline};
use modeling_utils::math::{can_broadcast, comb_array, poly_map_domain};
use modeling_utils::PrintOptions;
use ndarray::{array, Array};

fn main() -> Result<()> {
    env_logger::init();

    // Coordinates in the model's natural domain, mapped onto [-1, 1]
    let x = Array::linspace(0.0, 10.0, 6);
    let mapped = poly_map_domain(&x, (0.0, 10.0), (-1.0, 1.0));
    println!("x      = {}", array_repr_oneline(&x)?);
    println!("mapped = {}", array_repr_oneline(&mapped)?);

    let n = array![[4i64, 5, 6], [7, 8, 9]];
    let k = array![[2i64, 2, 3], [3, 4, 10]];
    let coeffs = comb_array(&n, &k).context("computing binomial coefficients")?;
    println!("comb:\n{}", array2string(&coeffs, &PrintOptions::default())?);
    println!("comb (one line) = {}", array_repr_oneline(&coeffs)?);

    println!(
        "shapes {:?} and {:?} broadcast: {}",
        n.shape(),
        &[1, 3],
        can_broadcast(n.shape(), &[1, 3])
    );

    Ok(())
}
