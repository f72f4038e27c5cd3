//! Build a second-difference operator and poke at its band storage

use bandmat::{Band, BandStorage, BandedMatrix, Result};

fn main() -> Result<()> {
    let n = 8;

    // -1, 2, -1 on the three central diagonals
    let mut laplacian = BandedMatrix::<f64>::zeros(n, n, "-1:1".parse::<bandmat::Bandwidths>()?);
    laplacian.set_diagonal(Band(-1), &vec![-1.0; n - 1])?;
    laplacian.set_diagonal(Band::MAIN, &vec![2.0; n])?;
    laplacian.set_diagonal(Band(1), &vec![-1.0; n - 1])?;

    println!("Matrix: {n} x {n}, bandwidths {}", laplacian.bandwidths());
    println!(
        "Stored cells: {} for {} logical entries",
        laplacian.storage().len(),
        n * n
    );

    // Dense assignment code works as long as it respects the band
    if let Err(e) = laplacian.set(0, 5, 1.0) {
        println!("Rejected write: {e}");
    }
    laplacian.set(0, 5, 0.0)?;

    // Interior slice shares storage with the parent
    let slice = laplacian.slice(2..6, 2..6)?;
    println!("Slice aliases parent: {}", slice.is_aliased());
    println!("Slice row 1: {:?}", slice.view().row(1)?);

    // What an external band kernel would receive
    let layout = laplacian.blas_layout()?;
    println!(
        "BLAS layout: m={} n={} kl={} ku={} ldab={}",
        layout.m, layout.n, layout.kl, layout.ku, layout.ldab
    );

    let scaled = &laplacian * 0.5;
    println!("Dense (scaled by 1/2):\n{}", scaled.to_dense());
    Ok(())
}
