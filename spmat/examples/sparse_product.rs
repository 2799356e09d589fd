//! Multiply two large, very sparse matrices and save the product

use spmat::{CooMatrix, Operation, SparseMatrix};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    // Dimensions far too large to store densely
    let n = 1_000_000;
    let mut a = CooMatrix::new(n, n);
    let mut b = CooMatrix::new(n, n);

    for i in 0..10_000i64 {
        a.set(i * 97, i * 13, i % 7 + 1);
        b.set(i * 13, i * 31, 2);
    }
    println!("A: {} non-zeros, B: {} non-zeros", a.nnz(), b.nnz());

    let start = Instant::now();
    let product = a.apply(Operation::Multiply, &b)?;
    println!(
        "Product {}x{} with {} non-zeros in {:?}",
        product.rows(),
        product.cols(),
        product.nnz(),
        start.elapsed()
    );

    product.save("sparse_product.txt")?;
    println!("Saved to sparse_product.txt");
    Ok(())
}
