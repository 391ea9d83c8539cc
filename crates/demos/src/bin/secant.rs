//! Secant method on `x^3 + x^2 - 3x - 3` from seeds `1` and `2`.
//!
//! ```sh
//! cargo run -p rootfind-demos --bin secant
//! ```

use std::error::Error;

use rootfind_demos::{init_tracing, secant_root};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let x = secant_root()?;
    tracing::info!(x, "secant converged");

    println!("Root of the equation: {x}");
    Ok(())
}
