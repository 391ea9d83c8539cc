//! Newton-Raphson on `sin(x) - x/2` from `pi/2`.
//!
//! ```sh
//! cargo run -p rootfind-demos --bin newton
//! ```

use std::error::Error;

use rootfind_demos::{init_tracing, newton_root};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let x = newton_root()?;
    tracing::info!(x, "newton converged");

    println!("Positive root of the equation: {x}");
    Ok(())
}
