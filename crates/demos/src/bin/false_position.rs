//! False position on `3x - cos(x) - 1` over `[0.25, 0.75]`.
//!
//! ```sh
//! cargo run -p rootfind-demos --bin false_position
//! ```

use std::error::Error;

use rootfind_demos::{false_position_root, init_tracing};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let x = false_position_root()?;
    tracing::info!(x, "false position converged");

    println!("Root of the equation: {x}");
    Ok(())
}
