//! Generate a QR code and save it to a file
//!
//! Usage: cargo run --example generate

use qrmint::{Minter, OutputOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let minter = Minter::new(&OutputOptions::default())?;
    minter.mint_to("https://example.com", Path::new("qr_demo.png"))?;

    println!("✓ QR code generated and saved to qr_demo.png");

    Ok(())
}
