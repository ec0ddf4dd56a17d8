//! Formats a sample transaction description and prints it.
//!
//! Run with `cargo run --example receipt`. Pipe the output through `cat` to
//! see the Auto mode fall back to plain text.

use chekfmt::{format, DocumentRenderer, OutputMode, RenderError};

fn main() -> Result<(), RenderError> {
    let raw = "Savdo:;\
               Non - 2x1500=3000;\
               Olma - 3x1000=3000[10% chegirma];\
               Kola 1.5L - 1x12000=12000;\
               Jami: 18000;\
               Chegirma: 300;\
               Naqd pul";

    let doc = format(raw);
    let out = DocumentRenderer::new(OutputMode::Auto).render(&doc)?;
    println!("{}", out);
    Ok(())
}
