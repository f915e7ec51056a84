//! Capability-table usage emitter.
//!
//! Consumes a symbol-table listing grouped by translation unit and emits one
//! capability load per global code symbol defined in a recognized source
//! file. Linking the emitted stub into the image forces those capabilities
//! resident before normal first-use relocation would fetch them.
//!
//! This is a pure line-stream transformer: it performs no filesystem I/O and
//! composes with any upstream symbol-table producer.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Source file extensions whose symbols take part in preloading.
const ELIGIBLE_TYPES: [&str; 4] = ["c", "cpp", "cxx", "s"];

/// Emit capability preload instructions for the symbol listing in `input`.
///
/// The listing interleaves translation-unit labels (single-token lines such
/// as `init.cpp`) with symbol rows of exactly three tokens,
/// `<address> <flag> <name>`. A label selects the current unit type from its
/// final extension; a row emits exactly when its flag is `T` and the current
/// type is recognized. Lines of any other shape are ignored.
///
/// A label without an extension is a fatal parse error. Symbol names are
/// substituted into the instruction template verbatim.
pub fn emit_usage<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    writeln!(output, "# DO NOT EDIT. AUTO-GENERATED.")?;
    writeln!(output, ".text")?;

    // Rows ahead of the first label are included; real listings lead with a
    // label, so this only matters for hand-fed input.
    let mut should_include = true;
    for line in input.lines() {
        let line = line.context("failed to read symbol listing")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [label] => {
                let (_, extension) = label.rsplit_once('.').with_context(|| {
                    format!("translation unit label `{label}` has no extension")
                })?;
                should_include = ELIGIBLE_TYPES.contains(&extension.to_lowercase().as_str());
            }
            [_address, "T", name] if should_include => {
                writeln!(output, "clcbi $c1, %captab20({name})($c25)")?;
            }
            _ => {}
        }
    }
    Ok(())
}
