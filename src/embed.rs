//! Resource embedder.
//!
//! Packs every file of an input directory into a linkable data segment.
//! Two artifacts are produced:
//! 1. A declarations header exposing each file as a pair of C-linkage byte
//!    symbols, `__<id>_start` and `__<id>_end`.
//! 2. An assembly data segment that splices each file's raw bytes in between
//!    those symbols via `.incbin`.
//!
//! Boot code then reaches the embedded bytes by symbol, with no filesystem
//! available yet.

use anyhow::{anyhow, bail, Context, Result};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::utils::write_atomic;

/// Marker line at the top of every generated artifact.
const MARKER: &str = "// AUTO GENERATED. DO NOT EDIT.";

/// A directory entry scheduled for embedding.
///
/// The identifier is the file name up to its first `.`; it must be unique
/// across one run because it becomes part of the linker symbols bracketing
/// the file's bytes.
#[derive(Debug, Clone)]
pub struct EmbeddedFile {
    /// Path the assembler reads the raw bytes from.
    pub path: PathBuf,
    /// Symbol stem derived from the file name.
    pub identifier: String,
    /// Byte length of the file.
    pub size: u64,
}

impl EmbeddedFile {
    /// Symbol marking the first embedded byte.
    pub fn start_symbol(&self) -> String {
        format!("__{}_start", self.identifier)
    }

    /// Symbol marking the position one past the last embedded byte.
    pub fn end_symbol(&self) -> String {
        format!("__{}_end", self.identifier)
    }
}

/// List the files to embed from `input_dir`.
///
/// Entries are sorted by file name so the artifacts do not depend on the
/// filesystem's listing order. Every entry must be a readable plain file: a
/// subdirectory or a file vanishing between listing and open breaks the run
/// rather than silently dropping out of the image. Two entries that share an
/// identifier (`a.bin` and `a.txt`) would silently overwrite each other's
/// symbol pair, so duplicates are rejected as well.
pub fn scan_directory(input_dir: &Path) -> Result<Vec<EmbeddedFile>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(input_dir)
        .with_context(|| format!("failed to read directory {}", input_dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("failed to list {}", input_dir.display()))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| anyhow!("file name is not valid UTF-8: {:?}", name))?;
        names.push(name);
    }
    names.sort();

    let mut claimed: HashMap<String, PathBuf> = HashMap::new();
    let mut files = Vec::new();
    for name in names {
        let path = input_dir.join(&name);
        let file =
            File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
        let metadata = file
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if metadata.is_dir() {
            bail!(
                "{} is a directory; only plain files can be embedded",
                path.display()
            );
        }

        let identifier = match name.split_once('.') {
            Some((stem, _)) => stem.to_string(),
            None => name.clone(),
        };
        if let Some(previous) = claimed.insert(identifier.clone(), path.clone()) {
            bail!(
                "identifier `{}` is claimed by both {} and {}",
                identifier,
                previous.display(),
                path.display()
            );
        }

        tracing::trace!("embedding {} as `{}` ({} bytes)", path.display(), identifier, metadata.len());
        files.push(EmbeddedFile {
            path,
            identifier,
            size: metadata.len(),
        });
    }
    Ok(files)
}

/// Render the declarations header for `files`.
pub fn render_declarations(files: &[EmbeddedFile]) -> String {
    let mut out = String::new();
    out.push_str(MARKER);
    out.push('\n');
    for file in files {
        out.push_str(&format!(
            "extern const char {}, {};\n",
            file.start_symbol(),
            file.end_symbol()
        ));
    }
    out
}

/// Render the assembly data segment for `files`.
///
/// Each file gets a 64-byte aligned block: global start/end labels around an
/// `.incbin` of the original path, the start symbol sized to the file's byte
/// length and the end symbol sized to the single byte it anchors.
pub fn render_segment(files: &[EmbeddedFile]) -> String {
    let mut out = String::new();
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(".data\n");
    for file in files {
        let start = file.start_symbol();
        let end = file.end_symbol();
        out.push_str(".p2align 6\n");
        out.push_str(&format!(".global {start}\n"));
        out.push_str(&format!(".global {end}\n"));
        out.push_str(&format!("{start}:\n"));
        out.push_str(&format!(".incbin \"{}\"\n", file.path.display()));
        out.push_str(&format!("{end}:\n"));
        out.push_str(&format!(".size {start}, {}\n", file.size));
        out.push_str(&format!(".size {end}, 1\n"));
    }
    out
}

/// Embed every file under `input_dir`.
///
/// Writes the declarations header to `declarations_out` and the data-segment
/// assembly to `segment_out`. Both artifacts are rendered in full and
/// replaced atomically; re-running over an unchanged directory produces
/// byte-identical output.
pub fn embed(input_dir: &Path, declarations_out: &Path, segment_out: &Path) -> Result<()> {
    let files = scan_directory(input_dir)?;
    tracing::debug!(
        "embedding {} files from {}",
        files.len(),
        input_dir.display()
    );
    write_atomic(declarations_out, render_declarations(&files).as_bytes())?;
    write_atomic(segment_out, render_segment(&files).as_bytes())?;
    Ok(())
}
