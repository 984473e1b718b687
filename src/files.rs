use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::document::DocumentProcessor;
use crate::error::{Result, SpellError};
use crate::suggest::Confirmer;

/// `notes.txt` becomes `notes_updated.txt`, next to the input.
pub fn updated_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut name: OsString = path.file_stem().unwrap_or_default().to_os_string();
    name.push("_updated");
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SpellError::FileNotFound(path.to_path_buf()),
        _ => SpellError::io(path, e),
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Correct `path` and write the result to [`updated_path`].
///
/// Returns the path that was written.
pub fn correct_file<P: AsRef<Path>>(
    processor: &DocumentProcessor<'_>,
    path: P,
    confirmer: &mut dyn Confirmer,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let document = processor.process(&lines, confirmer);
    let output = updated_path(path);
    fs::write(&output, document.render()).map_err(|e| SpellError::io(&output, e))?;
    info!("wrote {}", output.display());
    Ok(output)
}
