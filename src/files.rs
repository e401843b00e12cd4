//! File-level compression and decompression.
//!
//! Chooses the direction from the input extension, derives the output name
//! by swapping the extension, and locates dictionaries in the dictionary
//! directory. Input is read and the output path resolved before anything is
//! written, so a failed run never leaves a partial file behind.

use std::path::{Path, PathBuf};

use crate::codec::{CompressionResult, DecompressionResult, Dictionary, DocumentCodec};
use crate::config::{CodecConfig, Config, DictionaryConfig};
use crate::error::{CtffError, Result};

/// Name of the dictionary directory next to the executable
pub const DICT_DIR_NAME: &str = "dict";

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain text to compressed
    Compress,
    /// Compressed to plain text
    Decompress,
}

impl Mode {
    /// Decompress files carrying the compressed extension, compress anything
    /// else
    pub fn detect(path: &Path, config: &CodecConfig) -> Self {
        let compressed = file_name(path)
            .and_then(|name| name.strip_suffix(config.compressed_extension.as_str()))
            .is_some_and(|stem| stem.ends_with('.'));
        if compressed {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }

    /// Extension given to this mode's output
    pub fn output_extension<'c>(&self, config: &'c CodecConfig) -> &'c str {
        match self {
            Mode::Compress => config.compressed_extension.as_str(),
            Mode::Decompress => config.plain_extension.as_str(),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Compress => write!(f, "compress"),
            Mode::Decompress => write!(f, "decompress"),
        }
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// Output file for `input`: everything from the last `.` of its file name
/// replaced by the mode's extension.
///
/// Fails when the file name has no `.`, so `.ctff` becomes `.txt`.
pub fn output_path(input: &Path, mode: Mode, config: &CodecConfig) -> Result<PathBuf> {
    let stem = file_name(input)
        .and_then(|name| name.rfind('.').map(|dot| &name[..dot]))
        .ok_or_else(|| CtffError::InvalidFileName(input.to_path_buf()))?;
    Ok(input.with_file_name(format!("{stem}.{}", mode.output_extension(config))))
}

/// Directory containing the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| CtffError::Config(format!("No parent directory for {}", exe.display())))
}

/// Dictionary directory: configured, else `dict/` next to the executable
pub fn dictionary_dir(config: &DictionaryConfig) -> Result<PathBuf> {
    match &config.dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(executable_dir()?.join(DICT_DIR_NAME)),
    }
}

/// Path of dictionary `name` (default name when `None`)
pub fn resolve_dictionary(config: &DictionaryConfig, name: Option<&str>) -> Result<PathBuf> {
    let name = name.unwrap_or(&config.default_name);
    Ok(dictionary_dir(config)?.join(format!("{name}.{}", config.extension)))
}

/// Read a whole text file
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CtffError::InputNotFound(path.to_path_buf()),
        _ => CtffError::Io(e),
    })?;
    String::from_utf8(bytes).map_err(|source| CtffError::Utf8 {
        path: path.to_path_buf(),
        source,
    })
}

/// Compress `input` into `output` (derived from `input` when `None`)
pub fn compress_file(
    input: &Path,
    output: Option<&Path>,
    dictionary: &Dictionary,
    config: &Config,
) -> Result<(PathBuf, CompressionResult)> {
    let text = read_text(input)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => output_path(input, Mode::Compress, &config.codec)?,
    };

    let result = DocumentCodec::new(dictionary).compress(&text);
    std::fs::write(&output, &result.data)?;

    tracing::info!(
        "Compressed {} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        result.original_bytes,
        result.compressed_bytes
    );
    Ok((output, result))
}

/// Decompress `input` into `output` (derived from `input` when `None`)
pub fn decompress_file(
    input: &Path,
    output: Option<&Path>,
    dictionary: &Dictionary,
    config: &Config,
) -> Result<(PathBuf, DecompressionResult)> {
    let data = read_text(input)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => output_path(input, Mode::Decompress, &config.codec)?,
    };

    let result = DocumentCodec::new(dictionary)
        .with_unescape_expansions(config.codec.unescape_expansions())
        .decompress(&data);
    std::fs::write(&output, &result.text)?;

    tracing::info!(
        "Decompressed {} -> {} ({} lines)",
        input.display(),
        output.display(),
        result.lines
    );
    Ok((output, result))
}
