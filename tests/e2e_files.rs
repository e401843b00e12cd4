//! End-to-end file tests.
//!
//! These tests run whole-file compression and decompression in a temporary
//! directory, including the failure paths that must not leave output behind.

use std::fs;
use std::path::PathBuf;

use ctff::config::{Config, DictionaryConfig};
use ctff::files::{self, Mode};
use ctff::{compress_file, decompress_file, CtffError, Dictionary};
use tempfile::TempDir;

const DICTIONARY: &str = "the\nquick\nbrown\nfox\njump\nover\nlazy\ndog\n";

fn setup() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let dict_dir = dir.path().join("dict");
    fs::create_dir(&dict_dir).unwrap();
    fs::write(dict_dir.join("english.txt"), DICTIONARY).unwrap();

    let config = Config {
        dictionary: DictionaryConfig {
            dir: Some(dict_dir),
            ..Default::default()
        },
        ..Default::default()
    };
    (dir, config)
}

fn load_dictionary(config: &Config) -> Dictionary {
    let path = files::resolve_dictionary(&config.dictionary, None).unwrap();
    Dictionary::load(path).unwrap()
}

/// Test compress then decompress through the file layer
#[test]
fn test_file_roundtrip() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join("story.txt");
    let text = "The quick Brown fox jumps over the LAZY dog\nThe dog sleeps\n";
    fs::write(&input, text).unwrap();

    let (compressed_path, result) = compress_file(&input, None, &dictionary, &config).unwrap();
    assert_eq!(compressed_path, dir.path().join("story.ctff"));
    assert_eq!(fs::read_to_string(&compressed_path).unwrap(), result.data);
    assert!(result.is_beneficial());
    assert_eq!(
        Mode::detect(&compressed_path, &config.codec),
        Mode::Decompress
    );

    // Decompress next to the original rather than over it
    let restored_path = dir.path().join("restored.txt");
    let (written, report) = decompress_file(
        &compressed_path,
        Some(restored_path.as_path()),
        &dictionary,
        &config,
    )
    .unwrap();
    assert_eq!(written, restored_path);
    assert_eq!(report.lines, 2);
    assert_eq!(fs::read_to_string(&restored_path).unwrap(), text);
}

/// Test decompression derives the plain file name
#[test]
fn test_decompress_output_name() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join("notes.ctff");
    fs::write(&input, " ;#\n\\UPR\n;").unwrap();

    let (output, _) = decompress_file(&input, None, &dictionary, &config).unwrap();
    assert_eq!(output, dir.path().join("notes.txt"));
    assert_eq!(fs::read_to_string(output).unwrap(), "The fox\n");
}

/// Test a missing dictionary is reported
#[test]
fn test_missing_dictionary() {
    let (_dir, config) = setup();
    let path = files::resolve_dictionary(&config.dictionary, Some("klingon")).unwrap();

    let err = Dictionary::load(&path).unwrap_err();
    assert!(matches!(err, CtffError::DictionaryNotFound(p) if p == path));
}

/// Test an empty dictionary is reported
#[test]
fn test_empty_dictionary() {
    let (dir, config) = setup();
    let path = dir.path().join("dict").join("empty.txt");
    fs::write(&path, "").unwrap();

    let err = Dictionary::load(&path).unwrap_err();
    assert!(matches!(err, CtffError::DictionaryEmpty(_)));
    assert!(files::resolve_dictionary(&config.dictionary, Some("empty"))
        .unwrap()
        .is_file());
}

/// Test a missing input fails without creating output
#[test]
fn test_missing_input() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join("absent.txt");
    let err = compress_file(&input, None, &dictionary, &config).unwrap_err();
    assert!(matches!(err, CtffError::InputNotFound(_)));
    assert!(!dir.path().join("absent.ctff").exists());
}

/// Test an input without an extension fails without creating output
#[test]
fn test_input_without_extension() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join("README");
    fs::write(&input, "the dog\n").unwrap();

    let err = compress_file(&input, None, &dictionary, &config).unwrap_err();
    assert!(matches!(err, CtffError::InvalidFileName(_)));

    let entries: Vec<PathBuf> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 2, "unexpected files: {entries:?}");
}

/// Test invalid UTF-8 input is rejected
#[test]
fn test_invalid_utf8_input() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join("binary.txt");
    fs::write(&input, [0x66, 0x6f, 0xff, 0x0a]).unwrap();

    let err = compress_file(&input, None, &dictionary, &config).unwrap_err();
    assert!(matches!(err, CtffError::Utf8 { .. }));
    assert!(!dir.path().join("binary.ctff").exists());
}

/// Test a compressed file without the capitalization section
#[test]
fn test_file_missing_caps_section() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join("broken.ctff");
    fs::write(&input, " ;#\n").unwrap();

    let (output, report) = decompress_file(&input, None, &dictionary, &config).unwrap();
    assert!(!report.caps_section_found);
    assert_eq!(fs::read_to_string(output).unwrap(), "the fox\n");
}

/// Test dictionary lines with CRLF endings
#[test]
fn test_crlf_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("windows.txt");
    fs::write(&path, "the\r\ncat\r\n").unwrap();

    let dictionary = Dictionary::load(&path).unwrap();
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.find_exact("cat"), Some(1));
}

/// Test config file loading
#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[dictionary]\ndefault_name = \"medical\"\n\n[codec]\ncompressed_extension = \"cz\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.dictionary.default_name, "medical");
    assert_eq!(config.codec.compressed_extension, "cz");
    assert_eq!(
        files::output_path(&dir.path().join("a.txt"), Mode::Compress, &config.codec).unwrap(),
        dir.path().join("a.cz")
    );
}

/// Test a malformed config file is reported as a config error
#[test]
fn test_config_file_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[codec\nplain_extension = 3\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, CtffError::Config(msg) if msg.starts_with("Failed to parse config")));
}

/// Test a file named only by the compressed extension is decompressed
#[test]
fn test_hidden_compressed_file() {
    let (dir, config) = setup();
    let dictionary = load_dictionary(&config);

    let input = dir.path().join(".ctff");
    fs::write(&input, " \n\\UPR\n;").unwrap();
    assert_eq!(Mode::detect(&input, &config.codec), Mode::Decompress);

    let (output, _) = decompress_file(&input, None, &dictionary, &config).unwrap();
    assert_eq!(output, dir.path().join(".txt"));
    assert_eq!(fs::read_to_string(output).unwrap(), "The\n");
}
