use std::fs;
use std::path::Path;

use super::error::Result;

/// Append `.txt` when the chosen file name carries no extension, matching
/// the save dialog's default filter. Names with any extension are kept.
pub fn ensure_txt_extension(path: &str) -> String {
    if Path::new(path).extension().is_some() {
        path.to_string()
    } else {
        format!("{}.txt", path)
    }
}

/// Write the buffer's plain text to disk, overwriting. Styling is never
/// serialized; a reload sees raw text only.
pub fn write_text_file(path: &str, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended_when_missing() {
        assert_eq!(ensure_txt_extension("/tmp/notes"), "/tmp/notes.txt");
        assert_eq!(ensure_txt_extension("notes"), "notes.txt");
    }

    #[test]
    fn test_existing_extension_is_kept() {
        assert_eq!(ensure_txt_extension("/tmp/n.txt"), "/tmp/n.txt");
        assert_eq!(ensure_txt_extension("readme.md"), "readme.md");
    }

    #[test]
    fn test_write_round_trips_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.txt");
        let path = path.to_str().unwrap();
        write_text_file(path, "Hello World").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Hello World");
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.txt");
        let path = path.to_str().unwrap();
        write_text_file(path, "first").unwrap();
        write_text_file(path, "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("n.txt");
        let err = write_text_file(path.to_str().unwrap(), "text").unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
