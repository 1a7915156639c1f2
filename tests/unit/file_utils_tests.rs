/*!
 * Tests for file system utilities
 */

use anyhow::Result;
use topicseek::file_utils::FileManager;
use crate::common;

/// Test writing and reading a file round trip
#[test]
fn test_write_and_read_withNestedPath_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested/dir/notes.txt");

    FileManager::write_to_file(&path, "caption content")?;
    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path)?, "caption content");
    Ok(())
}

/// Test that reading a missing file fails with context
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let result = FileManager::read_to_string("no/such/file.vtt");
    assert!(result.is_err());
}

/// Test directory creation is idempotent
#[test]
fn test_ensure_dir_withExistingDir_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().join("work");

    FileManager::ensure_dir(&dir)?;
    FileManager::ensure_dir(&dir)?;
    assert!(dir.is_dir());
    Ok(())
}

/// Test finding files by extension, case-insensitively and sorted
#[test]
fn test_find_files_withMixedExtensions_shouldFilterAndSort() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "b.vtt", "second")?;
    common::create_test_file(&dir, "a.VTT", "first")?;
    common::create_test_file(&dir, "video.mp4", "not captions")?;

    let found = FileManager::find_files(&dir, "vtt");
    assert_eq!(found.len(), 2);
    assert!(found[0].ends_with("a.VTT"));
    assert!(found[1].ends_with("b.vtt"));

    assert!(FileManager::find_files(&dir, "srt").is_empty());
    Ok(())
}
