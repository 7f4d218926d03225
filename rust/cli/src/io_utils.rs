//! File helpers shared by commands that write output.

/// Creates the parent directory of `path` when it does not exist yet.
///
/// ```rust,no_run
/// # use pokerbots_cli::io_utils::ensure_parent_dir;
/// ensure_parent_dir(std::path::Path::new("data/hands/sim.jsonl")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.jsonl");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn bare_file_name_is_fine() {
        assert!(ensure_parent_dir(std::path::Path::new("hands.jsonl")).is_ok());
    }
}
