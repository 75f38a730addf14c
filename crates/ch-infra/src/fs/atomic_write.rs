use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

/// File name prefix of the temporary files written next to `path`.
///
/// Every save gets its own uniquely named file with this prefix, so two
/// processes writing the same target never share a temp file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ch_infra::fs::temp_prefix;
///
/// assert_eq!(temp_prefix(Path::new("/data/clip_history.json")), ".clip_history.json.");
/// ```
pub fn temp_prefix(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(".{name}.")
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Atomically replaces the file at `path` with `content`.
///
/// The content is written and flushed to a fresh temp file in the same
/// directory and then renamed over `path`, so the target holds either its
/// previous contents or the complete new contents. Concurrent writers each
/// publish a whole file; the last rename wins. Missing parent directories
/// are created. A temp file left by a failed write is removed on drop.
pub async fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let path = path.to_path_buf();
    let content = content.to_vec();
    tokio::task::spawn_blocking(move || write_and_persist(&path, &content))
        .await
        .map_err(io::Error::other)?
}

fn write_and_persist(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = parent_dir(path);
    std::fs::create_dir_all(&dir)?;

    let mut tmp: NamedTempFile = Builder::new()
        .prefix(&temp_prefix(path))
        .suffix(".tmp")
        .tempfile_in(&dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    // TODO: rename over an open target can fail on Windows; retry with a short backoff there.
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn atomic_write_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        let path = nested.join("file.json");

        atomic_write(&path, b"{}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(dir_names(&nested), vec!["file.json".to_string()]);
    }

    #[tokio::test]
    async fn atomic_write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        std::fs::write(&path, "old").unwrap();

        atomic_write(&path, b"new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn failed_write_cleans_up_its_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("target");
        // A non-empty directory at the target makes the final rename fail.
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("inner"), "x").unwrap();

        atomic_write(&path, b"data").await.unwrap_err();

        assert_eq!(dir_names(dir.path()), vec!["target".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_always_publish_a_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shared.txt");
        let big_a = "a".repeat(256 * 1024);
        let big_b = "b".repeat(256 * 1024);

        let writer = |content: String| {
            let path = path.clone();
            tokio::spawn(async move {
                for _ in 0..20 {
                    atomic_write(&path, content.as_bytes()).await.unwrap();
                }
            })
        };
        let a = writer(big_a.clone());
        let b = writer(big_b.clone());

        for _ in 0..40 {
            if let Ok(read) = std::fs::read_to_string(&path) {
                assert!(read == big_a || read == big_b, "partial file: {} bytes", read.len());
            }
            tokio::task::yield_now().await;
        }
        a.await.unwrap();
        b.await.unwrap();

        let last = std::fs::read_to_string(&path).unwrap();
        assert!(last == big_a || last == big_b);
        assert_eq!(dir_names(dir.path()), vec!["shared.txt".to_string()]);
    }
}
