//! 临时文件清理。

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

pub const PARTIAL_SUFFIX: &str = ".part";

/// 删除目录下遗留的半成品文件（上次进程中断时没来得及删掉的临时文件）。
/// 目录不存在时返回 0。
pub fn remove_partial_files(dir: impl AsRef<Path>) -> io::Result<usize> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err),
    };

    let mut removed = 0usize;
    for entry in entries.filter_map(|e| e.ok()) {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let is_partial = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(PARTIAL_SUFFIX))
            .unwrap_or(false);
        if is_file && is_partial {
            let path = entry.path();
            fs::remove_file(&path)?;
            debug!(target: "store", "removed stale partial {}", path.display());
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_only_partials() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("001.png"), b"page").unwrap();
        fs::write(dir.path().join("002.x1y2.part"), b"half").unwrap();
        fs::write(dir.path().join("003.q9.part"), b"").unwrap();

        assert_eq!(remove_partial_files(dir.path()).unwrap(), 2);
        assert!(dir.path().join("001.png").exists());
        assert!(!dir.path().join("002.x1y2.part").exists());
    }

    #[test]
    fn missing_dir_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert_eq!(remove_partial_files(dir.path().join("nope")).unwrap(), 0);
    }
}
