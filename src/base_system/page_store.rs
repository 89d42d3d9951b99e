//! 本地页面存储：`<save_dir>/quran-pages/NNN.png`。
//!
//! 文件存在即视为下载完成，不校验内容。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::context::Config;
use super::file_cleaner::{PARTIAL_SUFFIX, remove_partial_files};
use crate::download::models::{PageIndex, RangeRequest};

pub const DEFAULT_PAGES_DIR: &str = "quran-pages";
pub const DEFAULT_EXTENSION: &str = "png";

#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
    extension: String,
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pages_dir(), &config.page_extension)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self, page: PageIndex) -> String {
        format!("{}.{}", page.padded(), self.extension)
    }

    pub fn path_for(&self, page: PageIndex) -> PathBuf {
        self.dir.join(self.file_name(page))
    }

    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    pub fn exists(&self, page: PageIndex) -> bool {
        self.path_for(page).is_file()
    }

    /// 已存在的页面文件路径；不会触发下载。
    pub fn locate(&self, page: PageIndex) -> Option<PathBuf> {
        let path = self.path_for(page);
        path.is_file().then_some(path)
    }

    pub fn count_present(&self, range: &RangeRequest) -> usize {
        range.pages().filter(|p| self.exists(*p)).count()
    }

    /// 在存储目录内创建临时文件，未 persist 前被 drop 会自动删除。
    pub fn temp_file_for(&self, page: PageIndex) -> io::Result<NamedTempFile> {
        tempfile::Builder::new()
            .prefix(&format!("{}.", page.padded()))
            .suffix(PARTIAL_SUFFIX)
            .tempfile_in(&self.dir)
    }

    pub fn clean_partials(&self) -> io::Result<usize> {
        remove_partial_files(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page(n: i32) -> PageIndex {
        PageIndex::new(n).unwrap()
    }

    #[test]
    fn layout_is_zero_padded() {
        let store = PageStore::new("/data/quran-pages", ".png");
        assert_eq!(store.file_name(page(7)), "007.png");
        assert_eq!(
            store.path_for(page(42)),
            PathBuf::from("/data/quran-pages/042.png")
        );
    }

    #[test]
    fn locate_only_reports_present_files() {
        let root = TempDir::new().unwrap();
        let store = PageStore::new(root.path().join("pages"), "png");
        assert_eq!(store.locate(page(1)), None);

        store.ensure_dir().unwrap();
        fs::write(store.path_for(page(1)), b"x").unwrap();
        assert_eq!(store.locate(page(1)), Some(store.path_for(page(1))));
        assert_eq!(store.locate(page(2)), None);
    }

    #[test]
    fn count_present_in_range() {
        let root = TempDir::new().unwrap();
        let store = PageStore::new(root.path(), "png");
        for n in [2, 4, 9] {
            fs::write(store.path_for(page(n)), b"x").unwrap();
        }
        let range = RangeRequest::new(1, 5).unwrap();
        assert_eq!(store.count_present(&range), 2);
    }

    #[test]
    fn dropped_temp_file_leaves_nothing() {
        let root = TempDir::new().unwrap();
        let store = PageStore::new(root.path(), "png");
        let tmp = store.temp_file_for(page(3)).unwrap();
        let tmp_path = tmp.path().to_path_buf();
        assert!(tmp_path.file_name().unwrap().to_str().unwrap().ends_with(".part"));
        drop(tmp);
        assert!(!tmp_path.exists());
        assert!(!store.exists(page(3)));
    }
}
