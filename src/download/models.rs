//! 下载相关的数据模型定义。
//!
//! 包含页码、下载区间、单页结果、汇总结果、进度快照等核心数据结构。

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub const FIRST_PAGE: u16 = 1;
pub const LAST_PAGE: u16 = 604;

/// 页码，取值范围 [1, 604]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(u16);

impl PageIndex {
    pub fn new(value: i32) -> Option<Self> {
        if value < i32::from(FIRST_PAGE) || value > i32::from(LAST_PAGE) {
            return None;
        }
        Some(Self(value as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// 三位补零的页码，例如 7 -> "007"。
    pub fn padded(self) -> String {
        format!("{:03}", self.0)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Download already in progress")]
    AlreadyRunning,
    #[error("Invalid page range")]
    InvalidRange,
}

/// 已校验的下载区间（闭区间，start <= end）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    start: PageIndex,
    end: PageIndex,
}

impl RangeRequest {
    pub fn new(start: i32, end: i32) -> Result<Self, ValidationError> {
        let (Some(start), Some(end)) = (PageIndex::new(start), PageIndex::new(end)) else {
            return Err(ValidationError::InvalidRange);
        };
        if start > end {
            return Err(ValidationError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> PageIndex {
        self.start
    }

    pub fn end(&self) -> PageIndex {
        self.end
    }

    pub fn total(&self) -> usize {
        usize::from(self.end.0 - self.start.0) + 1
    }

    /// 按页码升序遍历。
    pub fn pages(&self) -> impl Iterator<Item = PageIndex> {
        (self.start.0..=self.end.0).map(PageIndex)
    }
}

impl fmt::Display for RangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// 成功时文件的来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOrigin {
    /// 本地已存在，未访问网络。
    Existing,
    Mirror { url: String },
}

/// 单页下载结果，不存在“部分成功”。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { path: PathBuf, origin: ArtifactOrigin },
    Failure { reason: String },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadResult {
    pub success: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub processed: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_bounds() {
        assert!(PageIndex::new(0).is_none());
        assert!(PageIndex::new(605).is_none());
        assert_eq!(PageIndex::new(1).map(PageIndex::get), Some(1));
        assert_eq!(PageIndex::new(604).map(PageIndex::get), Some(604));
    }

    #[test]
    fn page_index_is_zero_padded() {
        let page = PageIndex::new(7).unwrap();
        assert_eq!(page.padded(), "007");
        assert_eq!(PageIndex::new(42).unwrap().to_string(), "042");
        assert_eq!(PageIndex::new(604).unwrap().padded(), "604");
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        for (s, e) in [(500, 10), (0, 5), (1, 700), (-3, 2), (605, 605)] {
            assert_eq!(
                RangeRequest::new(s, e),
                Err(ValidationError::InvalidRange),
                "range {s}-{e}"
            );
        }
    }

    #[test]
    fn range_total_and_order() {
        let range = RangeRequest::new(3, 7).unwrap();
        assert_eq!(range.total(), 5);
        let pages: Vec<u16> = range.pages().map(PageIndex::get).collect();
        assert_eq!(pages, vec![3, 4, 5, 6, 7]);

        let single = RangeRequest::new(604, 604).unwrap();
        assert_eq!(single.total(), 1);
        assert_eq!(RangeRequest::new(1, 604).unwrap().total(), 604);
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::AlreadyRunning.to_string(),
            "Download already in progress"
        );
        assert_eq!(ValidationError::InvalidRange.to_string(), "Invalid page range");
    }
}
