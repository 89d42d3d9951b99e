//! 下载流程模块入口。
//!
//! 子模块：
//! - `models`：数据模型（PageIndex / RangeRequest / FetchOutcome 等）
//! - `fetcher`：单页下载，按镜像顺序回退
//! - `controller`：区间任务，单飞控制与后台顺序下载
//! - `progress`：事件通道、回调接口与 CLI 进度条

pub mod controller;
pub mod fetcher;
pub mod models;
pub mod progress;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{JobOptions, RangeJob, RangeJobController, RangeJobState};
pub use fetcher::PageFetcher;
pub use models::{
    ArtifactOrigin, DownloadResult, FIRST_PAGE, FetchOutcome, LAST_PAGE, PageIndex,
    ProgressSnapshot, RangeRequest, ValidationError,
};
pub use progress::{DownloadListener, JobEvent};
