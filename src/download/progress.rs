//! 进度上报与 CLI 进度条管理。
//!
//! 后台线程通过通道发送 [`JobEvent`]，调用方在自己的线程上把事件分发给
//! [`DownloadListener`]，这是下载任务唯一的跨线程交接点。

use crossbeam_channel::Sender;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::models::{DownloadResult, ProgressSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    Progress(ProgressSnapshot),
    /// 某一页所有镜像都失败（附带最后一次错误）或目录准备失败。
    Error(String),
    Completed(DownloadResult),
}

/// 宿主侧的回调集合。
pub trait DownloadListener {
    fn on_progress(&mut self, processed: usize, total: usize);
    fn on_complete(&mut self, succeeded: usize, failed: usize);
    fn on_error(&mut self, message: &str);
}

impl JobEvent {
    pub fn deliver(&self, listener: &mut dyn DownloadListener) {
        match self {
            Self::Progress(snap) => listener.on_progress(snap.processed, snap.total),
            Self::Error(msg) => listener.on_error(msg),
            Self::Completed(result) => listener.on_complete(result.success, result.failed),
        }
    }
}

pub(crate) struct ProgressReporter {
    pub(crate) snapshot: ProgressSnapshot,
    tx: Sender<JobEvent>,
}

impl ProgressReporter {
    pub(crate) fn new(total: usize, tx: Sender<JobEvent>) -> Self {
        Self {
            snapshot: ProgressSnapshot {
                processed: 0,
                total,
            },
            tx,
        }
    }

    // the receiver may already be gone; the job still runs to the end
    fn send(&self, event: JobEvent) {
        let _ = self.tx.send(event);
    }

    pub(crate) fn inc_processed(&mut self) {
        self.snapshot.processed = (self.snapshot.processed + 1).min(self.snapshot.total);
        self.send(JobEvent::Progress(self.snapshot));
    }

    pub(crate) fn error(&self, message: impl Into<String>) {
        self.send(JobEvent::Error(message.into()));
    }

    pub(crate) fn complete(self, result: DownloadResult) {
        self.send(JobEvent::Completed(result));
    }
}

pub fn make_cli_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
    let style = ProgressStyle::with_template(
        "{prefix} [{elapsed_precise}] {wide_bar} {pos}/{len} ({eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-");
    bar.set_style(style);
    bar.set_prefix("页面下载");
    bar
}
