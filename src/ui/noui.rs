//! 无 UI 的命令行宿主：受理区间下载、渲染进度条、打印汇总。

use anyhow::{Result, anyhow};
use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::download::progress::make_cli_bar;
use crate::download::{DownloadListener, DownloadResult, RangeJobController};
use crate::network::MirrorClient;

struct CliListener {
    bar: ProgressBar,
    errors: Vec<String>,
}

impl DownloadListener for CliListener {
    fn on_progress(&mut self, processed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(processed as u64);
    }

    fn on_complete(&mut self, succeeded: usize, failed: usize) {
        self.bar.finish_and_clear();
        println!("下载完成：成功 {succeeded} 页，失败 {failed} 页");
    }

    fn on_error(&mut self, message: &str) {
        self.bar.println(format!("下载失败: {message}"));
        self.errors.push(message.to_string());
    }
}

/// 在当前线程上等待并展示一个区间任务，直到完成。
pub fn download_range<C: MirrorClient + 'static>(
    controller: &RangeJobController<C>,
    start: i32,
    end: i32,
) -> Result<DownloadResult> {
    let job = controller
        .start_range(start, end)
        .map_err(|err| anyhow!("{err}"))?;
    let request = job.request();

    let present = controller.store().count_present(&request);
    println!(
        "页面 {request}：共 {} 页，本地已有 {present} 页，保存到 {}",
        request.total(),
        controller.store().dir().display()
    );

    let mut listener = CliListener {
        bar: make_cli_bar(request.total()),
        errors: Vec::new(),
    };
    let result = job
        .pump(&mut listener)
        .ok_or_else(|| anyhow!("下载线程异常退出"))?;

    if listener.errors.is_empty() {
        info!(target: "download", "range {request} complete");
    } else {
        warn!(
            target: "download",
            "range {request} complete with {} failed pages",
            listener.errors.len()
        );
    }
    Ok(result)
}

pub fn print_locate<C: MirrorClient + 'static>(controller: &RangeJobController<C>, page: i32) {
    // empty output means "not downloaded"
    if let Some(path) = controller.locate(page) {
        println!("{}", path.display());
    }
}

pub fn print_mirrors<C: MirrorClient + 'static>(
    controller: &RangeJobController<C>,
    page: i32,
) -> Result<()> {
    let mirrors = controller
        .mirrors(page)
        .ok_or_else(|| anyhow!("Invalid page range"))?;
    for (idx, url) in mirrors.iter().enumerate() {
        println!("{}. {url}", idx + 1);
    }
    Ok(())
}
