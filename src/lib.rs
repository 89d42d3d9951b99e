//! Quran 页面图片下载器。
//!
//! 按页码区间（1..=604）批量下载页面图片到本地目录，主镜像失败时按顺序
//! 回退到备用镜像；本地已有的页面直接跳过。
//!
//! 代码结构（读代码入口）：
//! - `base_system`：配置/日志/本地存储等基础设施
//! - `mirror`：页码到候选地址的解析（含内置主镜像表）
//! - `network`：出站 HTTP 抽象与 reqwest 实现
//! - `download`：单页下载、区间任务控制、进度事件
//! - `ui`：命令行宿主

pub mod base_system;
pub mod download;
pub mod mirror;
pub mod network;
pub mod ui;

use base_system::context::Config;
use base_system::page_store::PageStore;
use download::{PageFetcher, RangeJobController};
use mirror::MirrorResolver;
use network::{FetchError, HttpMirrorClient};

/// 按配置组装基于 HTTP 的区间下载控制器。
pub fn http_controller(config: &Config) -> Result<RangeJobController<HttpMirrorClient>, FetchError> {
    let client = HttpMirrorClient::new(&config.client_options())?;
    let resolver = MirrorResolver::with_templates(config.mirror_templates());
    Ok(RangeJobController::with_options(
        PageFetcher::new(client, resolver),
        PageStore::from_config(config),
        config.job_options(),
    ))
}
