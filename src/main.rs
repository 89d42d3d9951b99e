use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser};
use tracing::info;

use quran_page_fetcher::base_system::config::{load_or_create, load_or_create_with_base};
use quran_page_fetcher::base_system::context::Config;
use quran_page_fetcher::base_system::logging::{LogOptions, LogSystem};
use quran_page_fetcher::{http_controller, ui};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "quran-page-fetcher")]
#[command(about = "Download Quran page images with mirror fallback")]
struct Cli {
    /// 启用调试日志输出
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// 显示版本信息后退出
    #[arg(long, default_value_t = false)]
    version: bool,

    /// 数据目录路径（用于存放 config.yml 和 logs 等文件）
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// 指定配置文件（优先于 --data-dir）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 下载区间起始页
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i32>,

    /// 下载区间结束页（默认与起始页相同）
    #[arg(long, allow_negative_numbers = true, requires = "start")]
    end: Option<i32>,

    /// 输出某页的本地文件路径（未下载时无输出）
    #[arg(long, allow_negative_numbers = true)]
    locate: Option<i32>,

    /// 输出某页的候选镜像地址
    #[arg(long, allow_negative_numbers = true)]
    mirrors: Option<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("Quran Page Fetcher v{VERSION}");
        return Ok(());
    }

    if cli.start.is_none() && cli.locate.is_none() && cli.mirrors.is_none() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let data_dir = cli.data_dir.as_deref();
    let _log = init_logging(cli.debug, data_dir)?;

    let config = load_config(cli.config.as_deref(), data_dir)?;
    let controller = http_controller(&config)?;

    if let Some(page) = cli.mirrors {
        ui::noui::print_mirrors(&controller, page)?;
    }

    if let Some(page) = cli.locate {
        ui::noui::print_locate(&controller, page);
    }

    if let Some(start) = cli.start {
        let end = cli.end.unwrap_or(start);
        info!(target: "startup", "当前版本: v{VERSION}");
        ui::noui::download_range(&controller, start, end)?;
    }

    Ok(())
}

fn load_config(path: Option<&Path>, data_dir: Option<&Path>) -> Result<Config> {
    let config = if path.is_some() {
        load_or_create::<Config>(path)
    } else {
        load_or_create_with_base::<Config>(None, data_dir)
    };
    config.map_err(|e| anyhow!(e.to_string()))
}

fn init_logging(debug: bool, base_dir: Option<&Path>) -> Result<LogSystem> {
    let opts = LogOptions {
        debug,
        use_color: true,
        archive_on_exit: true,
        console: true,
    };
    LogSystem::init_with_base(opts, base_dir).map_err(|e| anyhow!(e))
}
