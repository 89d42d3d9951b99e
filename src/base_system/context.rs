//! 全局配置结构（Config）与默认值。
//!
//! 该模块同时提供生成 `config.yml` 的字段元信息。

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::{ConfigSpec, FieldMeta};
use super::page_store::{DEFAULT_EXTENSION, DEFAULT_PAGES_DIR};
use crate::download::controller::JobOptions;
use crate::mirror::{
    DEFAULT_PRIMARY_TEMPLATE, MirrorTemplates, PAGE_PLACEHOLDER, SECONDARY_TEMPLATE,
    TERTIARY_TEMPLATE,
};
use crate::network::ClientOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // 路径配置
    #[serde(default)]
    pub save_path: String,
    #[serde(default = "default_pages_dir_name")]
    pub pages_dir_name: String,
    #[serde(default = "default_page_extension")]
    pub page_extension: String,

    // 网络配置
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout: u64,
    #[serde(default = "default_timeout_secs")]
    pub read_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // 镜像配置
    #[serde(default = "default_primary_template")]
    pub default_template: String,
    #[serde(default = "default_fallback_templates")]
    pub fallback_templates: Vec<String>,

    // 文件管理配置
    #[serde(default = "default_true")]
    pub clean_partial_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: String::new(),
            pages_dir_name: default_pages_dir_name(),
            page_extension: default_page_extension(),
            connect_timeout: default_timeout_secs(),
            read_timeout: default_timeout_secs(),
            user_agent: default_user_agent(),
            default_template: default_primary_template(),
            fallback_templates: default_fallback_templates(),
            clean_partial_files: default_true(),
        }
    }
}

impl ConfigSpec for Config {
    const FILE_NAME: &'static str = "config.yml";

    fn fields() -> &'static [FieldMeta] {
        static FIELDS: [FieldMeta; 9] = [
            FieldMeta {
                name: "save_path",
                description: "保存路径（留空为当前目录）",
            },
            FieldMeta {
                name: "pages_dir_name",
                description: "页面图片所在的子目录名",
            },
            FieldMeta {
                name: "page_extension",
                description: "页面文件扩展名",
            },
            FieldMeta {
                name: "connect_timeout",
                description: "连接超时时间（秒）",
            },
            FieldMeta {
                name: "read_timeout",
                description: "读取超时时间（秒）",
            },
            FieldMeta {
                name: "user_agent",
                description: "请求使用的 User-Agent",
            },
            FieldMeta {
                name: "default_template",
                description: "主镜像表里没有的页码使用的地址模板，{page} 替换为三位页码",
            },
            FieldMeta {
                name: "fallback_templates",
                description: "备用镜像地址模板，按顺序尝试",
            },
            FieldMeta {
                name: "clean_partial_files",
                description: "下载前是否清理上次中断遗留的临时文件",
            },
        ];
        &FIELDS
    }

    fn validate(&self) -> Result<(), String> {
        if self.connect_timeout == 0 || self.read_timeout == 0 {
            return Err("connect_timeout/read_timeout 必须大于 0".to_string());
        }
        if self.pages_dir_name.trim().is_empty() {
            return Err("pages_dir_name 不能为空".to_string());
        }
        if self.page_extension.trim_start_matches('.').trim().is_empty() {
            return Err("page_extension 不能为空".to_string());
        }
        for template in std::iter::once(&self.default_template).chain(&self.fallback_templates) {
            if !template.contains(PAGE_PLACEHOLDER) {
                return Err(format!("镜像模板缺少 {PAGE_PLACEHOLDER}: {template}"));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn default_save_dir(&self) -> PathBuf {
        if self.save_path.trim().is_empty() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        } else {
            PathBuf::from(&self.save_path)
        }
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.default_save_dir().join(&self.pages_dir_name)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout),
            read_timeout: Duration::from_secs(self.read_timeout),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn mirror_templates(&self) -> MirrorTemplates {
        MirrorTemplates {
            default_primary: self.default_template.clone(),
            fallbacks: self.fallback_templates.clone(),
        }
    }

    pub fn job_options(&self) -> JobOptions {
        JobOptions {
            clean_partials: self.clean_partial_files,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_pages_dir_name() -> String {
    DEFAULT_PAGES_DIR.to_string()
}

fn default_page_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    ClientOptions::default().user_agent
}

fn default_primary_template() -> String {
    DEFAULT_PRIMARY_TEMPLATE.to_string()
}

fn default_fallback_templates() -> Vec<String> {
    vec![SECONDARY_TEMPLATE.to_string(), TERTIARY_TEMPLATE.to_string()]
}
