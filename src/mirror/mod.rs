//! 镜像地址解析。
//!
//! 每一页的候选地址按优先级排列：人工指定的主镜像（静态表），
//! 然后是按固定模板拼出的备用镜像。表中没有的页码用默认模板代替主镜像。

mod table;

use crate::download::models::PageIndex;

pub const PAGE_PLACEHOLDER: &str = "{page}";

pub const DEFAULT_PRIMARY_TEMPLATE: &str = "https://i.ibb.co/quran-pages/{page}.png";
pub const SECONDARY_TEMPLATE: &str = "https://quran-images.s3.amazonaws.com/pages/{page}.png";
pub const TERTIARY_TEMPLATE: &str =
    "https://islamic-network.github.io/cdn/quran/images/page{page}.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTemplates {
    pub default_primary: String,
    pub fallbacks: Vec<String>,
}

impl Default for MirrorTemplates {
    fn default() -> Self {
        Self {
            default_primary: DEFAULT_PRIMARY_TEMPLATE.to_string(),
            fallbacks: vec![SECONDARY_TEMPLATE.to_string(), TERTIARY_TEMPLATE.to_string()],
        }
    }
}

/// 某一页的候选地址，按尝试顺序排列，永不为空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorList(Vec<String>);

impl MirrorList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct MirrorResolver {
    curated: &'static [&'static str],
    templates: MirrorTemplates,
}

impl Default for MirrorResolver {
    fn default() -> Self {
        Self::new(&table::CURATED_PRIMARY, MirrorTemplates::default())
    }
}

impl MirrorResolver {
    /// `curated[i]` 是第 `i + 1` 页的主镜像。
    pub fn new(curated: &'static [&'static str], templates: MirrorTemplates) -> Self {
        Self { curated, templates }
    }

    /// 内置主镜像表 + 指定模板。
    pub fn with_templates(templates: MirrorTemplates) -> Self {
        Self::new(&table::CURATED_PRIMARY, templates)
    }

    pub fn curated_primary(&self, page: PageIndex) -> Option<&'static str> {
        self.curated
            .get(usize::from(page.get()) - 1)
            .copied()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn resolve(&self, page: PageIndex) -> MirrorList {
        let curated = self.curated_primary(page);
        let mut urls = Vec::with_capacity(self.templates.fallbacks.len() + 1);
        match curated {
            Some(url) => urls.push(url.to_string()),
            None => urls.push(render(&self.templates.default_primary, page)),
        }
        urls.extend(self.templates.fallbacks.iter().map(|t| render(t, page)));

        // 列表必须以模板地址结尾
        if curated.is_some() && self.templates.fallbacks.is_empty() {
            urls.push(render(&self.templates.default_primary, page));
        }
        MirrorList(urls)
    }
}

pub fn render(template: &str, page: PageIndex) -> String {
    template.replace(PAGE_PLACEHOLDER, &page.padded())
}
