//! 单页下载：按镜像顺序逐个尝试，成功即落盘。

use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::models::{ArtifactOrigin, FetchOutcome, PageIndex};
use crate::base_system::page_store::PageStore;
use crate::mirror::MirrorResolver;
use crate::network::{FetchError, MirrorClient};

pub struct PageFetcher<C> {
    client: C,
    resolver: MirrorResolver,
}

impl<C: MirrorClient> PageFetcher<C> {
    pub fn new(client: C, resolver: MirrorResolver) -> Self {
        Self { client, resolver }
    }

    pub fn resolver(&self) -> &MirrorResolver {
        &self.resolver
    }

    /// 下载一页。本地已有文件时直接算成功，不访问网络。
    ///
    /// 所有错误（网络、状态码、超时、本地 IO）都收敛为 `FetchOutcome::Failure`。
    pub fn fetch(&self, page: PageIndex, store: &PageStore) -> FetchOutcome {
        if let Some(path) = store.locate(page) {
            debug!(target: "download", "page {page} already on disk, skip");
            return FetchOutcome::Success {
                path,
                origin: ArtifactOrigin::Existing,
            };
        }

        let mirrors = self.resolver.resolve(page);
        let mut last_err: Option<FetchError> = None;
        for url in mirrors.iter() {
            match self.try_mirror(url, page, store) {
                Ok(path) => {
                    debug!(target: "download", "page {page} saved from {url}");
                    return FetchOutcome::Success {
                        path,
                        origin: ArtifactOrigin::Mirror {
                            url: url.to_string(),
                        },
                    };
                }
                Err(err) => {
                    debug!(target: "download", "page {page}: mirror {url} failed: {err}");
                    last_err = Some(err);
                }
            }
        }

        let reason = match last_err {
            Some(err) => format!(
                "page {page}: all {} mirrors failed, last error: {err}",
                mirrors.len()
            ),
            None => format!("page {page}: no mirror available"),
        };
        warn!(target: "download", "{reason}");
        FetchOutcome::Failure { reason }
    }

    /// 响应体先写入同目录临时文件，完整写完后再改名为正式文件。
    /// 任何一步出错时临时文件随 drop 删除，连接随读取器 drop 释放。
    fn try_mirror(
        &self,
        url: &str,
        page: PageIndex,
        store: &PageStore,
    ) -> Result<PathBuf, FetchError> {
        let mut body = self.client.open(url)?;
        let mut tmp = store.temp_file_for(page)?;
        io::copy(&mut body, &mut tmp)?;
        drop(body);
        tmp.as_file().sync_all()?;

        let dest = store.path_for(page);
        tmp.persist(&dest).map_err(|err| err.error)?;
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::test_support::{FakeMirrors, Reply};
    use crate::mirror::{MirrorTemplates, render};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn page(n: i32) -> PageIndex {
        PageIndex::new(n).unwrap()
    }

    fn setup(mirrors: FakeMirrors) -> (TempDir, PageStore, Arc<FakeMirrors>, PageFetcher<Arc<FakeMirrors>>) {
        let root = TempDir::new().unwrap();
        let store = PageStore::new(root.path().join("quran-pages"), "png");
        store.ensure_dir().unwrap();
        let mirrors = Arc::new(mirrors);
        let fetcher = PageFetcher::new(Arc::clone(&mirrors), MirrorResolver::default());
        (root, store, mirrors, fetcher)
    }

    #[test]
    fn existing_artifact_skips_network() {
        let (_root, store, mirrors, fetcher) = setup(FakeMirrors::new());
        fs::write(store.path_for(page(5)), b"old").unwrap();

        let outcome = fetcher.fetch(page(5), &store);
        assert_eq!(
            outcome,
            FetchOutcome::Success {
                path: store.path_for(page(5)),
                origin: ArtifactOrigin::Existing
            }
        );
        assert_eq!(mirrors.request_count(), 0);
        assert_eq!(fs::read(store.path_for(page(5))).unwrap(), b"old");
    }

    #[test]
    fn primary_success_uses_one_request() {
        let primary = MirrorResolver::default().resolve(page(1)).primary().to_string();
        let (_root, store, mirrors, fetcher) =
            setup(FakeMirrors::new().route(primary.clone(), Reply::Body(b"page-one".to_vec())));

        let outcome = fetcher.fetch(page(1), &store);
        assert!(outcome.is_success());
        assert_eq!(mirrors.requests(), vec![primary]);
        assert_eq!(fs::read(store.path_for(page(1))).unwrap(), b"page-one");
    }

    #[test]
    fn falls_back_after_non_success_status() {
        let list = MirrorResolver::default().resolve(page(42));
        let primary = list.as_slice()[0].clone();
        let secondary = list.as_slice()[1].clone();
        let (_root, store, mirrors, fetcher) = setup(
            FakeMirrors::new()
                .route(primary.clone(), Reply::Status(404))
                .route(secondary.clone(), Reply::Body(b"from-fallback".to_vec())),
        );

        let outcome = fetcher.fetch(page(42), &store);
        assert_eq!(
            outcome,
            FetchOutcome::Success {
                path: store.path_for(page(42)),
                origin: ArtifactOrigin::Mirror { url: secondary.clone() }
            }
        );
        assert_eq!(mirrors.requests(), vec![primary, secondary]);
        assert_eq!(fs::read(store.path_for(page(42))).unwrap(), b"from-fallback");
    }

    #[test]
    fn truncated_body_is_discarded_before_next_mirror() {
        let list = MirrorResolver::default().resolve(page(42));
        let (_root, store, _mirrors, fetcher) = setup(
            FakeMirrors::new()
                .route(list.as_slice()[0].clone(), Reply::Truncated(b"GARBAGE-PARTIAL".to_vec()))
                .route(list.as_slice()[1].clone(), Reply::Body(b"clean".to_vec())),
        );

        assert!(fetcher.fetch(page(42), &store).is_success());
        assert_eq!(fs::read(store.path_for(page(42))).unwrap(), b"clean");
        let leftovers: Vec<_> = fs::read_dir(store.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("042.png")]);
    }

    #[test]
    fn all_mirrors_failing_leaves_no_file() {
        let list = MirrorResolver::default().resolve(page(9));
        let (_root, store, mirrors, fetcher) = setup(
            FakeMirrors::new()
                .route(list.as_slice()[0].clone(), Reply::Status(500))
                .route(list.as_slice()[1].clone(), Reply::Truncated(b"abc".to_vec())),
        );

        let outcome = fetcher.fetch(page(9), &store);
        match outcome {
            FetchOutcome::Failure { reason } => {
                assert!(reason.contains("page 009"), "{reason}");
                assert!(reason.contains("all 3 mirrors failed"), "{reason}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(mirrors.request_count(), 3);
        assert!(!store.exists(page(9)));
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 0);
    }

    #[test]
    fn missing_store_dir_is_a_page_failure() {
        let root = TempDir::new().unwrap();
        let store = PageStore::new(root.path().join("absent"), "png");
        let url = render("http://local.test/{page}.png", page(3));
        let mirrors = FakeMirrors::new().route(url, Reply::Body(b"x".to_vec()));
        let resolver = MirrorResolver::new(
            &[],
            MirrorTemplates {
                default_primary: "http://local.test/{page}.png".to_string(),
                fallbacks: Vec::new(),
            },
        );
        let fetcher = PageFetcher::new(mirrors, resolver);
        assert!(!fetcher.fetch(page(3), &store).is_success());
    }
}
