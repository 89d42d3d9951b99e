//! 区间下载任务：单飞控制、后台顺序下载、结果汇总。
//!
//! 同一个 [`RangeJobController`] 同时最多只有一个任务在跑；第二次
//! `start_range` 会被立即拒绝，不排队。

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::{info, warn};

use super::fetcher::PageFetcher;
use super::models::{DownloadResult, FetchOutcome, PageIndex, RangeRequest, ValidationError};
use super::progress::{DownloadListener, JobEvent, ProgressReporter};
use crate::base_system::page_store::PageStore;
use crate::mirror::MirrorList;
use crate::network::MirrorClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeJobState {
    Idle,
    Running {
        request: RangeRequest,
        succeeded: usize,
        failed: usize,
        processed: usize,
    },
}

impl RangeJobState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JobOptions {
    /// 任务开始前清理存储目录里遗留的临时文件。
    pub clean_partials: bool,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            clean_partials: true,
        }
    }
}

struct Shared<C> {
    fetcher: PageFetcher<C>,
    store: PageStore,
    options: JobOptions,
    state: Mutex<RangeJobState>,
}

impl<C> Shared<C> {
    fn state(&self) -> MutexGuard<'_, RangeJobState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, outcome: &FetchOutcome) {
        if let RangeJobState::Running {
            succeeded,
            failed,
            processed,
            ..
        } = &mut *self.state()
        {
            if outcome.is_success() {
                *succeeded += 1;
            } else {
                *failed += 1;
            }
            *processed += 1;
        }
    }

    fn set_idle(&self) {
        *self.state() = RangeJobState::Idle;
    }
}

/// 后台线程 panic 时把状态恢复为 Idle。正常结束走 `finish`，
/// 之后不会再碰状态（此时可能已经有新任务被受理）。
struct IdleGuard<'a, C> {
    shared: &'a Shared<C>,
    armed: bool,
}

impl<'a, C> IdleGuard<'a, C> {
    fn new(shared: &'a Shared<C>) -> Self {
        Self {
            shared,
            armed: true,
        }
    }

    fn finish(mut self) {
        self.armed = false;
        self.shared.set_idle();
    }
}

impl<C> Drop for IdleGuard<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            self.shared.set_idle();
        }
    }
}

pub struct RangeJobController<C> {
    shared: Arc<Shared<C>>,
}

impl<C> Clone for RangeJobController<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: MirrorClient + 'static> RangeJobController<C> {
    pub fn new(fetcher: PageFetcher<C>, store: PageStore) -> Self {
        Self::with_options(fetcher, store, JobOptions::default())
    }

    pub fn with_options(fetcher: PageFetcher<C>, store: PageStore, options: JobOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                fetcher,
                store,
                options,
                state: Mutex::new(RangeJobState::Idle),
            }),
        }
    }

    pub fn store(&self) -> &PageStore {
        &self.shared.store
    }

    pub fn is_job_running(&self) -> bool {
        self.shared.state().is_running()
    }

    pub fn state(&self) -> RangeJobState {
        *self.shared.state()
    }

    /// 已下载页面的本地路径，不触发下载；页码越界返回 `None`。
    pub fn locate(&self, page: i32) -> Option<PathBuf> {
        PageIndex::new(page).and_then(|p| self.shared.store.locate(p))
    }

    pub fn mirrors(&self, page: i32) -> Option<MirrorList> {
        PageIndex::new(page).map(|p| self.shared.fetcher.resolver().resolve(p))
    }

    /// 同步校验并受理一个区间下载，受理后立即返回，下载在后台线程进行。
    ///
    /// 被拒绝时不会产生任何事件，原因通过 `Err` 返回。
    pub fn start_range(&self, start: i32, end: i32) -> Result<RangeJob, ValidationError> {
        let request = {
            let mut state = self.shared.state();
            if state.is_running() {
                return Err(ValidationError::AlreadyRunning);
            }
            let request = RangeRequest::new(start, end)?;
            *state = RangeJobState::Running {
                request,
                succeeded: 0,
                failed: 0,
                processed: 0,
            };
            request
        };

        info!(target: "download", "accepted range {request} ({} pages)", request.total());

        let (tx, rx) = crossbeam_channel::unbounded();
        let shared = Arc::clone(&self.shared);
        let handle = thread::spawn(move || run_range(&shared, request, tx));

        Ok(RangeJob {
            request,
            events: rx,
            handle: Some(handle),
        })
    }
}

fn run_range<C: MirrorClient>(
    shared: &Shared<C>,
    request: RangeRequest,
    tx: Sender<JobEvent>,
) -> DownloadResult {
    let idle = IdleGuard::new(shared);
    let store = &shared.store;
    let mut reporter = ProgressReporter::new(request.total(), tx);

    if let Err(err) = store.ensure_dir() {
        let msg = format!("cannot create {}: {err}", store.dir().display());
        warn!(target: "download", "{msg}");
        reporter.error(msg);
    } else if shared.options.clean_partials {
        match store.clean_partials() {
            Ok(0) => {}
            Ok(n) => info!(target: "download", "removed {n} stale partial files"),
            Err(err) => warn!(target: "download", "partial cleanup failed: {err}"),
        }
    }

    let mut result = DownloadResult::default();
    for page in request.pages() {
        let outcome = shared.fetcher.fetch(page, store);
        match &outcome {
            FetchOutcome::Success { .. } => result.success += 1,
            FetchOutcome::Failure { reason } => {
                result.failed += 1;
                reporter.error(reason.clone());
            }
        }
        shared.record(&outcome);
        reporter.inc_processed();
    }

    idle.finish();
    info!(
        target: "download",
        "range {request} finished: {} ok, {} failed",
        result.success,
        result.failed
    );
    reporter.complete(result);
    result
}

/// 已受理的下载任务句柄。事件只在调用方线程上被分发。
pub struct RangeJob {
    request: RangeRequest,
    events: Receiver<JobEvent>,
    handle: Option<JoinHandle<DownloadResult>>,
}

impl RangeJob {
    pub fn request(&self) -> RangeRequest {
        self.request
    }

    pub fn events(&self) -> &Receiver<JobEvent> {
        &self.events
    }

    /// 阻塞分发事件直到完成事件送达；后台线程异常退出时返回 `None`。
    pub fn pump(&self, listener: &mut dyn DownloadListener) -> Option<DownloadResult> {
        for event in self.events.iter() {
            event.deliver(listener);
            if let JobEvent::Completed(result) = event {
                return Some(result);
            }
        }
        None
    }

    /// 只分发已经到达的事件，不阻塞。适合在宿主事件循环里周期性调用。
    pub fn drain(&self, listener: &mut dyn DownloadListener) -> Option<DownloadResult> {
        let mut done = None;
        for event in self.events.try_iter() {
            event.deliver(listener);
            if let JobEvent::Completed(result) = event {
                done = Some(result);
            }
        }
        done
    }

    /// 等待后台线程结束并返回汇总，不分发事件。
    pub fn wait(mut self) -> DownloadResult {
        self.handle
            .take()
            .and_then(|h| h.join().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::models::ProgressSnapshot;
    use crate::download::test_support::{FakeMirrors, Reply};
    use crate::mirror::{MirrorResolver, MirrorTemplates};
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    const LOCAL: &str = "http://mirror.test/{page}.png";

    fn local_resolver() -> MirrorResolver {
        MirrorResolver::new(
            &[],
            MirrorTemplates {
                default_primary: LOCAL.to_string(),
                fallbacks: vec!["http://backup.test/{page}.png".to_string()],
            },
        )
    }

    fn serve_all(mut mirrors: FakeMirrors, pages: std::ops::RangeInclusive<u16>) -> FakeMirrors {
        for n in pages {
            mirrors = mirrors.route(
                format!("http://mirror.test/{n:03}.png"),
                Reply::Body(format!("page {n}").into_bytes()),
            );
        }
        mirrors
    }

    fn controller(
        root: &TempDir,
        mirrors: FakeMirrors,
    ) -> (RangeJobController<Arc<FakeMirrors>>, Arc<FakeMirrors>) {
        let mirrors = Arc::new(mirrors);
        let store = PageStore::new(root.path().join("quran-pages"), "png");
        let fetcher = PageFetcher::new(Arc::clone(&mirrors), local_resolver());
        (RangeJobController::new(fetcher, store), mirrors)
    }

    #[derive(Default)]
    struct Recorder {
        progress: Vec<ProgressSnapshot>,
        errors: Vec<String>,
        completed: Vec<DownloadResult>,
    }

    impl DownloadListener for Recorder {
        fn on_progress(&mut self, processed: usize, total: usize) {
            self.progress.push(ProgressSnapshot { processed, total });
        }
        fn on_complete(&mut self, succeeded: usize, failed: usize) {
            self.completed.push(DownloadResult {
                success: succeeded,
                failed,
            });
        }
        fn on_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn wait_until(mut cond: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !cond() {
            assert!(Instant::now() < deadline, "condition not reached in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn progress_is_emitted_for_every_page() {
        let root = TempDir::new().unwrap();
        let (ctl, _) = controller(&root, serve_all(FakeMirrors::new(), 1..=5));

        let job = ctl.start_range(1, 5).unwrap();
        let mut rec = Recorder::default();
        let result = job.pump(&mut rec);

        assert_eq!(result, Some(DownloadResult { success: 5, failed: 0 }));
        let processed: Vec<usize> = rec.progress.iter().map(|s| s.processed).collect();
        assert_eq!(processed, vec![1, 2, 3, 4, 5]);
        assert!(rec.progress.iter().all(|s| s.total == 5));
        assert_eq!(rec.completed.len(), 1);
        assert!(rec.errors.is_empty());
        assert!(!ctl.is_job_running());
        assert_eq!(
            fs::read(ctl.locate(3).unwrap()).unwrap(),
            b"page 3".to_vec()
        );
    }

    #[test]
    fn failed_pages_are_counted_and_job_continues() {
        let root = TempDir::new().unwrap();
        // 12 and 14 are not served by any mirror
        let mirrors = FakeMirrors::new()
            .route("http://mirror.test/010.png", Reply::Body(b"a".to_vec()))
            .route("http://mirror.test/011.png", Reply::Status(503))
            .route("http://backup.test/011.png", Reply::Body(b"b".to_vec()))
            .route("http://mirror.test/013.png", Reply::Body(b"c".to_vec()));
        let (ctl, _) = controller(&root, mirrors);

        let job = ctl.start_range(10, 14).unwrap();
        let mut rec = Recorder::default();
        let result = job.pump(&mut rec).unwrap();

        assert_eq!(result, DownloadResult { success: 3, failed: 2 });
        assert_eq!(result.success + result.failed, 5);
        assert_eq!(rec.progress.len(), 5);
        assert_eq!(rec.errors.len(), 2);
        assert!(rec.errors[0].contains("page 012"));
        assert!(ctl.locate(12).is_none());
        assert!(ctl.locate(11).is_some());
    }

    #[test]
    fn rerun_is_idempotent_without_network() {
        let root = TempDir::new().unwrap();
        let (ctl, mirrors) = controller(&root, serve_all(FakeMirrors::new(), 20..=24));

        let first = ctl.start_range(20, 24).unwrap().wait();
        assert_eq!(first, DownloadResult { success: 5, failed: 0 });
        let requests_after_first = mirrors.request_count();
        assert_eq!(requests_after_first, 5);

        let job = ctl.start_range(20, 24).unwrap();
        let mut rec = Recorder::default();
        let second = job.pump(&mut rec).unwrap();
        assert_eq!(second, DownloadResult { success: 5, failed: 0 });
        assert_eq!(rec.progress.len(), 5);
        assert_eq!(mirrors.request_count(), requests_after_first);
    }

    #[test]
    fn invalid_ranges_are_rejected_synchronously() {
        let root = TempDir::new().unwrap();
        let (ctl, mirrors) = controller(&root, FakeMirrors::new());
        for (s, e) in [(500, 10), (0, 5), (1, 700)] {
            let err = ctl.start_range(s, e).err().unwrap();
            assert_eq!(err.to_string(), "Invalid page range");
        }
        assert!(!ctl.is_job_running());
        assert_eq!(ctl.state(), RangeJobState::Idle);
        assert_eq!(mirrors.request_count(), 0);
    }

    #[test]
    fn second_start_while_running_is_rejected() {
        let root = TempDir::new().unwrap();
        let (gate_tx, gate_rx) = crossbeam_channel::unbounded();
        let (ctl, _) = controller(&root, serve_all(FakeMirrors::gated(gate_rx), 1..=3));

        let job = ctl.start_range(1, 3).unwrap();
        assert!(ctl.is_job_running());

        // let exactly one page through
        gate_tx.send(()).unwrap();
        wait_until(|| matches!(ctl.state(), RangeJobState::Running { processed: 1, .. }));
        let before = ctl.state();

        let err = ctl.start_range(4, 6).err().unwrap();
        assert_eq!(err, ValidationError::AlreadyRunning);
        assert_eq!(err.to_string(), "Download already in progress");
        // invalid range while busy still reports the busy state first
        assert_eq!(
            ctl.start_range(0, 0).err(),
            Some(ValidationError::AlreadyRunning)
        );
        assert_eq!(ctl.state(), before);
        match before {
            RangeJobState::Running {
                request,
                succeeded,
                failed,
                processed,
            } => {
                assert_eq!(request, RangeRequest::new(1, 3).unwrap());
                assert_eq!((succeeded, failed, processed), (1, 0, 1));
            }
            RangeJobState::Idle => panic!("job should still be running"),
        }

        drop(gate_tx);
        let result = job.wait();
        assert_eq!(result, DownloadResult { success: 3, failed: 0 });
        assert!(!ctl.is_job_running());

        // a new job is accepted once the previous one finished
        assert!(ctl.start_range(1, 1).unwrap().wait().success == 1);
    }

    #[test]
    fn drain_delivers_only_arrived_events() {
        let root = TempDir::new().unwrap();
        let (ctl, _) = controller(&root, serve_all(FakeMirrors::new(), 1..=2));
        let job = ctl.start_range(1, 2).unwrap();

        let mut rec = Recorder::default();
        let mut done = None;
        wait_until(|| {
            if let Some(r) = job.drain(&mut rec) {
                done = Some(r);
            }
            done.is_some()
        });
        assert_eq!(done, Some(DownloadResult { success: 2, failed: 0 }));
        assert_eq!(rec.progress.len(), 2);
        assert_eq!(rec.completed.len(), 1);
    }

    #[test]
    fn stale_partials_are_removed_before_the_job() {
        let root = TempDir::new().unwrap();
        let (ctl, _) = controller(&root, serve_all(FakeMirrors::new(), 1..=1));
        ctl.store().ensure_dir().unwrap();
        let stale = ctl.store().dir().join("001.abc.part");
        fs::write(&stale, b"half").unwrap();

        ctl.start_range(1, 1).unwrap().wait();
        assert!(!stale.exists());
        assert!(ctl.locate(1).is_some());
    }

    #[test]
    fn locate_and_mirrors_reject_out_of_domain() {
        let root = TempDir::new().unwrap();
        let (ctl, _) = controller(&root, FakeMirrors::new());
        assert!(ctl.locate(0).is_none());
        assert!(ctl.locate(605).is_none());
        assert!(ctl.locate(1).is_none());
        assert!(ctl.mirrors(0).is_none());
        assert_eq!(ctl.mirrors(7).unwrap().primary(), "http://mirror.test/007.png");
    }
}
