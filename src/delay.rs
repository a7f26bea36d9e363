//! Pattern 3: Three Ways to Wait
//!
//! One mocked operation ("wait, then produce a string") consumed as
//! 1. a callback invoked once the timer fires,
//! 2. a future chained with success and error continuations,
//! 3. an `async fn` that suspends at `.await`.
//!
//! The delay is a tokio timer, never a blocked thread: on a `current_thread`
//! runtime other tasks keep running while the operation is pending.

use futures::future::try_join_all;
use futures::TryFutureExt;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::{TourConfig, MAX_PARALLEL_SOURCES};
use crate::error::FetchError;

pub const DATA_LOADED: &str = "Data loaded!";
pub const DEFAULT_DELAY_MS: u64 = 2000;

// ============================================================================
// The mocked operation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSource {
    delay: Duration,
    payload: String,
    failure: Option<String>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            payload: DATA_LOADED.to_string(),
            failure: None,
        }
    }

    pub fn from_config(config: &TourConfig) -> Self {
        Self::new(config.delay()).with_payload(config.message.clone())
    }

    /// `parallel_sources` sources with delays spread evenly up to `delay_ms`.
    /// The count is clamped to `1..=MAX_PARALLEL_SOURCES`.
    pub fn staggered(config: &TourConfig) -> Vec<Self> {
        let clamped = config.parallel_sources.clamp(1, MAX_PARALLEL_SOURCES);
        let count = u32::try_from(clamped).unwrap_or(1);
        let step = config.delay() / count;
        (1..=count)
            .map(|i| Self::new(step * i).with_payload(format!("{} (#{i})", config.message)))
            .collect()
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Settle with `FetchError::Failed` instead of the payload.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn settle(self) -> Result<String, FetchError> {
        sleep(self.delay).await;
        match self.failure {
            Some(reason) => {
                warn!(%reason, "mocked operation failed");
                Err(FetchError::Failed { reason })
            }
            None => {
                info!(delay_ms = self.delay.as_millis() as u64, "mocked operation settled");
                Ok(self.payload)
            }
        }
    }
}

// ============================================================================
// Style 1: callback
// ============================================================================

/// Schedule the operation and hand its outcome to `callback` exactly once.
///
/// The callback receives the error first-class as `Err`, so there is no
/// separate error parameter to forget to check.
pub fn fetch_with_callback<F>(source: &MockSource, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<String, FetchError>) + Send + 'static,
{
    let pending = fetch_promise(source);
    tokio::spawn(async move {
        callback(pending.await);
    })
}

// ============================================================================
// Style 2: future with continuations
// ============================================================================

/// The operation as a value. Nothing runs until it is polled.
pub fn fetch_promise(
    source: &MockSource,
) -> impl Future<Output = Result<String, FetchError>> + Send + 'static {
    source.clone().settle()
}

/// `then` / `catch`: the error continuation turns a failure into a message.
pub async fn fetch_with_continuations(source: &MockSource) -> String {
    fetch_promise(source)
        .map_ok(|data| {
            debug!(%data, "success continuation");
            data
        })
        .unwrap_or_else(|err| format!("Error: {err}"))
        .await
}

// ============================================================================
// Style 3: async/await
// ============================================================================

pub async fn fetch_async(source: &MockSource) -> Result<String, FetchError> {
    let data = fetch_promise(source).await?;
    debug!(%data, "resumed after await");
    Ok(data)
}

/// The `try { await } catch` shape.
pub async fn load_and_report(source: &MockSource) -> String {
    match fetch_async(source).await {
        Ok(data) => data,
        Err(err) => format!("Error: {err}"),
    }
}

// ============================================================================
// Driving the styles uniformly
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Callback,
    Promise,
    AsyncAwait,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Callback, Style::Promise, Style::AsyncAwait];

    pub fn label(&self) -> &'static str {
        match self {
            Style::Callback => "callback",
            Style::Promise => "promise",
            Style::AsyncAwait => "async/await",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Run `source` through one style and surface its outcome as a `Result`.
pub async fn run_style(style: Style, source: &MockSource) -> Result<String, FetchError> {
    debug!(%style, "running style");
    match style {
        Style::Callback => {
            let (tx, rx) = oneshot::channel();
            let _task = fetch_with_callback(source, move |outcome| {
                let _ = tx.send(outcome);
            });
            rx.await.map_err(|_| FetchError::CallbackDropped)?
        }
        Style::Promise => {
            fetch_promise(source)
                .inspect_ok(|data| debug!(%data, "then"))
                .inspect_err(|err| debug!(%err, "catch"))
                .await
        }
        Style::AsyncAwait => fetch_async(source).await,
    }
}

/// Promise.all: every source runs concurrently, results keep input order,
/// the first failure fails the batch.
pub async fn fetch_all(sources: &[MockSource]) -> Result<Vec<String>, FetchError> {
    info!(count = sources.len(), "running sources concurrently");
    try_join_all(sources.iter().map(fetch_promise)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    fn source() -> MockSource {
        MockSource::new(Duration::from_millis(100))
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_style_loads_data() {
        for style in Style::ALL {
            let start = Instant::now();
            let data = run_style(style, &source()).await.unwrap();

            assert_eq!(data, DATA_LOADED, "style {style}");
            assert!(start.elapsed() >= Duration::from_millis(100), "style {style}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_style_propagates_failure() {
        let failing = source().failing("offline");
        for style in Style::ALL {
            let err = run_style(style, &failing).await.unwrap_err();
            assert_eq!(
                err,
                FetchError::Failed {
                    reason: "offline".to_string()
                },
                "style {style}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_runs_once_after_timer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let handle = fetch_with_callback(&source(), move |outcome| {
            assert_eq!(outcome.unwrap(), DATA_LOADED);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_work_runs_while_waiting() {
        let start = Instant::now();
        let src = source();
        let ticker = async {
            for _ in 0..5 {
                sleep(Duration::from_millis(10)).await;
            }
            Instant::now()
        };

        let (result, ticker_done) = tokio::join!(fetch_async(&src), ticker);

        assert_eq!(result.unwrap(), DATA_LOADED);
        assert!(ticker_done - start < src.delay());
    }

    #[tokio::test(start_paused = true)]
    async fn test_continuations() {
        assert_eq!(fetch_with_continuations(&source()).await, DATA_LOADED);
        assert_eq!(
            fetch_with_continuations(&source().failing("timeout")).await,
            "Error: operation failed: timeout"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_and_report() {
        assert_eq!(load_and_report(&source()).await, DATA_LOADED);
        assert_eq!(
            load_and_report(&source().failing("disk")).await,
            "Error: operation failed: disk"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_promise_is_lazy() {
        let start = Instant::now();
        let pending = fetch_promise(&source());
        sleep(Duration::from_millis(500)).await;

        pending.await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_all_runs_concurrently_in_order() {
        let sources = vec![
            MockSource::new(Duration::from_millis(30)).with_payload("a"),
            MockSource::new(Duration::from_millis(10)).with_payload("b"),
            MockSource::new(Duration::from_millis(20)).with_payload("c"),
        ];
        let start = Instant::now();

        let results = fetch_all(&sources).await.unwrap();

        assert_eq!(results, vec!["a", "b", "c"]);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(30));
        assert!(elapsed < Duration::from_millis(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_all_fails_on_any_failure() {
        let sources = vec![source(), source().failing("bad source")];
        let err = fetch_all(&sources).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Failed {
                reason: "bad source".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_all_empty() {
        assert!(fetch_all(&[]).await.unwrap().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = TourConfig {
            delay_ms: 10,
            message: "ready".to_string(),
            ..TourConfig::default()
        };
        let source = MockSource::from_config(&config);
        assert_eq!(source.delay(), Duration::from_millis(10));
        assert_eq!(source, MockSource::new(Duration::from_millis(10)).with_payload("ready"));
    }

    #[test]
    fn test_staggered_sources() {
        let config = TourConfig {
            delay_ms: 300,
            parallel_sources: 3,
            ..TourConfig::default()
        };
        let delays: Vec<u64> = MockSource::staggered(&config)
            .iter()
            .map(|s| s.delay().as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![100, 200, 300]);
    }

    #[test]
    fn test_staggered_clamps_oversized_count() {
        let config = TourConfig {
            delay_ms: 640,
            parallel_sources: usize::MAX,
            ..TourConfig::default()
        };
        let sources = MockSource::staggered(&config);

        assert_eq!(sources.len(), MAX_PARALLEL_SOURCES);
        assert_eq!(sources[0].delay(), Duration::from_millis(10));
        assert_eq!(sources.last().unwrap().delay(), Duration::from_millis(640));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_callback_reports_task_failure() {
        let handle = fetch_with_callback(&source(), |_| panic!("callback blew up"));

        let err = FetchError::from(handle.await.unwrap_err());
        match err {
            FetchError::TaskFailed(message) => assert!(message.contains("panic")),
            other => panic!("expected task failure, got {:?}", other),
        }
    }

    #[test]
    fn test_style_labels() {
        let labels: Vec<String> = Style::ALL.iter().map(Style::to_string).collect();
        assert_eq!(labels, vec!["callback", "promise", "async/await"]);
    }
}
