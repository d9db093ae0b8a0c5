//! Progress poller
//!
//! Drives a repeating status check for a long-running controller operation
//! until the payload signals completion. Each poll cycle fetches the status
//! report for a topic, hands it to a render callback, and fires a completion
//! callback exactly once when the terminal value is observed.
//!
//! One session owns one timer: starting an active session is a no-op, and a
//! generation counter tags every session so responses that arrive after a
//! stop (or land between a stop and a restart) are discarded instead of
//! rendered.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use hearth_core::domain::progress::{CompletionSignal, StatusReport};

use crate::error::{ClientError, Result};

/// Source of status reports for a topic
///
/// The HTTP client is the production implementation; tests substitute
/// scripted fakes.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the current status report for `topic`
    async fn fetch_status(&self, topic: &str) -> Result<StatusReport>;
}

/// Configuration of one polling session
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Which long-running operation's status is being observed
    pub topic: String,

    /// Time between poll cycles
    pub interval: Duration,

    /// The field/value convention marking completion
    pub signal: CompletionSignal,
}

impl PollConfig {
    /// Create a configuration with the controller's default completion signal
    pub fn new(topic: impl Into<String>, interval: Duration) -> Self {
        Self {
            topic: topic.into(),
            interval,
            signal: CompletionSignal::default(),
        }
    }

    /// Replace the completion signal convention
    pub fn with_signal(mut self, signal: CompletionSignal) -> Self {
        self.signal = signal;
        self
    }

    /// Validate the configuration
    ///
    /// The poller itself assumes a valid configuration; entry points that
    /// accept user input call this first.
    pub fn validate(&self) -> Result<()> {
        if self.topic.is_empty() {
            return Err(ClientError::InvalidRequest(
                "poll topic cannot be empty".to_string(),
            ));
        }

        if self.interval.is_zero() {
            return Err(ClientError::InvalidRequest(
                "poll interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

type StatusFn = Arc<Mutex<Box<dyn FnMut(StatusReport) + Send>>>;
type CompleteFn = Arc<Mutex<Box<dyn FnMut() + Send>>>;

/// One polling session over a status source
///
/// A session is inactive on construction. [`ProgressPoller::start`] arms the
/// repeating timer (first cycle after one full interval); the session
/// returns to inactive when the completion signal is observed or on
/// [`ProgressPoller::stop`]. [`ProgressPoller::poll_once`] performs a single
/// immediate cycle without touching the timer, for a first paint before the
/// periodic refresh takes over.
pub struct ProgressPoller<S: StatusSource + 'static> {
    source: Arc<S>,
    config: PollConfig,
    on_status: StatusFn,
    on_complete: CompleteFn,
    /// Session generation; bumped on every start/stop so stale in-flight
    /// responses can be told apart from live ones
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl<S: StatusSource + 'static> ProgressPoller<S> {
    /// Create an inactive session
    ///
    /// # Arguments
    /// * `source` - Where status reports come from
    /// * `config` - Topic, interval, and completion convention
    /// * `on_status` - Invoked with every received report, in order
    /// * `on_complete` - Invoked exactly once per started session, after the
    ///   report that signals completion
    pub fn new(
        source: Arc<S>,
        config: PollConfig,
        on_status: impl FnMut(StatusReport) + Send + 'static,
        on_complete: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            source,
            config,
            on_status: Arc::new(Mutex::new(Box::new(on_status))),
            on_complete: Arc::new(Mutex::new(Box::new(on_complete))),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// The session configuration
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Whether the periodic timer is currently armed
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Arm the repeating timer
    ///
    /// The first cycle runs after one full interval, not immediately; use
    /// [`ProgressPoller::poll_once`] for an immediate first paint. Calling
    /// `start` while the session is active does nothing — a session never
    /// owns two timers.
    pub fn start(&mut self) {
        if self.is_active() {
            debug!(
                "poller for '{}' is already active, ignoring start",
                self.config.topic
            );
            return;
        }

        let generation = Arc::clone(&self.generation);
        let session = generation.fetch_add(1, Ordering::SeqCst) + 1;

        let source = Arc::clone(&self.source);
        let on_status = Arc::clone(&self.on_status);
        let on_complete = Arc::clone(&self.on_complete);
        let topic = self.config.topic.clone();
        let interval = self.config.interval;
        let signal = self.config.signal.clone();

        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            // No catch-up bursts after a suspension; late cycles just run late.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if generation.load(Ordering::SeqCst) != session {
                    break;
                }

                let report = match source.fetch_status(&topic).await {
                    Ok(report) => report,
                    Err(e) => {
                        warn!("status poll for '{}' failed, skipping cycle: {:#}", topic, e);
                        continue;
                    }
                };

                // The session may have been stopped while the request was in
                // flight; a stale response is discarded, not rendered.
                if generation.load(Ordering::SeqCst) != session {
                    break;
                }

                let complete = signal.is_complete(&report);

                {
                    let mut render = on_status.lock().await;
                    (*render)(report);
                }

                if complete {
                    // Timer goes away before the completion callback runs.
                    drop(ticker);
                    let mut finish = on_complete.lock().await;
                    (*finish)();
                    break;
                }
            }
        }));
    }

    /// Disarm the timer and invalidate any in-flight request
    ///
    /// A response that arrives after `stop` invokes no callbacks.
    pub fn stop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Run a single status cycle immediately
    ///
    /// Fetches one report and hands it to the render callback. The periodic
    /// timer is neither armed nor disarmed, and the completion callback is
    /// never invoked from here — this is the render-only path.
    pub async fn poll_once(&self) -> Result<()> {
        let report = self.source.fetch_status(&self.config.topic).await?;

        let mut render = self.on_status.lock().await;
        (*render)(report);
        Ok(())
    }

    /// Wait for the running session to finish
    ///
    /// Returns immediately when the session is inactive. After this call the
    /// session is inactive and can be started again.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicUsize;

    /// Hands out scripted responses in order, then reports "running" forever
    struct ScriptedSource {
        responses: StdMutex<VecDeque<Result<StatusReport>>>,
        requests: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<StatusReport>>) -> Arc<Self> {
            Arc::new(Self {
                responses: StdMutex::new(responses.into()),
                requests: AtomicUsize::new(0),
            })
        }

        fn running() -> Arc<Self> {
            Self::new(Vec::new())
        }

        fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch_status(&self, _topic: &str) -> Result<StatusReport> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match self.responses.lock().unwrap().pop_front() {
                Some(response) => response,
                None => Ok(json!({ "status": "running" })),
            }
        }
    }

    /// Sleeps before answering, so a stop can land mid-request
    struct SlowSource {
        requests: AtomicUsize,
    }

    #[async_trait]
    impl StatusSource for SlowSource {
        async fn fetch_status(&self, _topic: &str) -> Result<StatusReport> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            time::sleep(Duration::from_millis(500)).await;
            Ok(json!({ "status": "running" }))
        }
    }

    fn counting_poller<S: StatusSource + 'static>(
        source: Arc<S>,
        config: PollConfig,
    ) -> (ProgressPoller<S>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let renders = Arc::new(AtomicUsize::new(0));
        let finishes = Arc::new(AtomicUsize::new(0));

        let renders_in = Arc::clone(&renders);
        let finishes_in = Arc::clone(&finishes);

        let poller = ProgressPoller::new(
            source,
            config,
            move |_report| {
                renders_in.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                finishes_in.fetch_add(1, Ordering::SeqCst);
            },
        );

        (poller, renders, finishes)
    }

    /// Let the spawned session task run until it parks on its timer again
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_fires_after_one_full_interval() {
        let source = ScriptedSource::running();
        let (mut poller, renders, _finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.start();
        settle().await;

        time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert_eq!(source.request_count(), 0, "no tick before the interval elapses");

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(source.request_count(), 1);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_accumulate_while_nothing_completes() {
        let source = ScriptedSource::running();
        let (mut poller, renders, finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.start();
        settle().await;

        for _ in 0..3 {
            time::advance(Duration::from_secs(2)).await;
            settle().await;
        }

        assert_eq!(source.request_count(), 3);
        assert_eq!(renders.load(Ordering::SeqCst), 3);
        assert_eq!(finishes.load(Ordering::SeqCst), 0);

        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_renders_in_order_then_stops_the_timer() {
        let source = ScriptedSource::new(vec![
            Ok(json!({ "status": "running" })),
            Ok(json!({ "status": "running" })),
            Ok(json!({ "status": "isEnd" })),
        ]);

        let seen = Arc::new(StdMutex::new(Vec::new()));
        let finishes = Arc::new(AtomicUsize::new(0));

        let seen_in = Arc::clone(&seen);
        let finishes_in = Arc::clone(&finishes);

        let mut poller = ProgressPoller::new(
            Arc::clone(&source),
            PollConfig::new("commit", Duration::from_secs(2)),
            move |report| {
                let status = report["status"].as_str().unwrap_or_default().to_string();
                seen_in.lock().unwrap().push(status);
            },
            move || {
                finishes_in.fetch_add(1, Ordering::SeqCst);
            },
        );

        poller.start();
        settle().await;

        // One extra interval past completion; no fourth tick may fire.
        for _ in 0..4 {
            time::advance(Duration::from_secs(2)).await;
            settle().await;
        }

        assert_eq!(*seen.lock().unwrap(), vec!["running", "running", "isEnd"]);
        assert_eq!(finishes.load(Ordering::SeqCst), 1);
        assert_eq!(source.request_count(), 3);
        assert!(!poller.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_once_renders_without_arming_the_timer() {
        let source = ScriptedSource::running();
        let (poller, renders, finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.poll_once().await.unwrap();

        assert_eq!(source.request_count(), 1);
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert!(!poller.is_active());

        // Nothing is scheduled, so time can pass without further requests.
        time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(source.request_count(), 1);
        assert_eq!(finishes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_arms_a_single_timer() {
        let source = ScriptedSource::running();
        let (mut poller, renders, _finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.start();
        settle().await;
        poller.start();
        settle().await;

        time::advance(Duration::from_secs(2)).await;
        settle().await;

        assert_eq!(source.request_count(), 1, "double start must not double the ticks");
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_discards_the_in_flight_response() {
        let source = Arc::new(SlowSource {
            requests: AtomicUsize::new(0),
        });
        let (mut poller, renders, finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.start();
        settle().await;

        // First tick fires and the request goes to sleep mid-flight.
        time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(source.requests.load(Ordering::SeqCst), 1);

        poller.stop();
        assert!(!poller.is_active());

        time::advance(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(renders.load(Ordering::SeqCst), 0, "stale response must not render");
        assert_eq!(finishes.load(Ordering::SeqCst), 0);
        assert_eq!(source.requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_request_skips_the_cycle_and_polling_continues() {
        let source = ScriptedSource::new(vec![
            Err(ClientError::InternalError("connection reset".to_string())),
            Ok(json!({ "status": "running" })),
        ]);
        let (mut poller, renders, finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.start();
        settle().await;

        time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(source.request_count(), 1);
        assert_eq!(renders.load(Ordering::SeqCst), 0, "failed cycle renders nothing");

        time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(source.request_count(), 2);
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(finishes.load(Ordering::SeqCst), 0);

        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_completion_runs_a_fresh_session() {
        let source = ScriptedSource::new(vec![
            Ok(json!({ "status": "isEnd" })),
            Ok(json!({ "status": "isEnd" })),
        ]);
        let (mut poller, renders, finishes) =
            counting_poller(Arc::clone(&source), PollConfig::new("commit", Duration::from_secs(2)));

        poller.start();
        settle().await;
        time::advance(Duration::from_secs(2)).await;
        settle().await;

        assert_eq!(finishes.load(Ordering::SeqCst), 1);
        assert!(!poller.is_active());

        poller.start();
        settle().await;
        time::advance(Duration::from_secs(2)).await;
        settle().await;

        assert_eq!(renders.load(Ordering::SeqCst), 2);
        assert_eq!(finishes.load(Ordering::SeqCst), 2, "completion fires once per session");
    }

    #[tokio::test]
    async fn test_config_validation() {
        let config = PollConfig::new("commit", Duration::from_secs(2));
        assert!(config.validate().is_ok());

        let config = PollConfig::new("", Duration::from_secs(2));
        assert!(config.validate().is_err());

        let config = PollConfig::new("commit", Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
