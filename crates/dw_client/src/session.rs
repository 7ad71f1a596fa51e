//! Capture-loop session: camera lifecycle and the periodic tick.
//!
//! The session is the explicit owner of the camera resource. It is a
//! two-state machine, Idle and Running; a failed tick never changes state.
//! Each tick grabs a frame, submits it, resolves a payload (remote or
//! synthetic), recomputes the full snapshot, applies the event-log trigger
//! policy, and hands the projected display state to the update callback.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use dw_core::camera::{encode_jpeg_data_uri, CameraResult, FrameSource};
use dw_core::config::Settings;
use dw_core::events::EventLog;
use dw_core::fallback::Synthesizer;
use dw_core::models::MonitorSnapshot;
use dw_core::severity::{snapshot_from_payload, NormalizerOptions};

use crate::transport::InferenceClient;
use crate::ui::{self, UiState};

/// Callback invoked with the freshly projected display state after each
/// completed tick.
pub type UpdateCallback = Arc<dyn Fn(UiState) + Send + Sync>;

/// Live monitor state: the latest snapshot plus the event log.
///
/// Owned by the capture loop's tick handler. Every tick fully recomputes
/// the snapshot, so overlapping in-flight responses resolve as
/// last-write-wins.
#[derive(Debug, Default)]
pub struct MonitorState {
    pub snapshot: MonitorSnapshot,
    pub events: EventLog,
}

/// Everything a tick needs, shared between the loop task and the
/// per-tick submission tasks.
struct TickContext {
    source: Arc<Mutex<Box<dyn FrameSource>>>,
    client: InferenceClient,
    jpeg_quality: u8,
    normalizer: NormalizerOptions,
    synthesizer: Mutex<Synthesizer>,
    state: Arc<Mutex<MonitorState>>,
    on_update: UpdateCallback,
}

/// The capture-loop session.
///
/// Active iff the frame source is held and the tick task is scheduled;
/// `start()` and `stop()` maintain that invariant together and both are
/// safe to call in any state.
pub struct MonitorSession {
    interval: Duration,
    ctx: Arc<TickContext>,
    tick_task: Option<JoinHandle<()>>,
}

impl MonitorSession {
    pub fn new(
        settings: &Settings,
        source: Box<dyn FrameSource>,
        client: InferenceClient,
        on_update: UpdateCallback,
    ) -> Self {
        Self {
            interval: Duration::from_millis(settings.capture.interval_ms),
            ctx: Arc::new(TickContext {
                source: Arc::new(Mutex::new(source)),
                client,
                jpeg_quality: settings.capture.jpeg_quality,
                normalizer: settings.normalizer,
                synthesizer: Mutex::new(Synthesizer::new(settings.fallback)),
                state: Arc::new(Mutex::new(MonitorState::default())),
                on_update,
            }),
            tick_task: None,
        }
    }

    /// Shared handle to the live monitor state.
    pub fn state(&self) -> Arc<Mutex<MonitorState>> {
        Arc::clone(&self.ctx.state)
    }

    /// Acquire the camera and schedule the recurring tick.
    ///
    /// Starting while already running is a no-op. If the source cannot be
    /// opened (device missing, permission denied) the error is returned,
    /// the session stays idle, and nothing retries automatically.
    pub fn start(&mut self) -> CameraResult<()> {
        if self.is_active() {
            debug!("start() while running is a no-op");
            return Ok(());
        }

        self.ctx.source.lock().open()?;

        let ctx = Arc::clone(&self.ctx);
        let interval = self.interval;
        self.tick_task = Some(tokio::spawn(run_tick_loop(ctx, interval)));

        info!(interval_ms = self.interval.as_millis() as u64, "monitoring started");
        Ok(())
    }

    /// Cancel the tick and release the camera. Idempotent: calling from
    /// Idle is a no-op, and a second call after stopping does nothing.
    ///
    /// An already in-flight request is not cancelled; its late response
    /// only overwrites the snapshot, which is harmless.
    pub fn stop(&mut self) {
        let Some(task) = self.tick_task.take() else {
            return;
        };
        task.abort();
        self.ctx.source.lock().close();
        info!("monitoring stopped");
    }

    /// True iff the session is Running.
    pub fn is_active(&self) -> bool {
        self.tick_task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for MonitorSession {
    /// The camera must never outlive the session.
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_tick_loop(ctx: Arc<TickContext>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let frame = match ctx.source.lock().grab() {
            Ok(frame) => frame,
            Err(e) => {
                // A failed tick does not change session state.
                warn!(error = %e, "frame grab failed, skipping tick");
                continue;
            }
        };

        if frame.is_empty() {
            debug!("source not producing frames yet, skipping tick");
            continue;
        }

        let encoded = match encode_jpeg_data_uri(&frame, ctx.jpeg_quality) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "frame encoding failed, skipping tick");
                continue;
            }
        };

        // The timer keeps its cadence regardless of backend latency: each
        // submission runs on its own task, and overlapping responses are
        // resolved last-write-wins on the shared state.
        tokio::spawn(process_tick(Arc::clone(&ctx), encoded));
    }
}

/// Submit one frame and apply the result. This is the terminal handler for
/// every transport failure: it never errors and never halts the loop.
async fn process_tick(ctx: Arc<TickContext>, encoded: String) {
    let payload = match ctx.client.submit(&encoded).await {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "backend unreachable, synthesizing result");
            ctx.synthesizer.lock().synthesize()
        }
    };

    let snapshot = snapshot_from_payload(&payload, &ctx.normalizer);
    let now = Local::now();

    let ui_state = {
        let mut state = ctx.state.lock();
        state.snapshot = snapshot;
        state.events.apply_triggers(&snapshot, now);
        ui::project(&state.snapshot, &state.events)
    };

    (ctx.on_update)(ui_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dw_core::camera::TestPatternSource;
    use dw_core::models::{Category, SeverityLabel};
    use reqwest::Client;

    const TICK_MS: u64 = 10;
    const SETTLE_MS: u64 = 200;

    fn test_settings() -> Settings {
        let mut settings = Settings::default();
        settings.capture.interval_ms = TICK_MS;
        settings.capture.width = 8;
        settings.capture.height = 8;
        settings
    }

    struct Harness {
        session: MonitorSession,
        updates: Arc<Mutex<Vec<UiState>>>,
    }

    fn harness(endpoint: String, source: TestPatternSource) -> Harness {
        let updates: Arc<Mutex<Vec<UiState>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&updates);
        let on_update: UpdateCallback = Arc::new(move |state| sink.lock().push(state));

        let client = InferenceClient::with_http_client(endpoint, Client::new());
        let session = MonitorSession::new(&test_settings(), Box::new(source), client, on_update);

        Harness { session, updates }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(SETTLE_MS)).await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn start_stop_lifecycle() {
        // Unreachable backend: the fallback keeps the session ticking.
        let mut h = harness("http://127.0.0.1:9/process-frame".into(), TestPatternSource::new(8, 8));

        assert!(!h.session.is_active());
        h.session.start().unwrap();
        assert!(h.session.is_active());

        h.session.stop();
        assert!(!h.session.is_active());
        // Second stop is a no-op, no panic, no double-release.
        h.session.stop();
        assert!(!h.session.is_active());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn start_while_running_is_noop() {
        let mut h = harness("http://127.0.0.1:9/process-frame".into(), TestPatternSource::new(8, 8));

        h.session.start().unwrap();
        h.session.start().unwrap();
        assert!(h.session.is_active());
        h.session.stop();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn open_failure_stays_idle() {
        let mut h = harness(
            "http://127.0.0.1:9/process-frame".into(),
            TestPatternSource::new(0, 0),
        );

        assert!(h.session.start().is_err());
        assert!(!h.session.is_active());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn remote_payload_drives_snapshot_and_events() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/process-frame")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"drowsiness":"High","phone":"No","smoking":"No","drinking":"No"}"#)
            .expect_at_least(1)
            .create_async()
            .await;

        let mut h = harness(
            format!("{}/process-frame", server.url()),
            TestPatternSource::new(8, 8),
        );
        h.session.start().unwrap();
        settle().await;
        h.session.stop();

        let state = h.session.state();
        let state = state.lock();
        assert_eq!(state.snapshot.drowsiness, 85);
        assert_eq!(state.snapshot.phone, 4);

        // Drowsiness is above its threshold: one entry per completed tick.
        let entry = state.events.entries().next().expect("a drowsiness event");
        assert_eq!(entry.event_name, "Drowsiness");
        assert_eq!(entry.severity, SeverityLabel::High);
        assert!(entry.code.starts_with("DRV"));

        let updates = h.updates.lock();
        let last = updates.last().expect("at least one update");
        assert_eq!(last.row(Category::Drowsiness).percent, 85);
        assert_eq!(last.row(Category::Drowsiness).label, SeverityLabel::High);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn transport_failure_falls_back_to_synthetic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/process-frame")
            .with_status(500)
            .with_body(r#"{"error": "Model server not responding"}"#)
            .expect_at_least(1)
            .create_async()
            .await;

        let mut h = harness(
            format!("{}/process-frame", server.url()),
            TestPatternSource::new(8, 8),
        );
        h.session.start().unwrap();
        settle().await;
        h.session.stop();

        let updates = h.updates.lock();
        assert!(!updates.is_empty(), "fallback must keep updates flowing");
        for update in updates.iter() {
            assert_eq!(update.rows.len(), 4);
            for row in &update.rows {
                // Synthetic strings normalize onto the keyword scale.
                assert!(
                    [4, 55, 85].contains(&row.percent),
                    "unexpected synthetic score {}",
                    row.percent
                );
            }
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn warming_up_source_produces_no_requests_or_updates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/process-frame")
            .expect(0)
            .create_async()
            .await;

        let mut h = harness(
            format!("{}/process-frame", server.url()),
            TestPatternSource::new(8, 8).with_warmup(u32::MAX),
        );
        h.session.start().unwrap();
        settle().await;
        h.session.stop();

        mock.assert_async().await;
        assert!(h.updates.lock().is_empty());
        let state = h.session.state();
        assert_eq!(state.lock().snapshot, MonitorSnapshot::default());
    }
}
