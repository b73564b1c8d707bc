//! Leptos Alerts
//!
//! Stack of auto-dismissing alert messages for Leptos apps.
//! An alert starts fading after a fixed delay and is detached once the
//! fade transition has had time to finish.

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

/// Delay before an alert starts fading out
pub const DISMISS_AFTER_MS: u32 = 5_000;

/// Fade transition length; the alert is detached after it
pub const FADE_MS: u32 = 300;

// ========================
// Alert State
// ========================

/// Alert severity, mapped onto Bootstrap's `alert-*` classes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// A single message in the stack
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Set once the dismiss delay has elapsed
    pub fading: bool,
}

impl Alert {
    /// CSS classes; dropping `show` triggers the fade transition
    pub fn class(&self) -> String {
        let base = format!("alert alert-{} alert-dismissible fade", self.severity.as_str());
        if self.fading {
            base
        } else {
            format!("{} show", base)
        }
    }
}

/// Alert stack without timers or DOM
#[derive(Clone, Debug, Default)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    next_id: u64,
    mounted: bool,
}

impl AlertBoard {
    /// Append an alert and return its id. The overlay is mounted on first use.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.mounted = true;
        self.alerts.push(Alert {
            id: self.next_id,
            message: message.into(),
            severity,
            fading: false,
        });
        self.next_id
    }

    pub fn fade(&mut self, id: u64) -> bool {
        match self.alerts.iter_mut().find(|alert| alert.id == id) {
            Some(alert) => {
                alert.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Whether the overlay container exists yet
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

// ========================
// Timers
// ========================

/// Deferred unit of work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once after a delay
pub trait Scheduler: Send + Sync + 'static {
    fn defer(&self, delay_ms: u32, task: Task);
}

/// Browser scheduler backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

// ========================
// Notifier
// ========================

/// Anything that can surface a message to the user
pub trait AlertSink {
    fn alert(&self, message: &str, severity: Severity);
}

type Listener = Arc<dyn Fn(&AlertBoard) + Send + Sync>;

/// Shared handle to the alert stack.
///
/// Cheap to clone; every clone drives the same stack. Each `show` schedules
/// its own fade and removal, so concurrent alerts expire independently.
#[derive(Clone)]
pub struct Notifier {
    board: Arc<Mutex<AlertBoard>>,
    scheduler: Arc<dyn Scheduler>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_scheduler(TimeoutScheduler)
    }

    pub fn with_scheduler(scheduler: impl Scheduler) -> Self {
        Self {
            board: Arc::new(Mutex::new(AlertBoard::default())),
            scheduler: Arc::new(scheduler),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Show an alert and schedule its two-phase dismissal
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.mutate(|board| board.push(message, severity));

        let notifier = self.clone();
        self.scheduler.defer(
            DISMISS_AFTER_MS,
            Box::new(move || {
                notifier.mutate(|board| board.fade(id));
                let remover = notifier.clone();
                notifier.scheduler.defer(
                    FADE_MS,
                    Box::new(move || {
                        remover.mutate(|board| board.remove(id));
                    }),
                );
            }),
        );
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Success)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Info)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Warning)
    }

    pub fn danger(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Danger)
    }

    /// Remove an alert right away (close button)
    pub fn dismiss(&self, id: u64) {
        self.mutate(|board| board.remove(id));
    }

    pub fn snapshot(&self) -> AlertBoard {
        self.board.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Register a callback invoked with the new state after every change
    pub fn subscribe(&self, listener: impl Fn(&AlertBoard) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut AlertBoard) -> R) -> R {
        // Listeners run outside the board lock so they may call back in.
        let (result, snapshot) = {
            let mut board = self.board.lock().unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut board);
            (result, board.clone())
        };
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(&snapshot);
        }
        result
    }
}

impl AlertSink for Notifier {
    fn alert(&self, message: &str, severity: Severity) {
        log::debug!("[alerts] {}: {}", severity.as_str(), message);
        self.show(message, severity);
    }
}

// ========================
// Component
// ========================

/// Fixed-position overlay rendering the alert stack.
///
/// Mount once near the app root. Nothing is rendered until the first alert.
#[component]
pub fn AlertContainer(notifier: Notifier) -> impl IntoView {
    let (board, set_board) = signal(notifier.snapshot());
    notifier.subscribe(move |state| {
        let _ = set_board.try_set(state.clone());
    });
    let notifier = StoredValue::new(notifier);

    view! {
        <Show when=move || board.with(AlertBoard::is_mounted)>
            <div
                id="alertContainer"
                style="position: fixed; top: 20px; right: 20px; z-index: 9999;"
            >
                <For
                    each=move || board.with(|state| state.alerts().to_vec())
                    key=|alert| alert.id
                    children=move |alert| {
                        let id = alert.id;
                        let class = move || {
                            board.with(|state| state.get(id).map(Alert::class).unwrap_or_default())
                        };
                        view! {
                            <div class=class role="alert">
                                {alert.message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| notifier.with_value(|n| n.dismiss(id))
                                ></button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pending {
        due: u64,
        seq: u64,
        task: Task,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        seq: u64,
        queue: Vec<Pending>,
    }

    /// Scheduler driven by hand from the test
    #[derive(Clone, Default)]
    struct ManualClock(Arc<Mutex<ClockState>>);

    impl ManualClock {
        fn advance(&self, ms: u64) {
            let target = self.0.lock().unwrap().now + ms;
            loop {
                let next = {
                    let mut state = self.0.lock().unwrap();
                    let index = state
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    match index {
                        Some(i) => {
                            let pending = state.queue.remove(i);
                            state.now = pending.due;
                            Some(pending.task)
                        }
                        None => {
                            state.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualClock {
        fn defer(&self, delay_ms: u32, task: Task) {
            let mut state = self.0.lock().unwrap();
            state.seq += 1;
            let pending = Pending {
                due: state.now + delay_ms as u64,
                seq: state.seq,
                task,
            };
            state.queue.push(pending);
        }
    }

    fn setup() -> (Notifier, ManualClock) {
        let clock = ManualClock::default();
        (Notifier::with_scheduler(clock.clone()), clock)
    }

    #[test]
    fn test_alerts_visible_then_cleared() {
        let (notifier, clock) = setup();
        for i in 0..4 {
            notifier.info(format!("message {}", i));
        }

        let board = notifier.snapshot();
        assert_eq!(board.len(), 4);
        assert!(board.alerts().iter().all(|a| !a.fading));

        clock.advance(DISMISS_AFTER_MS as u64);
        let board = notifier.snapshot();
        assert_eq!(board.len(), 4);
        assert!(board.alerts().iter().all(|a| a.fading));

        clock.advance(FADE_MS as u64);
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn test_overlapping_alerts_expire_independently() {
        let (notifier, clock) = setup();
        let first = notifier.danger("first");
        clock.advance(2_000);
        let second = notifier.success("second");

        clock.advance(3_300);
        let board = notifier.snapshot();
        assert!(board.get(first).is_none());
        assert_eq!(board.get(second).map(|a| a.fading), Some(false));

        clock.advance(2_000);
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn test_dismiss_before_timers() {
        let (notifier, clock) = setup();
        let id = notifier.warning("closing early");
        notifier.dismiss(id);
        assert!(notifier.snapshot().is_empty());

        clock.advance(5_300);
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn test_no_deduplication() {
        let (notifier, _clock) = setup();
        let a = notifier.info("same");
        let b = notifier.info("same");
        assert_ne!(a, b);
        assert_eq!(notifier.snapshot().len(), 2);
    }

    #[test]
    fn test_container_mounts_lazily() {
        let (notifier, clock) = setup();
        assert!(!notifier.snapshot().is_mounted());

        notifier.info("hello");
        assert!(notifier.snapshot().is_mounted());

        clock.advance(5_300);
        let board = notifier.snapshot();
        assert!(board.is_empty());
        assert!(board.is_mounted());
    }

    #[test]
    fn test_alert_class() {
        let mut board = AlertBoard::default();
        let id = board.push("boom", Severity::Danger);
        assert_eq!(
            board.get(id).unwrap().class(),
            "alert alert-danger alert-dismissible fade show"
        );

        board.fade(id);
        assert_eq!(
            board.get(id).unwrap().class(),
            "alert alert-danger alert-dismissible fade"
        );
    }

    #[test]
    fn test_listeners_see_every_change() {
        let (notifier, clock) = setup();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        notifier.subscribe(move |board| sink.lock().unwrap().push(board.len()));

        notifier.alert("saved", Severity::Success);
        clock.advance(5_300);

        // push, fade, remove
        assert_eq!(*seen.lock().unwrap(), vec![1, 1, 0]);
    }
}
