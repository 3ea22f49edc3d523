//! Page controller for the conversion client.
//!
//! The state lives in a `watch` channel: every transition goes through
//! `send_if_modified`, and UI layers call `subscribe()` to re-render on change.
//! Only one request can be in flight; the gate is the `loading` flag inside
//! the state transition, so concurrent callers sharing a `Converter` still
//! issue a single request.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use toonmaker_core::{
    COPY_CONFIRMATION_WINDOW, ConversionError, ConversionResult, ConversionService,
    ConverterState, CopyTicket, Language,
};

use crate::clipboard::{Clipboard, ClipboardError};

pub struct Converter<S, C> {
    service: S,
    clipboard: C,
    state: Arc<watch::Sender<ConverterState>>,
    copy_timer: Mutex<Option<JoinHandle<()>>>,
    copy_window: Duration,
}

impl<S, C> Converter<S, C>
where
    S: ConversionService,
    C: Clipboard,
{
    pub fn new(service: S, clipboard: C) -> Self {
        let (state, _rx) = watch::channel(ConverterState::new());
        Self {
            service,
            clipboard,
            state: Arc::new(state),
            copy_timer: Mutex::new(None),
            copy_window: COPY_CONFIRMATION_WINDOW,
        }
    }

    /// Override how long the copy confirmation stays visible.
    pub fn with_copy_window(mut self, window: Duration) -> Self {
        self.copy_window = window;
        self
    }

    /// Current state.
    pub fn snapshot(&self) -> ConverterState {
        self.state.borrow().clone()
    }

    /// Receive every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ConverterState> {
        self.state.subscribe()
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.state.send_modify(|s| s.set_prompt(prompt));
    }

    pub fn set_language(&self, language: Language) {
        self.state.send_if_modified(|s| {
            let changed = s.language() != language;
            s.set_language(language);
            changed
        });
    }

    /// Submit the current prompt.
    ///
    /// Returns `None` without touching the network when the prompt is blank or
    /// a request is already in flight. Otherwise performs exactly one
    /// conversion, applies its outcome to the state and returns it.
    pub async fn submit(&self) -> Option<ConversionResult<String>> {
        let mut request = None;
        self.state.send_if_modified(|s| {
            request = s.begin_submit();
            request.is_some()
        });

        let Some(request) = request else {
            tracing::debug!("submit ignored: blank prompt or request in flight");
            return None;
        };

        let in_flight = InFlight::new(&self.state);
        let outcome = self.service.convert(&request).await;
        in_flight.finish(outcome.clone());
        Some(outcome)
    }

    /// Reset prompt, result, error and copy indicator.
    ///
    /// Returns `false` (no-op) while a request is in flight.
    pub fn clear(&self) -> bool {
        let mut copy_timer = self.copy_timer.lock().unwrap_or_else(|e| e.into_inner());
        let cleared = self.state.send_if_modified(|s| s.clear());
        if cleared {
            if let Some(pending) = copy_timer.take() {
                pending.abort();
            }
        }
        cleared
    }

    /// Copy the current result to the clipboard and show the confirmation.
    ///
    /// Returns `Ok(false)` when there is nothing to copy. Re-copying before the
    /// window ends restarts it. Must be called from within a tokio runtime.
    pub fn copy_result(&self) -> Result<bool, ClipboardError> {
        let text = self.state.borrow().result().to_string();
        if text.is_empty() {
            return Ok(false);
        }

        self.clipboard.write_text(&text).inspect_err(|e| {
            tracing::warn!("copy to clipboard failed: {e}");
        })?;

        // Ticket order must match timer order, or an older timer could
        // replace a newer one and expire with a stale ticket.
        let mut copy_timer = self.copy_timer.lock().unwrap_or_else(|e| e.into_inner());

        let mut ticket = None;
        self.state.send_if_modified(|s| {
            ticket = s.mark_copied();
            ticket.is_some()
        });
        let Some(ticket) = ticket else {
            return Ok(false);
        };

        if let Some(previous) = copy_timer.replace(self.spawn_copy_timer(ticket)) {
            previous.abort();
        }
        Ok(true)
    }

    fn spawn_copy_timer(&self, ticket: CopyTicket) -> JoinHandle<()> {
        let state = self.state.clone();
        let window = self.copy_window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            state.send_if_modified(|s| s.expire_copy(ticket));
        })
    }
}

/// Resets `loading` if a submission is dropped before the service answers.
struct InFlight<'a> {
    state: &'a watch::Sender<ConverterState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<ConverterState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn finish(mut self, outcome: ConversionResult<String>) {
        self.settled = true;
        self.state.send_if_modified(|s| s.finish_submit(outcome));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!("conversion abandoned before the backend answered");
        self.state.send_if_modified(|s| {
            s.finish_submit(Err(ConversionError::transport("request abandoned")))
        });
    }
}

impl<S, C> Drop for Converter<S, C> {
    fn drop(&mut self) {
        if let Some(pending) = self
            .copy_timer
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;
    use toonmaker_core::{CONNECTIVITY_MESSAGE, ConvertRequest};

    use super::*;
    use crate::clipboard::MemoryClipboard;

    /// Records requests and answers with a fixed outcome, optionally after a gate opens.
    struct ScriptedService {
        outcome: ConversionResult<String>,
        requests: Mutex<Vec<ConvertRequest>>,
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedService {
        fn answering(outcome: ConversionResult<String>) -> Self {
            Self {
                outcome,
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated(outcome: ConversionResult<String>, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::answering(outcome)
            }
        }
    }

    #[async_trait]
    impl ConversionService for ScriptedService {
        async fn convert(&self, request: &ConvertRequest) -> ConversionResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.outcome.clone()
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Clip("no display".into()))
        }
    }

    fn converter(
        outcome: ConversionResult<String>,
    ) -> Converter<Arc<ScriptedService>, Arc<MemoryClipboard>> {
        Converter::new(
            Arc::new(ScriptedService::answering(outcome)),
            Arc::new(MemoryClipboard::new()),
        )
    }

    #[tokio::test]
    async fn blank_prompt_never_reaches_service() {
        let conv = converter(Ok("unused".into()));
        conv.set_prompt("   \n\t");

        assert!(conv.submit().await.is_none());
        assert_eq!(conv.service.calls.load(Ordering::SeqCst), 0);
        assert!(!conv.snapshot().is_loading());
    }

    #[tokio::test]
    async fn one_request_per_submission_with_entered_values() {
        let conv = converter(Ok("hello".into()));
        conv.set_prompt(" Salut ");
        conv.set_language(Language::Fr);

        let outcome = conv.submit().await;
        assert_eq!(outcome, Some(Ok("hello".to_string())));

        let requests = conv.service.requests.lock().unwrap().clone();
        assert_eq!(requests, vec![ConvertRequest::new(" Salut ", Language::Fr)]);

        let state = conv.snapshot();
        assert_eq!(state.result(), "hello");
        assert_eq!(state.error(), "");
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn rejection_is_displayed_verbatim() {
        let conv = converter(Err(ConversionError::rejected("bad input")));
        conv.set_prompt("x");
        conv.submit().await;

        let state = conv.snapshot();
        assert_eq!(state.error(), "bad input");
        assert_eq!(state.result(), "");
    }

    #[tokio::test]
    async fn transport_failure_displays_connectivity_hint() {
        let conv = converter(Err(ConversionError::transport("connection refused")));
        conv.set_prompt("x");
        conv.submit().await;

        assert_eq!(conv.snapshot().error(), CONNECTIVITY_MESSAGE);
    }

    #[tokio::test]
    async fn submit_and_clear_are_inert_while_loading() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(ScriptedService::gated(Ok("done".into()), gate.clone()));
        let conv = Arc::new(Converter::new(service.clone(), Arc::new(MemoryClipboard::new())));
        conv.set_prompt("x");

        let in_flight = {
            let conv = conv.clone();
            tokio::spawn(async move { conv.submit().await })
        };

        let mut rx = conv.subscribe();
        rx.wait_for(|s| s.is_loading()).await.unwrap();

        assert!(conv.submit().await.is_none());
        assert!(!conv.clear());
        assert_eq!(conv.snapshot().prompt(), "x");
        assert!(conv.snapshot().is_loading());

        gate.notify_one();
        assert_eq!(in_flight.await.unwrap(), Some(Ok("done".to_string())));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert!(!conv.snapshot().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_submission_releases_page() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(ScriptedService::gated(Ok("never".into()), gate));
        let conv = Converter::new(service.clone(), Arc::new(MemoryClipboard::new()));
        conv.set_prompt("x");

        let waited = tokio::time::timeout(Duration::from_millis(50), conv.submit()).await;
        assert!(waited.is_err());

        let state = conv.snapshot();
        assert!(!state.is_loading());
        assert_eq!(state.error(), CONNECTIVITY_MESSAGE);
        assert_eq!(state.prompt(), "x");

        let retry = tokio::time::timeout(Duration::from_millis(50), conv.submit()).await;
        assert!(retry.is_err());
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);

        assert!(conv.clear());
        assert_eq!(conv.snapshot().prompt(), "");
    }

    #[tokio::test]
    async fn clear_resets_page() {
        let conv = converter(Ok("hello".into()));
        conv.set_prompt("x");
        conv.submit().await;
        conv.copy_result().unwrap();

        assert!(conv.clear());
        let state = conv.snapshot();
        assert_eq!(state.prompt(), "");
        assert_eq!(state.result(), "");
        assert_eq!(state.error(), "");
        assert!(!state.is_copied());
    }

    #[tokio::test]
    async fn copy_without_result_does_nothing() {
        let conv = converter(Ok("hello".into()));
        assert_eq!(conv.copy_result(), Ok(false));
        assert_eq!(conv.clipboard.contents(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn copy_indicator_resets_after_window() {
        let conv = converter(Ok("hello".into()));
        conv.set_prompt("x");
        conv.submit().await;

        assert_eq!(conv.copy_result(), Ok(true));
        assert!(conv.snapshot().is_copied());
        assert_eq!(conv.clipboard.contents().as_deref(), Some("hello"));

        tokio::time::sleep(Duration::from_millis(1_999)).await;
        assert!(conv.snapshot().is_copied());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let state = conv.snapshot();
        assert!(!state.is_copied());
        assert_eq!(state.result(), "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn recopy_restarts_window() {
        let conv = converter(Ok("hello".into()));
        conv.set_prompt("x");
        conv.submit().await;

        conv.copy_result().unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        conv.copy_result().unwrap();

        // The first window would have ended at 2.0s.
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert!(conv.snapshot().is_copied());

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert!(!conv.snapshot().is_copied());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_copies_still_expire() {
        let conv = Arc::new(
            converter(Ok("hello".into())).with_copy_window(Duration::from_millis(20)),
        );
        conv.set_prompt("x");
        conv.submit().await;

        let copiers: Vec<_> = (0..8)
            .map(|_| {
                let conv = conv.clone();
                tokio::spawn(async move {
                    for _ in 0..50 {
                        assert_eq!(conv.copy_result(), Ok(true));
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();
        for copier in copiers {
            copier.await.unwrap();
        }
        assert!(conv.snapshot().is_copied());

        let mut rx = conv.subscribe();
        tokio::time::timeout(Duration::from_secs(2), rx.wait_for(|s| !s.is_copied()))
            .await
            .expect("copy indicator never reset")
            .unwrap();
    }

    #[tokio::test]
    async fn clipboard_failure_leaves_indicator_off() {
        let conv = Converter::new(
            ScriptedService::answering(Ok("hello".into())),
            BrokenClipboard,
        );
        conv.set_prompt("x");
        conv.submit().await;

        assert!(conv.copy_result().is_err());
        assert!(!conv.snapshot().is_copied());
    }

    #[tokio::test]
    async fn subscribers_see_completion() {
        let conv = converter(Ok("hello".into()));
        let mut rx = conv.subscribe();
        conv.set_prompt("x");
        rx.borrow_and_update();

        conv.submit().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().result(), "hello");
    }
}
