use crate::card::ResultCard;
use crate::config::FormDefaults;
use crate::error::GenerateError;
use crate::format::fmt_elapsed;
use crate::input::FormState;
use crate::model::{GenerationRequest, GenerationResponse, GenerationSummary};
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3500);

/// How long a card shows "Copied!" before reverting.
pub const COPY_FLASH: Duration = Duration::from_secs(2);

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Messages delivered back to the UI loop from spawned tasks.
#[derive(Debug)]
pub enum AppEvent {
    Generated(Result<GenerationResponse, GenerateError>),
    CopyFinished(Result<(), String>),
}

/// Submission lifecycle. `Submitting` is entered at most once at a time:
/// [`App::submit`] refuses to start a second request while one is in
/// flight, which is what keeps the trigger single-flight.
#[derive(Debug, Clone, Copy)]
pub enum Phase {
    Idle,
    Submitting { started: Instant },
}

/// Which pane owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Form,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires: Instant,
}

/// Summary plus the wall-clock seconds the request took, frozen at the
/// moment the response arrived.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub summary: GenerationSummary,
    pub elapsed_secs: f64,
}

pub struct App {
    pub form: FormState,
    pub mode: Mode,
    pub phase: Phase,
    pub cards: Vec<ResultCard>,
    pub summary: Option<SummaryView>,
    /// Status line: progress while submitting, error text after a failure.
    pub status: Option<String>,
    pub selected: usize,
    pub toasts: Vec<Toast>,
    pub should_quit: bool,
    copied: Option<(usize, Instant)>,
    ticks: u64,
}

impl App {
    pub fn new(defaults: &FormDefaults) -> Self {
        let form = FormState {
            tweets_to_analyze: defaults.tweets_to_analyze.to_string(),
            tweets_to_rewrite: defaults.tweets_to_rewrite.to_string(),
            min_likes: defaults.min_likes.to_string(),
            min_retweets: defaults.min_retweets.to_string(),
            generate_images: defaults.generate_images,
            ..FormState::default()
        };

        Self {
            form,
            mode: Mode::Form,
            phase: Phase::Idle,
            cards: Vec::new(),
            summary: None,
            status: None,
            selected: 0,
            toasts: Vec::new(),
            should_quit: false,
            copied: None,
            ticks: 0,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// Validate the form and enter `Submitting`. Returns the request the
    /// caller should put on the wire, or `None` when validation failed or
    /// a request is already in flight. Entering `Submitting` clears the
    /// previous results, summary and status.
    pub fn submit(&mut self) -> Option<GenerationRequest> {
        if self.is_submitting() {
            return None;
        }

        let request = match self.form.collect() {
            Ok(request) => request,
            Err(err) => {
                self.notify(err.to_string(), ToastKind::Error);
                return None;
            }
        };

        self.phase = Phase::Submitting {
            started: Instant::now(),
        };
        self.cards.clear();
        self.summary = None;
        self.selected = 0;
        self.copied = None;
        self.status = Some("Collecting and rewriting tweets...".to_string());
        Some(request)
    }

    /// Handle the outcome of a submission. Both arms end by resetting the
    /// phase to `Idle`, so the trigger is re-enabled no matter what came
    /// back.
    pub fn finish(&mut self, result: Result<GenerationResponse, GenerateError>) {
        let elapsed_secs = match self.phase {
            Phase::Submitting { started } => started.elapsed().as_secs_f64(),
            Phase::Idle => 0.0,
        };

        match result {
            Ok(response) => {
                self.cards = response
                    .results
                    .iter()
                    .enumerate()
                    .map(|(index, result)| ResultCard::build(result, index))
                    .collect();
                self.summary = Some(SummaryView {
                    summary: response.summary,
                    elapsed_secs,
                });
                self.status = None;
                self.mode = Mode::Results;
                self.notify(
                    format!(
                        "generated {} rewrites in {}s",
                        self.cards.len(),
                        fmt_elapsed(elapsed_secs)
                    ),
                    ToastKind::Success,
                );
            }
            Err(err) => {
                let message = err.to_string();
                self.status = Some(format!("Error: {message}"));
                self.notify(message, ToastKind::Error);
            }
        }

        self.phase = Phase::Idle;
    }

    pub fn notify(&mut self, message: String, kind: ToastKind) {
        self.toasts.push(Toast {
            message,
            kind,
            expires: Instant::now() + TOAST_VISIBLE,
        });
    }

    /// Advance timers: drop expired toasts and the copy flash. Each toast
    /// carries its own deadline, so overlapping ones expire independently.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        let now = Instant::now();
        self.toasts.retain(|toast| toast.expires > now);
        if let Some((_, until)) = self.copied {
            if until <= now {
                self.copied = None;
            }
        }
    }

    pub fn spinner(&self) -> char {
        SPINNER[self.ticks as usize % SPINNER.len()]
    }

    pub fn select_next(&mut self) {
        if !self.cards.is_empty() && self.selected < self.cards.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_card(&self) -> Option<&ResultCard> {
        self.cards.get(self.selected)
    }

    /// Start the copy action for the selected card: flag it as copied and
    /// return the payload the caller should hand to the clipboard task.
    pub fn copy_selected(&mut self) -> Option<String> {
        let card = self.cards.get(self.selected)?;
        let payload = card.copy_payload().to_string();
        self.copied = Some((card.index, Instant::now() + COPY_FLASH));
        Some(payload)
    }

    pub fn copy_failed(&mut self, message: String) {
        self.copied = None;
        self.notify(format!("copy failed: {message}"), ToastKind::Error);
    }

    pub fn is_copied(&self, index: usize) -> bool {
        matches!(self.copied, Some((i, _)) if i == index)
    }

    /// Open the selected card's original post in the browser.
    pub fn open_selected(&mut self) {
        let Some(card) = self.cards.get(self.selected) else {
            return;
        };
        if card.original_url.is_empty() {
            return;
        }
        if let Err(err) = open::that(&card.original_url) {
            self.notify(format!("failed to open URL: {err}"), ToastKind::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormDefaults;
    use crate::model::{RewriteResult, Scores};

    fn app_with_form() -> App {
        let mut app = App::new(&FormDefaults::default());
        app.form.accounts = "alice".to_string();
        app
    }

    fn response(n: usize) -> GenerationResponse {
        let results = (0..n)
            .map(|i| RewriteResult {
                original_url: format!("https://x.com/a/status/{i}"),
                original_text: format!("original {i}"),
                original_likes: 100,
                original_retweets: 10,
                original_replies: 1,
                rewritten_text: format!("rewrite {i}"),
                call_to_action: None,
                thread: Vec::new(),
                image_url: None,
                scores: Some(Scores::default()),
            })
            .collect();
        GenerationResponse {
            results,
            summary: GenerationSummary {
                total_collected: 40,
                total_filtered: 12,
                total_analyzed: 8,
                total_rewritten: n as u64,
                cost: None,
            },
        }
    }

    #[test]
    fn test_submit_enters_submitting_and_clears_view() {
        let mut app = app_with_form();
        app.finish(Ok(response(2)));
        assert_eq!(app.cards.len(), 2);

        let request = app.submit().unwrap();
        assert_eq!(request.accounts, vec!["alice"]);
        assert!(app.is_submitting());
        assert!(app.cards.is_empty());
        assert!(app.summary.is_none());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_submit_is_single_flight() {
        let mut app = app_with_form();
        assert!(app.submit().is_some());
        assert!(app.submit().is_none());
    }

    #[test]
    fn test_invalid_form_never_enters_submitting() {
        let mut app = App::new(&FormDefaults::default());
        assert!(app.submit().is_none());
        assert!(!app.is_submitting());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_finish_success_builds_cards_in_order_and_idles() {
        let mut app = app_with_form();
        app.submit().unwrap();
        app.finish(Ok(response(3)));

        assert!(!app.is_submitting());
        assert_eq!(app.cards.len(), 3);
        for (i, card) in app.cards.iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.rewritten_text, format!("rewrite {i}"));
        }
        assert!(app.summary.is_some());
        assert!(app.status.is_none());
        assert_eq!(app.toasts.last().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_finish_failure_sets_status_and_idles() {
        let mut app = app_with_form();
        app.submit().unwrap();
        app.finish(Err(GenerateError::http(
            500,
            Some("quota exceeded".to_string()),
        )));

        assert!(!app.is_submitting());
        assert!(app.cards.is_empty());
        assert_eq!(app.status.as_deref(), Some("Error: quota exceeded"));
        let toast = app.toasts.last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "quota exceeded");
    }

    #[test]
    fn test_resubmit_allowed_after_failure() {
        let mut app = app_with_form();
        app.submit().unwrap();
        app.finish(Err(GenerateError::Transport("connection refused".into())));
        assert!(app.submit().is_some());
    }

    #[test]
    fn test_copy_selected_yields_kth_payload() {
        let mut app = app_with_form();
        app.finish(Ok(response(3)));
        app.select_next();
        app.select_next();

        let payload = app.copy_selected().unwrap();
        assert_eq!(payload, "rewrite 2");
        assert!(app.is_copied(2));
        assert!(!app.is_copied(0));
    }

    #[test]
    fn test_copy_flash_survives_notifications_and_expires() {
        let mut app = app_with_form();
        app.finish(Ok(response(1)));
        app.copy_selected().unwrap();
        app.notify("unrelated".to_string(), ToastKind::Success);
        assert!(app.is_copied(0));

        // Force the deadline into the past, then tick.
        app.copied = Some((0, Instant::now() - Duration::from_millis(1)));
        app.tick();
        assert!(!app.is_copied(0));
    }

    #[test]
    fn test_expired_toasts_are_pruned_independently() {
        let mut app = app_with_form();
        app.notify("old".to_string(), ToastKind::Error);
        app.toasts[0].expires = Instant::now() - Duration::from_millis(1);
        app.notify("new".to_string(), ToastKind::Success);
        app.tick();
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "new");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app_with_form();
        app.finish(Ok(response(2)));
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }
}
