//! Converter page state and its transitions.
//!
//! All mutation goes through the methods below. Transitions that are not
//! allowed in the current state (submit or clear while loading, copy without
//! a result) leave the state untouched and report that nothing happened.

use crate::error::ConversionResult;
use crate::language::Language;
use crate::wire::ConvertRequest;

/// Identifies one armed copy-confirmation window.
///
/// Re-arming the window or clearing the page invalidates older tickets, so a
/// late timer cannot reset a newer confirmation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Ephemeral UI state for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    prompt: String,
    language: Language,
    result: String,
    error: String,
    loading: bool,
    copied: bool,
    copy_generation: u64,
}

impl ConverterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Last successful output; empty when there is none.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Last failure message; empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Whether the convert action is currently enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    /// Whether the clear action is currently enabled.
    pub fn can_clear(&self) -> bool {
        !self.loading
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when the prompt is blank or a
    /// request is already in flight. The prompt is sent exactly as entered.
    pub fn begin_submit(&mut self) -> Option<ConvertRequest> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.result.clear();
        self.error.clear();

        Some(ConvertRequest::new(self.prompt.clone(), self.language))
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Returns `false` (and changes nothing) when no request is in flight.
    pub fn finish_submit(&mut self, outcome: ConversionResult<String>) -> bool {
        if !self.loading {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = result;
                self.error.clear();
            }
            Err(err) => {
                self.result.clear();
                self.error = err.user_message();
            }
        }
        true
    }

    /// Reset prompt, result, error and copy indicator.
    ///
    /// Ignored while loading. The language selection is kept.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }

        self.prompt.clear();
        self.result.clear();
        self.error.clear();
        self.copied = false;
        self.copy_generation += 1;
        true
    }

    /// Show the copy confirmation and arm a new window.
    ///
    /// Returns `None` when there is no result to copy.
    pub fn mark_copied(&mut self) -> Option<CopyTicket> {
        if !self.has_result() {
            return None;
        }

        self.copy_generation += 1;
        self.copied = true;
        Some(CopyTicket(self.copy_generation))
    }

    /// Hide the copy confirmation if `ticket` is still the armed window.
    pub fn expire_copy(&mut self, ticket: CopyTicket) -> bool {
        if !self.copied || ticket.0 != self.copy_generation {
            return false;
        }

        self.copied = false;
        true
    }
}
