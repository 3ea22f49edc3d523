//! `toonmaker-core`: client-side building blocks for the TOON converter.
//!
//! This crate contains **pure client logic** (no runtime, no I/O):
//! - the language selection and wire DTOs exchanged with the conversion backend
//! - response interpretation into a result-or-error outcome
//! - the converter state container and its transitions
//! - the `ConversionService` seam implemented by transport crates
//!
//! It compiles for both native targets and `wasm32`.

use std::time::Duration;

pub mod error;
pub mod language;
pub mod service;
pub mod shortcut;
pub mod state;
pub mod wire;

pub use error::{ConversionError, ConversionResult};
pub use language::Language;
pub use service::ConversionService;
pub use shortcut::is_submit_shortcut;
pub use state::{ConverterState, CopyTicket};
pub use wire::{ConvertRequest, ConvertResponse, ErrorBody, interpret_response};

/// Conversion endpoint of the reference deployment.
pub const DEFAULT_CONVERT_ENDPOINT: &str = "http://localhost:5000/convert";

/// How long the "copied" confirmation stays visible.
pub const COPY_CONFIRMATION_WINDOW: Duration = Duration::from_secs(2);

/// Shown when the backend rejects a request without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Conversion failed";

/// Shown when the backend cannot be reached or answers with garbage.
pub const CONNECTIVITY_MESSAGE: &str =
    "Failed to connect to the server. Make sure the backend is running.";
