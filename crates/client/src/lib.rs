//! `toonmaker-client`
//!
//! **Responsibility:** the conversion client: collect a prompt and a language,
//! send one request to the conversion backend, show the result or the error.
//!
//! This crate provides:
//! - `HttpConversionService`: reqwest transport for `POST /convert`
//! - `Converter`: the page controller (state, single in-flight request,
//!   clipboard copy with a cancellable confirmation timer)
//! - `frontend` (wasm32 only): the Leptos page served by `toonmaker-server`
//!
//! The client is a **thin shell** around the conversion backend; the TOON
//! transformation itself happens remotely.

#[cfg(not(target_arch = "wasm32"))]
pub mod clipboard;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod converter;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
#[cfg(not(target_arch = "wasm32"))]
pub use config::{ClientConfig, ENDPOINT_ENV};
#[cfg(not(target_arch = "wasm32"))]
pub use converter::Converter;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpConversionService;

pub use toonmaker_core::{ConversionError, ConverterState, Language};
