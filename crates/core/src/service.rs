//! Conversion service seam.

use async_trait::async_trait;

use crate::error::ConversionResult;
use crate::wire::ConvertRequest;

/// Performs a single conversion round trip.
///
/// Implementations issue exactly one request per call: no retry, no timeout,
/// no cancellation. The outcome resolves exactly once.
#[async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, request: &ConvertRequest) -> ConversionResult<String>;
}

#[async_trait]
impl<T> ConversionService for std::sync::Arc<T>
where
    T: ConversionService + ?Sized,
{
    async fn convert(&self, request: &ConvertRequest) -> ConversionResult<String> {
        (**self).convert(request).await
    }
}
