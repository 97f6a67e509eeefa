use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::MetadataError;

/// Run `fut` until it completes or `cancel` fires, whichever is first.
///
/// A token that is already cancelled wins without polling `fut`.
pub async fn with_cancellation<F, T>(cancel: &CancellationToken, fut: F) -> Result<T, MetadataError>
where
    F: Future<Output = Result<T, MetadataError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(MetadataError::Cancelled),
        res = fut => res,
    }
}
