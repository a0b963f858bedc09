//! Bounded waits for collaborator calls.
//!
//! Timeouts are opt-in: with no limit configured every call waits
//! indefinitely, which is the default. When a limit is set, an elapsed
//! wait surfaces as a distinct error kind on the layer that made the call.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures_timer::Delay;
use futures_util::future::{select, Either};

/// A bounded wait expired before the inner future resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub limit: Duration,
}

/// Await `fut`, giving up after `limit` if one is configured.
///
/// `None` awaits unbounded. The inner future is dropped on expiry; no
/// cancellation signal reaches the collaborator.
pub async fn bounded<T, F>(fut: F, limit: Option<Duration>) -> Result<T, Elapsed>
where
    F: Future<Output = T>,
{
    let Some(limit) = limit else {
        return Ok(fut.await);
    };

    let fut = pin!(fut);
    let deadline = pin!(Delay::new(limit));
    match select(fut, deadline).await {
        Either::Left((value, _)) => Ok(value),
        Either::Right(((), _)) => Err(Elapsed { limit }),
    }
}
