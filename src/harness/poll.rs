//! Bounded polling for slow conditions.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::error::{Error, Result};

/// Polls `condition` every `interval` until it holds or `deadline` has
/// elapsed since the first check.
///
/// Returns Ok as soon as the condition reports true. Once the deadline
/// passes, fails with `Error::WaitTimeout` carrying both the elapsed
/// time and the deadline — a silent `false` would let callers forget the
/// failure.
pub async fn wait_until<F, Fut>(mut condition: F, interval: Duration, deadline: Duration) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = Instant::now();
    loop {
        if condition().await {
            return Ok(());
        }

        let elapsed = start.elapsed();
        if elapsed >= deadline {
            return Err(Error::WaitTimeout { elapsed, deadline });
        }

        sleep(interval).await;
    }
}
