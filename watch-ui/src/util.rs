use core::fmt::Display;

use log::warn;

use crate::dispatcher::{Deferred, Event};

pub async fn delay_ms(ms: u32) {
    tokio::time::sleep(tokio::time::Duration::from_millis(ms as u64)).await;
}

/// Waits out a deferred request on the host timer and returns the event to
/// feed back into the face. Never blocks the executor.
pub async fn settle(deferred: Deferred) -> Event {
    match deferred {
        Deferred::Refresh { after } => {
            delay_ms(after.to_millis()).await;
            Event::refresh()
        }
    }
}

/// `settle`, then hand the event to `deliver`. A failed delivery is logged
/// and reported as `false`.
pub async fn settle_into<F, E>(deferred: Deferred, deliver: F) -> bool
where
    F: FnOnce(Event) -> Result<(), E>,
    E: Display,
{
    match deliver(settle(deferred).await) {
        Ok(()) => true,
        Err(e) => {
            warn!("refresh lost: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use fugit::MillisDurationU32;
    use tokio::time::{Duration, Instant};

    use super::*;
    use crate::config::SETTLE_DELAY;

    #[tokio::test(start_paused = true)]
    async fn settle_waits_full_delay() {
        let start = Instant::now();
        let event = settle(Deferred::Refresh {
            after: SETTLE_DELAY,
        })
        .await;

        assert_eq!(event, Event::refresh());
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn other_work_runs_while_settling() {
        let pending = tokio::spawn(settle(Deferred::Refresh {
            after: MillisDurationU32::millis(500),
        }));

        delay_ms(100).await;
        assert!(!pending.is_finished());

        assert_eq!(pending.await.unwrap(), Event::refresh());
    }

    #[tokio::test(start_paused = true)]
    async fn delivered_refresh_reports_success() {
        let mut got = None;
        let delivered = settle_into(
            Deferred::Refresh {
                after: SETTLE_DELAY,
            },
            |event| {
                got = Some(event);
                Ok::<(), &str>(())
            },
        )
        .await;

        assert!(delivered);
        assert_eq!(got, Some(Event::refresh()));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_delivery_is_reported() {
        let delivered = settle_into(
            Deferred::Refresh {
                after: MillisDurationU32::millis(10),
            },
            |_| Err("receiver dropped"),
        )
        .await;

        assert!(!delivered);
    }
}
