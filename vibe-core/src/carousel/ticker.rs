use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::handle::CarouselHandle;

/// Scoped auto-advance timer.
///
/// Ticks the carousel once per `period` (first tick one period after arming)
/// until [`cancel`](AutoAdvance::cancel) is called or the guard is dropped.
/// Once cancellation returns, the carousel is never touched by this timer
/// again.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: CarouselHandle,
    period: Duration,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Arm a ticker. Must be called from within a tokio runtime.
    pub fn spawn(handle: CarouselHandle, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run(handle.clone(), period, cancel.clone()));
        log::debug!("Auto-advance armed every {:?}", period);
        Self {
            handle,
            period,
            cancel,
            task: Some(task),
        }
    }

    /// Current tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// False once the timer has been torn down.
    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    /// Replace the running timer with a fresh one.
    ///
    /// The old timer is fully cancelled before the new one starts, so two
    /// tickers never advance the same carousel.
    pub fn rearm(&mut self, period: Duration) {
        self.teardown();
        let cancel = CancellationToken::new();
        self.task = Some(tokio::spawn(run(
            self.handle.clone(),
            period,
            cancel.clone(),
        )));
        self.cancel = cancel;
        self.period = period;
        log::debug!("Auto-advance re-armed every {:?}", period);
    }

    /// Stop ticking. No tick lands after this returns.
    pub fn cancel(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        self.handle.cancel_under_lock(&self.cancel);
        task.abort();
        log::debug!("Auto-advance cancelled");
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run(handle: CarouselHandle, period: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if cancel.is_cancelled() {
                    break;
                }
                handle.tick_unless_cancelled(&cancel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, DEFAULT_ADVANCE_INTERVAL};
    use tokio::time::sleep;

    fn handle() -> CarouselHandle {
        CarouselHandle::new(Carousel::new(3).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let handle = handle();
        let _ticker = AutoAdvance::spawn(handle.clone(), DEFAULT_ADVANCE_INTERVAL);

        sleep(Duration::from_millis(3400)).await;
        assert_eq!(handle.snapshot().index, 0);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(handle.snapshot().index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_never_runs_two_tickers() {
        let handle = handle();
        let mut ticker = AutoAdvance::spawn(handle.clone(), DEFAULT_ADVANCE_INTERVAL);
        for _ in 0..4 {
            sleep(Duration::from_millis(1000)).await;
            ticker.rearm(DEFAULT_ADVANCE_INTERVAL);
        }
        assert_eq!(handle.snapshot().index, 0);

        sleep(Duration::from_millis(3600)).await;
        assert_eq!(handle.snapshot().index, 1);
        assert!(ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_disarms() {
        let handle = handle();
        let ticker = AutoAdvance::spawn(handle.clone(), Duration::from_millis(100));
        sleep(Duration::from_millis(150)).await;
        assert_eq!(handle.snapshot().index, 1);

        ticker.cancel();
        sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.snapshot().index, 1);
    }
}
