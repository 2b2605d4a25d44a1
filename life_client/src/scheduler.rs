// scheduler.rs - Cancellable periodic task that drives step requests

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Fires a callback once per period while started.
///
/// A task handle exists exactly while the scheduler is running, so there
/// is never more than one timer and the tick rate cannot double up.
#[derive(Debug)]
pub struct Scheduler {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Begin ticking on `runtime`. The first tick comes one full period
    /// after the call. Returns `false` (and does nothing) if already running.
    pub fn start<F>(&mut self, runtime: &Handle, mut on_tick: F) -> bool
    where
        F: FnMut() + Send + 'static,
    {
        if self.task.is_some() {
            return false;
        }

        let period = self.period;
        self.task = Some(runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            // A stalled runtime worker fires once on wakeup, not once per missed period
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick();
            }
        }));
        true
    }

    /// Stop ticking. Safe to call when already stopped; returns whether a
    /// running task was actually cancelled.
    pub fn pause(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.pause();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    fn counter(ticks: &Arc<AtomicUsize>) -> impl FnMut() + Send + 'static {
        let ticks = Arc::clone(ticks);
        move || {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new(PERIOD);

        assert!(scheduler.start(&Handle::current(), counter(&ticks)));
        assert!(scheduler.is_running());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0, "no tick before the first period");

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_does_not_double_the_rate() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new(PERIOD);

        assert!(scheduler.start(&Handle::current(), counter(&ticks)));
        assert!(!scheduler.start(&Handle::current(), counter(&ticks)));

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_stops_further_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new(PERIOD);

        scheduler.start(&Handle::current(), counter(&ticks));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        assert!(scheduler.pause());
        assert!(!scheduler.is_running());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_when_paused_is_a_no_op() {
        let mut scheduler = Scheduler::new(PERIOD);
        assert!(!scheduler.pause());
        assert!(!scheduler.pause());
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_pause() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new(PERIOD);

        scheduler.start(&Handle::current(), counter(&ticks));
        scheduler.pause();
        assert!(scheduler.start(&Handle::current(), counter(&ticks)));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }
}
