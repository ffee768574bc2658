//! The world's single logical writer. Sessions never touch world state
//! directly; they post closures here, and this module runs them one at a
//! time on one `tokio` task — an explicit object rather than a
//! process-wide singleton, so tests can spin up as many independent
//! worlds as they like.

use std::collections::HashMap;
use std::future::poll_fn;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio_util::time::delay_queue::Key;
use tokio_util::time::DelayQueue;

type Task<W> = Box<dyn FnOnce(&mut W) + Send>;

/// Handle to a task scheduled via [`DispatcherHandle::schedule_after`].
/// Generation-based so a handle for an already-fired (or cancelled) task
/// is distinguishable from a live one — cancelling it again is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

enum Command<W> {
    Immediate(Task<W>),
    Expiring { deadline: Instant, task: Task<W> },
    ScheduleAfter { handle: TimerHandle, delay: Duration, task: Task<W> },
    CancelTimer(TimerHandle),
}

/// A cheap, cloneable capability for submitting work to one dispatcher.
/// Passed into session construction rather than reached through a
/// global — see the root crate's `DESIGN.md` for why the ECS-singleton
/// pattern this replaces was dropped.
pub struct DispatcherHandle<W> {
    tx: mpsc::UnboundedSender<Command<W>>,
    next_handle: Arc<AtomicU64>,
}

impl<W> Clone for DispatcherHandle<W> {
    fn clone(&self) -> Self {
        DispatcherHandle {
            tx: self.tx.clone(),
            next_handle: Arc::clone(&self.next_handle),
        }
    }
}

impl<W: Send + 'static> DispatcherHandle<W> {
    /// Enqueues `task` for immediate (FIFO) execution.
    pub fn post(&self, task: impl FnOnce(&mut W) + Send + 'static) {
        let _ = self.tx.send(Command::Immediate(Box::new(task)));
    }

    /// Enqueues `task`, but it is silently discarded if it's still sitting
    /// in the queue past `deadline` by the time the dispatcher pops it —
    /// for opcodes (look-at, use-item, turn) that shouldn't execute stale
    /// after a head-of-line stall.
    pub fn post_expiring(&self, deadline: Instant, task: impl FnOnce(&mut W) + Send + 'static) {
        let _ = self.tx.send(Command::Expiring { deadline, task: Box::new(task) });
    }

    /// Schedules `task` to run once, `delay` from now, on the dispatcher's
    /// timer wheel. Returns a handle usable with [`cancel`](Self::cancel).
    pub fn schedule_after(&self, delay: Duration, task: impl FnOnce(&mut W) + Send + 'static) -> TimerHandle {
        let handle = TimerHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let _ = self.tx.send(Command::ScheduleAfter {
            handle,
            delay,
            task: Box::new(task),
        });
        handle
    }

    /// Cancels a previously scheduled task. A no-op if it already fired or
    /// was already cancelled.
    pub fn cancel(&self, handle: TimerHandle) {
        let _ = self.tx.send(Command::CancelTimer(handle));
    }
}

struct Dispatcher<W> {
    world: W,
    rx: mpsc::UnboundedReceiver<Command<W>>,
    delay_queue: DelayQueue<Task<W>>,
    pending_timers: HashMap<u64, Key>,
}

impl<W: Send + 'static> Dispatcher<W> {
    async fn run(mut self) {
        loop {
            tokio::select! {
                biased;

                cmd = self.rx.recv() => {
                    match cmd {
                        Some(Command::Immediate(task)) => task(&mut self.world),
                        Some(Command::Expiring { deadline, task }) => {
                            if Instant::now() <= deadline {
                                task(&mut self.world);
                            } else {
                                tracing::debug!("dropping expiring task queued past its deadline");
                            }
                        }
                        Some(Command::ScheduleAfter { handle, delay, task }) => {
                            let key = self.delay_queue.insert(task, delay);
                            self.pending_timers.insert(handle.0, key);
                        }
                        Some(Command::CancelTimer(handle)) => {
                            if let Some(key) = self.pending_timers.remove(&handle.0) {
                                self.delay_queue.try_remove(&key);
                            }
                        }
                        None => return,
                    }
                }

                expired = poll_fn(|cx| self.delay_queue.poll_expired(cx)), if !self.delay_queue.is_empty() => {
                    if let Some(Ok(expired)) = expired {
                        let task = expired.into_inner();
                        task(&mut self.world);
                    }
                }
            }
        }
    }
}

/// Spawns the dispatcher task owning `world` and returns a handle to it.
pub fn spawn<W: Send + 'static>(world: W) -> DispatcherHandle<W> {
    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher {
        world,
        rx,
        delay_queue: DelayQueue::new(),
        pending_timers: HashMap::new(),
    };
    tokio::spawn(dispatcher.run());
    DispatcherHandle { tx, next_handle: Arc::new(AtomicU64::new(0)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn immediate_tasks_run_in_order() {
        let handle = spawn(Vec::<u32>::new());
        let (done_tx, done_rx) = oneshot::channel();

        handle.post(|w| w.push(1));
        handle.post(|w| w.push(2));
        handle.post(move |w| {
            w.push(3);
            let _ = done_tx.send(w.clone());
        });

        let result = done_rx.await.unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_task_fires_after_delay() {
        let handle = spawn(0u32);
        let (tx, rx) = oneshot::channel();

        handle.schedule_after(Duration::from_secs(1), move |w| {
            *w = 42;
            let _ = tx.send(());
        });

        tokio::time::advance(Duration::from_secs(2)).await;
        rx.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let handle = spawn(0u32);
        let (tx, rx) = oneshot::channel::<()>();

        let timer = handle.schedule_after(Duration::from_secs(1), move |_| {
            let _ = tx.send(());
        });
        handle.cancel(timer);

        tokio::time::advance(Duration::from_secs(5)).await;

        // Post an immediate task afterward and wait on it, to give the
        // cancelled timer every opportunity to have fired first.
        let (done_tx, done_rx) = oneshot::channel();
        handle.post(move |_| {
            let _ = done_tx.send(());
        });
        done_rx.await.unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn expiring_task_is_dropped_once_past_deadline() {
        let handle = spawn(Vec::<u32>::new());
        let deadline = Instant::now() - Duration::from_secs(1);

        handle.post_expiring(deadline, |w| w.push(99));

        let (done_tx, done_rx) = oneshot::channel();
        handle.post(move |w| {
            let _ = done_tx.send(w.clone());
        });

        let result = done_rx.await.unwrap();
        assert!(result.is_empty());
    }
}
