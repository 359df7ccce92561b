//! Owner loop: the single task allowed to touch the counter.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::domain::{OwnerState, Request};
use crate::handle::CounterHandle;

/// Handle on a spawned owner task.
///
/// Design intent:
/// - The counter lives on the owner task's stack. No reference to it exists
///   anywhere else, so the request channel is the only way to observe or
///   change it, and its dequeue order is the only serialization point.
/// - No lock guards the counter and none may be added; exclusive ownership
///   is the entire synchronization story.
/// - `state()` observes the lifecycle through a watch channel without going
///   near the counter.
pub struct CounterOwner {
    state_rx: watch::Receiver<OwnerState>,
    join: JoinHandle<i64>,
}

impl CounterOwner {
    /// Spawn the owner task.
    ///
    /// Returns the cloneable client handle and this owner handle. `capacity`
    /// is the request channel capacity; see
    /// [`RunConfig::channel_capacity`](crate::config::RunConfig).
    pub fn spawn(capacity: usize) -> (CounterHandle, CounterOwner) {
        let (tx, rx) = mpsc::channel(capacity);
        let (state_tx, state_rx) = watch::channel(OwnerState::Running);

        let join = tokio::spawn(owner_loop(rx, state_tx));

        (CounterHandle::new(tx), CounterOwner { state_rx, join })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OwnerState {
        *self.state_rx.borrow()
    }

    /// Wait until the owner reaches its terminal state.
    ///
    /// Once this returns, the request channel is closed and every further
    /// send fails.
    pub async fn stopped(&mut self) {
        // error here means the owner task died without publishing Stopped;
        // callers will see it on join()
        let _ = self.state_rx.wait_for(|s| s.is_terminal()).await;
    }

    /// Wait for the owner task and return the counter's final value.
    pub async fn join(self) -> i64 {
        self.join.await.expect("owner task panicked")
    }
}

/// The loop itself. Strictly sequential: one request per iteration, in
/// channel dequeue order, suspending while the channel is empty.
async fn owner_loop(mut rx: mpsc::Receiver<Request>, state_tx: watch::Sender<OwnerState>) -> i64 {
    let mut value: i64 = 0;
    debug!("counter owner started");

    // recv() が None を返すのは全ハンドルが drop された時。Quit と同じ扱い
    while let Some(req) = rx.recv().await {
        trace!(kind = req.kind(), "request dequeued");
        match req {
            Request::Increment => value += 1,
            Request::Decrement => value -= 1,
            Request::Get { reply } => {
                // a caller that stopped waiting is its own problem
                let _ = reply.send(value);
            }
            Request::Quit => break,
        }
    }

    // Close the channel before publishing Stopped, so anyone who has
    // observed Stopped can rely on sends failing.
    drop(rx);
    let _ = state_tx.send(OwnerState::Stopped);

    debug!(value, "counter owner stopped");
    value
}
