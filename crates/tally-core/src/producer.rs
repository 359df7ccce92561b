//! Producer tasks: concurrent clients that only mutate.

use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::RunConfig;
use crate::domain::TallyError;
use crate::handle::CounterHandle;

/// What a producer sends. Each producer is single-purpose: it either only
/// increments or only decrements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerKind {
    Increment,
    Decrement,
}

/// Handles on a set of spawned producer tasks.
///
/// `join()` is the completion barrier: a read issued after it returns Ok is
/// guaranteed to observe every producer's full quota. An out-of-band signal
/// (a timer, operator input) guarantees no such thing.
pub struct ProducerGroup {
    joins: Vec<JoinHandle<Result<(), TallyError>>>,
}

impl ProducerGroup {
    /// Spawn `incrementers + decrementers` producer tasks.
    ///
    /// Each task gets its own clone of the client handle; their sends
    /// interleave arbitrarily at the request channel. Any interleaving is
    /// fine: increment and decrement commute, so the settled value only
    /// depends on the counts.
    pub fn spawn(handle: &CounterHandle, config: &RunConfig) -> Self {
        let mut joins = Vec::with_capacity(config.producer_count());

        for producer_id in 0..config.incrementers {
            joins.push(spawn_producer(
                producer_id,
                ProducerKind::Increment,
                config.ops_per_producer,
                handle.clone(),
            ));
        }
        for i in 0..config.decrementers {
            joins.push(spawn_producer(
                config.incrementers + i,
                ProducerKind::Decrement,
                config.ops_per_producer,
                handle.clone(),
            ));
        }

        Self { joins }
    }

    /// Number of producers in the group.
    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    /// Wait for every producer to finish its quota.
    ///
    /// Once this returns Ok, every mutation is in the request channel ahead
    /// of anything sent later, so a subsequent `get` reads the settled
    /// value. Fails with the first producer error if the owner went away
    /// mid-run.
    pub async fn join(self) -> Result<(), TallyError> {
        for join in self.joins {
            join.await.expect("producer task panicked")?;
        }
        Ok(())
    }
}

fn spawn_producer(
    producer_id: usize,
    kind: ProducerKind,
    ops: u64,
    handle: CounterHandle,
) -> JoinHandle<Result<(), TallyError>> {
    tokio::spawn(async move {
        for _ in 0..ops {
            match kind {
                ProducerKind::Increment => handle.increment().await?,
                ProducerKind::Decrement => handle.decrement().await?,
            }
        }
        debug!(producer_id, ?kind, ops, "producer finished");
        Ok(())
    })
}
