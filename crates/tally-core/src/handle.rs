//! Client handle: the only way to reach the counter.

use tokio::sync::{mpsc, oneshot};

use crate::domain::{Request, TallyError};

/// Cloneable client for the counter owner.
///
/// Every method is a message send; nothing here reads or writes the counter
/// directly. Sends suspend while the channel is full, which with capacity 1
/// gives rendezvous-style hand-off to the owner.
#[derive(Clone)]
pub struct CounterHandle {
    tx: mpsc::Sender<Request>,
}

impl CounterHandle {
    pub(crate) fn new(tx: mpsc::Sender<Request>) -> Self {
        Self { tx }
    }

    /// Counter += 1.
    pub async fn increment(&self) -> Result<(), TallyError> {
        self.send(Request::Increment).await
    }

    /// Counter -= 1.
    pub async fn decrement(&self) -> Result<(), TallyError> {
        self.send(Request::Decrement).await
    }

    /// Read the counter as of this request's position in the owner's
    /// dequeue order.
    ///
    /// The value reflects every mutation dequeued before it and none after.
    /// Whether in-flight mutations from still-running producers land before
    /// or after the read is decided by channel arrival order, not by this
    /// call. A caller that wants the settled value must join its producers
    /// first; see [`ProducerGroup::join`](crate::producer::ProducerGroup::join).
    pub async fn get(&self) -> Result<i64, TallyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Request::Get { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| TallyError::ReplyDropped)
    }

    /// Stop the owner. Requests already queued ahead of this one are still
    /// processed; anything sent afterwards fails with
    /// [`TallyError::OwnerStopped`].
    pub async fn quit(&self) -> Result<(), TallyError> {
        self.send(Request::Quit).await
    }

    async fn send(&self, req: Request) -> Result<(), TallyError> {
        self.tx
            .send(req)
            .await
            .map_err(|_| TallyError::OwnerStopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owner::CounterOwner;

    #[tokio::test]
    async fn handles_share_one_counter() {
        let (handle, _owner) = CounterOwner::spawn(4);
        let other = handle.clone();

        handle.increment().await.unwrap();
        other.increment().await.unwrap();

        assert_eq!(handle.get().await.unwrap(), 2);
        assert_eq!(other.get().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn get_racing_quit_never_returns_a_value() {
        // With slack in the channel the Get may be accepted before the owner
        // dequeues the Quit ahead of it, or the channel may already be
        // closed. Both must surface as errors, never a stale value.
        let (handle, _owner) = CounterOwner::spawn(2);
        handle.quit().await.unwrap();

        let err = handle.get().await.unwrap_err();
        assert!(matches!(
            err,
            TallyError::OwnerStopped | TallyError::ReplyDropped
        ));
    }
}
