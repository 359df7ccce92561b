//! Request messages accepted by the counter owner.

use tokio::sync::oneshot;

/// Reply conduit for a [`Request::Get`].
///
/// Created fresh for every read, written at most once by the owner, then
/// dropped. Never reused or pooled.
pub type ReplySender = oneshot::Sender<i64>;

/// One operation on the counter.
///
/// Mutations carry nothing back to the sender; only `Get` has a reply
/// destination. Keeping the sender inside the `Get` variant makes "a reply
/// conduit exists iff the request is a read" a compile-time property instead
/// of a runtime rule.
#[derive(Debug)]
pub enum Request {
    /// Counter += 1.
    Increment,
    /// Counter -= 1.
    Decrement,
    /// Write the current counter value to `reply`.
    Get { reply: ReplySender },
    /// Stop the owner loop. The request channel closes behind it.
    Quit,
}

impl Request {
    /// Does this request change the counter?
    pub fn is_mutation(&self) -> bool {
        matches!(self, Request::Increment | Request::Decrement)
    }

    /// Short name for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Increment => "increment",
            Request::Decrement => "decrement",
            Request::Get { .. } => "get",
            Request::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_are_classified() {
        assert!(Request::Increment.is_mutation());
        assert!(Request::Decrement.is_mutation());
        assert!(!Request::Quit.is_mutation());

        let (reply, _rx) = oneshot::channel();
        assert!(!Request::Get { reply }.is_mutation());
    }

    #[test]
    fn kinds_have_stable_names() {
        assert_eq!(Request::Increment.kind(), "increment");
        assert_eq!(Request::Decrement.kind(), "decrement");
        assert_eq!(Request::Quit.kind(), "quit");

        let (reply, _rx) = oneshot::channel();
        assert_eq!(Request::Get { reply }.kind(), "get");
    }
}
