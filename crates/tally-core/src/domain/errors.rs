use thiserror::Error;

/// Failure edges of the counter protocol.
///
/// The happy path has no error values at all. Both variants are protocol
/// violations (talking to an owner that has already stopped), surfaced as
/// `Result`s so the caller can tell what happened instead of panicking.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The request channel is closed: the owner dequeued Quit, or its task
    /// is gone. Sending after this point is a caller-discipline bug.
    #[error("counter owner is stopped; request channel is closed")]
    OwnerStopped,

    /// The owner dropped a reply conduit without writing a value. Only
    /// reachable when the owner stops between accepting a Get and
    /// answering it.
    #[error("reply conduit closed before a value was written")]
    ReplyDropped,
}
