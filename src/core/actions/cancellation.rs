/// How many pixels, points or segments run between two cancellation polls.
pub const CANCEL_CHECK_INTERVAL: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Polls `cancel` on every [`CANCEL_CHECK_INTERVAL`]th step, starting with step 0.
#[inline]
pub fn poll_every_interval<C: CancelToken + ?Sized>(step: usize, cancel: &C) -> Result<(), Cancelled> {
    if step % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
        return Err(Cancelled);
    }

    Ok(())
}
