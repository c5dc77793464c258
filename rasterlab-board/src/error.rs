use thiserror::Error;

/// Precondition violations surfaced to the host.
///
/// The engine algorithms are total and return empty sets for
/// under-sized inputs; the board reports the violation instead so the
/// host can prompt for more input rather than silently clearing the
/// canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("operation needs at least {needed} input points, got {got}")]
    NotEnoughPoints { needed: usize, got: usize },

    #[error("no clip window is set")]
    MissingWindow,

    #[error("clip window is degenerate: min corner must not exceed max corner")]
    InvalidWindow,

    #[error("region fill needs a non-empty boundary on the board")]
    EmptyBoundary,

    #[error("perspective projection hit the eye plane (z + focal distance = 0)")]
    DegenerateProjection,
}
