//! Host-facing controller for the rasterization engine.
//!
//! The engine crates expose pure functions; everything stateful (the
//! current point set, accumulated clicks, the active clip window)
//! lives here behind a [`Board`] that a host UI drives with
//! serializable [`Operation`]s, one at a time.

pub mod board;
pub mod error;
pub mod ops;

pub use board::Board;
pub use error::OpError;
pub use ops::Operation;
