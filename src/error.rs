//! Error types for peer identifier operations
//!
//! The legacy codec surface is total by design: packing masks and truncates,
//! extraction falls back to sentinels. These errors exist only for the strict
//! entry points that validate external input instead.

use crate::peer_id::Namespace;
use thiserror::Error;

/// Errors from the checked constructors and strict tag validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeerIdError {
    /// Raw tag outside 0-7, rejected by `Namespace::try_from`
    #[error("invalid namespace tag: {0}")]
    UnknownNamespace(#[from] num_enum::TryFromPrimitiveError<Namespace>),

    /// Numeric id outside the 61-bit range that survives a round trip
    #[error("numeric id {0} exceeds the 61-bit reconstructible range")]
    NumericIdOverflow(i64),
}
