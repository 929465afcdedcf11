//! Peer Identifier Codec
//!
//! This crate implements bijective (reversible) peer identifiers for chat
//! systems. A single signed 64-bit scalar multiplexes a 3-bit namespace tag
//! (user, group, channel, secret chat, admin log, ad) with the numeric
//! identifier issued by the backend, so call sites can store, hash, compare
//! and transmit one integer instead of a tagged union.
//!
//! ## Bit layout (from LSB)
//!
//! ```text
//! ┌──────────────────────┬───────────────┬──────────────────────┐
//! │ id high bits (29)    │ namespace (3) │ id low bits (32)     │
//! │ bits 35-63           │ bits 32-34    │ bits 0-31            │
//! └──────────────────────┴───────────────┴──────────────────────┘
//! ```
//!
//! The layout is fixed by contract: identifiers produced here are stored in
//! databases and transmitted between services, so the tag values and bit
//! positions must never change.
//!
//! ## Quick start
//!
//! ```
//! use peer_codec::{Namespace, Peer, PeerId};
//!
//! // Packed scalar surface - cheap to hash, compare and persist
//! let id = PeerId::from_user_id(12345);
//! assert!(id.is_user());
//! assert_eq!(id.user_id(), 12345);
//!
//! // Typed view for new call sites - no zero-sentinel ambiguity
//! match id.unpack() {
//!     Peer::User(n) => assert_eq!(n, 12345),
//!     other => panic!("unexpected peer: {:?}", other),
//! }
//!
//! // Checked construction rejects ids that would silently truncate
//! assert!(PeerId::try_new(Namespace::Channel, 1 << 62).is_err());
//! ```

pub mod error;
pub mod peer_id;

pub use error::PeerIdError;
pub use peer_id::{Namespace, Peer, PeerId, NAMESPACE_MASK};
