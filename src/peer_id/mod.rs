//! Bijective Peer ID System
//!
//! This module provides self-describing peer identifiers that are:
//! - Bijective: namespace and numeric id can always be recovered from the scalar
//! - Deterministic: the same (namespace, id) pair always packs to the same value
//! - Cache-friendly: a bare i64 key for O(1) lookups, no registry required
//!
//! The packed form is the persistence and wire boundary; the [`Peer`] enum in
//! [`peer`] is the typed view for logic that wants the compiler to track kinds.

pub mod peer;

pub use peer::Peer;

use crate::error::PeerIdError;
use std::fmt;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Width mask of the namespace tag (3 bits, values 0-7)
pub const NAMESPACE_MASK: u8 = 0x7;

/// Bit position of the namespace tag within the packed scalar
const NAMESPACE_SHIFT: u32 = 32;

/// Bit position of the high id bits, directly above the tag
const ID_HIGH_SHIFT: u32 = 35;

/// Mask selecting the low 32 bits of a numeric id
const ID_LOW_MASK: u64 = 0xffff_ffff;

/// Peer kind tag embedded in every packed identifier
///
/// Discriminants are part of the storage format and must never be renumbered.
/// Tag 7 is reserved: raw integers from external sources can still carry it,
/// so it is an explicit variant rather than a parse failure.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Namespace {
    Empty = 0,
    User = 1,
    Group = 2,
    Channel = 3,
    SecretChat = 4,
    AdminLog = 5,
    Ad = 6,
    Reserved = 7,
}

impl Namespace {
    /// Total constructor from a raw tag
    ///
    /// Out-of-range values are masked with `& 0x7`, so they alias into range
    /// instead of failing. Use `Namespace::try_from` to reject them instead.
    pub const fn from_tag(tag: u8) -> Self {
        match tag & NAMESPACE_MASK {
            0 => Namespace::Empty,
            1 => Namespace::User,
            2 => Namespace::Group,
            3 => Namespace::Channel,
            4 => Namespace::SecretChat,
            5 => Namespace::AdminLog,
            6 => Namespace::Ad,
            _ => Namespace::Reserved,
        }
    }

    /// Raw 3-bit tag value
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Namespace::Empty => "empty",
            Namespace::User => "user",
            Namespace::Group => "group",
            Namespace::Channel => "channel",
            Namespace::SecretChat => "secret_chat",
            Namespace::AdminLog => "admin_log",
            Namespace::Ad => "ad",
            Namespace::Reserved => "reserved",
        };
        f.write_str(name)
    }
}

/// Packed peer identifier (64 bits)
///
/// Opaque to callers; internally a namespace tag at bits 32-34 with the
/// numeric id split around it (32 low bits below, 29 high bits above).
/// Serializes transparently as the raw i64 so stored and transmitted
/// identifiers stay bit-compatible.
#[repr(transparent)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    AsBytes,
    FromBytes,
    FromZeroes,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct PeerId(i64);

impl PeerId {
    /// The empty peer (namespace 0, id 0)
    pub const EMPTY: PeerId = PeerId(0);

    /// Largest numeric id that packs without losing bits
    pub const MAX_NUMERIC_ID: i64 = (1 << 60) - 1;

    /// Smallest numeric id that packs without losing bits
    pub const MIN_NUMERIC_ID: i64 = -(1 << 60);

    /// Pack a namespace and numeric id into a single scalar
    ///
    /// Total: ids beyond the 61-bit reconstructible range lose their top
    /// bits silently. That truncation is part of the legacy contract; use
    /// [`PeerId::try_new`] where it should be an error instead.
    pub const fn new(namespace: Namespace, numeric_id: i64) -> Self {
        let id_bits = numeric_id as u64;
        let id_low = id_bits & ID_LOW_MASK;
        let id_high = (id_bits >> 32) & ID_LOW_MASK;

        let data = ((namespace.tag() as u64) << NAMESPACE_SHIFT)
            | (id_high << ID_HIGH_SHIFT)
            | id_low;

        PeerId(data as i64)
    }

    /// Checked packing
    ///
    /// Rejects numeric ids outside `MIN_NUMERIC_ID..=MAX_NUMERIC_ID`, the
    /// range that survives a round trip, instead of truncating.
    pub fn try_new(namespace: Namespace, numeric_id: i64) -> Result<Self, PeerIdError> {
        if numeric_id < Self::MIN_NUMERIC_ID || numeric_id > Self::MAX_NUMERIC_ID {
            return Err(PeerIdError::NumericIdOverflow(numeric_id));
        }
        Ok(Self::new(namespace, numeric_id))
    }

    /// Reinterpret a raw stored/transmitted integer as a peer id
    pub const fn from_raw(raw: i64) -> Self {
        PeerId(raw)
    }

    /// The raw packed integer, for persistence and wire boundaries
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    /// Extract the namespace tag
    ///
    /// Total over all 64-bit inputs; tag 7 decodes to [`Namespace::Reserved`],
    /// which callers must treat as "not a known kind".
    pub const fn namespace(self) -> Namespace {
        Namespace::from_tag((((self.0 as u64) >> NAMESPACE_SHIFT) & NAMESPACE_MASK as u64) as u8)
    }

    /// Reassemble the numeric identifier from its split halves
    ///
    /// The 29 stored high bits are shifted back with an arithmetic shift,
    /// sign-extending them so negative identifiers survive the round trip.
    pub const fn numeric_id(self) -> i64 {
        let id_high = (self.0 >> ID_HIGH_SHIFT) << 32;
        let id_low = ((self.0 as u64) & ID_LOW_MASK) as i64;
        id_high | id_low
    }

    /// Numeric id if this peer is in the given namespace
    ///
    /// Unlike the legacy kind-specific extractors this never conflates
    /// "id 0 of this kind" with "not this kind".
    pub const fn numeric_id_in(self, namespace: Namespace) -> Option<i64> {
        if self.namespace().tag() == namespace.tag() {
            Some(self.numeric_id())
        } else {
            None
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self.namespace(), Namespace::Empty)
    }

    pub const fn is_user(self) -> bool {
        matches!(self.namespace(), Namespace::User)
    }

    pub const fn is_group(self) -> bool {
        matches!(self.namespace(), Namespace::Group)
    }

    pub const fn is_channel(self) -> bool {
        matches!(self.namespace(), Namespace::Channel)
    }

    pub const fn is_secret_chat(self) -> bool {
        matches!(self.namespace(), Namespace::SecretChat)
    }

    pub const fn is_admin_log(self) -> bool {
        matches!(self.namespace(), Namespace::AdminLog)
    }

    pub const fn is_ad(self) -> bool {
        matches!(self.namespace(), Namespace::Ad)
    }

    /// Peer id for a cloud user
    pub const fn from_user_id(user_id: i64) -> Self {
        Self::new(Namespace::User, user_id)
    }

    /// Peer id for a legacy group
    pub const fn from_group_id(group_id: i64) -> Self {
        Self::new(Namespace::Group, group_id)
    }

    /// Peer id for a channel or supergroup
    pub const fn from_channel_id(channel_id: i64) -> Self {
        Self::new(Namespace::Channel, channel_id)
    }

    /// Peer id for a secret chat
    pub const fn from_secret_chat_id(secret_chat_id: i64) -> Self {
        Self::new(Namespace::SecretChat, secret_chat_id)
    }

    /// Peer id for an admin log stream
    pub const fn from_admin_log_id(admin_log_id: i64) -> Self {
        Self::new(Namespace::AdminLog, admin_log_id)
    }

    /// Peer id for an ad placeholder
    pub const fn from_ad_id(ad_id: i64) -> Self {
        Self::new(Namespace::Ad, ad_id)
    }

    /// User id, or 0 when this is not a user peer
    ///
    /// The zero sentinel is ambiguous with a genuine id of 0. Existing call
    /// sites depend on that behavior; check [`PeerId::is_user`] first or use
    /// [`PeerId::numeric_id_in`] where the distinction matters.
    pub const fn user_id(self) -> i64 {
        if self.is_user() {
            self.numeric_id()
        } else {
            0
        }
    }

    /// Group id, or 0 when this is not a group peer
    pub const fn group_id(self) -> i64 {
        if self.is_group() {
            self.numeric_id()
        } else {
            0
        }
    }

    /// Channel id, or 0 when this is not a channel peer
    pub const fn channel_id(self) -> i64 {
        if self.is_channel() {
            self.numeric_id()
        } else {
            0
        }
    }

    /// Secret chat id, or 0 when this is not a secret chat peer
    pub const fn secret_chat_id(self) -> i64 {
        if self.is_secret_chat() {
            self.numeric_id()
        } else {
            0
        }
    }

    /// Admin log id, or 0 when this is not an admin log peer
    pub const fn admin_log_id(self) -> i64 {
        if self.is_admin_log() {
            self.numeric_id()
        } else {
            0
        }
    }

    /// Ad id, or 0 when this is not an ad peer
    pub const fn ad_id(self) -> i64 {
        if self.is_ad() {
            self.numeric_id()
        } else {
            0
        }
    }
}

impl From<i64> for PeerId {
    fn from(raw: i64) -> Self {
        PeerId(raw)
    }
}

impl From<PeerId> for i64 {
    fn from(id: PeerId) -> Self {
        id.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace(), self.numeric_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_position() {
        // Namespace occupies bits 32-34 of the packed value
        let id = PeerId::new(Namespace::User, 12345);
        let raw = id.to_raw() as u64;
        assert_eq!((raw >> 32) & 0x7, Namespace::User.tag() as u64);
        assert_eq!(raw & 0xffff_ffff, 12345);
    }

    #[test]
    fn test_tag_masking_aliases() {
        assert_eq!(Namespace::from_tag(0x9), Namespace::User);
        assert_eq!(Namespace::from_tag(0xff), Namespace::Reserved);
        assert_eq!(Namespace::from_tag(7), Namespace::Reserved);
    }

    #[test]
    fn test_strict_tag_validation() {
        assert_eq!(Namespace::try_from(3u8), Ok(Namespace::Channel));
        assert!(Namespace::try_from(8u8).is_err());
    }

    #[test]
    fn test_high_bit_truncation() {
        // Bits 61-63 of the numeric id do not fit the 29-bit high field
        let id = PeerId::new(Namespace::User, 1 << 61);
        assert_eq!(id.numeric_id(), 0);
        assert!(id.is_user());

        let kept = (1 << 59) | 12345;
        assert_eq!(PeerId::new(Namespace::User, kept).numeric_id(), kept);
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(PeerId::try_new(Namespace::Group, PeerId::MAX_NUMERIC_ID).is_ok());
        assert!(PeerId::try_new(Namespace::Group, PeerId::MIN_NUMERIC_ID).is_ok());
        assert_eq!(
            PeerId::try_new(Namespace::Group, PeerId::MAX_NUMERIC_ID + 1),
            Err(PeerIdError::NumericIdOverflow(PeerId::MAX_NUMERIC_ID + 1))
        );
        assert_eq!(
            PeerId::try_new(Namespace::Group, PeerId::MIN_NUMERIC_ID - 1),
            Err(PeerIdError::NumericIdOverflow(PeerId::MIN_NUMERIC_ID - 1))
        );
    }

    #[test]
    fn test_negative_id_sign_extension() {
        let id = PeerId::from_secret_chat_id(-7);
        assert!(id.is_secret_chat());
        assert_eq!(id.numeric_id(), -7);
        assert_eq!(id.secret_chat_id(), -7);
    }

    #[test]
    fn test_empty_and_default() {
        assert_eq!(PeerId::default(), PeerId::EMPTY);
        assert!(PeerId::EMPTY.is_empty());
        assert_eq!(PeerId::EMPTY.to_raw(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(PeerId::from_user_id(42).to_string(), "user:42");
        assert_eq!(PeerId::from_secret_chat_id(-7).to_string(), "secret_chat:-7");
    }
}
