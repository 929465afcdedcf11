//! Typed peer view
//!
//! The enum-with-payload counterpart of the packed scalar. Logic that
//! dispatches on peer kind can match on [`Peer`] and let the compiler check
//! exhaustiveness, instead of chaining `is_*` predicates and zero-sentinel
//! extractors. Conversion in both directions is bit-exact against the legacy
//! layout, so the typed view can be adopted call site by call site.

use super::{Namespace, PeerId};

/// Decoded peer identifier, one variant per namespace
///
/// Every variant carries the numeric id, including `Empty` and `Reserved`:
/// raw integers from external sources can combine any tag with any id bits,
/// and the round trip through [`Peer`] must not lose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Peer {
    Empty(i64),
    User(i64),
    Group(i64),
    Channel(i64),
    SecretChat(i64),
    AdminLog(i64),
    Ad(i64),
    Reserved(i64),
}

impl Peer {
    /// Namespace tag this variant corresponds to
    pub const fn namespace(&self) -> Namespace {
        match self {
            Peer::Empty(_) => Namespace::Empty,
            Peer::User(_) => Namespace::User,
            Peer::Group(_) => Namespace::Group,
            Peer::Channel(_) => Namespace::Channel,
            Peer::SecretChat(_) => Namespace::SecretChat,
            Peer::AdminLog(_) => Namespace::AdminLog,
            Peer::Ad(_) => Namespace::Ad,
            Peer::Reserved(_) => Namespace::Reserved,
        }
    }

    /// The carried numeric identifier
    pub const fn numeric_id(&self) -> i64 {
        match *self {
            Peer::Empty(id)
            | Peer::User(id)
            | Peer::Group(id)
            | Peer::Channel(id)
            | Peer::SecretChat(id)
            | Peer::AdminLog(id)
            | Peer::Ad(id)
            | Peer::Reserved(id) => id,
        }
    }

    /// Pack back into the scalar form
    pub const fn pack(self) -> PeerId {
        PeerId::new(self.namespace(), self.numeric_id())
    }
}

impl PeerId {
    /// Decode into the typed view
    pub const fn unpack(self) -> Peer {
        let id = self.numeric_id();
        match self.namespace() {
            Namespace::Empty => Peer::Empty(id),
            Namespace::User => Peer::User(id),
            Namespace::Group => Peer::Group(id),
            Namespace::Channel => Peer::Channel(id),
            Namespace::SecretChat => Peer::SecretChat(id),
            Namespace::AdminLog => Peer::AdminLog(id),
            Namespace::Ad => Peer::Ad(id),
            Namespace::Reserved => Peer::Reserved(id),
        }
    }
}

impl From<PeerId> for Peer {
    fn from(id: PeerId) -> Self {
        id.unpack()
    }
}

impl From<Peer> for PeerId {
    fn from(peer: Peer) -> Self {
        peer.pack()
    }
}
