//! The protocol version catalogue and the comparison helpers every
//! message consults when deciding its wire layout.
//!
//! A session negotiates one [`ProtocolVersion`] up front and it never
//! changes afterwards; it is passed into every decode and encode call.
//! Field presence, field width, and whole alternate sub-formats are
//! selected by comparing that version against the named cut-points
//! below — never by sniffing buffer contents.
//!
//! Adding support for a new wire revision means adding one constant
//! here plus the version-gated branches it affects. Message layouts
//! are never duplicated per version.

use std::fmt;

/// A negotiated protocol revision.
///
/// Opaque ordered integer; all policy decisions are closed-interval
/// comparisons (`>=`, `<=`, `<`) against the named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(pub u32);

impl ProtocolVersion {
    /// Oldest revision the codec still speaks.
    pub const V20: Self = Self(20);

    /// Flat camera instruction encoding replaces the tree payload;
    /// the CDN URL table appears in the pack info message.
    pub const V30: Self = Self(30);

    /// Store offers carry a redirect type byte instead of the old
    /// show-all boolean.
    pub const V50: Self = Self(50);

    /// Last revision in which the lectern update carries its
    /// drop-book flag; the field was removed afterwards.
    pub const V60: Self = Self(60);

    /// Pack info gains the has-addons flag.
    pub const V70: Self = Self(70);

    /// Game-type updates gain a 32-bit tick counter.
    pub const V80: Self = Self(80);

    /// Code-builder source messages carry a status byte instead of
    /// the inline source string.
    pub const V100: Self = Self(100);

    /// Camera target instructions; repetition counts on crafting
    /// actions; body slot in armor damage flags; dynamic container
    /// ids in their fixed 32-bit form.
    pub const V120: Self = Self(120);

    /// Container names carry an optional dynamic id.
    pub const V130: Self = Self(130);

    /// CDN URL table removed again; camera entity offset added; the
    /// game-type tick widens to 64 bits.
    pub const V140: Self = Self(140);

    /// Pack info gains world template id and version.
    pub const V150: Self = Self(150);

    /// Item registry entries gain flat numeric id, component flag,
    /// and item version fields.
    pub const V160: Self = Self(160);

    /// HUD element and visibility enums widen from a byte to a
    /// signed varint.
    pub const V170: Self = Self(170);

    /// Biome definitions switch from the legacy tree payload to the
    /// string-table-indexed flat layout.
    pub const V180: Self = Self(180);

    /// Vibrant-visuals disable flag; camera set instructions gain the
    /// ignore-starting-values flag.
    pub const V190: Self = Self(190);

    /// Camera field-of-view instruction added.
    pub const V200: Self = Self(200);

    /// Armor damage switches from bit-flagged fields to a
    /// length-prefixed list of slot/damage pairs.
    pub const V210: Self = Self(210);

    /// Newest revision the codec speaks.
    pub const LATEST: Self = Self::V210;

    /// Oldest revision the codec speaks.
    pub const MIN_SUPPORTED: Self = Self::V20;

    /// Whether this version is inside the supported matrix.
    pub fn is_supported(self) -> bool {
        self >= Self::MIN_SUPPORTED && self <= Self::LATEST
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// An inclusive window of revisions during which a field existed.
///
/// Fields that were introduced and later removed again are gated on a
/// named span instead of a pair of bare comparisons, which keeps the
/// historical matrix auditable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpan {
    /// First revision carrying the field.
    pub since: ProtocolVersion,
    /// Last revision carrying the field.
    pub until: ProtocolVersion,
}

impl VersionSpan {
    pub const fn new(since: ProtocolVersion, until: ProtocolVersion) -> Self {
        Self { since, until }
    }

    /// Whether `version` falls inside this window.
    pub fn contains(self, version: ProtocolVersion) -> bool {
        version >= self.since && version <= self.until
    }
}

// =========================================================================
// Tests
// =========================================================================
