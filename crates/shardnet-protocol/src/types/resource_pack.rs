//! Resource and behavior pack catalogue entries.

use shardnet_wire::{Reader, Writer};
use uuid::Uuid;

use crate::common::{read_uuid, write_uuid, NetString};
use crate::error::CodecError;
use crate::version::ProtocolVersion;

/// One downloadable resource pack advertised to the client.
///
/// The pack id travels as a binary UUID from [`ProtocolVersion::V150`]
/// and as its hyphenated string rendering before that. The addon flag
/// exists from [`ProtocolVersion::V120`] and the CDN URL from
/// [`ProtocolVersion::V140`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePackEntry {
    pub pack_id: Uuid,
    pub version: NetString,
    pub size_bytes: u64,
    pub encryption_key: NetString,
    pub sub_pack_name: NetString,
    pub content_id: NetString,
    pub has_scripts: bool,
    pub is_addon: bool,
    pub rtx_capable: bool,
    pub cdn_url: NetString,
}

impl ResourcePackEntry {
    pub fn read(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let pack_id = if version >= ProtocolVersion::V150 {
            read_uuid(reader)?
        } else {
            let raw = NetString::read(reader)?;
            let text = std::str::from_utf8(raw.as_bytes())
                .map_err(|_| CodecError::malformed("pack id is not valid UTF-8"))?;
            Uuid::parse_str(text)
                .map_err(|e| CodecError::malformed(format!("pack id: {e}")))?
        };
        let pack_version = NetString::read(reader)?;
        let size_bytes = reader.read_u64()?;
        let encryption_key = NetString::read(reader)?;
        let sub_pack_name = NetString::read(reader)?;
        let content_id = NetString::read(reader)?;
        let has_scripts = reader.read_bool()?;
        let is_addon = if version >= ProtocolVersion::V120 {
            reader.read_bool()?
        } else {
            false
        };
        let rtx_capable = reader.read_bool()?;
        let cdn_url = if version >= ProtocolVersion::V140 {
            NetString::read(reader)?
        } else {
            NetString::default()
        };
        Ok(Self {
            pack_id,
            version: pack_version,
            size_bytes,
            encryption_key,
            sub_pack_name,
            content_id,
            has_scripts,
            is_addon,
            rtx_capable,
            cdn_url,
        })
    }

    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        if version >= ProtocolVersion::V150 {
            write_uuid(writer, &self.pack_id);
        } else {
            NetString::from(self.pack_id.to_string()).write(writer);
        }
        self.version.write(writer);
        writer.write_u64(self.size_bytes);
        self.encryption_key.write(writer);
        self.sub_pack_name.write(writer);
        self.content_id.write(writer);
        writer.write_bool(self.has_scripts);
        if version >= ProtocolVersion::V120 {
            writer.write_bool(self.is_addon);
        }
        writer.write_bool(self.rtx_capable);
        if version >= ProtocolVersion::V140 {
            self.cdn_url.write(writer);
        }
    }
}

/// One behavior pack entry. Only on the wire up to
/// [`ProtocolVersion::V120`]; the pack id stayed a plain string for
/// its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorPackEntry {
    pub pack_id: NetString,
    pub version: NetString,
    pub size_bytes: i64,
    pub encryption_key: NetString,
    pub sub_pack_name: NetString,
    pub content_id: NetString,
    pub has_scripts: bool,
    pub is_addon: bool,
}

impl BehaviorPackEntry {
    pub fn read(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            pack_id: NetString::read(reader)?,
            version: NetString::read(reader)?,
            size_bytes: reader.read_i64()?,
            encryption_key: NetString::read(reader)?,
            sub_pack_name: NetString::read(reader)?,
            content_id: NetString::read(reader)?,
            has_scripts: reader.read_bool()?,
            is_addon: if version >= ProtocolVersion::V120 {
                reader.read_bool()?
            } else {
                false
            },
        })
    }

    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        self.pack_id.write(writer);
        self.version.write(writer);
        writer.write_i64(self.size_bytes);
        self.encryption_key.write(writer);
        self.sub_pack_name.write(writer);
        self.content_id.write(writer);
        writer.write_bool(self.has_scripts);
        if version >= ProtocolVersion::V120 {
            writer.write_bool(self.is_addon);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> ResourcePackEntry {
        ResourcePackEntry {
            pack_id: Uuid::from_u64_pair(0x1122_3344_5566_7788, 0x99aa_bbcc_ddee_ff00),
            version: NetString::from("1.2.3"),
            size_bytes: 1_048_576,
            encryption_key: NetString::default(),
            sub_pack_name: NetString::from("sub"),
            content_id: NetString::from("content"),
            has_scripts: false,
            is_addon: true,
            rtx_capable: false,
            cdn_url: NetString::from("https://packs.example/one"),
        }
    }

    #[test]
    fn test_entry_round_trips_with_binary_uuid() {
        let entry = sample_entry();
        let mut writer = Writer::new();
        entry.write(&mut writer, ProtocolVersion::LATEST);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(
            ResourcePackEntry::read(&mut reader, ProtocolVersion::LATEST).unwrap(),
            entry
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn test_entry_round_trips_with_string_uuid_below_v150() {
        let entry = sample_entry();
        let mut writer = Writer::new();
        entry.write(&mut writer, ProtocolVersion::V140);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let decoded =
            ResourcePackEntry::read(&mut reader, ProtocolVersion::V140).unwrap();
        assert_eq!(decoded.pack_id, entry.pack_id);
        assert_eq!(decoded.cdn_url, entry.cdn_url);
    }

    #[test]
    fn test_garbage_string_uuid_is_malformed() {
        let mut writer = Writer::new();
        NetString::from("not-a-uuid").write(&mut writer);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let err = ResourcePackEntry::read(&mut reader, ProtocolVersion::V140).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }

    #[test]
    fn test_behavior_pack_round_trips() {
        let entry = BehaviorPackEntry {
            pack_id: NetString::from("behavior-pack-id"),
            version: NetString::from("0.1.0"),
            size_bytes: -1,
            encryption_key: NetString::default(),
            sub_pack_name: NetString::default(),
            content_id: NetString::default(),
            has_scripts: true,
            is_addon: false,
        };

        let mut writer = Writer::new();
        entry.write(&mut writer, ProtocolVersion::V120);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(
            BehaviorPackEntry::read(&mut reader, ProtocolVersion::V120).unwrap(),
            entry
        );
    }
}
