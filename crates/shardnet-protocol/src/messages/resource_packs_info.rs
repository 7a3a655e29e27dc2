//! The pack catalogue sent during login.
//!
//! This message carries the widest historical matrix in the set:
//! behavior packs disappeared after [`ProtocolVersion::V120`], the
//! world template fields arrived at [`ProtocolVersion::V150`], the
//! vibrant-visuals flag at [`ProtocolVersion::V190`], and the CDN URL
//! table existed only inside the [`CDN_URL_SPAN`] window before being
//! folded into the per-pack entries.

use shardnet_wire::{Reader, Writer};
use uuid::Uuid;

use crate::common::{read_uuid, write_uuid, NetString};
use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::types::resource_pack::{BehaviorPackEntry, ResourcePackEntry};
use crate::version::{ProtocolVersion, VersionSpan};

/// Revisions during which the standalone CDN URL table was on the
/// wire. Introduced at V30, removed again at V140.
pub const CDN_URL_SPAN: VersionSpan =
    VersionSpan::new(ProtocolVersion::V30, ProtocolVersion::V130);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePacksInfoPacket {
    /// Forces the client to accept the packs or disconnect.
    pub must_accept: bool,
    /// Only on the wire from [`ProtocolVersion::V70`].
    pub has_addons: bool,
    pub has_scripts: bool,
    /// Only on the wire up to [`ProtocolVersion::V120`].
    pub force_server_packs: bool,
    /// Only on the wire up to [`ProtocolVersion::V120`].
    pub behavior_packs: Vec<BehaviorPackEntry>,
    pub resource_packs: Vec<ResourcePackEntry>,
    /// Pack id → download URL pairs; only inside [`CDN_URL_SPAN`].
    pub cdn_urls: Vec<(NetString, NetString)>,
    /// Only on the wire from [`ProtocolVersion::V150`].
    pub world_template_id: Uuid,
    /// Only on the wire from [`ProtocolVersion::V150`].
    pub world_template_version: NetString,
    /// Only on the wire from [`ProtocolVersion::V190`].
    pub force_disable_vibrant_visuals: bool,
}

impl Default for ResourcePacksInfoPacket {
    fn default() -> Self {
        Self {
            must_accept: false,
            has_addons: false,
            has_scripts: false,
            force_server_packs: false,
            behavior_packs: Vec::new(),
            resource_packs: Vec::new(),
            cdn_urls: Vec::new(),
            world_template_id: Uuid::nil(),
            world_template_version: NetString::default(),
            force_disable_vibrant_visuals: false,
        }
    }
}

impl Packet for ResourcePacksInfoPacket {
    const ID: u16 = 6;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        let must_accept = reader.read_bool()?;
        let has_addons = if version >= ProtocolVersion::V70 {
            reader.read_bool()?
        } else {
            false
        };
        let has_scripts = reader.read_bool()?;

        let mut force_server_packs = false;
        let mut behavior_packs = Vec::new();
        if version <= ProtocolVersion::V120 {
            force_server_packs = reader.read_bool()?;
            let count = reader.read_u16()? as usize;
            behavior_packs.reserve(count.min(256));
            for _ in 0..count {
                behavior_packs.push(BehaviorPackEntry::read(reader, version)?);
            }
        }

        let mut force_disable_vibrant_visuals = false;
        let mut world_template_id = Uuid::nil();
        let mut world_template_version = NetString::default();
        if version >= ProtocolVersion::V150 {
            if version >= ProtocolVersion::V190 {
                force_disable_vibrant_visuals = reader.read_bool()?;
            }
            world_template_id = read_uuid(reader)?;
            world_template_version = NetString::read(reader)?;
        }

        let count = reader.read_u16()? as usize;
        let mut resource_packs = Vec::with_capacity(count.min(256));
        for _ in 0..count {
            resource_packs.push(ResourcePackEntry::read(reader, version)?);
        }

        let mut cdn_urls = Vec::new();
        if CDN_URL_SPAN.contains(version) {
            let count = reader.read_var_u32()? as usize;
            cdn_urls.reserve(count.min(256));
            for _ in 0..count {
                let pack_id = NetString::read(reader)?;
                let url = NetString::read(reader)?;
                cdn_urls.push((pack_id, url));
            }
        }

        Ok(Self {
            must_accept,
            has_addons,
            has_scripts,
            force_server_packs,
            behavior_packs,
            resource_packs,
            cdn_urls,
            world_template_id,
            world_template_version,
            force_disable_vibrant_visuals,
        })
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        writer.write_bool(self.must_accept);
        if version >= ProtocolVersion::V70 {
            writer.write_bool(self.has_addons);
        }
        writer.write_bool(self.has_scripts);
        if version <= ProtocolVersion::V120 {
            writer.write_bool(self.force_server_packs);
            writer.write_u16(self.behavior_packs.len() as u16);
            for entry in &self.behavior_packs {
                entry.write(writer, version);
            }
        }
        if version >= ProtocolVersion::V150 {
            if version >= ProtocolVersion::V190 {
                writer.write_bool(self.force_disable_vibrant_visuals);
            }
            write_uuid(writer, &self.world_template_id);
            self.world_template_version.write(writer);
        }
        writer.write_u16(self.resource_packs.len() as u16);
        for entry in &self.resource_packs {
            entry.write(writer, version);
        }
        if CDN_URL_SPAN.contains(version) {
            writer.write_var_u32(self.cdn_urls.len() as u32);
            for (pack_id, url) in &self.cdn_urls {
                pack_id.write(writer);
                url.write(writer);
            }
        }
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_resource_packs_info(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resource_pack() -> ResourcePackEntry {
        ResourcePackEntry {
            pack_id: Uuid::from_u64_pair(1, 2),
            version: NetString::from("1.0.0"),
            size_bytes: 4096,
            encryption_key: NetString::default(),
            sub_pack_name: NetString::default(),
            content_id: NetString::from("content"),
            has_scripts: false,
            is_addon: false,
            rtx_capable: true,
            cdn_url: NetString::from("https://cdn.example/pack"),
        }
    }

    fn sample() -> ResourcePacksInfoPacket {
        ResourcePacksInfoPacket {
            must_accept: true,
            has_addons: true,
            resource_packs: vec![sample_resource_pack()],
            world_template_id: Uuid::from_u64_pair(3, 4),
            world_template_version: NetString::from("2.0"),
            ..ResourcePacksInfoPacket::default()
        }
    }

    #[test]
    fn test_round_trips_on_latest() {
        let packet = sample();
        let bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
        let (_, decoded) =
            ResourcePacksInfoPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_cdn_table_exists_only_inside_its_window() {
        let mut packet = sample();
        packet.world_template_id = Uuid::nil();
        packet.world_template_version = NetString::default();
        packet
            .cdn_urls
            .push((NetString::from("pack"), NetString::from("https://cdn/p")));

        // Inside the window the table round-trips.
        let bytes = packet.encode_default(ProtocolVersion::V130).unwrap();
        let (_, decoded) =
            ResourcePacksInfoPacket::decode(&bytes, ProtocolVersion::V130).unwrap();
        assert_eq!(decoded.cdn_urls, packet.cdn_urls);

        // Before it was introduced, and after it was removed, the
        // table never touches the wire.
        for version in [ProtocolVersion::V20, ProtocolVersion::V140] {
            let bytes = packet.encode_default(version).unwrap();
            let (_, decoded) = ResourcePacksInfoPacket::decode(&bytes, version).unwrap();
            assert!(decoded.cdn_urls.is_empty(), "version {version}");
        }
    }

    #[test]
    fn test_behavior_packs_only_up_to_v120() {
        let mut packet = ResourcePacksInfoPacket::default();
        packet.behavior_packs.push(BehaviorPackEntry {
            pack_id: NetString::from("bp"),
            version: NetString::from("1"),
            size_bytes: 10,
            encryption_key: NetString::default(),
            sub_pack_name: NetString::default(),
            content_id: NetString::default(),
            has_scripts: false,
            is_addon: false,
        });
        packet.force_server_packs = true;

        let bytes = packet.encode_default(ProtocolVersion::V120).unwrap();
        let (_, decoded) =
            ResourcePacksInfoPacket::decode(&bytes, ProtocolVersion::V120).unwrap();
        assert_eq!(decoded.behavior_packs.len(), 1);
        assert!(decoded.force_server_packs);

        let bytes = packet.encode_default(ProtocolVersion::V130).unwrap();
        let (_, decoded) =
            ResourcePacksInfoPacket::decode(&bytes, ProtocolVersion::V130).unwrap();
        assert!(decoded.behavior_packs.is_empty());
        assert!(!decoded.force_server_packs);
    }

    #[test]
    fn test_round_trips_on_every_supported_cut() {
        let packet = ResourcePacksInfoPacket {
            resource_packs: vec![sample_resource_pack()],
            ..ResourcePacksInfoPacket::default()
        };
        for version in [
            ProtocolVersion::V20,
            ProtocolVersion::V30,
            ProtocolVersion::V70,
            ProtocolVersion::V120,
            ProtocolVersion::V130,
            ProtocolVersion::V140,
            ProtocolVersion::V150,
            ProtocolVersion::V190,
            ProtocolVersion::LATEST,
        ] {
            let bytes = packet.encode_default(version).unwrap();
            let (_, decoded) = ResourcePacksInfoPacket::decode(&bytes, version)
                .unwrap_or_else(|e| panic!("version {version}: {e}"));
            assert_eq!(decoded.resource_packs.len(), 1, "version {version}");
        }
    }
}
