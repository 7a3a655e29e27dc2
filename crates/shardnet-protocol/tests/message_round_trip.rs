//! Cross-version integration tests: whole-message round trips through
//! the envelope, handler dispatch, and the partition behavior at the
//! historical cut points.

use shardnet_protocol::common::{BlockPos, NetString, Vec3};
use shardnet_protocol::messages::{
    ArmorSlot, BiomeDefinitionListPacket, CameraInstructionPacket, CodeBuilderSourcePacket,
    CodeBuilderValue, LecternUpdatePacket, LevelSoundEventPacket, PlayerArmorDamagePacket,
    PlayerInputPacket, SetHudPacket, ShowStoreOfferPacket, StoreOfferDisplay, StoreRedirectType,
    UpdatePlayerGameTypePacket,
};
use shardnet_protocol::types::biome::BiomeDefinitionEntry;
use shardnet_protocol::types::hud::{HudElement, HudVisibility};
use shardnet_protocol::{CodecError, Packet, PacketHandler, PacketHeader, ProtocolVersion};

/// Every named revision, in catalogue order.
const ALL_VERSIONS: [ProtocolVersion; 17] = [
    ProtocolVersion::V20,
    ProtocolVersion::V30,
    ProtocolVersion::V50,
    ProtocolVersion::V60,
    ProtocolVersion::V70,
    ProtocolVersion::V80,
    ProtocolVersion::V100,
    ProtocolVersion::V120,
    ProtocolVersion::V130,
    ProtocolVersion::V140,
    ProtocolVersion::V150,
    ProtocolVersion::V160,
    ProtocolVersion::V170,
    ProtocolVersion::V180,
    ProtocolVersion::V190,
    ProtocolVersion::V200,
    ProtocolVersion::V210,
];

// =========================================================================
// Round trips across the whole version catalogue
// =========================================================================

#[test]
fn test_lectern_update_round_trips_on_every_version() {
    let packet = LecternUpdatePacket {
        page: 1,
        total_pages: 5,
        position: BlockPos::new(10, 64, -10),
        drop_book: false,
    };
    for version in ALL_VERSIONS {
        let bytes = packet.encode_default(version).unwrap();
        let (_, decoded) = LecternUpdatePacket::decode(&bytes, version)
            .unwrap_or_else(|e| panic!("version {version}: {e}"));
        assert_eq!(decoded, packet, "version {version}");
    }
}

#[test]
fn test_armor_damage_round_trips_on_every_version() {
    let packet = PlayerArmorDamagePacket {
        damage: vec![(ArmorSlot::Head, 2), (ArmorSlot::Feet, 1)],
    };
    for version in ALL_VERSIONS {
        let bytes = packet.encode_default(version).unwrap();
        let (_, decoded) = PlayerArmorDamagePacket::decode(&bytes, version)
            .unwrap_or_else(|e| panic!("version {version}: {e}"));
        let mut expected = packet.damage.clone();
        expected.sort_by_key(|(slot, _)| *slot as u8);
        let mut actual = decoded.damage.clone();
        actual.sort_by_key(|(slot, _)| *slot as u8);
        assert_eq!(actual, expected, "version {version}");
    }
}

#[test]
fn test_player_input_round_trips_on_every_version() {
    let packet = PlayerInputPacket {
        motion: shardnet_protocol::common::Vec2::new(1.0, -1.0),
        jumping: false,
        sneaking: true,
    };
    for version in ALL_VERSIONS {
        let bytes = packet.encode_default(version).unwrap();
        let (_, decoded) = PlayerInputPacket::decode(&bytes, version)
            .unwrap_or_else(|e| panic!("version {version}: {e}"));
        assert_eq!(decoded, packet, "version {version}");
    }
}

#[test]
fn test_game_type_round_trips_on_every_version() {
    let packet = UpdatePlayerGameTypePacket {
        game_mode: 1,
        player_actor_unique_id: -400,
        tick: 123_456,
    };
    for version in ALL_VERSIONS {
        let bytes = packet.encode_default(version).unwrap();
        let (_, decoded) = UpdatePlayerGameTypePacket::decode(&bytes, version)
            .unwrap_or_else(|e| panic!("version {version}: {e}"));
        if version >= ProtocolVersion::V80 {
            assert_eq!(decoded, packet, "version {version}");
        } else {
            assert_eq!(decoded.tick, 0, "version {version}");
        }
    }
}

// =========================================================================
// Partition behavior at the cuts
// =========================================================================

#[test]
fn test_store_offer_branches_partition_the_catalogue() {
    // Every version picks exactly one arm: the legacy arm encodes iff
    // the redirect arm does not.
    for version in ALL_VERSIONS {
        let redirect = ShowStoreOfferPacket {
            offer_id: NetString::from("offer"),
            display: StoreOfferDisplay::Redirect(StoreRedirectType::Marketplace),
        };
        let show_all = ShowStoreOfferPacket {
            offer_id: NetString::from("offer"),
            display: StoreOfferDisplay::ShowAll(true),
        };
        let redirect_ok = redirect.encode_default(version).is_ok();
        let show_all_ok = show_all.encode_default(version).is_ok();
        assert_ne!(
            redirect_ok, show_all_ok,
            "version {version} must accept exactly one arm"
        );
    }
}

#[test]
fn test_code_builder_value_arms_partition_the_catalogue() {
    for version in ALL_VERSIONS {
        let status = CodeBuilderSourcePacket {
            operation: 1,
            category: 0,
            value: CodeBuilderValue::Status(2),
        };
        let source = CodeBuilderSourcePacket {
            operation: 1,
            category: 0,
            value: CodeBuilderValue::Source(shardnet_protocol::common::NetString::from("x")),
        };
        let status_ok = status.encode_default(version).is_ok();
        let source_ok = source.encode_default(version).is_ok();
        assert_ne!(
            status_ok, source_ok,
            "version {version} must accept exactly one arm"
        );
        assert_eq!(status_ok, version >= ProtocolVersion::V100);
    }
}

#[test]
fn test_biome_list_branches_partition_the_catalogue() {
    let modern = BiomeDefinitionListPacket::from_definitions(vec![
        BiomeDefinitionEntry::named("plains", Some(vec![NetString::from("overworld")])),
    ]);
    let legacy = BiomeDefinitionListPacket::legacy(shardnet_protocol::TreeBlob::from_encoded(
        vec![0x0a, 0x00],
    ));
    for version in ALL_VERSIONS {
        let modern_ok = modern.encode_default(version).is_ok();
        let legacy_ok = legacy.encode_default(version).is_ok();
        assert_ne!(
            modern_ok, legacy_ok,
            "version {version} must accept exactly one payload shape"
        );
        assert_eq!(modern_ok, version >= ProtocolVersion::V180);
    }
}

#[test]
fn test_hud_widths_agree_across_their_cut() {
    let packet = SetHudPacket {
        elements: vec![HudElement::Crosshair],
        visibility: HudVisibility::Reset,
    };
    for version in ALL_VERSIONS {
        let bytes = packet.encode_default(version).unwrap();
        let (_, decoded) = SetHudPacket::decode(&bytes, version)
            .unwrap_or_else(|e| panic!("version {version}: {e}"));
        assert_eq!(decoded, packet, "version {version}");
    }
}

// =========================================================================
// Envelope behavior
// =========================================================================

#[test]
fn test_sub_client_ids_survive_the_header() {
    let packet = LevelSoundEventPacket {
        sound: 9,
        position: Vec3::new(1.0, 2.0, 3.0),
        ..LevelSoundEventPacket::default()
    };
    let header = PacketHeader {
        id: LevelSoundEventPacket::ID,
        sender_sub_id: 1,
        recipient_sub_id: 2,
    };
    let bytes = packet.encode(header, ProtocolVersion::LATEST).unwrap();
    let (decoded_header, decoded) =
        LevelSoundEventPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap();
    assert_eq!(decoded_header, header);
    assert_eq!(decoded, packet);
}

#[test]
fn test_wrong_message_id_is_rejected_before_the_payload() {
    let packet = LecternUpdatePacket::default();
    let bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
    let err = LevelSoundEventPacket::decode(&bytes, ProtocolVersion::LATEST).unwrap_err();
    assert_eq!(
        err,
        CodecError::UnexpectedPacket {
            expected: LevelSoundEventPacket::ID,
            actual: LecternUpdatePacket::ID,
        }
    );
}

#[test]
fn test_every_truncated_prefix_fails_cleanly() {
    let packet = CameraInstructionPacket::from_instructions(Default::default());
    let bytes = packet.encode_default(ProtocolVersion::LATEST).unwrap();
    for len in 0..bytes.len() {
        let result = CameraInstructionPacket::decode(&bytes[..len], ProtocolVersion::LATEST);
        assert!(result.is_err(), "prefix of {len} bytes decoded");
    }
}

// =========================================================================
// Dispatch
// =========================================================================

#[derive(Default)]
struct CountingHandler {
    sounds: usize,
    lecterns: usize,
}

impl PacketHandler for CountingHandler {
    fn handle_level_sound_event(&mut self, _packet: &LevelSoundEventPacket) -> bool {
        self.sounds += 1;
        true
    }

    fn handle_lectern_update(&mut self, _packet: &LecternUpdatePacket) -> bool {
        self.lecterns += 1;
        true
    }
}

#[test]
fn test_dispatch_routes_to_exactly_one_callback() {
    let mut handler = CountingHandler::default();

    assert!(LevelSoundEventPacket::default().dispatch(&mut handler));
    assert!(LecternUpdatePacket::default().dispatch(&mut handler));
    assert_eq!((handler.sounds, handler.lecterns), (1, 1));

    // Unhandled messages report false through the default impls.
    let hud = SetHudPacket {
        elements: vec![],
        visibility: HudVisibility::Hide,
    };
    assert!(!hud.dispatch(&mut handler));
}
