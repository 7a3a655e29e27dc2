//! Typed message dispatch.
//!
//! [`PacketHandler`] has one callback per message; every callback
//! defaults to returning `false` ("not handled"), so a session layer
//! only overrides the messages it cares about and can log or drop the
//! rest uniformly. Dispatch itself lives on [`Packet::dispatch`] —
//! adding a message means adding a callback here and wiring it in the
//! message's `dispatch` impl, and the compiler flags anything missed.
//!
//! [`Packet::dispatch`]: crate::packet::Packet::dispatch

use crate::messages::{
    BiomeDefinitionListPacket, CameraInstructionPacket, CodeBuilderSourcePacket,
    CraftingEventPacket, InventoryContentPacket, InventoryRequestPacket, InventorySlotPacket,
    ItemRegistryPacket, LecternUpdatePacket, LevelSoundEventPacket, PlayerArmorDamagePacket,
    PlayerInputPacket, ResourcePacksInfoPacket, SetHudPacket, ShowStoreOfferPacket,
    UpdatePlayerGameTypePacket,
};

/// Receives decoded messages, one callback per message type.
#[allow(unused_variables)]
pub trait PacketHandler {
    fn handle_biome_definition_list(&mut self, packet: &BiomeDefinitionListPacket) -> bool {
        false
    }

    fn handle_camera_instruction(&mut self, packet: &CameraInstructionPacket) -> bool {
        false
    }

    fn handle_code_builder_source(&mut self, packet: &CodeBuilderSourcePacket) -> bool {
        false
    }

    fn handle_crafting_event(&mut self, packet: &CraftingEventPacket) -> bool {
        false
    }

    fn handle_inventory_content(&mut self, packet: &InventoryContentPacket) -> bool {
        false
    }

    fn handle_inventory_request(&mut self, packet: &InventoryRequestPacket) -> bool {
        false
    }

    fn handle_inventory_slot(&mut self, packet: &InventorySlotPacket) -> bool {
        false
    }

    fn handle_item_registry(&mut self, packet: &ItemRegistryPacket) -> bool {
        false
    }

    fn handle_lectern_update(&mut self, packet: &LecternUpdatePacket) -> bool {
        false
    }

    fn handle_level_sound_event(&mut self, packet: &LevelSoundEventPacket) -> bool {
        false
    }

    fn handle_player_armor_damage(&mut self, packet: &PlayerArmorDamagePacket) -> bool {
        false
    }

    fn handle_player_input(&mut self, packet: &PlayerInputPacket) -> bool {
        false
    }

    fn handle_resource_packs_info(&mut self, packet: &ResourcePacksInfoPacket) -> bool {
        false
    }

    fn handle_set_hud(&mut self, packet: &SetHudPacket) -> bool {
        false
    }

    fn handle_show_store_offer(&mut self, packet: &ShowStoreOfferPacket) -> bool {
        false
    }

    fn handle_update_player_game_type(&mut self, packet: &UpdatePlayerGameTypePacket) -> bool {
        false
    }
}
