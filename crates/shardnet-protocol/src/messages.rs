//! The concrete message set.
//!
//! One module per message. Each is a flat record over the engine:
//! version gates consult the cut constants in [`crate::version`],
//! payloads go through the reader/writer primitives, and anything
//! polymorphic or table-indexed uses the registry and table modules.

mod biome_definition_list;
mod camera_instruction;
mod code_builder_source;
mod crafting_event;
mod inventory_content;
mod inventory_request;
mod inventory_slot;
mod item_registry;
mod lectern_update;
mod level_sound_event;
mod player_armor_damage;
mod player_input;
mod resource_packs_info;
mod set_hud;
mod show_store_offer;
mod update_player_game_type;

pub use biome_definition_list::BiomeDefinitionListPacket;
pub use camera_instruction::{CameraInstructionPacket, CameraInstructions};
pub use code_builder_source::{CodeBuilderSourcePacket, CodeBuilderValue};
pub use crafting_event::CraftingEventPacket;
pub use inventory_content::InventoryContentPacket;
pub use inventory_request::{InventoryRequest, InventoryRequestPacket};
pub use inventory_slot::InventorySlotPacket;
pub use item_registry::{ItemRegistryPacket, ItemTypeEntry};
pub use lectern_update::LecternUpdatePacket;
pub use level_sound_event::LevelSoundEventPacket;
pub use player_armor_damage::{ArmorSlot, PlayerArmorDamagePacket};
pub use player_input::PlayerInputPacket;
pub use resource_packs_info::ResourcePacksInfoPacket;
pub use set_hud::SetHudPacket;
pub use show_store_offer::{ShowStoreOfferPacket, StoreOfferDisplay, StoreRedirectType};
pub use update_player_game_type::UpdatePlayerGameTypePacket;
