//! Inventory request actions: the polymorphic record family dispatched
//! by a leading type tag.
//!
//! The set is closed — one enum variant per action, each owning a
//! stable tag that never changes across protocol revisions even when
//! the payload shape does. Encoding derives the tag from the variant
//! itself, so a tag/payload mismatch cannot be written. Decoding goes
//! through [`standard_registry`], built once and read-only afterwards.

use std::sync::OnceLock;

use shardnet_wire::{Reader, Writer};

use crate::common::NetString;
use crate::error::CodecError;
use crate::registry::VariantRegistry;
use crate::types::inventory::SlotInfo;
use crate::version::ProtocolVersion;

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

pub const ACTION_TAKE: u8 = 0;
pub const ACTION_PLACE: u8 = 1;
pub const ACTION_SWAP: u8 = 2;
pub const ACTION_DROP: u8 = 3;
pub const ACTION_DESTROY: u8 = 4;
pub const ACTION_LAB_TABLE_COMBINE: u8 = 9;
pub const ACTION_BEACON_PAYMENT: u8 = 10;
pub const ACTION_MINE_BLOCK: u8 = 11;
pub const ACTION_CRAFT_RECIPE: u8 = 12;
pub const ACTION_CRAFT_RECIPE_AUTO: u8 = 13;
pub const ACTION_CREATIVE_CREATE: u8 = 14;
pub const ACTION_GRINDSTONE: u8 = 16;
pub const ACTION_LOOM: u8 = 17;

// ---------------------------------------------------------------------------
// The action sum type
// ---------------------------------------------------------------------------

/// One action inside an inventory request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryAction {
    /// Move `count` items from `source` to `destination`, taking into
    /// the cursor.
    Take {
        count: u8,
        source: SlotInfo,
        destination: SlotInfo,
    },
    /// Move `count` items from `source` to `destination`.
    Place {
        count: u8,
        source: SlotInfo,
        destination: SlotInfo,
    },
    /// Swap the contents of two slots.
    Swap { slot_a: SlotInfo, slot_b: SlotInfo },
    /// Drop `count` items from `source` into the world.
    Drop {
        count: u8,
        source: SlotInfo,
        randomly: bool,
    },
    /// Destroy `count` items from `source` (creative mode).
    Destroy { count: u8, source: SlotInfo },
    LabTableCombine,
    BeaconPayment {
        primary_effect: i32,
        secondary_effect: i32,
    },
    MineBlock {
        hotbar_slot: i32,
        predicted_durability: i32,
        stack_id: i32,
    },
    CraftRecipe {
        recipe_id: u32,
        /// Only on the wire from [`ProtocolVersion::V120`].
        repetitions: u8,
    },
    CraftRecipeAuto {
        recipe_id: u32,
        ingredient_count: u8,
        /// Only on the wire from [`ProtocolVersion::V120`].
        repetitions: u8,
    },
    CreativeCreate {
        creative_item_id: u32,
        /// Only on the wire from [`ProtocolVersion::V120`].
        repetitions: u8,
    },
    /// Repair and/or disenchant in a grindstone. The repair cost may
    /// legitimately be negative.
    Grindstone {
        recipe_id: u32,
        repair_cost: i32,
        /// Only on the wire from [`ProtocolVersion::V120`].
        repetitions: u8,
    },
    Loom { pattern: NetString },
}

impl InventoryAction {
    /// The wire tag owned by this variant.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Take { .. } => ACTION_TAKE,
            Self::Place { .. } => ACTION_PLACE,
            Self::Swap { .. } => ACTION_SWAP,
            Self::Drop { .. } => ACTION_DROP,
            Self::Destroy { .. } => ACTION_DESTROY,
            Self::LabTableCombine => ACTION_LAB_TABLE_COMBINE,
            Self::BeaconPayment { .. } => ACTION_BEACON_PAYMENT,
            Self::MineBlock { .. } => ACTION_MINE_BLOCK,
            Self::CraftRecipe { .. } => ACTION_CRAFT_RECIPE,
            Self::CraftRecipeAuto { .. } => ACTION_CRAFT_RECIPE_AUTO,
            Self::CreativeCreate { .. } => ACTION_CREATIVE_CREATE,
            Self::Grindstone { .. } => ACTION_GRINDSTONE,
            Self::Loom { .. } => ACTION_LOOM,
        }
    }

    /// Writes the tag byte followed by the variant payload.
    pub fn write(&self, writer: &mut Writer, version: ProtocolVersion) {
        writer.write_u8(self.tag());
        match self {
            Self::Take {
                count,
                source,
                destination,
            }
            | Self::Place {
                count,
                source,
                destination,
            } => {
                writer.write_u8(*count);
                source.write(writer, version);
                destination.write(writer, version);
            }
            Self::Swap { slot_a, slot_b } => {
                slot_a.write(writer, version);
                slot_b.write(writer, version);
            }
            Self::Drop {
                count,
                source,
                randomly,
            } => {
                writer.write_u8(*count);
                source.write(writer, version);
                writer.write_bool(*randomly);
            }
            Self::Destroy { count, source } => {
                writer.write_u8(*count);
                source.write(writer, version);
            }
            Self::LabTableCombine => {}
            Self::BeaconPayment {
                primary_effect,
                secondary_effect,
            } => {
                writer.write_var_i32(*primary_effect);
                writer.write_var_i32(*secondary_effect);
            }
            Self::MineBlock {
                hotbar_slot,
                predicted_durability,
                stack_id,
            } => {
                writer.write_var_i32(*hotbar_slot);
                writer.write_var_i32(*predicted_durability);
                writer.write_var_i32(*stack_id);
            }
            Self::CraftRecipe {
                recipe_id,
                repetitions,
            } => {
                writer.write_var_u32(*recipe_id);
                if version >= ProtocolVersion::V120 {
                    writer.write_u8(*repetitions);
                }
            }
            Self::CraftRecipeAuto {
                recipe_id,
                ingredient_count,
                repetitions,
            } => {
                writer.write_var_u32(*recipe_id);
                writer.write_u8(*ingredient_count);
                if version >= ProtocolVersion::V120 {
                    writer.write_u8(*repetitions);
                }
            }
            Self::CreativeCreate {
                creative_item_id,
                repetitions,
            } => {
                writer.write_var_u32(*creative_item_id);
                if version >= ProtocolVersion::V120 {
                    writer.write_u8(*repetitions);
                }
            }
            Self::Grindstone {
                recipe_id,
                repair_cost,
                repetitions,
            } => {
                writer.write_var_u32(*recipe_id);
                writer.write_var_i32(*repair_cost);
                if version >= ProtocolVersion::V120 {
                    writer.write_u8(*repetitions);
                }
            }
            Self::Loom { pattern } => {
                pattern.write(writer);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Per-variant decoders
// ---------------------------------------------------------------------------

fn read_take(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Take {
        count: reader.read_u8()?,
        source: SlotInfo::read(reader, version)?,
        destination: SlotInfo::read(reader, version)?,
    })
}

fn read_place(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Place {
        count: reader.read_u8()?,
        source: SlotInfo::read(reader, version)?,
        destination: SlotInfo::read(reader, version)?,
    })
}

fn read_swap(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Swap {
        slot_a: SlotInfo::read(reader, version)?,
        slot_b: SlotInfo::read(reader, version)?,
    })
}

fn read_drop(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Drop {
        count: reader.read_u8()?,
        source: SlotInfo::read(reader, version)?,
        randomly: reader.read_bool()?,
    })
}

fn read_destroy(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Destroy {
        count: reader.read_u8()?,
        source: SlotInfo::read(reader, version)?,
    })
}

fn read_lab_table_combine(
    _reader: &mut Reader<'_>,
    _version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::LabTableCombine)
}

fn read_beacon_payment(
    reader: &mut Reader<'_>,
    _version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::BeaconPayment {
        primary_effect: reader.read_var_i32()?,
        secondary_effect: reader.read_var_i32()?,
    })
}

fn read_mine_block(
    reader: &mut Reader<'_>,
    _version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::MineBlock {
        hotbar_slot: reader.read_var_i32()?,
        predicted_durability: reader.read_var_i32()?,
        stack_id: reader.read_var_i32()?,
    })
}

fn read_repetitions(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<u8, CodecError> {
    if version >= ProtocolVersion::V120 {
        Ok(reader.read_u8()?)
    } else {
        Ok(0)
    }
}

fn read_craft_recipe(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::CraftRecipe {
        recipe_id: reader.read_var_u32()?,
        repetitions: read_repetitions(reader, version)?,
    })
}

fn read_craft_recipe_auto(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::CraftRecipeAuto {
        recipe_id: reader.read_var_u32()?,
        ingredient_count: reader.read_u8()?,
        repetitions: read_repetitions(reader, version)?,
    })
}

fn read_creative_create(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::CreativeCreate {
        creative_item_id: reader.read_var_u32()?,
        repetitions: read_repetitions(reader, version)?,
    })
}

fn read_grindstone(
    reader: &mut Reader<'_>,
    version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Grindstone {
        recipe_id: reader.read_var_u32()?,
        repair_cost: reader.read_var_i32()?,
        repetitions: read_repetitions(reader, version)?,
    })
}

fn read_loom(
    reader: &mut Reader<'_>,
    _version: ProtocolVersion,
) -> Result<InventoryAction, CodecError> {
    Ok(InventoryAction::Loom {
        pattern: NetString::read(reader)?,
    })
}

/// The registry every inventory request decodes through.
pub fn standard_registry() -> &'static VariantRegistry<InventoryAction> {
    static REGISTRY: OnceLock<VariantRegistry<InventoryAction>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = VariantRegistry::new("inventory action");
        registry.register(ACTION_TAKE, read_take);
        registry.register(ACTION_PLACE, read_place);
        registry.register(ACTION_SWAP, read_swap);
        registry.register(ACTION_DROP, read_drop);
        registry.register(ACTION_DESTROY, read_destroy);
        registry.register(ACTION_LAB_TABLE_COMBINE, read_lab_table_combine);
        registry.register(ACTION_BEACON_PAYMENT, read_beacon_payment);
        registry.register(ACTION_MINE_BLOCK, read_mine_block);
        registry.register(ACTION_CRAFT_RECIPE, read_craft_recipe);
        registry.register(ACTION_CRAFT_RECIPE_AUTO, read_craft_recipe_auto);
        registry.register(ACTION_CREATIVE_CREATE, read_creative_create);
        registry.register(ACTION_GRINDSTONE, read_grindstone);
        registry.register(ACTION_LOOM, read_loom);
        registry
    })
}

// =========================================================================
// Tests
// =========================================================================
