//! The world biome catalogue.
//!
//! From [`ProtocolVersion::V180`] the payload is a list of definition
//! records followed by the string table their indices point into.
//! Because the table comes *after* the records, decoding is two-phase:
//! buffer every record with raw indices, read the table, then resolve.
//! Below the cut the payload is a single legacy tree blob.
//!
//! Each shape has its own constructor; encoding the shape the version
//! does not use fails with [`CodecError::NotPopulated`].

use shardnet_wire::{Reader, Writer};

use crate::error::CodecError;
use crate::handler::PacketHandler;
use crate::packet::Packet;
use crate::table::{StringInterner, StringTable};
use crate::tree::TreeBlob;
use crate::types::biome::{BiomeDefinitionData, BiomeDefinitionEntry};
use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq)]
enum BiomePayload {
    Modern(Vec<BiomeDefinitionEntry>),
    Legacy(TreeBlob),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomeDefinitionListPacket {
    payload: BiomePayload,
}

impl BiomeDefinitionListPacket {
    /// Builds the table-indexed form used from
    /// [`ProtocolVersion::V180`].
    pub fn from_definitions(definitions: Vec<BiomeDefinitionEntry>) -> Self {
        Self {
            payload: BiomePayload::Modern(definitions),
        }
    }

    /// Builds the legacy tree form used below
    /// [`ProtocolVersion::V180`].
    pub fn legacy(tree: TreeBlob) -> Self {
        Self {
            payload: BiomePayload::Legacy(tree),
        }
    }

    pub fn definitions(&self) -> Option<&[BiomeDefinitionEntry]> {
        match &self.payload {
            BiomePayload::Modern(definitions) => Some(definitions),
            BiomePayload::Legacy(_) => None,
        }
    }

    pub fn legacy_tree(&self) -> Option<&TreeBlob> {
        match &self.payload {
            BiomePayload::Legacy(tree) => Some(tree),
            BiomePayload::Modern(_) => None,
        }
    }
}

fn intern_index(interner: &mut StringInterner, string: &crate::common::NetString) -> Result<u16, CodecError> {
    u16::try_from(interner.intern(string))
        .map_err(|_| CodecError::malformed("biome string table exceeds 65536 entries"))
}

/// Phase three: turn raw-index records into resolved entries. Name
/// indices are definition slots (each may be claimed once); tag
/// indices are plain references and may repeat.
fn resolve_definitions(
    data: Vec<BiomeDefinitionData>,
    mut table: StringTable,
) -> Result<Vec<BiomeDefinitionEntry>, CodecError> {
    let mut definitions = Vec::with_capacity(data.len());
    for record in data {
        let name = table.claim(record.name_index as u32)?.clone();
        let tags = match record.tag_indices {
            Some(indices) => {
                let mut tags = Vec::with_capacity(indices.len());
                for index in indices {
                    tags.push(table.resolve(index as u32)?.clone());
                }
                Some(tags)
            }
            None => None,
        };
        definitions.push(BiomeDefinitionEntry {
            name,
            id: record.id,
            temperature: record.temperature,
            downfall: record.downfall,
            red_spore_density: record.red_spore_density,
            blue_spore_density: record.blue_spore_density,
            ash_density: record.ash_density,
            white_ash_density: record.white_ash_density,
            depth: record.depth,
            scale: record.scale,
            map_water_color: record.map_water_color,
            rain: record.rain,
            tags,
        });
    }
    Ok(definitions)
}

impl Packet for BiomeDefinitionListPacket {
    const ID: u16 = 122;

    fn decode_payload(
        reader: &mut Reader<'_>,
        version: ProtocolVersion,
    ) -> Result<Self, CodecError> {
        if version < ProtocolVersion::V180 {
            return Ok(Self::legacy(TreeBlob::read(reader)?));
        }

        // Phase one: buffer records with unresolved indices.
        let count = reader.read_var_u32()? as usize;
        let mut data = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            data.push(BiomeDefinitionData::read(reader)?);
        }
        // Phase two: the table physically follows the records.
        let table = StringTable::read(reader)?;
        // Phase three: resolve.
        Ok(Self::from_definitions(resolve_definitions(data, table)?))
    }

    fn encode_payload(
        &self,
        writer: &mut Writer,
        version: ProtocolVersion,
    ) -> Result<(), CodecError> {
        if version < ProtocolVersion::V180 {
            let tree = self.legacy_tree().ok_or(CodecError::NotPopulated {
                what: "legacy biome definition tree",
            })?;
            tree.write(writer);
            return Ok(());
        }

        let definitions = self.definitions().ok_or(CodecError::NotPopulated {
            what: "biome definition data",
        })?;

        let mut interner = StringInterner::new();
        let mut data = Vec::with_capacity(definitions.len());
        for entry in definitions {
            let name_index = intern_index(&mut interner, &entry.name)?;
            let tag_indices = match &entry.tags {
                Some(tags) => {
                    let mut indices = Vec::with_capacity(tags.len());
                    for tag in tags {
                        indices.push(intern_index(&mut interner, tag)?);
                    }
                    Some(indices)
                }
                None => None,
            };
            data.push(BiomeDefinitionData {
                name_index,
                id: entry.id,
                temperature: entry.temperature,
                downfall: entry.downfall,
                red_spore_density: entry.red_spore_density,
                blue_spore_density: entry.blue_spore_density,
                ash_density: entry.ash_density,
                white_ash_density: entry.white_ash_density,
                depth: entry.depth,
                scale: entry.scale,
                map_water_color: entry.map_water_color,
                rain: entry.rain,
                tag_indices,
            });
        }

        writer.write_var_u32(data.len() as u32);
        for record in &data {
            record.write(writer);
        }
        interner.write(writer);
        Ok(())
    }

    fn dispatch(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_biome_definition_list(self)
    }
}

// =========================================================================
// Tests
// =========================================================================
