//! Biome definition records.
//!
//! Two shapes of the same data: [`BiomeDefinitionData`] is the wire
//! form, carrying raw string-table indices; [`BiomeDefinitionEntry`]
//! is the resolved form the rest of the application works with. The
//! conversion between them lives in the biome definition list message,
//! which owns the string table.

use shardnet_wire::{Reader, Writer};

use crate::common::{read_optional, write_optional, NetString};
use crate::error::CodecError;

/// One biome definition as it appears on the wire: name and tags as
/// table indices, climate parameters inline.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeDefinitionData {
    pub name_index: u16,
    pub id: Option<u16>,
    pub temperature: f32,
    pub downfall: f32,
    pub red_spore_density: f32,
    pub blue_spore_density: f32,
    pub ash_density: f32,
    pub white_ash_density: f32,
    pub depth: f32,
    pub scale: f32,
    pub map_water_color: i32,
    pub rain: bool,
    pub tag_indices: Option<Vec<u16>>,
}

impl BiomeDefinitionData {
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            name_index: reader.read_u16()?,
            id: read_optional(reader, |r| Ok(r.read_u16()?))?,
            temperature: reader.read_f32()?,
            downfall: reader.read_f32()?,
            red_spore_density: reader.read_f32()?,
            blue_spore_density: reader.read_f32()?,
            ash_density: reader.read_f32()?,
            white_ash_density: reader.read_f32()?,
            depth: reader.read_f32()?,
            scale: reader.read_f32()?,
            map_water_color: reader.read_i32()?,
            rain: reader.read_bool()?,
            tag_indices: read_optional(reader, |r| {
                let count = r.read_var_u32()? as usize;
                let mut indices = Vec::with_capacity(count.min(4096));
                for _ in 0..count {
                    indices.push(r.read_u16()?);
                }
                Ok(indices)
            })?,
        })
    }

    pub fn write(&self, writer: &mut Writer) {
        writer.write_u16(self.name_index);
        write_optional(writer, self.id.as_ref(), |w, v| w.write_u16(*v));
        writer.write_f32(self.temperature);
        writer.write_f32(self.downfall);
        writer.write_f32(self.red_spore_density);
        writer.write_f32(self.blue_spore_density);
        writer.write_f32(self.ash_density);
        writer.write_f32(self.white_ash_density);
        writer.write_f32(self.depth);
        writer.write_f32(self.scale);
        writer.write_i32(self.map_water_color);
        writer.write_bool(self.rain);
        write_optional(writer, self.tag_indices.as_ref(), |w, indices| {
            w.write_var_u32(indices.len() as u32);
            for index in indices {
                w.write_u16(*index);
            }
        });
    }
}

/// One biome definition with every index resolved to its string.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeDefinitionEntry {
    pub name: NetString,
    pub id: Option<u16>,
    pub temperature: f32,
    pub downfall: f32,
    pub red_spore_density: f32,
    pub blue_spore_density: f32,
    pub ash_density: f32,
    pub white_ash_density: f32,
    pub depth: f32,
    pub scale: f32,
    pub map_water_color: i32,
    pub rain: bool,
    pub tags: Option<Vec<NetString>>,
}

impl BiomeDefinitionEntry {
    /// A minimal entry with zeroed climate data, handy for tests and
    /// for callers that only care about names and tags.
    pub fn named(name: impl Into<NetString>, tags: Option<Vec<NetString>>) -> Self {
        Self {
            name: name.into(),
            id: None,
            temperature: 0.0,
            downfall: 0.0,
            red_spore_density: 0.0,
            blue_spore_density: 0.0,
            ash_density: 0.0,
            white_ash_density: 0.0,
            depth: 0.0,
            scale: 0.0,
            map_water_color: 0,
            rain: false,
            tags,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_data_round_trips() {
        let data = BiomeDefinitionData {
            name_index: 3,
            id: Some(42),
            temperature: 0.8,
            downfall: 0.4,
            red_spore_density: 0.0,
            blue_spore_density: 0.0,
            ash_density: 0.0,
            white_ash_density: 0.0,
            depth: 0.125,
            scale: 0.05,
            map_water_color: -1,
            rain: true,
            tag_indices: Some(vec![0, 7, 7]),
        };

        let mut writer = Writer::new();
        data.write(&mut writer);

        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(BiomeDefinitionData::read(&mut reader).unwrap(), data);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_absent_tags_is_one_byte() {
        let without = BiomeDefinitionData {
            name_index: 0,
            id: None,
            temperature: 0.0,
            downfall: 0.0,
            red_spore_density: 0.0,
            blue_spore_density: 0.0,
            ash_density: 0.0,
            white_ash_density: 0.0,
            depth: 0.0,
            scale: 0.0,
            map_water_color: 0,
            rain: false,
            tag_indices: None,
        };
        let with = BiomeDefinitionData {
            tag_indices: Some(vec![]),
            ..without.clone()
        };

        let mut a = Writer::new();
        without.write(&mut a);
        let mut b = Writer::new();
        with.write(&mut b);

        // Present-but-empty costs the presence byte plus a zero count.
        assert_eq!(b.len(), a.len() + 1);
    }
}
