//! Value types carried by messages: sub-records with their own wire
//! codecs, grouped by the feature area they belong to.

pub mod biome;
pub mod camera;
pub mod hud;
pub mod inventory;
pub mod resource_pack;
