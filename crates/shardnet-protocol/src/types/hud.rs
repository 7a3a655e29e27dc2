//! HUD element and visibility enums.
//!
//! Both enums changed wire width at [`ProtocolVersion::V170`]: a
//! single unsigned byte before, a signed varint from then on. The
//! width choice belongs to the message; this module only converts
//! between raw integers and the closed enums, rejecting unknown
//! discriminants as malformed.
//!
//! [`ProtocolVersion::V170`]: crate::version::ProtocolVersion::V170

use crate::error::CodecError;

/// One togglable HUD element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudElement {
    PaperDoll = 0,
    Armor = 1,
    ToolTips = 2,
    TouchControls = 3,
    Crosshair = 4,
    Hotbar = 5,
    Health = 6,
    ProgressBar = 7,
    Hunger = 8,
    AirBubbles = 9,
    VehicleHealth = 10,
    StatusEffects = 11,
    ItemText = 12,
}

impl HudElement {
    pub fn from_raw(raw: i32) -> Result<Self, CodecError> {
        Ok(match raw {
            0 => Self::PaperDoll,
            1 => Self::Armor,
            2 => Self::ToolTips,
            3 => Self::TouchControls,
            4 => Self::Crosshair,
            5 => Self::Hotbar,
            6 => Self::Health,
            7 => Self::ProgressBar,
            8 => Self::Hunger,
            9 => Self::AirBubbles,
            10 => Self::VehicleHealth,
            11 => Self::StatusEffects,
            12 => Self::ItemText,
            _ => {
                return Err(CodecError::malformed(format!(
                    "unknown HUD element {raw}"
                )))
            }
        })
    }

    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

/// Whether the named HUD elements are being hidden or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudVisibility {
    Hide = 0,
    Reset = 1,
}

impl HudVisibility {
    pub fn from_raw(raw: i32) -> Result<Self, CodecError> {
        Ok(match raw {
            0 => Self::Hide,
            1 => Self::Reset,
            _ => {
                return Err(CodecError::malformed(format!(
                    "unknown HUD visibility {raw}"
                )))
            }
        })
    }

    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

// =========================================================================
// Tests
// =========================================================================
