use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Clubs in a standard bag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Club {
    Driver,
    #[value(name = "3-wood", alias = "3w")]
    #[serde(rename = "3-wood")]
    Wood3,
    #[value(name = "5-wood", alias = "5w")]
    #[serde(rename = "5-wood")]
    Wood5,
    #[value(name = "3-iron", alias = "3i")]
    #[serde(rename = "3-iron")]
    Iron3,
    #[value(name = "4-iron", alias = "4i")]
    #[serde(rename = "4-iron")]
    Iron4,
    #[value(name = "5-iron", alias = "5i")]
    #[serde(rename = "5-iron")]
    Iron5,
    #[value(name = "6-iron", alias = "6i")]
    #[serde(rename = "6-iron")]
    Iron6,
    #[value(name = "7-iron", alias = "7i")]
    #[serde(rename = "7-iron")]
    Iron7,
    #[value(name = "8-iron", alias = "8i")]
    #[serde(rename = "8-iron")]
    Iron8,
    #[value(name = "9-iron", alias = "9i")]
    #[serde(rename = "9-iron")]
    Iron9,
    #[value(alias = "pw")]
    PitchingWedge,
    #[value(alias = "gw")]
    GapWedge,
    #[value(alias = "sw")]
    SandWedge,
    #[value(alias = "lw")]
    LobWedge,
}

impl Club {
    pub const ALL: [Club; 14] = [
        Club::Driver,
        Club::Wood3,
        Club::Wood5,
        Club::Iron3,
        Club::Iron4,
        Club::Iron5,
        Club::Iron6,
        Club::Iron7,
        Club::Iron8,
        Club::Iron9,
        Club::PitchingWedge,
        Club::GapWedge,
        Club::SandWedge,
        Club::LobWedge,
    ];

    /// Full-swing carry from a perfect lie, in yards
    pub fn base_distance(&self) -> f64 {
        match self {
            Club::Driver => 275.0,
            Club::Wood3 => 240.0,
            Club::Wood5 => 230.0,
            Club::Iron3 => 210.0,
            Club::Iron4 => 200.0,
            Club::Iron5 => 190.0,
            Club::Iron6 => 180.0,
            Club::Iron7 => 165.0,
            Club::Iron8 => 150.0,
            Club::Iron9 => 140.0,
            Club::PitchingWedge => 130.0,
            Club::GapWedge => 110.0,
            Club::SandWedge => 100.0,
            Club::LobWedge => 90.0,
        }
    }

    /// Nominal launch angle in degrees
    pub fn launch_angle_deg(&self) -> f64 {
        match self {
            Club::Driver => 12.0,
            Club::Wood3 => 14.0,
            Club::Wood5 => 16.0,
            Club::Iron3 => 18.0,
            Club::Iron4 => 19.0,
            Club::Iron5 => 21.0,
            Club::Iron6 => 23.0,
            Club::Iron7 => 26.0,
            Club::Iron8 => 29.0,
            Club::Iron9 => 32.0,
            Club::PitchingWedge => 36.0,
            Club::GapWedge => 40.0,
            Club::SandWedge => 44.0,
            Club::LobWedge => 48.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::Wood3 => "3 Wood",
            Club::Wood5 => "5 Wood",
            Club::Iron3 => "3 Iron",
            Club::Iron4 => "4 Iron",
            Club::Iron5 => "5 Iron",
            Club::Iron6 => "6 Iron",
            Club::Iron7 => "7 Iron",
            Club::Iron8 => "8 Iron",
            Club::Iron9 => "9 Iron",
            Club::PitchingWedge => "Pitching Wedge",
            Club::GapWedge => "Gap Wedge",
            Club::SandWedge => "Sand Wedge",
            Club::LobWedge => "Lob Wedge",
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
