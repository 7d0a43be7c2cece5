//! Serde layout of a map data file
//!
//! Field order follows the order the game writes them in.

use fastnbt::{ByteArray, Value};
use serde::{Deserialize, Serialize};

/// Unnamed root compound
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MapFile {
    #[serde(rename = "DataVersion")]
    pub data_version: i32,
    pub data: MapData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MapData {
    pub z_center: i32,
    #[serde(default)]
    pub unlimited_tracking: i8,
    #[serde(default)]
    pub tracking_position: i8,
    // item frames and banners are never placed, both stay empty lists
    #[serde(default)]
    pub frames: Vec<Value>,
    pub scale: i8,
    #[serde(default)]
    pub locked: i8,
    pub dimension: String,
    #[serde(default)]
    pub banners: Vec<Value>,
    pub x_center: i32,
    pub colors: ByteArray,
}
