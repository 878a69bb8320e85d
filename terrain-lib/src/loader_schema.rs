//! 存檔格式的資料結構定義
//!
//! 與存檔 JSON 一一對應：地形為欄主序的二維陣列（外層為寬度、
//! 內層為高度），格式驗證與重建交給 loader。
use crate::{BattleClass, Coord, Faction, TerrainTile};
use serde::{Deserialize, Serialize};

/// 單一格子的存檔形式：`{"terrain": "PLAIN"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDoc {
    pub terrain: TerrainTile,
}

/// 單位的存檔形式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDoc {
    pub faction: Faction,
    #[serde(rename = "class")]
    pub battle_class: BattleClass,
    pub x: Coord,
    pub y: Coord,
}

/// 單一地圖的存檔形式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainDoc {
    pub name: String,
    #[serde(rename = "terrainFull")]
    pub terrain_full: Vec<Vec<TileDoc>>,
    // 缺少 units 鍵時為 None，交由 Terrain::from_parts 拒絕
    #[serde(default)]
    pub units: Option<Vec<UnitDoc>>,
}

/// 地圖列表的存檔形式：`{"maps": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainListDoc {
    pub maps: Vec<TerrainDoc>,
}
