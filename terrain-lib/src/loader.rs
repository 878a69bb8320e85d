//! JSON 存檔的讀寫與驗證
//!
//! 讀取採整檔緩衝後解析，寫入為截斷覆寫，不支援串流或附加。
//! 存檔內容的形狀錯誤（缺鍵、未知列舉名、非矩形地形）一律回報
//! 結構化錯誤而不是 panic。
use crate::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

// 寫檔時的縮排寬度，沿用既有存檔的四空白
const INDENT: &[u8] = b"    ";

/// 將地圖轉為存檔形式
pub fn terrain_to_doc(terrain: &Terrain) -> TerrainDoc {
    let terrain_full = terrain
        .tiles()
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|&tile| TileDoc { terrain: tile })
                .collect()
        })
        .collect();
    let units = terrain
        .units()
        .iter()
        .map(|unit| UnitDoc {
            faction: unit.faction,
            battle_class: unit.battle_class,
            x: unit.pos.x,
            y: unit.pos.y,
        })
        .collect();

    TerrainDoc {
        name: terrain.name().to_string(),
        terrain_full,
        units: Some(units),
    }
}

/// 由存檔形式重建地圖
///
/// 地形欄位必須為矩形（以第一欄長度為準），否則回報錯誤而不猜測
/// 截斷方式。單位座標不在此重新驗證，與既有存檔的信任邊界一致。
pub fn terrain_from_doc(doc: TerrainDoc) -> Result<Terrain> {
    let func = "terrain_from_doc";
    let expected = doc.terrain_full.first().map_or(0, |column| column.len());
    for (column, tiles) in doc.terrain_full.iter().enumerate() {
        if tiles.len() != expected {
            return Err(Error::NotRectangular {
                func,
                column,
                found: tiles.len(),
                expected,
            });
        }
    }

    let tiles = doc
        .terrain_full
        .into_iter()
        .map(|column| column.into_iter().map(|cell| cell.terrain).collect())
        .collect();
    let units = doc.units.map(|units| {
        units
            .into_iter()
            .map(|unit| Unit::new(unit.faction, unit.battle_class, unit.x, unit.y))
            .collect()
    });
    Terrain::from_parts(doc.name, tiles, units)
}

/// 將地圖列表轉為存檔形式，保留列表順序
pub fn terrain_list_to_doc(list: &TerrainList) -> TerrainListDoc {
    TerrainListDoc {
        maps: list.iter().map(terrain_to_doc).collect(),
    }
}

/// 由存檔形式重建地圖列表
pub fn terrain_list_from_doc(doc: TerrainListDoc) -> Result<TerrainList> {
    doc.maps.into_iter().map(terrain_from_doc).collect()
}

/// 以四空白縮排序列化為 JSON 字串
pub fn to_pretty_json<T: Serialize>(doc: &T) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .map_err(|source| Error::Serialize {
            func: "to_pretty_json",
            source,
        })?;
    // serde_json 的輸出必為 UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn terrain_to_json(terrain: &Terrain) -> Result<String> {
    to_pretty_json(&terrain_to_doc(terrain))
}

pub fn terrain_list_to_json(list: &TerrainList) -> Result<String> {
    to_pretty_json(&terrain_list_to_doc(list))
}

/// 由 JSON 字串解析單一地圖
pub fn terrain_from_json(json: &str) -> Result<Terrain> {
    let doc: TerrainDoc = serde_json::from_str(json).map_err(|source| Error::Malformed {
        func: "terrain_from_json",
        source,
    })?;
    terrain_from_doc(doc)
}

/// 由 JSON 字串解析地圖列表
pub fn terrain_list_from_json(json: &str) -> Result<TerrainList> {
    let doc: TerrainListDoc = serde_json::from_str(json).map_err(|source| Error::Malformed {
        func: "terrain_list_from_json",
        source,
    })?;
    terrain_list_from_doc(doc)
}

/// 讀取單一地圖存檔
pub fn read_terrain(path: &Path) -> Result<Terrain> {
    let json = read_file("read_terrain", path)?;
    terrain_from_json(&json)
}

/// 讀取地圖列表存檔
pub fn read_terrain_list(path: &Path) -> Result<TerrainList> {
    let json = read_file("read_terrain_list", path)?;
    terrain_list_from_json(&json)
}

/// 寫入單一地圖存檔（整檔覆寫）
pub fn write_terrain(path: &Path, terrain: &Terrain) -> Result<()> {
    write_file("write_terrain", path, &terrain_to_json(terrain)?)
}

/// 寫入地圖列表存檔（整檔覆寫）
pub fn write_terrain_list(path: &Path, list: &TerrainList) -> Result<()> {
    write_file("write_terrain_list", path, &terrain_list_to_json(list)?)
}

fn read_file(func: &'static str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        func,
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(func: &'static str, path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Io {
        func,
        path: path.to_path_buf(),
        source,
    })
}
