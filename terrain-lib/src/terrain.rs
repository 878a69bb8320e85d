use crate::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// 地形格子種類
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, Display, EnumIter, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerrainTile {
    #[default]
    Plain,
    Mountain,
    Water,
    Forest,
    Wall,
    Chest,
    Gate,
    Throne,
}

/// 戰棋地圖：名稱、地形格陣列與駐留單位
///
/// 不變式：
/// - 每個格子都有合法地形值
/// - 駐留單位的座標都在邊界內，且任兩個單位不共用同一格
pub struct Terrain {
    name: String,
    // 欄主序：外層為 x（寬度），內層為 y（高度），與存檔格式一致
    tiles: Vec<Vec<TerrainTile>>,
    units: Vec<Unit>,
    observer: Option<TerrainObserver>,
}

fn check_dimensions(func: &'static str, width: Coord, height: Coord) -> Result<()> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(Error::InvalidDimensions {
            func,
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}

impl Terrain {
    /// 建立全為平原的空白地圖
    pub fn new(name: impl Into<String>, width: Coord, height: Coord) -> Result<Self> {
        check_dimensions("Terrain::new", width, height)?;
        let tiles = vec![vec![TerrainTile::Plain; height as usize]; width as usize];
        Ok(Terrain {
            name: name.into(),
            tiles,
            units: Vec::new(),
            observer: None,
        })
    }

    /// 從既有資料建立地圖
    ///
    /// 信任邊界：不重新驗證單位是否在邊界內或互相重疊，
    /// 存檔讀取時由呼叫端（loader）把關。
    pub fn from_parts(
        name: impl Into<String>,
        tiles: Vec<Vec<TerrainTile>>,
        units: Option<Vec<Unit>>,
    ) -> Result<Self> {
        let func = "Terrain::from_parts";
        let width = tiles.len() as Coord;
        let height = tiles.first().map_or(0, |column| column.len()) as Coord;
        check_dimensions(func, width, height)?;
        let units = units.ok_or(Error::InvalidParameter { func })?;
        Ok(Terrain {
            name: name.into(),
            tiles,
            units,
            observer: None,
        })
    }

    pub fn width(&self) -> Coord {
        self.tiles.len() as Coord
    }

    pub fn height(&self) -> Coord {
        self.tiles.first().map_or(0, |column| column.len()) as Coord
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 取得格子地形；座標超界回傳 None
    pub fn tile_type(&self, pos: Pos) -> Option<TerrainTile> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        self.tiles.get(x)?.get(y).copied()
    }

    /// 唯讀地形陣列（欄主序）
    pub fn tiles(&self) -> &[Vec<TerrainTile>] {
        &self.tiles
    }

    /// 唯讀單位列表；所有變更須透過 `Terrain` 的方法
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// 取得指定座標上的單位
    pub fn unit_at(&self, pos: Pos) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.pos == pos)
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        0 <= pos.x && pos.x < self.width() && 0 <= pos.y && pos.y < self.height()
    }

    // 佔用只看單位，與格子地形無關
    fn is_position_occupied(&self, pos: Pos) -> bool {
        self.units.iter().any(|unit| unit.pos == pos)
    }

    /// 重新命名，無條件成功
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
        let name = self.name.clone();
        self.emit(TerrainEvent::Renamed { name });
    }

    /// 調整地圖尺寸
    ///
    /// 保留重疊矩形內的地形，其餘填回平原；超出新邊界的單位被移除，
    /// 留下的單位維持原本相對順序。尺寸低於最小值時回報錯誤且不變更。
    pub fn resize(&mut self, width: Coord, height: Coord) -> Result<()> {
        check_dimensions("Terrain::resize", width, height)?;
        let mut tiles = vec![vec![TerrainTile::Plain; height as usize]; width as usize];
        let copy_width = self.width().min(width) as usize;
        let copy_height = self.height().min(height) as usize;
        for (x, column) in tiles.iter_mut().enumerate().take(copy_width) {
            column[..copy_height].copy_from_slice(&self.tiles[x][..copy_height]);
        }
        self.tiles = tiles;
        self.units
            .retain(|unit| unit.pos.x < width && unit.pos.y < height);
        self.emit(TerrainEvent::Resized { width, height });
        Ok(())
    }

    /// 設定格子地形；超界或與現值相同時不動作並回傳 false
    /// （相同值視為無變更，可免去多餘的變更通知）
    pub fn set_tile(&mut self, tile: TerrainTile, pos: Pos) -> bool {
        if !self.in_bounds(pos) || self.tile_type(pos) == Some(tile) {
            return false;
        }
        self.tiles[pos.x as usize][pos.y as usize] = tile;
        self.emit(TerrainEvent::TileChanged { tile, pos });
        true
    }

    /// 新增單位；座標超界或已有單位時回傳 false
    pub fn add_unit(&mut self, unit: Unit) -> bool {
        if !self.in_bounds(unit.pos) || self.is_position_occupied(unit.pos) {
            return false;
        }
        let pos = unit.pos;
        self.units.push(unit);
        self.emit(TerrainEvent::UnitAdded { pos });
        true
    }

    /// 移除指定座標上的單位；該格無單位時回傳 false
    pub fn delete_unit(&mut self, pos: Pos) -> bool {
        let Some(index) = self.units.iter().position(|unit| unit.pos == pos) else {
            return false;
        };
        let _ = self.units.remove(index);
        self.emit(TerrainEvent::UnitRemoved { pos });
        true
    }

    /// 把 `from` 上的單位移到 `to`
    ///
    /// 下列情況回傳 false 且不變更：`from` 無單位、`to` 超界、
    /// `to` 已有其他單位。移回原格視為成功（座標不變）。
    pub fn move_unit(&mut self, from: Pos, to: Pos) -> bool {
        if !self.in_bounds(to) {
            return false;
        }
        let Some(index) = self.units.iter().position(|unit| unit.pos == from) else {
            return false;
        };
        let occupied_by_other = self
            .units
            .iter()
            .enumerate()
            .any(|(i, unit)| i != index && unit.pos == to);
        if occupied_by_other {
            return false;
        }
        self.units[index].pos = to;
        self.emit(TerrainEvent::UnitMoved { from, to });
        true
    }

    /// 變更指定座標單位的陣營；該格無單位時回傳 false
    pub fn set_unit_faction(&mut self, pos: Pos, faction: Faction) -> bool {
        let Some(unit) = self.units.iter_mut().find(|unit| unit.pos == pos) else {
            return false;
        };
        unit.faction = faction;
        self.emit(TerrainEvent::FactionChanged { pos, faction });
        true
    }

    /// 變更指定座標單位的兵種；該格無單位時回傳 false
    pub fn set_unit_battle_class(&mut self, pos: Pos, battle_class: BattleClass) -> bool {
        let Some(unit) = self.units.iter_mut().find(|unit| unit.pos == pos) else {
            return false;
        };
        unit.battle_class = battle_class;
        self.emit(TerrainEvent::BattleClassChanged { pos, battle_class });
        true
    }

    /// 註冊觀察者；之後每次成功變更都會收到事件
    pub fn set_observer(&mut self, observer: impl FnMut(&TerrainEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn emit(&mut self, event: TerrainEvent) {
        if let Some(observer) = &mut self.observer {
            observer(&event);
        }
    }
}

impl fmt::Debug for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terrain")
            .field("name", &self.name)
            .field("tiles", &self.tiles)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

impl Clone for Terrain {
    // 觀察者不隨複製帶入
    fn clone(&self) -> Self {
        Terrain {
            name: self.name.clone(),
            tiles: self.tiles.clone(),
            units: self.units.clone(),
            observer: None,
        }
    }
}

// 等值比較：名稱、逐格地形與單位集合（順序無關）；觀察者不參與比較
impl PartialEq for Terrain {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.tiles == other.tiles
            && self.units.len() == other.units.len()
            && self.units.iter().all(|unit| other.units.contains(unit))
    }
}

impl Eq for Terrain {}
