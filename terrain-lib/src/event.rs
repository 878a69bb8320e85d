//! 地圖變更事件
//!
//! 取代全域事件簿：由呼叫端以 `Terrain::set_observer` 注入回呼，
//! 每次成功變更後收到事件；測試可直接訂閱，不需全域狀態。
use crate::{BattleClass, Coord, Faction, Pos, TerrainTile};
use std::fmt;

/// 地圖成功變更後發出的事件；被拒絕的操作不發事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainEvent {
    Renamed { name: String },
    Resized { width: Coord, height: Coord },
    TileChanged { tile: TerrainTile, pos: Pos },
    UnitAdded { pos: Pos },
    UnitRemoved { pos: Pos },
    UnitMoved { from: Pos, to: Pos },
    FactionChanged { pos: Pos, faction: Faction },
    BattleClassChanged { pos: Pos, battle_class: BattleClass },
}

/// 地圖事件觀察者回呼型別
pub type TerrainObserver = Box<dyn FnMut(&TerrainEvent)>;

/// 座標的文字表示，如 `(3,7)`
pub fn position_to_string(pos: Pos) -> String {
    format!("({},{})", pos.x, pos.y)
}

impl fmt::Display for TerrainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainEvent::Renamed { name } => write!(f, "Renamed terrain to {name}"),
            TerrainEvent::Resized { width, height } => {
                write!(f, "Resized map to {width} x {height}")
            }
            TerrainEvent::TileChanged { tile, pos } => {
                write!(f, "Set terrain at {} to {tile}", position_to_string(*pos))
            }
            TerrainEvent::UnitAdded { pos } => {
                write!(f, "Added unit at {}", position_to_string(*pos))
            }
            TerrainEvent::UnitRemoved { pos } => {
                write!(f, "Removed unit at {}", position_to_string(*pos))
            }
            TerrainEvent::UnitMoved { to, .. } => {
                write!(f, "Moved unit to {}", position_to_string(*to))
            }
            TerrainEvent::FactionChanged { pos, faction } => write!(
                f,
                "Changed faction of unit at {} to {faction}",
                position_to_string(*pos)
            ),
            TerrainEvent::BattleClassChanged { pos, battle_class } => write!(
                f,
                "Changed battle class of unit at {} to {battle_class}",
                position_to_string(*pos)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display_messages() {
        assert_eq!(
            TerrainEvent::Renamed {
                name: "Fort".to_string()
            }
            .to_string(),
            "Renamed terrain to Fort"
        );
        assert_eq!(
            TerrainEvent::Resized {
                width: 20,
                height: 15
            }
            .to_string(),
            "Resized map to 20 x 15"
        );
        assert_eq!(
            TerrainEvent::UnitAdded {
                pos: Pos { x: 5, y: 4 }
            }
            .to_string(),
            "Added unit at (5,4)"
        );
        assert_eq!(
            TerrainEvent::TileChanged {
                tile: TerrainTile::Mountain,
                pos: Pos { x: 5, y: 4 }
            }
            .to_string(),
            "Set terrain at (5,4) to Mountain"
        );
        assert_eq!(
            TerrainEvent::FactionChanged {
                pos: Pos { x: 1, y: 2 },
                faction: Faction::Ally
            }
            .to_string(),
            "Changed faction of unit at (1,2) to Ally"
        );
    }
}
