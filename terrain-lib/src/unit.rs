//! unit.rs：
//! - 定義陣營（Faction）、兵種（BattleClass）與單位（Unit），僅負責靜態資料與屬性。
//! - 顯示名稱（Display）供 UI 使用；存檔識別名由 serde 決定，兩者分離，
//!   之後改顯示文字不會影響既有存檔。
use crate::{Coord, Pos};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// 單位陣營
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Display, EnumIter, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Faction {
    Player,
    Enemy,
    Ally,
}

/// 中世紀戰場兵種
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Display, EnumIter, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleClass {
    Lord,
    Soldier,
    Fighter,
    Myrmidon,
    Archer,
    Healer,
    Ninja,
    Thief,
    Cavalier,
    #[strum(to_string = "Pegasus Knight")]
    PegasusKnight,
    #[strum(to_string = "Wyvern Rider")]
    WyvernRider,
    Mage,
}

/// 單位：具有陣營、兵種與座標的棋子
///
/// 放入地圖前座標可為任意整數；邊界與佔用檢查在 `Terrain::add_unit` 進行。
/// 放入地圖後的變更一律透過 `Terrain` 的方法，避免繞過佔用檢查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    pub faction: Faction,
    pub battle_class: BattleClass,
    pub pos: Pos,
}

impl Unit {
    pub fn new(faction: Faction, battle_class: BattleClass, x: Coord, y: Coord) -> Self {
        Unit {
            faction,
            battle_class,
            pos: Pos { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unit_new_allows_any_coords() {
        // 放入地圖前座標不設限
        let unit = Unit::new(Faction::Enemy, BattleClass::Thief, -3, 999);
        assert_eq!(unit.faction, Faction::Enemy);
        assert_eq!(unit.battle_class, BattleClass::Thief);
        assert_eq!(unit.pos, Pos { x: -3, y: 999 });
    }

    #[test]
    fn test_unit_equality_is_structural() {
        let a = Unit::new(Faction::Player, BattleClass::Lord, 1, 2);
        let b = Unit::new(Faction::Player, BattleClass::Lord, 1, 2);
        assert_eq!(a, b);

        assert_ne!(a, Unit::new(Faction::Enemy, BattleClass::Lord, 1, 2));
        assert_ne!(a, Unit::new(Faction::Player, BattleClass::Mage, 1, 2));
        assert_ne!(a, Unit::new(Faction::Player, BattleClass::Lord, 2, 1));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Faction::Player.to_string(), "Player");
        assert_eq!(Faction::Enemy.to_string(), "Enemy");
        assert_eq!(Faction::Ally.to_string(), "Ally");

        // 顯示名稱與識別名不同的兵種
        assert_eq!(BattleClass::PegasusKnight.to_string(), "Pegasus Knight");
        assert_eq!(BattleClass::WyvernRider.to_string(), "Wyvern Rider");
        assert_eq!(BattleClass::Mage.to_string(), "Mage");
    }

    #[test]
    fn test_wire_identifiers() {
        // 存檔識別名為全大寫，與顯示名稱分離
        let v = serde_json::to_value(Faction::Player).unwrap();
        assert_eq!(v, serde_json::json!("PLAYER"));
        let v = serde_json::to_value(BattleClass::PegasusKnight).unwrap();
        assert_eq!(v, serde_json::json!("PEGASUS_KNIGHT"));
        let v = serde_json::to_value(BattleClass::WyvernRider).unwrap();
        assert_eq!(v, serde_json::json!("WYVERN_RIDER"));

        // 未知識別名無法反序列化
        let result: std::result::Result<Faction, _> =
            serde_json::from_value(serde_json::json!("BANDIT"));
        assert!(result.is_err());
    }

    #[test]
    fn test_enum_value_counts() {
        assert_eq!(Faction::iter().count(), 3);
        assert_eq!(BattleClass::iter().count(), 12);
    }
}
