use serde::{Deserialize, Serialize};

mod error;
mod event;
mod loader;
mod loader_schema;
mod terrain;
mod terrain_list;
mod unit;

pub use error::*;
pub use event::*;
pub use loader::*;
pub use loader_schema::*;
pub use terrain::*;
pub use terrain_list::*;
pub use unit::*;

// 有號座標：單位在放入地圖前允許任意座標（含負數），
// 邊界檢查只在放入地圖時進行
pub type Coord = i32;

/// 地圖最小寬度
pub const MIN_WIDTH: Coord = 15;
/// 地圖最小高度
pub const MIN_HEIGHT: Coord = 10;

/// 地圖座標
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Pos {
    pub x: Coord,
    pub y: Coord,
}
