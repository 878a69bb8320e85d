// 地圖核心錯誤型別，攜帶 function name 與失敗內容
use crate::Coord;
use std::path::PathBuf;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 地圖核心錯誤型別
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("`{func}`: 地圖尺寸 {width}x{height} 小於最小值 {min_width}x{min_height}")]
    InvalidDimensions {
        func: &'static str,
        width: Coord,
        height: Coord,
        min_width: Coord,
        min_height: Coord,
    },

    #[error("`{func}`: 參數錯誤")]
    InvalidParameter { func: &'static str },

    #[error("`{func}`: 讀寫 {path} 失敗")]
    Io {
        func: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{func}`: JSON 解析失敗")]
    Malformed {
        func: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{func}`: 地形欄位非矩形：第 {column} 欄長度 {found}，預期 {expected}")]
    NotRectangular {
        func: &'static str,
        column: usize,
        found: usize,
        expected: usize,
    },

    #[error("`{func}`: JSON 序列化失敗")]
    Serialize {
        func: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// 是否為尺寸不合法錯誤
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(self, Error::InvalidDimensions { .. })
    }

    /// 是否為資料格式錯誤（來源不可讀、形狀不符或列舉名稱未知）
    pub fn is_malformed_data(&self) -> bool {
        matches!(
            self,
            Error::Io { .. } | Error::Malformed { .. } | Error::NotRectangular { .. }
        )
    }
}
