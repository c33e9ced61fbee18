//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// ブラウザ境界（fetch / local storage / canvas）の失敗は
/// 文字列ペイロードで運ぶ。
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: status {0}")]
    Api(u16),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image error: {0}")]
    Image(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("fetch failed".to_string());
        assert_eq!(format!("{}", error), "Network error: fetch failed");
    }

    #[test]
    fn test_error_display_api() {
        let error = Error::Api(500);
        assert_eq!(format!("{}", error), "API error: status 500");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("quota exceeded".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Storage error"));
        assert!(display.contains("quota exceeded"));
    }
}
