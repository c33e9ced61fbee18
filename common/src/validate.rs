//! アップロードファイルの検証
//!
//! MIMEタイプの許可リストとサイズ上限のみ。
//! ここで弾いたファイルはネットワーク層に到達しない。

use thiserror::Error;

use crate::i18n::Lang;

/// 受け付ける画像MIMEタイプ
pub const ACCEPTED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// アップロード上限（10 MB）
pub const MAX_FILE_SIZE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// 選択されたファイルのメタデータ
///
/// サイズが f64 なのはブラウザの File.size に合わせたもの。
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub content_type: String,
    pub size_bytes: f64,
}

/// 検証エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file too large: {0} bytes")]
    TooLarge(f64),
}

impl FileError {
    /// ユーザー向けのローカライズ済みメッセージ
    pub fn message(&self, lang: Lang) -> &'static str {
        let t = lang.t();
        match self {
            FileError::UnsupportedType(_) => t.invalid_file_type,
            FileError::TooLarge(_) => t.file_too_large,
        }
    }
}

/// ファイルメタデータを検証する
pub fn validate(meta: &FileMeta) -> Result<(), FileError> {
    if !ACCEPTED_MIME_TYPES.contains(&meta.content_type.as_str()) {
        return Err(FileError::UnsupportedType(meta.content_type.clone()));
    }
    if meta.size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(FileError::TooLarge(meta.size_bytes));
    }
    Ok(())
}
