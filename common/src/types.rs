//! 検索結果の型定義
//!
//! バックエンドとの間で共有されるワイヤ型:
//! - SearchResult: /search と /details の応答
//! - CandidateMatch: 代替候補（otras_coincidencias）
//! - Author / RelatedWork / ExternalLink / RelatedManga: 付随メタデータ
//!
//! ワイヤ上のフィールド名はバックエンド（スペイン語）の命名。
//! 欠損フィールドはすべて default で許容する。

use serde::{Deserialize, Serialize};

/// 画像検索・タイトル検索の応答
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// 信頼度しきい値を超えた一致があったか
    pub found: bool,

    /// 視覚的一致の確信度（0〜100）
    pub similarity_confidence: f64,

    #[serde(rename = "titulo")]
    pub title: Option<String>,

    /// 推定掲載章（例: "Chapter 139"）
    #[serde(rename = "capitulo_estimado")]
    pub estimated_chapter: Option<String>,

    /// 推定ページ
    #[serde(rename = "pagina_estimada")]
    pub estimated_page: Option<String>,

    #[serde(rename = "sinopsis")]
    pub synopsis: Option<String>,

    #[serde(rename = "sinopsis_en")]
    pub synopsis_en: Option<String>,

    #[serde(rename = "sinopsis_es")]
    pub synopsis_es: Option<String>,

    /// 表紙画像URL
    #[serde(rename = "portada_url")]
    pub cover_url: Option<String>,

    /// 一致したパネル/表紙のURL
    pub match_image_url: Option<String>,

    /// 代替候補リスト
    #[serde(rename = "otras_coincidencias")]
    pub other_matches: Vec<CandidateMatch>,

    #[serde(rename = "autores")]
    pub authors: Vec<Author>,

    /// 同作者の他作品
    #[serde(rename = "otras_obras")]
    pub related_works: Vec<RelatedWork>,

    pub external_links: Vec<ExternalLink>,

    pub chapters: Option<u32>,

    /// 連載状態（"Publishing" / "Finished" など）
    pub status: Option<String>,

    /// 掲載期間（例: "Sep 1999 to Nov 2014"）
    pub published: Option<String>,

    pub score: Option<f64>,

    /// 前日譚・続編などの関連作品
    pub related_manga: Vec<RelatedManga>,

    /// 低信頼一致などの注意書き
    pub warning: Option<String>,

    /// found = false のときの理由
    pub message: Option<String>,
}

/// 代替候補
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateMatch {
    #[serde(rename = "titulo")]
    pub title: Option<String>,

    /// 類似度（0〜100）
    pub similarity: f64,

    #[serde(rename = "portada_url")]
    pub cover_url: Option<String>,
}

/// 作者情報
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: Option<String>,
    pub url: Option<String>,
    pub mal_id: Option<i64>,
    pub image_url: Option<String>,
}

/// 同作者の他作品
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedWork {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// 外部リンク（公式サイトなど）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLink {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// 関連作品（続編・外伝など）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedManga {
    pub relation_type: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_default() {
        let result = SearchResult::default();
        assert!(!result.found);
        assert_eq!(result.similarity_confidence, 0.0);
        assert!(result.title.is_none());
        assert!(result.other_matches.is_empty());
    }

    #[test]
    fn test_search_result_wire_names() {
        let json = r#"{
            "found": true,
            "similarity_confidence": 92.5,
            "titulo": "Naruto",
            "capitulo_estimado": "Chapter 120",
            "pagina_estimada": "14",
            "sinopsis": "A ninja story",
            "portada_url": "https://example.com/cover.jpg",
            "otras_coincidencias": [
                {"titulo": "Naruto Gaiden", "similarity": 61.0, "portada_url": "https://example.com/gaiden.jpg"}
            ],
            "autores": [{"name": "Masashi Kishimoto", "mal_id": 1879}]
        }"#;

        let result: SearchResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(result.found);
        assert_eq!(result.similarity_confidence, 92.5);
        assert_eq!(result.title.as_deref(), Some("Naruto"));
        assert_eq!(result.estimated_chapter.as_deref(), Some("Chapter 120"));
        assert_eq!(result.cover_url.as_deref(), Some("https://example.com/cover.jpg"));
        assert_eq!(result.other_matches.len(), 1);
        assert_eq!(result.other_matches[0].title.as_deref(), Some("Naruto Gaiden"));
        assert_eq!(result.other_matches[0].similarity, 61.0);
        assert_eq!(result.authors[0].mal_id, Some(1879));
    }

    #[test]
    fn test_search_result_partial_payload() {
        // found しか来ない応答でも落ちない
        let result: SearchResult =
            serde_json::from_str(r#"{"found": false, "message": "No matches found"}"#)
                .expect("デシリアライズ失敗");
        assert!(!result.found);
        assert_eq!(result.message.as_deref(), Some("No matches found"));
        assert!(result.title.is_none());
        assert!(result.authors.is_empty());
    }

    #[test]
    fn test_search_result_serialize_round_trip() {
        let result = SearchResult {
            found: true,
            title: Some("One Piece".to_string()),
            cover_url: Some("https://example.com/op.jpg".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"titulo\":\"One Piece\""));
        assert!(json.contains("\"portada_url\""));

        let back: SearchResult = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(back.title.as_deref(), Some("One Piece"));
    }

    #[test]
    fn test_related_manga_deserialize() {
        let json = r#"{"relation_type": "Sequel", "title": "Boruto", "url": "https://example.com/boruto"}"#;
        let related: RelatedManga = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(related.relation_type.as_deref(), Some("Sequel"));
        assert_eq!(related.title.as_deref(), Some("Boruto"));
    }
}
