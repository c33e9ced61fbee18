//! 詳細取得結果の部分更新ルール
//!
//! 代替候補や履歴からタイトルを選んだとき、表示中の結果を
//! 新しい詳細で置き換える。ただし候補リストだけは残す。

use crate::types::SearchResult;

/// 詳細取得の結果を表示中の結果へ適用する
///
/// - フィールドは新しい詳細で全面的に置き換える
/// - `other_matches` は表示中のリストを維持する（候補の再選択を可能にする）
/// - `selected_cover` が与えられれば一致画像として使う
///
/// 表示中の結果が無い場合（履歴からの遷移）は詳細がそのまま立つ。
pub fn apply_details_update(
    current: Option<&SearchResult>,
    mut details: SearchResult,
    selected_cover: Option<String>,
) -> SearchResult {
    if let Some(prev) = current {
        details.other_matches = prev.other_matches.clone();
    }
    if selected_cover.is_some() {
        details.match_image_url = selected_cover;
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CandidateMatch;

    fn candidate(title: &str) -> CandidateMatch {
        CandidateMatch {
            title: Some(title.to_string()),
            similarity: 60.0,
            cover_url: Some(format!("https://example.com/{title}.jpg")),
        }
    }

    #[test]
    fn test_candidate_list_is_preserved() {
        let current = SearchResult {
            found: true,
            title: Some("Naruto".to_string()),
            similarity_confidence: 92.0,
            other_matches: vec![candidate("Naruto Gaiden"), candidate("Boruto")],
            ..Default::default()
        };
        let details = SearchResult {
            found: true,
            title: Some("Naruto Gaiden".to_string()),
            synopsis: Some("The next generation".to_string()),
            ..Default::default()
        };

        let merged = apply_details_update(
            Some(&current),
            details,
            Some("https://example.com/gaiden-cover.jpg".to_string()),
        );

        // タイトルと一致画像は新しい方、候補リストは元のまま
        assert_eq!(merged.title.as_deref(), Some("Naruto Gaiden"));
        assert_eq!(
            merged.match_image_url.as_deref(),
            Some("https://example.com/gaiden-cover.jpg")
        );
        assert_eq!(merged.other_matches.len(), 2);
        assert_eq!(merged.other_matches[0].title.as_deref(), Some("Naruto Gaiden"));
        assert_eq!(merged.other_matches[1].title.as_deref(), Some("Boruto"));
    }

    #[test]
    fn test_fields_are_replaced_wholesale() {
        let current = SearchResult {
            found: true,
            title: Some("Naruto".to_string()),
            estimated_chapter: Some("Chapter 12".to_string()),
            warning: Some("low confidence".to_string()),
            ..Default::default()
        };
        let details = SearchResult {
            found: true,
            title: Some("Bleach".to_string()),
            ..Default::default()
        };

        let merged = apply_details_update(Some(&current), details, None);

        assert_eq!(merged.title.as_deref(), Some("Bleach"));
        // 詳細側に無いフィールドは引き継がない
        assert!(merged.estimated_chapter.is_none());
        assert!(merged.warning.is_none());
    }

    #[test]
    fn test_without_current_result() {
        let details = SearchResult {
            found: true,
            title: Some("One Piece".to_string()),
            ..Default::default()
        };

        let merged = apply_details_update(
            None,
            details,
            Some("https://example.com/op.jpg".to_string()),
        );

        assert_eq!(merged.title.as_deref(), Some("One Piece"));
        assert_eq!(merged.match_image_url.as_deref(), Some("https://example.com/op.jpg"));
        assert!(merged.other_matches.is_empty());
    }

    #[test]
    fn test_no_cover_keeps_details_match_image() {
        let details = SearchResult {
            found: true,
            title: Some("One Piece".to_string()),
            match_image_url: Some("https://example.com/panel.jpg".to_string()),
            ..Default::default()
        };

        let merged = apply_details_update(None, details, None);
        assert_eq!(merged.match_image_url.as_deref(), Some("https://example.com/panel.jpg"));
    }
}
