//! アップロード→切り抜き→検索→結果 のワークフロー状態機械
//!
//! ファイルハンドル型をジェネリックにしてあるので、遷移はすべて
//! ブラウザ無しでテストできる。リクエストには単調増加のトークンを
//! 発行し、リセットや後続リクエストで古くなった応答は適用しない。

use crate::merge::apply_details_update;
use crate::types::SearchResult;
use crate::validate::{self, FileError, FileMeta};

/// ワークフローの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// ファイル未選択
    Idle,
    /// ファイル選択済み・検索前
    Preview,
    /// 切り抜きオーバーレイ表示中
    Cropping,
    /// 画像検索リクエスト飛行中
    Searching,
    /// 結果表示（found に関わらず）
    Result,
}

/// セッションの状態一式
///
/// `F` はプラットフォームのファイルハンドル（ブラウザでは File と
/// プレビューURL、テストでは文字列）。
#[derive(Debug, Clone)]
pub struct Workflow<F> {
    phase: Phase,
    file: Option<F>,
    result: Option<SearchResult>,
    /// 現在有効なリクエストのトークン
    seq: u64,
}

impl<F> Default for Workflow<F> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            file: None,
            result: None,
            seq: 0,
        }
    }
}

impl<F> Workflow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// ファイル選択。検証に落ちたら状態は変わらない
    pub fn select_file(&mut self, file: F, meta: &FileMeta) -> Result<(), FileError> {
        validate::validate(meta)?;
        self.file = Some(file);
        self.phase = Phase::Preview;
        Ok(())
    }

    /// 切り抜きオーバーレイを開く
    pub fn request_crop(&mut self) {
        if self.phase == Phase::Preview {
            self.phase = Phase::Cropping;
        }
    }

    /// 切り抜き確定。作業ファイルを差し替えてプレビューへ戻る
    pub fn apply_crop(&mut self, cropped: F) -> Option<F> {
        if self.phase != Phase::Cropping {
            return None;
        }
        self.phase = Phase::Preview;
        self.file.replace(cropped)
    }

    /// 切り抜き中止。ファイルは変更しない
    pub fn cancel_crop(&mut self) {
        if self.phase == Phase::Cropping {
            self.phase = Phase::Preview;
        }
    }

    /// プレビューを破棄して未選択へ戻る。外したファイルを返す
    pub fn cancel_selection(&mut self) -> Option<F> {
        if self.phase != Phase::Preview {
            return None;
        }
        self.phase = Phase::Idle;
        self.file.take()
    }

    /// 画像検索を開始し、応答照合用のトークンを返す
    pub fn begin_search(&mut self) -> u64 {
        self.seq += 1;
        if self.file.is_some() {
            self.phase = Phase::Searching;
        }
        self.seq
    }

    /// 検索成功の応答を適用する。古いトークンなら捨てて false
    pub fn complete_search(&mut self, token: u64, result: SearchResult) -> bool {
        if token != self.seq {
            return false;
        }
        self.result = Some(result);
        self.phase = Phase::Result;
        true
    }

    /// 検索失敗。ファイルを保持したままプレビューへ戻す
    pub fn fail_search(&mut self, token: u64) -> bool {
        if token != self.seq {
            return false;
        }
        self.phase = Phase::Preview;
        true
    }

    /// タイトル詳細の取得を開始する
    ///
    /// 結果表示中（候補選択）と未選択（履歴選択）の両方から呼ばれる。
    /// 段階は動かさない。
    pub fn begin_details(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// 詳細取得の成功を適用する。候補リストは維持される
    pub fn complete_details(
        &mut self,
        token: u64,
        details: SearchResult,
        selected_cover: Option<String>,
    ) -> bool {
        if token != self.seq {
            return false;
        }
        self.result = Some(apply_details_update(
            self.result.as_ref(),
            details,
            selected_cover,
        ));
        self.phase = Phase::Result;
        true
    }

    /// 詳細取得の失敗。表示中の結果には触らない
    pub fn fail_details(&mut self, token: u64) -> bool {
        token == self.seq
    }

    /// 全状態を破棄して未選択へ。飛行中の応答はトークンで無効になる
    pub fn reset(&mut self) -> Option<F> {
        self.phase = Phase::Idle;
        self.result = None;
        self.seq += 1;
        self.file.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_png(size_mb: f64) -> FileMeta {
        FileMeta {
            content_type: "image/png".to_string(),
            size_bytes: size_mb * 1024.0 * 1024.0,
        }
    }

    fn found_result(title: &str, confidence: f64) -> SearchResult {
        SearchResult {
            found: true,
            title: Some(title.to_string()),
            similarity_confidence: confidence,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let wf = Workflow::<String>::new();
        assert_eq!(wf.phase(), Phase::Idle);
        assert!(wf.file().is_none());
        assert!(wf.result().is_none());
    }

    #[test]
    fn test_valid_file_moves_to_preview() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .expect("検証に落ちた");

        assert_eq!(wf.phase(), Phase::Preview);
        assert_eq!(wf.file().map(String::as_str), Some("cover.png"));
    }

    #[test]
    fn test_invalid_file_stays_idle() {
        let mut wf = Workflow::new();

        let err = wf
            .select_file(
                "doc.pdf".to_string(),
                &FileMeta {
                    content_type: "application/pdf".to_string(),
                    size_bytes: 1024.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, FileError::UnsupportedType(_)));
        assert_eq!(wf.phase(), Phase::Idle);
        assert!(wf.file().is_none());

        let err = wf
            .select_file("big.png".to_string(), &meta_png(11.0))
            .unwrap_err();
        assert!(matches!(err, FileError::TooLarge(_)));
        assert_eq!(wf.phase(), Phase::Idle);
    }

    #[test]
    fn test_crop_round_trip() {
        let mut wf = Workflow::new();
        wf.select_file("panel.png".to_string(), &meta_png(1.0))
            .unwrap();

        wf.request_crop();
        assert_eq!(wf.phase(), Phase::Cropping);

        // 中止はファイルに触らない
        wf.cancel_crop();
        assert_eq!(wf.phase(), Phase::Preview);
        assert_eq!(wf.file().map(String::as_str), Some("panel.png"));

        // 確定は作業ファイルを差し替える
        wf.request_crop();
        let replaced = wf.apply_crop("panel-cropped.jpg".to_string());
        assert_eq!(replaced.as_deref(), Some("panel.png"));
        assert_eq!(wf.phase(), Phase::Preview);
        assert_eq!(wf.file().map(String::as_str), Some("panel-cropped.jpg"));
    }

    #[test]
    fn test_search_success_records_result() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        let token = wf.begin_search();
        assert_eq!(wf.phase(), Phase::Searching);

        let applied = wf.complete_search(token, found_result("Naruto", 92.0));
        assert!(applied);
        assert_eq!(wf.phase(), Phase::Result);
        assert_eq!(wf.result().unwrap().title.as_deref(), Some("Naruto"));
    }

    #[test]
    fn test_search_failure_returns_to_preview() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        let token = wf.begin_search();
        assert!(wf.fail_search(token));

        // ファイルは保持され、リトライできる
        assert_eq!(wf.phase(), Phase::Preview);
        assert_eq!(wf.file().map(String::as_str), Some("cover.png"));
        assert!(wf.result().is_none());
    }

    #[test]
    fn test_not_found_is_still_a_result() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        let token = wf.begin_search();
        let not_found = SearchResult {
            found: false,
            message: Some("No match".to_string()),
            ..Default::default()
        };
        assert!(wf.complete_search(token, not_found));

        assert_eq!(wf.phase(), Phase::Result);
        assert!(!wf.result().unwrap().found);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        // 1回目の検索が飛行中に2回目を開始
        let first = wf.begin_search();
        let second = wf.begin_search();

        assert!(wf.complete_search(second, found_result("Bleach", 88.0)));
        assert_eq!(wf.result().unwrap().title.as_deref(), Some("Bleach"));

        // 1回目の遅延応答は捨てられ、表示は上書きされない
        assert!(!wf.complete_search(first, found_result("Naruto", 92.0)));
        assert_eq!(wf.result().unwrap().title.as_deref(), Some("Bleach"));
    }

    #[test]
    fn test_response_after_reset_is_discarded() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        let token = wf.begin_search();
        let dropped = wf.reset();
        assert_eq!(dropped.as_deref(), Some("cover.png"));
        assert_eq!(wf.phase(), Phase::Idle);

        assert!(!wf.complete_search(token, found_result("Naruto", 92.0)));
        assert_eq!(wf.phase(), Phase::Idle);
        assert!(wf.result().is_none());
    }

    #[test]
    fn test_details_merge_preserves_candidates() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        let token = wf.begin_search();
        let mut result = found_result("Naruto", 92.0);
        result.other_matches = vec![crate::types::CandidateMatch {
            title: Some("Naruto Gaiden".to_string()),
            similarity: 61.0,
            cover_url: Some("https://example.com/gaiden.jpg".to_string()),
        }];
        wf.complete_search(token, result);

        // 候補を選択 → 詳細取得
        let token = wf.begin_details();
        assert_eq!(wf.phase(), Phase::Result);

        let applied = wf.complete_details(
            token,
            found_result("Naruto Gaiden", 0.0),
            Some("https://example.com/gaiden.jpg".to_string()),
        );
        assert!(applied);

        let merged = wf.result().unwrap();
        assert_eq!(merged.title.as_deref(), Some("Naruto Gaiden"));
        assert_eq!(
            merged.match_image_url.as_deref(),
            Some("https://example.com/gaiden.jpg")
        );
        // 元の候補リストはそのまま
        assert_eq!(merged.other_matches.len(), 1);
    }

    #[test]
    fn test_details_failure_keeps_prior_result() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();
        let token = wf.begin_search();
        wf.complete_search(token, found_result("Naruto", 92.0));

        let token = wf.begin_details();
        assert!(wf.fail_details(token));

        assert_eq!(wf.phase(), Phase::Result);
        assert_eq!(wf.result().unwrap().title.as_deref(), Some("Naruto"));
    }

    #[test]
    fn test_history_selection_from_idle() {
        let mut wf = Workflow::<String>::new();

        let token = wf.begin_details();
        let applied = wf.complete_details(
            token,
            found_result("One Piece", 0.0),
            Some("https://example.com/op.jpg".to_string()),
        );
        assert!(applied);

        assert_eq!(wf.phase(), Phase::Result);
        let result = wf.result().unwrap();
        assert_eq!(result.title.as_deref(), Some("One Piece"));
        assert_eq!(result.match_image_url.as_deref(), Some("https://example.com/op.jpg"));
    }

    #[test]
    fn test_cancel_selection_returns_file() {
        let mut wf = Workflow::new();
        wf.select_file("cover.png".to_string(), &meta_png(2.0))
            .unwrap();

        let dropped = wf.cancel_selection();
        assert_eq!(dropped.as_deref(), Some("cover.png"));
        assert_eq!(wf.phase(), Phase::Idle);
    }
}
