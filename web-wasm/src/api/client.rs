//! /search と /details への multipart POST
//!
//! 失敗の分類:
//! - 転送失敗・復号失敗 → Error::Network
//! - 非2xx応答 → Error::Api
//! - found = false の応答は成功（「確信できる一致なし」という結果）

use manga_scan_common::{Error, Lang, Result, SearchResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::config::API_URL;

/// 画像で検索する
///
/// multipart フィールド: file（バイナリ）, lang（2文字コード）,
/// include_nsfw（"true"/"false"）
pub async fn search_by_image(
    file: &File,
    lang: Lang,
    include_nsfw: bool,
) -> Result<SearchResult> {
    let form = FormData::new().map_err(|e| js_error("form", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| js_error("form", e))?;
    form.append_with_str("lang", lang.code())
        .map_err(|e| js_error("form", e))?;
    form.append_with_str("include_nsfw", if include_nsfw { "true" } else { "false" })
        .map_err(|e| js_error("form", e))?;

    post_form("/search", &form).await
}

/// タイトルで詳細を取得する
///
/// 代替候補や履歴エントリを選択したときに使う。
pub async fn fetch_details_by_title(title: &str) -> Result<SearchResult> {
    let form = FormData::new().map_err(|e| js_error("form", e))?;
    form.append_with_str("title", title)
        .map_err(|e| js_error("form", e))?;

    post_form("/details", &form).await
}

/// multipart POST の共通処理
///
/// Content-Type は指定しない（boundary はブラウザが付ける）。
async fn post_form(path: &str, form: &FormData) -> Result<SearchResult> {
    let url = format!("{}{}", API_URL, path);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_error("request", e))?;

    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("response", e))?;

    if !resp.ok() {
        return Err(Error::Api(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| js_error("body", e))?)
        .await
        .map_err(|e| js_error("body", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Network(format!("decode: {e}")))
}

fn js_error(context: &str, value: JsValue) -> Error {
    Error::Network(format!("{context}: {value:?}"))
}
