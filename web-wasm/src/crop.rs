//! キャンバスによる切り抜き
//!
//! 表示中の画像から矩形を切り出し、JPEGの File に作り直す。
//! 選択矩形は画面座標で作られ、scaled() で自然解像度へ換算する。

use std::cell::RefCell;
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::channel::oneshot;
use manga_scan_common::{Error, Result};
use wasm_bindgen::prelude::*;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, File, FilePropertyBag, HtmlCanvasElement,
    HtmlImageElement,
};

/// 切り抜き後のファイル名
const CROPPED_FILE_NAME: &str = "cropped.jpg";

/// 切り抜き矩形（左上原点）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    /// ドラッグの始点と現在位置から正規化した矩形を作る
    pub fn from_drag(start: (f64, f64), current: (f64, f64)) -> Self {
        let x = start.0.min(current.0);
        let y = start.1.min(current.1);
        Self {
            x,
            y,
            width: (start.0 - current.0).abs(),
            height: (start.1 - current.1).abs(),
        }
    }

    /// 検索に足る大きさか
    pub fn is_usable(&self) -> bool {
        self.width >= 8.0 && self.height >= 8.0
    }

    /// 表示座標 → 自然解像度の換算
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Data URLからBase64データ部分を抽出
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// 画像URLの矩形部分をJPEGとして切り出した File を返す
///
/// `rect` は自然解像度のピクセル座標。
pub async fn crop_to_file(src_url: &str, rect: CropRect) -> Result<File> {
    let image = load_image(src_url).await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Image("no document".to_string()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| Error::Image("not a canvas".to_string()))?;
    canvas.set_width(rect.width.max(1.0) as u32);
    canvas.set_height(rect.height.max(1.0) as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| Error::Image("no 2d context".to_string()))?
        .dyn_into()
        .map_err(|_| Error::Image("not a 2d context".to_string()))?;

    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        &image,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        0.0,
        0.0,
        rect.width,
        rect.height,
    )
    .map_err(js_error)?;

    let data_url = canvas
        .to_data_url_with_type("image/jpeg")
        .map_err(js_error)?;
    data_url_to_file(&data_url, CROPPED_FILE_NAME)
}

/// 画像の読み込みを onload/onerror で待つ
async fn load_image(src: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new().map_err(js_error)?;

    let (tx, rx) = oneshot::channel::<std::result::Result<(), ()>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_load = Rc::clone(&tx);
    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(tx) = tx_load.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    }) as Box<dyn FnMut(_)>);

    let tx_error = Rc::clone(&tx);
    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(tx) = tx_error.borrow_mut().take() {
            let _ = tx.send(Err(()));
        }
    }) as Box<dyn FnMut(_)>);

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    image.set_cross_origin(Some("anonymous"));
    image.set_src(src);

    match rx.await {
        Ok(Ok(())) => Ok(image),
        Ok(Err(())) => Err(Error::Image("failed to load image".to_string())),
        Err(_) => Err(Error::Image("image load interrupted".to_string())),
    }
}

/// Data URL → File の組み立て
fn data_url_to_file(data_url: &str, file_name: &str) -> Result<File> {
    let payload = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::Image("malformed data URL".to_string()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::Image(format!("base64: {e}")))?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&array.buffer());

    let blob_options = BlobPropertyBag::new();
    blob_options.set_type("image/jpeg");
    let blob = Blob::new_with_u8_array_sequence_and_options(&blob_parts, &blob_options)
        .map_err(js_error)?;

    let file_parts = js_sys::Array::new();
    file_parts.push(&blob);

    let file_options = FilePropertyBag::new();
    file_options.set_type("image/jpeg");
    File::new_with_blob_sequence_and_options(&file_parts, file_name, &file_options)
        .map_err(js_error)
}

fn js_error(value: JsValue) -> Error {
    Error::Image(format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64_from_data_url() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(
            extract_base64_from_data_url(data_url),
            Some("/9j/4AAQSkZJRg==")
        );
        assert_eq!(extract_base64_from_data_url("no comma here"), None);
    }

    #[test]
    fn test_from_drag_normalizes_direction() {
        // 右下→左上にドラッグしても同じ矩形になる
        let a = CropRect::from_drag((10.0, 20.0), (110.0, 220.0));
        let b = CropRect::from_drag((110.0, 220.0), (10.0, 20.0));
        assert_eq!(a, b);
        assert_eq!(a.x, 10.0);
        assert_eq!(a.y, 20.0);
        assert_eq!(a.width, 100.0);
        assert_eq!(a.height, 200.0);
    }

    #[test]
    fn test_is_usable() {
        assert!(CropRect::from_drag((0.0, 0.0), (8.0, 8.0)).is_usable());
        assert!(!CropRect::from_drag((0.0, 0.0), (7.0, 100.0)).is_usable());
        assert!(!CropRect::from_drag((5.0, 5.0), (5.0, 5.0)).is_usable());
    }

    #[test]
    fn test_scaled() {
        let rect = CropRect {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        };
        let scaled = rect.scaled(2.5);
        assert_eq!(scaled.x, 25.0);
        assert_eq!(scaled.y, 50.0);
        assert_eq!(scaled.width, 75.0);
        assert_eq!(scaled.height, 100.0);
    }
}
