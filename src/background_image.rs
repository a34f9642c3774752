use std::fmt;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, HtmlImageElement, Url};
use yew::Callback;

pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageError {
    TooLarge,
    NotAnImage,
    DecodeFailed,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::TooLarge => write!(f, "Image must be smaller than 5MB"),
            ImageError::NotAnImage => write!(f, "Please select a valid image file"),
            ImageError::DecodeFailed => write!(f, "Failed to load image. Please try again."),
        }
    }
}

impl std::error::Error for ImageError {}

/// Size is checked before type, so an oversized non-image reports its size.
pub fn validate_upload(size_bytes: f64, mime: &str) -> Result<(), ImageError> {
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge);
    }
    if !mime.starts_with("image/") {
        return Err(ImageError::NotAnImage);
    }
    Ok(())
}

/// A decoded background image together with the object URL backing it.
/// The URL must be revoked when the image is replaced or cleared.
#[derive(Clone, PartialEq)]
pub struct BackgroundImage {
    pub url: String,
    pub element: HtmlImageElement,
}

impl BackgroundImage {
    pub fn revoke(&self) {
        revoke_object_url(&self.url);
    }
}

pub fn create_object_url(file: &File) -> Result<String, JsValue> {
    Url::create_object_url_with_blob(file)
}

pub fn revoke_object_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}

/// Starts decoding `url` into a fresh image element. Exactly one of the
/// callbacks fires; the element is only handed out once it is drawable.
pub fn load_image(
    url: &str,
    on_ready: Callback<HtmlImageElement>,
    on_failed: Callback<()>,
) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;
    let ready = {
        let image = image.clone();
        Closure::once_into_js(move || on_ready.emit(image))
    };
    image.set_onload(Some(ready.unchecked_ref()));
    let failed = Closure::once_into_js(move || on_failed.emit(()));
    image.set_onerror(Some(failed.unchecked_ref()));
    image.set_src(url);
    Ok(())
}
