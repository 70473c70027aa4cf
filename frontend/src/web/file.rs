//! 图片文件选择与读取

use orbit::{FilePart, TransportError};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// 为本地文件创建预览用的 object URL
pub fn object_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}

/// 提交时才读取文件内容
pub async fn read_file_part(file: &File, field: &str) -> Result<FilePart, TransportError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| TransportError::RequestBuild(format!("failed to read {}: {:?}", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let content_type = match file.type_() {
        t if t.is_empty() => FALLBACK_CONTENT_TYPE.to_string(),
        t => t,
    };

    Ok(FilePart {
        field: field.to_string(),
        file_name: file.name(),
        content_type,
        bytes,
    })
}
