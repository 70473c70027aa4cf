//! 浏览器 HTTP 传输
//!
//! 基于 `gloo-net` 的 fetch 实现 `orbit::HttpClient`。
//! multipart 请求体转换为 `FormData`，由浏览器生成 boundary。

use gloo_net::http::{Request, RequestBuilder};
use orbit::shared::protocol::HttpMethod;
use orbit::{HttpBody, HttpClient, HttpRequest, HttpResponse, MultipartForm, TransportError};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

fn js_error(e: JsValue) -> TransportError {
    TransportError::RequestBuild(format!("{:?}", e))
}

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value).map_err(js_error)?;
    }

    if let Some(file) = &form.file {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
            .map_err(js_error)?;
    }
    Ok(data)
}

/// fetch 传输层，无状态
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = req
            .headers
            .iter()
            .fold(builder(req.method, &req.url), |b, (key, value)| {
                b.header(key, value)
            });

        let request = match &req.body {
            None => builder.build(),
            Some(HttpBody::Json(text)) => builder.body(text.as_str()),
            Some(HttpBody::Multipart(form)) => builder.body(to_form_data(form)?),
        }
        .map_err(|e| TransportError::RequestBuild(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::ResponseRead(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
