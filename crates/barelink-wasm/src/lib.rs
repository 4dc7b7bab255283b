use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    wrap_paragraph: Option<bool>,
    link_rel: Option<String>,
    sanitized: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLink {
    href: String,
    text: String,
    start: usize,
    end: usize,
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> Result<String, JsValue> {
    render_html_with_options(source, JsValue::UNDEFINED)
}

#[wasm_bindgen]
pub fn render_html_with_options(source: &str, options: JsValue) -> Result<String, JsValue> {
    let options = options_from_js(options)?;
    Ok(render(source, options))
}

#[wasm_bindgen]
pub fn find_links(source: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&collect_links(source))
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn options_from_js(value: JsValue) -> Result<RenderOptions, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(RenderOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn render(source: &str, options: RenderOptions) -> String {
    let emit_options = barelink_core::HtmlEmitOptions {
        wrap_paragraph: options.wrap_paragraph.unwrap_or(false),
        link_rel: options.link_rel,
    };
    if options.sanitized.unwrap_or(false) {
        barelink_core::emit_html_sanitized_with_options(source, &emit_options)
    } else {
        barelink_core::emit_html_with_options(source, &emit_options)
    }
}

fn collect_links(source: &str) -> Vec<JsLink> {
    barelink_core::find_links(source)
        .into_iter()
        .map(|link| JsLink {
            href: link.href,
            text: link.text,
            start: link.span.start,
            end: link.span.end,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{RenderOptions, collect_links, render};

    #[test]
    fn render_applies_options() {
        let options = RenderOptions {
            wrap_paragraph: Some(true),
            link_rel: None,
            sanitized: None,
        };
        assert_eq!(
            render("www.eclipse.org", options),
            "<p><a href=\"http://www.eclipse.org\">www.eclipse.org</a></p>"
        );
    }

    #[test]
    fn links_carry_offsets() {
        let links = collect_links("x https://eclipse.org.");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://eclipse.org");
        assert_eq!((links[0].start, links[0].end), (2, 21));
    }
}
