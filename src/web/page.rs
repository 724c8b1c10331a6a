const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// The two endpoints the browser talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUrls {
    pub api_gateway_url: String,
    pub contact_api_url: String,
}

pub fn render_index(urls: &PageUrls) -> String {
    render(INDEX_TEMPLATE, |name| match name {
        "api_gateway_url" => Some(script_string(&urls.api_gateway_url)),
        "contact_api_url" => Some(script_string(&urls.contact_api_url)),
        _ => None,
    })
}

/// Fills `{{ name }}` placeholders in one pass over `template`.
///
/// Substituted text is never scanned again; unknown placeholders are kept as-is.
fn render(template: &str, value_of: impl Fn(&str) -> Option<String>) -> String {
    let mut page = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        page.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        match value_of(after_open[..end].trim()) {
            Some(value) => page.push_str(&value),
            None => page.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    page.push_str(rest);
    page
}

/// Quotes `value` as a JS string literal that is safe inside a `<script>` block.
fn script_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            // 避免提前關閉 </script> 或被解析成 HTML
            '<' => quoted.push_str("\\u003c"),
            '>' => quoted.push_str("\\u003e"),
            '&' => quoted.push_str("\\u0026"),
            '\'' => quoted.push_str("\\u0027"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
