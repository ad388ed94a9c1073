/// 内容被视为 HTML 时可能出现的前缀（含CSV引号包裹的情况）
pub const HTML_MARKERS: &[&str] = &["<", "\"<"];

/// 检查内容是否像 HTML 片段
pub fn looks_like_html(content: &str) -> bool {
    HTML_MARKERS
        .iter()
        .any(|marker| content.starts_with(marker))
}
