use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将 HTML 片段转换为 DOM
///
/// 片段会被补全为完整文档（html/head/body），文本节点的相对顺序保持不变。
pub fn html_to_dom(html: &str) -> std::io::Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
}

/// 按文档顺序（深度优先）收集所有文本节点的内容
pub fn collect_text_nodes(node: &Handle, texts: &mut Vec<String>) {
    if let NodeData::Text { ref contents } = node.data {
        texts.push(contents.borrow().to_string());
    }

    for child_node in node.children.borrow().iter() {
        collect_text_nodes(child_node, texts);
    }
}
