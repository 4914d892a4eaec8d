//! Split assistant markdown into paragraph and fenced-code blocks so a
//! renderer can treat each kind differently.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownBlock {
    /// Prose lines between fences, newlines preserved.
    Paragraph(String),
    /// Contents of a ``` fence. `language` is the info string, possibly empty.
    Code { language: String, code: String },
}

/// Split `markdown` on ``` fences.
///
/// An unclosed fence runs to the end of the input. Blank-only paragraphs are
/// dropped.
pub fn split_blocks(markdown: &str) -> Vec<MarkdownBlock> {
    let mut blocks = Vec::new();
    let mut prose = String::new();
    let mut code: Option<(String, String)> = None;

    for line in markdown.lines() {
        let is_fence = line.starts_with("```");
        if let Some((language, buf)) = code.as_mut() {
            if is_fence {
                blocks.push(MarkdownBlock::Code {
                    language: std::mem::take(language),
                    code: std::mem::take(buf),
                });
                code = None;
            } else {
                buf.push_str(line);
                buf.push('\n');
            }
        } else if is_fence {
            flush_prose(&mut prose, &mut blocks);
            let language = line.trim_start_matches('`').trim().to_string();
            code = Some((language, String::new()));
        } else {
            prose.push_str(line);
            prose.push('\n');
        }
    }

    if let Some((language, code)) = code {
        if !code.is_empty() {
            blocks.push(MarkdownBlock::Code { language, code });
        }
    }
    flush_prose(&mut prose, &mut blocks);

    blocks
}

fn flush_prose(prose: &mut String, blocks: &mut Vec<MarkdownBlock>) {
    if !prose.trim().is_empty() {
        blocks.push(MarkdownBlock::Paragraph(std::mem::take(prose)));
    }
    prose.clear();
}
