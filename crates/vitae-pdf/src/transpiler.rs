//! Layout to Typst markup transpiler
//!
//! Converts layout blocks to Typst markup strings. Resume text is always
//! emitted as a Typst string literal, never as raw markup, so characters such
//! as `*`, `#` or `_` in the data print as themselves.

use crate::layout::{Block, ColumnRow, PageSetup, Span, Style, COLUMN_SPLIT};

/// Transpiler for converting layout blocks to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a full document: page setup followed by every block
    pub fn transpile(title: &str, page: &PageSetup, blocks: &[Block]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: {})\n",
            string_literal(title)
        ));
        output.push_str(&format!(
            "#set page(width: {}pt, height: {}pt, margin: {}pt)\n",
            page.width, page.height, page.margin
        ));
        output.push_str("#set text(size: 10pt)\n\n");

        for block in blocks {
            output.push_str(&Self::transpile_block(block));
            output.push('\n');
        }

        output
    }

    /// Transpile a single block
    fn transpile_block(block: &Block) -> String {
        match block {
            Block::Title(name) => format!(
                "#align(center, text(size: 24pt, weight: \"bold\", {}))\n",
                string_literal(name)
            ),

            Block::Centered(text) => format!("#align(center, {})\n", string_literal(text)),

            Block::Spacer(points) => format!("#v({}pt)\n", points),

            Block::SectionHeading(title) => format!(
                "#text(size: 14pt, weight: \"bold\", {})\n",
                string_literal(title)
            ),

            Block::Rule => "#line(length: 100%, stroke: 1pt + black)\n".to_string(),

            Block::Columns(rows) => Self::transpile_columns(rows),

            Block::Paragraph(spans) => {
                let mut output = String::new();
                for span in spans {
                    output.push('#');
                    output.push_str(&Self::transpile_span(span));
                }
                output.push('\n');
                output
            }

            Block::Bullets(items) => {
                let mut output = String::from("#list(\n  indent: 20pt,\n");
                for item in items {
                    output.push_str(&format!("  {},\n", string_literal(item)));
                }
                output.push_str(")\n");
                output
            }
        }
    }

    /// Transpile a two-column table as a grid
    fn transpile_columns(rows: &[ColumnRow]) -> String {
        let (left, right) = COLUMN_SPLIT;
        let mut output = format!(
            "#grid(\n  columns: ({}%, {}%),\n  inset: 5pt,\n",
            percent(left),
            percent(right)
        );

        for row in rows {
            let left = row
                .left
                .as_ref()
                .map(Self::transpile_span)
                .unwrap_or_else(|| "[]".to_string());
            let right = row
                .right
                .as_ref()
                .map(|span| format!("align(right, {})", Self::transpile_span(span)))
                .unwrap_or_else(|| "[]".to_string());
            output.push_str(&format!("  {}, {},\n", left, right));
        }

        output.push_str(")\n");
        output
    }

    /// Transpile a styled run as a code-mode expression
    fn transpile_span(span: &Span) -> String {
        let text = string_literal(&span.text);
        match span.style {
            Style::Plain => text,
            Style::Bold => format!("strong({})", text),
            Style::Italic => format!("emph({})", text),
        }
    }
}

fn percent(share: f32) -> u32 {
    (share * 100.0).round() as u32
}

/// Quote text as a Typst string literal
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
