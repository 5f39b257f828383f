//! Console rendering of fetched pages

use aoc_http_client::html_to_wrapped_text;

/// Column at which rendered pages are wrapped
pub const WRAP_WIDTH: usize = 80;

/// Render an HTML fragment as plain text wrapped at [`WRAP_WIDTH`]
///
/// `<pre>` blocks keep their layout and are never wrapped.
pub fn render_html(html: &str) -> String {
    html_to_wrapped_text(html, WRAP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html_wraps_paragraphs() {
        let sentence = "The elves need your help. ".repeat(8);
        let rendered = render_html(&format!("<main><p>{}</p></main>", sentence));

        assert!(rendered.lines().count() > 1);
        assert!(rendered.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
    }

    #[test]
    fn test_render_html_keeps_example_grid() {
        let row = format!("#....   .#{}", ".".repeat(WRAP_WIDTH));
        let rendered = render_html(&format!(
            "<main><article><p>For example:</p><pre><code>{}\n{}\n</code></pre></article></main>",
            row, row
        ));

        assert_eq!(rendered, format!("For example:\n\n{}\n{}", row, row));
    }

    #[test]
    fn test_render_html_long_bullet_keeps_indent() {
        let rendered = render_html(&format!("<ul><li>{}</li></ul>", "word ".repeat(30)));

        assert!(rendered.starts_with("  - word"));
        assert!(rendered.lines().skip(1).all(|l| l.starts_with("    word")));
    }
}
