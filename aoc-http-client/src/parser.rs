//! HTML response parsing utilities

use regex::Regex;
use scraper::{ElementRef, Html, Node};
use std::ops::Range;
use std::sync::OnceLock;

fn main_fragment_regex() -> &'static Regex {
    static MAIN_FRAGMENT: OnceLock<Regex> = OnceLock::new();
    MAIN_FRAGMENT.get_or_init(|| Regex::new(r"(?is)<main>.*</main>").unwrap())
}

/// Extract the `<main>...</main>` region of a page, tags included
///
/// Matching is case-insensitive and spans newlines. It runs from the first
/// `<main>` to the last `</main>`. A body without such a region (puzzle
/// inputs, for example) is returned unchanged.
///
/// # Example
///
/// ```
/// use aoc_http_client::extract_main_fragment;
///
/// assert_eq!(extract_main_fragment("<html><main>X</main></html>"), "<main>X</main>");
/// assert_eq!(extract_main_fragment("1\n2\n3\n"), "1\n2\n3\n");
/// ```
pub fn extract_main_fragment(body: &str) -> &str {
    main_fragment_regex()
        .find(body)
        .map_or(body, |m| m.as_str())
}

const SKIPPED: &[&str] = &["script", "style", "head", "title", "noscript"];

const PARAGRAPH_BLOCKS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "ul", "ol", "article", "main", "section",
    "blockquote", "table",
];

const LINE_BLOCKS: &[&str] = &["div", "tr", "header", "footer", "nav", "form"];

/// Accumulates rendered text, collapsing whitespace outside `<pre>`
#[derive(Default)]
struct TextWriter {
    out: String,
    pre_depth: usize,
    pre_start: usize,
    /// Byte ranges of `out` holding preformatted text
    pre_spans: Vec<Range<usize>>,
    space_pending: bool,
}

impl TextWriter {
    fn push_text(&mut self, text: &str) {
        if self.pre_depth > 0 {
            self.out.push_str(text);
            return;
        }

        for c in text.chars() {
            if c.is_whitespace() {
                self.space_pending = true;
                continue;
            }
            if self.space_pending && !self.out.is_empty() && !self.out.ends_with(['\n', ' ']) {
                self.out.push(' ');
            }
            self.space_pending = false;
            self.out.push(c);
        }
    }

    /// Make sure the output ends with at least `count` newlines
    fn break_lines(&mut self, count: usize) {
        self.space_pending = false;
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        if self.out.is_empty() {
            return;
        }

        let existing = self.out.len() - self.out.trim_end_matches('\n').len();
        for _ in existing..count {
            self.out.push('\n');
        }
    }

    fn walk(&mut self, element: ElementRef<'_>) {
        let name = element.value().name();
        if SKIPPED.contains(&name) {
            return;
        }

        match name {
            "br" => {
                self.space_pending = false;
                self.out.push('\n');
                return;
            }
            "li" => {
                self.break_lines(1);
                self.out.push_str("  - ");
            }
            "pre" => {
                self.break_lines(2);
                if self.pre_depth == 0 {
                    self.pre_start = self.out.len();
                }
                self.pre_depth += 1;
            }
            _ if PARAGRAPH_BLOCKS.contains(&name) => self.break_lines(2),
            _ if LINE_BLOCKS.contains(&name) => self.break_lines(1),
            _ => {}
        }

        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                self.walk(child_element);
            } else if let Node::Text(text) = child.value() {
                self.push_text(text);
            }
        }

        match name {
            "pre" => {
                self.pre_depth -= 1;
                if self.pre_depth == 0 {
                    self.pre_spans.push(self.pre_start..self.out.len());
                }
                self.break_lines(2);
            }
            _ if PARAGRAPH_BLOCKS.contains(&name) => self.break_lines(2),
            _ if LINE_BLOCKS.contains(&name) || name == "li" => self.break_lines(1),
            _ => {}
        }
    }

    /// Finish rendering, wrapping lines outside `<pre>` when `width` is given
    fn into_text(self, width: Option<usize>) -> String {
        let mut text = String::with_capacity(self.out.len());
        let mut offset = 0;

        for (i, line) in self.out.split('\n').enumerate() {
            if i > 0 {
                text.push('\n');
            }
            let preformatted = self.pre_spans.iter().any(|span| span.contains(&offset));
            match width {
                Some(width) if !preformatted => wrap_line(line, width, &mut text),
                _ => text.push_str(line),
            }
            offset += line.len() + 1;
        }

        text.trim_matches('\n').to_string()
    }
}

/// Append `line` to `out`, breaking it at spaces so no piece exceeds `width`
///
/// Leading indentation and the spacing between words are kept; only the run
/// of spaces at a break point is dropped. Continuation lines are indented to
/// match the first line, or to the text after a `- ` bullet. A word longer
/// than `width` ends up on a line of its own.
fn wrap_line(line: &str, width: usize, out: &mut String) {
    if line.chars().count() <= width {
        out.push_str(line);
        return;
    }

    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];
    let hanging = if body.starts_with("- ") {
        indent.len() + 2
    } else {
        indent.len()
    };

    out.push_str(indent);
    let mut column = indent.len();
    let mut gap = "";
    let mut first = true;
    let mut rest = body;

    while !rest.is_empty() {
        let (word, after) = rest.split_at(rest.find(' ').unwrap_or(rest.len()));
        let next = after.trim_start_matches(' ');
        let word_width = word.chars().count();

        if !first && column + gap.len() + word_width > width {
            out.push('\n');
            out.push_str(&" ".repeat(hanging));
            column = hanging;
        } else {
            out.push_str(gap);
            column += gap.len();
        }
        out.push_str(word);
        column += word_width;

        first = false;
        gap = &after[..after.len() - next.len()];
        rest = next;
    }
}

/// Render an HTML fragment as readable plain text
///
/// Block elements are separated by blank lines, list items are bulleted and
/// `<pre>` content keeps its layout, including leading indentation. Entities
/// are decoded. The result is not wrapped.
///
/// # Example
///
/// ```
/// use aoc_http_client::html_to_text;
///
/// let text = html_to_text("<main><h2>--- Day 1 ---</h2><p>Hello &amp; <em>welcome</em>.</p></main>");
/// assert_eq!(text, "--- Day 1 ---\n\nHello & welcome.");
/// ```
pub fn html_to_text(html: &str) -> String {
    render(html, None)
}

/// Render an HTML fragment as plain text wrapped at `width` columns
///
/// Same as [`html_to_text`], except that lines outside `<pre>` longer than
/// `width` are broken at spaces. Preformatted lines are never wrapped.
///
/// # Example
///
/// ```
/// use aoc_http_client::html_to_wrapped_text;
///
/// let text = html_to_wrapped_text("<p>one two three</p><pre>a   b   c</pre>", 8);
/// assert_eq!(text, "one two\nthree\n\na   b   c");
/// ```
pub fn html_to_wrapped_text(html: &str, width: usize) -> String {
    render(html, Some(width))
}

fn render(html: &str, width: Option<usize>) -> String {
    let fragment = Html::parse_fragment(html);
    let mut writer = TextWriter::default();
    writer.walk(fragment.root_element());
    writer.into_text(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_main_fragment() {
        assert_eq!(
            extract_main_fragment("<html><main>X</main></html>"),
            "<main>X</main>"
        );
    }

    #[test]
    fn test_extract_main_fragment_case_insensitive_multiline() {
        let body = "<html>\n<MAIN>\n<p>one</p>\n<p>two</p>\n</Main>\n<footer/></html>";
        assert_eq!(
            extract_main_fragment(body),
            "<MAIN>\n<p>one</p>\n<p>two</p>\n</Main>"
        );
    }

    #[test]
    fn test_extract_main_fragment_spans_to_last_close() {
        let body = "<main>a</main><aside>b</aside><main>c</main>";
        assert_eq!(extract_main_fragment(body), body);
    }

    #[test]
    fn test_extract_main_fragment_requires_both_tags() {
        let body = "<html><main>unterminated</html>";
        assert_eq!(extract_main_fragment(body), body);
    }

    #[test]
    fn test_html_to_text_paragraphs() {
        let text = html_to_text("<p>Hello <em>world</em></p><p>Second\n   line</p>");
        assert_eq!(text, "Hello world\n\nSecond line");
    }

    #[test]
    fn test_html_to_text_list_items() {
        let text = html_to_text("<p>Items:</p><ul><li>a</li><li><code>b</code></li></ul><p>end</p>");
        assert_eq!(text, "Items:\n\n  - a\n  - b\n\nend");
    }

    #[test]
    fn test_html_to_text_preserves_pre() {
        let text = html_to_text("<p>Example:</p><pre><code>1abc2\npqr3stu8vwx\n</code></pre><p>Done</p>");
        assert_eq!(text, "Example:\n\n1abc2\npqr3stu8vwx\n\nDone");
    }

    #[test]
    fn test_html_to_text_line_breaks_and_entities() {
        let text = html_to_text("<div>a &lt; b<br>c &gt; d</div><div>next</div>");
        assert_eq!(text, "a < b\nc > d\nnext");
    }

    #[test]
    fn test_html_to_text_skips_scripts() {
        let text = html_to_text("<main><script>var x = 1;</script><p>visible</p></main>");
        assert_eq!(text, "visible");
    }

    fn wrap(text: &str, width: usize) -> String {
        let mut out = String::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            wrap_line(line, width, &mut out);
        }
        out
    }

    #[test]
    fn test_wrap_short_lines_untouched() {
        let text = "  - indented item\n\nsecond paragraph";
        assert_eq!(wrap(text, 80), text);
    }

    #[test]
    fn test_wrap_at_spaces() {
        assert_eq!(wrap("aaa bbb ccc ddd", 7), "aaa bbb\nccc ddd");
    }

    #[test]
    fn test_wrap_long_word_kept_whole() {
        assert_eq!(wrap("a abcdefghij b", 5), "a\nabcdefghij\nb");
    }

    #[test]
    fn test_wrap_keeps_spacing_between_words() {
        assert_eq!(wrap("aaa   bbb ccc", 9), "aaa   bbb\nccc");
    }

    #[test]
    fn test_wrap_keeps_indentation() {
        assert_eq!(wrap("    alpha beta gamma", 14), "    alpha beta\n    gamma");
    }

    #[test]
    fn test_wrapped_bullet_keeps_indent() {
        let html = format!("<ul><li>{}</li></ul>", "word ".repeat(30));
        let text = html_to_wrapped_text(&html, 80);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("  - word"));
        assert!(lines[1..].iter().all(|l| l.starts_with("    word")));
        assert!(lines.iter().all(|l| l.chars().count() <= 80));
        assert_eq!(text.split_whitespace().filter(|w| *w == "word").count(), 30);
    }

    #[test]
    fn test_long_pre_line_not_wrapped() {
        let grid = format!("#....   .#{}", ".".repeat(80));
        let html = format!("<p>Example:</p><pre><code>{}\n#.#</code></pre><p>Done</p>", grid);
        let text = html_to_wrapped_text(&html, 80);

        assert_eq!(text, format!("Example:\n\n{}\n#.#\n\nDone", grid));
    }

    #[test]
    fn test_text_after_pre_is_wrapped() {
        let html = format!(
            "<pre>{}</pre><p>{}</p>",
            "x ".repeat(50),
            "word ".repeat(30)
        );
        let text = html_to_wrapped_text(&html, 80);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "x ".repeat(50).trim_end());
        assert!(lines[2..].iter().all(|l| l.chars().count() <= 80));
        assert!(lines.len() > 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_wrapping_keeps_words_in_order(
            words in prop::collection::vec("[a-z]{1,12}", 1..60),
            width in 12usize..100usize,
        ) {
            let text = words.join(" ");
            let wrapped = wrap(&text, width);

            prop_assert!(wrapped.lines().all(|l| l.chars().count() <= width));
            let rewrapped: Vec<&str> = wrapped.split_whitespace().collect();
            prop_assert_eq!(rewrapped, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_fragment_extraction_wraps_content(
            prefix in "[a-zA-Z0-9 .,!?\\n]{0,100}",
            content in "[a-zA-Z0-9 .,!?\\n]{0,200}",
            suffix in "[a-zA-Z0-9 .,!?\\n]{0,100}",
        ) {
            let body = format!("<html><body>{}<main>{}</main>{}</body></html>", prefix, content, suffix);
            let expected = format!("<main>{}</main>", content);
            prop_assert_eq!(extract_main_fragment(&body), expected.as_str());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_body_without_main_is_unchanged(
            body in "[a-zA-Z0-9 .,!?<>/\\n]{0,300}",
        ) {
            prop_assume!(!body.to_lowercase().contains("<main>"));
            prop_assert_eq!(extract_main_fragment(&body), body.as_str());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_rendered_text_has_no_tags(
            text_content in "[a-zA-Z0-9 .,!?\\n]{1,200}",
        ) {
            let html = format!("<main><p>{}</p><div><span>nested</span></div></main>", text_content);
            let rendered = html_to_text(&html);

            prop_assert!(!rendered.contains('<') && !rendered.contains('>'));
            prop_assert!(rendered.contains("nested"));
            for word in text_content.split_whitespace() {
                prop_assert!(rendered.contains(word));
            }
        }
    }
}
