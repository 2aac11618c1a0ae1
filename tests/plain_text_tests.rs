mod common;

use common::{compact, events, plain};
use htmlconvert::{to_text_with_options, HtmlEvent, Options};

#[test]
fn paragraph_has_no_leading_separator() {
    assert_eq!(plain("<p>hello</p>"), "hello");
}

#[test]
fn paragraphs_are_blank_line_separated() {
    assert_eq!(plain("<p>a</p><p>b</p>"), "a\n\nb");
}

#[test]
fn generic_blocks_use_single_newline() {
    assert_eq!(plain("<div>a</div><section>b</section><nav>c</nav>"), "a\nb\nc");
}

#[test]
fn nested_blocks_do_not_stack_separators() {
    assert_eq!(plain("<div><div><div>a</div></div></div><div>b</div>"), "a\nb");
    assert_eq!(plain("<p>a</p><div><p>b</p></div>"), "a\n\nb");
}

#[test]
fn inline_text_joins_blocks() {
    assert_eq!(plain("before<p>inside</p>after"), "before\n\ninside\n\nafter");
}

#[test]
fn whitespace_collapses_outside_pre() {
    assert_eq!(plain("<p>  a\n  b  </p>"), "a b");
    assert_eq!(plain("<p>one\t\ttwo</p>"), "one two");
}

#[test]
fn spaces_between_inline_elements() {
    assert_eq!(plain("<b>hello</b> <i>world</i>"), "hello world");
    assert_eq!(plain("a <span> b</span>"), "a b");
    assert_eq!(plain("<em>no</em>space"), "nospace");
}

#[test]
fn preformatted_passthrough() {
    assert_eq!(plain("<pre>  a\n  b  </pre>"), "  a\n  b  ");
}

#[test]
fn preformatted_between_paragraphs() {
    assert_eq!(
        plain("<p>x</p><pre>fn main() {\n    run();\n}\n</pre><p>y</p>"),
        "x\n\nfn main() {\n    run();\n}\n\ny"
    );
}

#[test]
fn preformatted_newlines_extend_separators() {
    assert_eq!(compact("<p>x</p><pre>\n\ny</pre>"), "x\n\n\ny");
    assert_eq!(
        plain("<p>x</p><pre>\n\ny\n\n\n</pre><p>z</p>"),
        "x\n\n\n\ny\n\n\nz"
    );
}

#[test]
fn preformatted_trailing_newlines_satisfy_next_separator() {
    assert_eq!(compact("<pre>a\n\n</pre><p>b</p>"), "a\n\nb");
    assert_eq!(plain("<pre>a\n</pre>b"), "a\n\nb");
}

#[test]
fn ordered_list_numbering() {
    assert_eq!(plain("<ol><li>a</li><li>b</li></ol>"), "1. a\n2. b");
}

#[test]
fn new_ordered_list_restarts_numbering() {
    assert_eq!(
        plain("<ol><li>a</li><li>b</li></ol><ol><li>c</li></ol>"),
        "1. a\n2. b\n\n1. c"
    );
}

#[test]
fn unordered_list_bullets() {
    assert_eq!(plain("<ul><li>x</li><li>y</li></ul>"), "• x\n• y");
}

#[test]
fn nested_lists_indent_by_depth() {
    let text = plain("<ul><li>x<ul><li>y<ul><li>z</li></ul></li></ul></li></ul>");
    assert_eq!(text, "• x\n    • y\n        • z");

    let indents: Vec<usize> = text
        .lines()
        .map(|line| line.len() - line.trim_start().len())
        .collect();
    assert!(indents.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn nested_ordered_list_keeps_outer_count() {
    assert_eq!(
        plain("<ol><li>a<ol><li>a1</li><li>a2</li></ol></li><li>b</li></ol>"),
        "1. a\n    1. a1\n    2. a2\n2. b"
    );
}

#[test]
fn mixed_list_kinds() {
    assert_eq!(
        plain("<ol><li>one<ul><li>dot</li></ul></li><li>two</li></ol>"),
        "1. one\n    • dot\n2. two"
    );
}

#[test]
fn list_item_outside_list() {
    assert_eq!(plain("<li>stray</li>"), "• stray");
}

#[test]
fn list_after_paragraph() {
    assert_eq!(plain("<p>intro</p><ul><li>a</li></ul><p>outro</p>"), "intro\n\n• a\n\noutro");
}

#[test]
fn definition_list() {
    assert_eq!(
        plain("<dl><dt>term</dt><dd>detail</dd><dt>next</dt><dd>more</dd></dl>"),
        "term\n    detail\nnext\n    more"
    );
}

#[test]
fn headings_are_separated() {
    assert_eq!(plain("<h1>Title</h1><p>Body</p>"), "Title\n\nBody");
    assert_eq!(plain("<p>Body</p><h2>Next</h2>text"), "Body\n\nNext\ntext");
}

#[test]
fn blockquote_has_no_literal_indent() {
    assert_eq!(plain("<p>a</p><blockquote>q</blockquote>"), "a\n\nq");
}

#[test]
fn line_break() {
    assert_eq!(plain("a<br>b"), "a\nb");
    assert_eq!(plain("a <br> b"), "a\nb");
}

#[test]
fn line_breaks_collapse() {
    assert_eq!(plain("a<br><br>b"), "a\nb");
}

#[test]
fn leading_line_break_is_dropped() {
    assert_eq!(plain("<br>text"), "text");
}

#[test]
fn script_is_skipped() {
    assert_eq!(plain("<script>alert(1)</script>after"), "after");
}

#[test]
fn skipped_subtree_emits_no_separators() {
    assert_eq!(
        plain("a<table><tr><td><p>x</p></td></tr></table>b"),
        "ab"
    );
    assert_eq!(plain("<head><title>t</title></head><p>body</p>"), "body");
}

#[test]
fn nested_skips_balance() {
    assert_eq!(
        plain("<form><fieldset>in</fieldset>still in</form>out"),
        "out"
    );
}

#[test]
fn unknown_tags_keep_content() {
    assert_eq!(plain("<custom>text</custom> <span>more</span>"), "text more");
}

#[test]
fn links_are_plain_text() {
    assert_eq!(plain(r#"see <a href="https://example.com">docs</a>"#), "see docs");
}

#[test]
fn compact_mode_single_newlines() {
    let html = "<p>a</p><p>b</p><h1>c</h1><ul><li>d</li></ul><pre>e</pre>";
    assert_eq!(plain(html), "a\n\nb\n\nc\n\n• d\n\ne");
    assert_eq!(compact(html), "a\nb\nc\n• d\ne");
}

#[test]
fn compact_mode_keeps_generic_separators() {
    assert_eq!(compact("<div>a</div><div>b</div>"), "a\nb");
}

#[test]
fn custom_indent_text() {
    let options = Options {
        indent_text: "\t",
        ..Options::default()
    };
    let text = to_text_with_options(events("<ul><li>a<ul><li>b</li></ul></li></ul>"), &options);
    assert_eq!(text, "• a\n\t• b");
}

#[test]
fn text_split_across_events() {
    let text = htmlconvert::to_text([
        HtmlEvent::open("p"),
        HtmlEvent::Text("hel"),
        HtmlEvent::Text("lo "),
        HtmlEvent::Text(" world"),
        HtmlEvent::Close("p"),
    ]);
    assert_eq!(text, "hello world");
}

#[test]
fn empty_input() {
    assert_eq!(plain(""), "");
    assert_eq!(plain("<p></p><div></div>"), "");
}

#[test]
fn splitter_handles_void_and_attributes() {
    assert_eq!(
        events(r#"<p class="x">a<br>b</p>"#),
        vec![
            HtmlEvent::open_with("p", vec![("class", "x")]),
            HtmlEvent::Text("a"),
            HtmlEvent::open("br"),
            HtmlEvent::Close("br"),
            HtmlEvent::Text("b"),
            HtmlEvent::Close("p"),
        ]
    );
    assert_eq!(
        events("<a href='/x' data-a=1 hidden>"),
        vec![HtmlEvent::open_with(
            "a",
            vec![("href", "/x"), ("data-a", "1"), ("hidden", "")]
        )]
    );
}
