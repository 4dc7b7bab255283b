use barelink_core::{
    HtmlEmitOptions, InlineEvent, emit_html_sanitized, emit_html_sanitized_with_options,
    emit_html_with_options, linkify_events,
};

fn link(href: &str, text: &str) -> InlineEvent {
    InlineEvent::Link {
        href: href.to_string(),
        text: text.to_string(),
    }
}

fn chars(text: &str) -> InlineEvent {
    InlineEvent::Characters(text.to_string())
}

fn paragraph(source: &str) -> String {
    let options = HtmlEmitOptions {
        wrap_paragraph: true,
        ..Default::default()
    };
    emit_html_with_options(source, &options)
}

#[test]
fn link_followed_by_text() {
    assert_eq!(
        linkify_events("https://eclipse.org foo bar"),
        vec![
            link("https://eclipse.org", "https://eclipse.org"),
            chars(" foo bar"),
        ]
    );
}

#[test]
fn text_followed_by_link() {
    assert_eq!(
        linkify_events("foo bar https://eclipse.org"),
        vec![
            chars("foo bar "),
            link("https://eclipse.org", "https://eclipse.org"),
        ]
    );
}

#[test]
fn www_link_with_trailing_quote() {
    assert_eq!(
        linkify_events("foo www.eclipse.org/downloads\" bar"),
        vec![
            chars("foo "),
            link(
                "http://www.eclipse.org/downloads",
                "www.eclipse.org/downloads"
            ),
            chars("\""),
            chars(" bar"),
        ]
    );
}

#[test]
fn malformed_entity_trims_only_semicolon() {
    assert_eq!(
        linkify_events("www.eclipse.org&@mp;"),
        vec![
            link("http://www.eclipse.org&@mp", "www.eclipse.org&@mp"),
            chars(";"),
        ]
    );
}

#[test]
fn link_with_illegal_characters_is_not_linked() {
    let html = paragraph("http://eclipsö.org");
    assert!(!html.contains("<a href="), "{}", html);
    assert_eq!(html, "<p>http://eclipsö.org</p>");
}

#[test]
fn only_link() {
    let html = paragraph(
        "http://mbureck@eclipse.org:80/p2%20update/!+*,';$[foo]/(bar)/~/_emf_/-?bar=baz&oomph#foo",
    );
    assert_eq!(
        html,
        "<p><a href=\"http://mbureck@eclipse.org:80/p2%20update/!+*,&apos;;$%5Bfoo%5D/(bar)/~/_emf_/-?bar=baz&amp;oomph#foo\">http://mbureck@eclipse.org:80/p2%20update/!+*,';$[foo]/(bar)/~/_emf_/-?bar=baz&amp;oomph#foo</a></p>"
    );
}

#[test]
fn link_at_beginning() {
    assert_eq!(
        paragraph("https://eclipse.org foo bar"),
        "<p><a href=\"https://eclipse.org\">https://eclipse.org</a> foo bar</p>"
    );
}

#[test]
fn link_in_text() {
    assert_eq!(
        paragraph("foo https://eclipse.org bar"),
        "<p>foo <a href=\"https://eclipse.org\">https://eclipse.org</a> bar</p>"
    );
}

#[test]
fn link_at_end() {
    assert_eq!(
        paragraph("foo bar https://eclipse.org"),
        "<p>foo bar <a href=\"https://eclipse.org\">https://eclipse.org</a></p>"
    );
}

#[test]
fn degenerate_scheme_after_trimming() {
    assert_eq!(paragraph("see www.. or http://!"), "<p>see www.. or http://!</p>");
}

#[test]
fn unmatched_paren_moves_out_of_link() {
    assert_eq!(
        linkify_events("(http://x.org/foo)"),
        vec![
            chars("("),
            link("http://x.org/foo", "http://x.org/foo"),
            chars(")"),
        ]
    );
}

#[test]
fn sanitized_output_keeps_links() {
    assert_eq!(
        emit_html_sanitized("foo https://eclipse.org bar"),
        "foo <a href=\"https://eclipse.org\">https://eclipse.org</a> bar"
    );
}

#[test]
fn sanitized_output_applies_rel() {
    let options = HtmlEmitOptions {
        wrap_paragraph: true,
        link_rel: Some("noopener".to_string()),
    };
    let html = emit_html_sanitized_with_options("go to www.eclipse.org", &options);
    assert!(html.starts_with("<p>go to <a "), "{}", html);
    assert!(html.contains("href=\"http://www.eclipse.org\""), "{}", html);
    assert!(html.contains("rel=\"noopener\""), "{}", html);
}

#[test]
fn sanitized_output_never_contains_markup_from_text() {
    let html = emit_html_sanitized("<script>alert(1)</script> https://x.org");
    assert!(!html.contains("<script>"), "{}", html);
    assert!(html.contains("<a href=\"https://x.org\">https://x.org</a>"), "{}", html);
}
