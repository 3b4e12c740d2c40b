//! Tests for comment attachment

use lolmark_parser::lolmark::testing::assert_ast;
use lolmark_parser::lolmark::testing::lolplore::Lolplore;

#[test]
fn test_comment_01_attachment_points() {
    let doc = Lolplore::comment(1).parse();

    assert_ast(&doc)
        .comment_count(1)
        .title("Commented")
        .trailing_comment_count(1)
        .element_count(1)
        .element(0, |el| {
            el.comment_count(1)
                .comment(0, "before bold")
                .assert_bold()
                .text("hi");
        });

    assert_eq!(doc.comments[0].text, "top of document");
    let head = doc.head.as_ref().expect("head");
    assert_eq!(head.comments.len(), 1);
    assert_eq!(head.comments[0].text, "about the title");
    assert_eq!(doc.body.trailing_comments[0].text, "end");
}

#[test]
fn test_comment_02_keywords_inside_are_text() {
    let doc = Lolplore::comment(2).parse();

    assert_ast(&doc)
        .element_count(2)
        .element(0, |el| el.assert_newline())
        .element(1, |el| {
            el.comment(0, "#MAEK PARAGRAF is ignored #OIC here")
                .assert_bold()
                .text("still bold");
        });
}
