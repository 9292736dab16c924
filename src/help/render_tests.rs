//! Tests for render

use super::*;

fn sample() -> Vec<Comment> {
    vec![
        Comment::new("build", "Builds the project.\nSee docs."),
        Comment::new("clean", "Removes artifacts."),
    ]
}

fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), HelpError>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_short_aligns_targets() {
    let output = render(|w| write_all_short(&sample(), w));
    assert_eq!(
        output,
        "\n  build   Builds the project.\n  clean   Removes artifacts.\n\n"
    );
}

#[test]
fn test_short_pads_to_longest_target() {
    let comments = vec![
        Comment::new("a", "Short."),
        Comment::new("release", "Long."),
    ];
    let output = render(|w| write_all_short(&comments, w));
    assert_eq!(output, "\n  a         Short.\n  release   Long.\n\n");
}

#[test]
fn test_short_empty_value() {
    let comments = vec![Comment::new("noop", "")];
    let output = render(|w| write_all_short(&comments, w));
    assert_eq!(output, "\n  noop   \n\n");
}

#[test]
fn test_long_indents_descriptions() {
    let output = render(|w| write_all_long(&sample(), w));
    assert_eq!(
        output,
        "\n  build:\n    Builds the project.\n    See docs.\n\n  clean:\n    Removes artifacts.\n\n\n"
    );
}

#[test]
fn test_target_long_writes_matching_comment() {
    let output = render(|w| write_target_long(&sample(), w, "build"));
    assert_eq!(output, "\n  Builds the project.\n  See docs.\n\n");
}

#[test]
fn test_target_long_writes_every_match() {
    let comments = vec![
        Comment::new("deploy", "Staging."),
        Comment::new("deploy", "Production."),
    ];
    let output = render(|w| write_target_long(&comments, w, "deploy"));
    assert_eq!(output, "\n  Staging.\n  Production.\n\n");
}

#[test]
fn test_target_long_is_case_sensitive() {
    let output = render(|w| write_target_long(&sample(), w, "Build"));
    assert_eq!(output, "\n\n");
}

#[test]
fn test_target_long_missing_target() {
    let output = render(|w| write_target_long(&sample(), w, "missing"));
    assert_eq!(output, "\n\n");
}

#[test]
fn test_untargeted_comments_never_render() {
    let comments = vec![Comment::new("", "Header comment")];

    assert_eq!(render(|w| write_all_short(&comments, w)), "\n\n");
    assert_eq!(render(|w| write_all_long(&comments, w)), "\n\n");
    assert_eq!(render(|w| write_target_long(&comments, w, "")), "\n\n");
}

#[test]
fn test_write_failure_is_io_error() {
    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let result = write_all_short(&sample(), &mut ClosedSink);
    assert!(matches!(result, Err(HelpError::Io(_))));
}
