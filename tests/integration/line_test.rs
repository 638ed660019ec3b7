//! End-to-end tests composing colors, styles and lines.

use sgrline::terminal::escape;
use sgrline::{Color, Graphics, Line};

fn named(name: &str) -> Color {
    Color::from_name(name).unwrap()
}

#[test]
fn status_bar_is_cut_to_terminal_width() {
    let default = Graphics::new().reverse(true);
    let key = Graphics::new().bold(true).reverse(true);
    let mut line = Line::new(default, 12);

    line.append(" q ", Some(&key))
        .append("quit ", None)
        .append(" ? ", Some(&key))
        .append("help", None);

    assert_eq!(line.len(), 12);
    assert_eq!(escape::strip(line.text()), " q quit  ? h");
    assert_eq!(escape::visible_len(line.text()), line.len());
}

#[test]
fn raw_fragment_keeps_escape_and_cuts_visible_text() {
    let mut line = Line::new(Graphics::default(), 3);
    line.append_raw("ab\x1b[31mcd");

    assert_eq!(line.len(), 3);
    assert!(line.text().contains("\x1b[31m"));
    assert_eq!(escape::strip(line.text()), "abc");
    insta::assert_debug_snapshot!(line.text(), @r#""ab\u{1b}[31mc\u{1b}[m\u{1b}[m""#);
}

#[test]
fn prestyled_output_from_another_line_is_recounted() {
    let green = Graphics::new().with_fg(named("green"));
    let mut inner = Line::new(Graphics::default(), 100);
    inner.append("ok", Some(&green)).append(" done", None);

    let mut outer = Line::new(Graphics::default(), 4);
    outer.append_raw(inner.text());

    assert_eq!(outer.len(), 4);
    assert_eq!(escape::strip(outer.text()), "ok d");
}

#[test]
fn full_line_only_grows_by_escapes() {
    let default = Graphics::new().with_fg(named("brightwhite"));
    let mut line = Line::new(default, 3);
    line.append("abc", None);
    let full = line.text().to_string();

    line.append("ignored", Some(&Graphics::new().bold(true)));
    assert_eq!(line.text(), full);

    line.append_raw("\x1b[1mignored");
    assert_eq!(line.len(), 3);
    assert_eq!(escape::strip(line.text()), "abc");
    assert!(line.text().ends_with("\x1b[1m\x1b[m\x1b[97m"));
}

#[test]
fn styled_fragment_snapshot() {
    let default = Graphics::default();
    let warn = Graphics::new()
        .bold(true)
        .with_fg(named("yellow"))
        .with_bg(named("brightblack"));
    let mut line = Line::new(default, 8);
    line.append("warning: disk full", Some(&warn));

    insta::assert_debug_snapshot!(line.text(), @r#""\u{1b}[1;33;100mwarning:\u{1b}[m\u{1b}[m""#);
}
