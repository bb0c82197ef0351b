//! Body splitting and per-slide rendering
//!
//! Bodies are split on `---` separator lines (fence-aware, so a horizontal
//! rule inside a code block stays literal), then each body renders to one
//! self-contained `<section>` fragment. The stylesheet is built once per
//! compilation from the directives and shared verbatim by every record.

use super::directives::Directives;
use pulldown_cmark::{html, Options, Parser};
use std::fmt::Write;

/// Split the document body into per-slide bodies.
///
/// A wholly blank body yields no slides. A blank leading body produced by a
/// document-initial separator is dropped; blank bodies between two
/// separators are kept as deliberately empty slides.
pub(crate) fn split_bodies(body: &str) -> Vec<String> {
    if body.trim().is_empty() {
        return vec![];
    }

    let mut bodies = vec![String::new()];
    let mut fence: Option<&str> = None;

    for line in body.lines() {
        let trimmed = line.trim();
        match fence {
            Some(marker) => {
                push_line(bodies.last_mut().expect("bodies is never empty"), line);
                if trimmed.starts_with(marker) {
                    fence = None;
                }
            }
            None if trimmed == "---" => bodies.push(String::new()),
            None => {
                if trimmed.starts_with("```") {
                    fence = Some("```");
                } else if trimmed.starts_with("~~~") {
                    fence = Some("~~~");
                }
                push_line(bodies.last_mut().expect("bodies is never empty"), line);
            }
        }
    }

    if bodies.len() > 1 && bodies[0].trim().is_empty() {
        bodies.remove(0);
    }
    bodies
}

fn push_line(body: &mut String, line: &str) {
    if !body.is_empty() {
        body.push('\n');
    }
    body.push_str(line);
}

/// Render one slide body into a self-contained markup fragment.
pub(crate) fn render_body(body: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(body, options);
    let mut inner = String::new();
    html::push_html(&mut inner, parser);
    format!("<section class=\"slide\">\n{inner}</section>\n")
}

/// Build the deck-wide stylesheet from the directives.
pub(crate) fn stylesheet(directives: &Directives) -> String {
    let (width, height) = directives.size.dimensions();
    let theme = directives.theme.as_deref().unwrap_or("default");

    let mut css = String::new();
    let _ = writeln!(
        css,
        "section.slide {{ width: {width}px; height: {height}px; padding: 48px; \
         box-sizing: border-box; overflow: hidden; }}"
    );
    let _ = writeln!(css, "section.slide {{ --slide-theme: {theme}; }}");

    if directives.paginate {
        let _ = writeln!(css, "section.slide {{ counter-increment: slide; }}");
        let _ = writeln!(
            css,
            "section.slide::after {{ content: counter(slide); position: absolute; \
             right: 24px; bottom: 16px; }}"
        );
    }

    for (key, value) in &directives.custom {
        let _ = writeln!(css, "section.slide {{ --slide-{key}: \"{value}\"; }}");
    }
    css
}
