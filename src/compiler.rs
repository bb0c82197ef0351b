//! Slide compiler
//!
//! Turns a slide-source document (directive front-matter plus `---`-separated
//! markdown bodies) into an ordered deck of independently renderable slides.
//! Compilation is a total, pure function of the document: malformed input
//! degrades to an empty deck (logged, never a panic), and identical documents
//! always yield identical decks.

mod directives;
mod render;

#[cfg(test)]
mod proptests;

pub use directives::{Directives, SlideSize};

use thiserror::Error;

/// One compiled slide: a self-contained markup fragment plus the deck-wide
/// stylesheet shared by every record of the same compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    /// Position in the deck, starting at 0; stable under recompilation.
    pub index: usize,
    /// Renderable fragment for exactly one slide.
    pub markup: String,
    /// Deck-wide shared stylesheet, identical across the deck.
    pub styling: String,
}

/// Ordered sequence of slide records derived from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<SlideRecord>,
}

impl SlideDeck {
    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[derive(Debug, Error)]
pub(crate) enum CompileError {
    #[error("front-matter line {line} is not a directive: {text:?}")]
    MalformedFrontMatter { line: usize, text: String },
}

/// Compile a slide-source document into a deck.
///
/// An absent or blank document compiles to an empty deck, not an error, and
/// so does malformed front-matter - the failure is observable only as zero
/// slides.
pub fn compile(source: Option<&str>) -> SlideDeck {
    let Some(source) = source else {
        return SlideDeck::default();
    };
    if source.trim().is_empty() {
        return SlideDeck::default();
    }

    match compile_inner(source) {
        Ok(deck) => deck,
        Err(e) => {
            tracing::warn!(error = %e, "slide compilation failed; yielding empty deck");
            SlideDeck::default()
        }
    }
}

fn compile_inner(source: &str) -> Result<SlideDeck, CompileError> {
    let (directives, body) = directives::split_front_matter(source)?;
    let styling = render::stylesheet(&directives);

    let slides = render::split_bodies(&body)
        .iter()
        .enumerate()
        .map(|(index, body)| SlideRecord {
            index,
            markup: render::render_body(body),
            styling: styling.clone(),
        })
        .collect();

    Ok(SlideDeck { slides })
}
