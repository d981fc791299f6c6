// Seed Data - the collection every fresh store starts with

use crate::domain::term::{Keyword, SourceLink, Term};

const SEED: [(&str, &str, &str); 5] = [
    (
        "fps",
        "Number of frames the interface renders per second.",
        "https://developer.mozilla.org/ru/docs/Glossary/FPS",
    ),
    (
        "fcp",
        "Time until the user sees any page content, such as text or an image.",
        "https://developer.mozilla.org/ru/docs/Glossary/First_contentful_paint",
    ),
    (
        "fid",
        "Delay until the first interaction with page content is handled.",
        "https://habr.com/ru/companies/timeweb/articles/714280/",
    ),
    (
        "tbt",
        "Total time the main thread is blocked long enough to prevent responding to user input.",
        "https://habr.com/ru/companies/domclick/articles/549098/",
    ),
    (
        "cls",
        "How much visible content shifted in the viewport while the page was loading.",
        "https://habr.com/ru/companies/domclick/articles/549098/",
    ),
];

/// Seed terms keyed by keyword; each title equals its keyword
pub fn seed_terms() -> Vec<(Keyword, Term)> {
    SEED.iter()
        .map(|(keyword, definition, link)| {
            let source_link = SourceLink::parse(*link).ok();
            (
                keyword.to_string(),
                Term::new(*keyword, *definition, source_link),
            )
        })
        .collect()
}
