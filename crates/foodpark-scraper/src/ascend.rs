//! Upward search through an element's ancestors.
//!
//! Every structural lookup in the pipeline has the same shape: start at a
//! node, climb one parent at a time, stop at the first ancestor a predicate
//! accepts, and give up once the document's top-level `<html>` element is
//! reached. [`ascend`] is that loop, written once.

use scraper::ElementRef;

/// Outcome of an [`ascend`] call.
#[derive(Debug, Clone, Copy)]
pub enum Ascent<'a> {
    Found(ElementRef<'a>),
    NotFound,
}

impl<'a> Ascent<'a> {
    #[must_use]
    pub fn found(self) -> Option<ElementRef<'a>> {
        match self {
            Ascent::Found(el) => Some(el),
            Ascent::NotFound => None,
        }
    }
}

/// Returns the nearest proper ancestor of `start` for which `stop` holds.
///
/// `start` itself is never tested, and neither is the `<html>` element or
/// anything above it: reaching the document root yields [`Ascent::NotFound`].
pub fn ascend<'a, P>(start: ElementRef<'a>, mut stop: P) -> Ascent<'a>
where
    P: FnMut(ElementRef<'a>) -> bool,
{
    for node in start.ancestors() {
        let Some(ancestor) = ElementRef::wrap(node) else {
            break;
        };
        if is_document_root(ancestor) {
            break;
        }
        if stop(ancestor) {
            return Ascent::Found(ancestor);
        }
    }
    Ascent::NotFound
}

fn is_document_root(element: ElementRef<'_>) -> bool {
    element.value().name().eq_ignore_ascii_case("html")
}
