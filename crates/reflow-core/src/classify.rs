//! The per-line state machine.
//!
//! Each input line is classified as pre-content noise, a page-marker line, a
//! blank line, a boilerplate line, a paragraph continuation, or a new
//! paragraph, and the matching output fragment (if any) is produced. The
//! classifier only ever sees the current line plus [`PageState`]; there is no
//! lookahead and no buffering.

use crate::book::BookDescription;
use crate::error::{ReflowError, Result};

/// Fixed extra left margin carried by every content line on an even page in
/// the source layout.
pub const EVEN_INDENTATION: usize = 11;

/// Pagination state threaded through the classifier, one line at a time.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// 0 until the start marker has been seen, then the page currently being
    /// processed. Never decreases, and never rests on an illustration page.
    pub page_num: u32,

    /// Whether the "Page N" annotation for the current page has been emitted.
    /// The annotation goes out with the first paragraph start on the page,
    /// after the paragraph carried over from the previous page has finished.
    pub has_output_page_num: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Classify a single line, update `state`, and return the fragment to emit.
///
/// `Ok(None)` means the line is suppressed. Fragments embed their own
/// separators, so the caller concatenates them directly.
pub fn process_line(
    line: &str,
    state: &mut PageState,
    book: &BookDescription,
) -> Result<Option<String>> {
    // Find the start of real content.
    if state.page_num == 0 {
        if !line.trim().starts_with(&book.start_text) {
            return Ok(None);
        }
        state.page_num = 1;
        // The start line is ordinary content, not a marker: fall through.
    }

    // Page-marker line: a line holding only the current page's number.
    // Illustration pages have no marker of their own, so one marker can
    // advance past several of them in a row.
    if line.trim() == state.page_num.to_string() {
        state.page_num += 1;
        while book.is_illustration_page(state.page_num) {
            state.page_num += 1;
        }
        state.has_output_page_num = false;
        return Ok(None);
    }

    if line.trim().is_empty() {
        return Ok(None);
    }

    if book.is_ignored(line.trim()) {
        return Ok(None);
    }

    // pdftotext puts a form feed at the start of each new page. It carries
    // no meaning here, but it must not count toward the indentation.
    let line = line.strip_prefix('\u{c}').unwrap_or(line);

    let mut indentation = line.chars().take_while(|c| c.is_whitespace()).count();

    // Even pages carry a fixed extra left margin. If it is missing, the
    // layout assumption no longer holds and every later paragraph boundary
    // would be wrong, so stop rather than skip.
    if state.page_num % 2 == 0 {
        if indentation < EVEN_INDENTATION {
            return Err(ReflowError::LayoutAssumption {
                line: line.trim().to_string(),
            });
        }
        indentation -= EVEN_INDENTATION;
    }

    let text = line.trim();

    if indentation == 0 || indentation > 4 {
        // Continuation of the current paragraph.
        return Ok(Some(text.to_string()));
    }

    // New paragraph.
    let mut fragment = format!("\n\n{}", text);
    if !state.has_output_page_num {
        fragment = format!("\n\nPage {}{}", state.page_num, fragment);
        state.has_output_page_num = true;
    }
    Ok(Some(fragment))
}

/// Reduce an ordered sequence of lines to the reflowed text.
pub fn reflow<'a, I>(lines: I, book: &BookDescription) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = PageState::new();
    let mut out = String::new();
    for line in lines {
        if let Some(fragment) = process_line(line, &mut state, book)? {
            out.push_str(&fragment);
        }
    }
    log::debug!(
        "reflow: reached page {}, {} bytes of output",
        state.page_num,
        out.len()
    );
    Ok(out)
}
