//! Sentence segmentation for journal drafts.
//!
//! Entries are saved from e-mail drafts, where paragraphs are separated by a
//! blank line and bullet points start with an escaped dash (`\-`).

/// Escaped dash that starts a bullet point in saved drafts.
pub const BULLET_MARKER: &str = "\\-";

/// Separator between paragraphs in saved drafts.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Split an entry into cleaned sentences.
///
/// Every bullet marker starts a new paragraph, paragraphs are split on blank
/// lines, raw segments that are empty or a lone newline are dropped, and the
/// rest have their newlines replaced by spaces and are trimmed.
///
/// Only the raw segment is checked for emptiness: a whitespace-only segment
/// survives as an empty string after cleanup.
///
/// # Examples
///
/// ```
/// use diarist::text::segment::split_sentences;
///
/// let sentences = split_sentences("Woke up early.\nWent running.\n\n\\- coffee\\- notes");
/// assert_eq!(sentences, vec!["Woke up early. Went running.", "\\- coffee", "\\- notes"]);
/// ```
pub fn split_sentences(entry_text: &str) -> Vec<String> {
    let bulleted = entry_text.replace(BULLET_MARKER, &format!("{PARAGRAPH_BREAK}{BULLET_MARKER}"));

    bulleted
        .split(PARAGRAPH_BREAK)
        .filter(|segment| is_raw_sentence_not_empty(segment))
        .map(clean_email_draft_sentence)
        .collect()
}

/// A raw segment counts as a sentence unless it is empty or exactly `"\n"`.
pub fn is_raw_sentence_not_empty(segment: &str) -> bool {
    !segment.is_empty() && segment != "\n"
}

/// Replace newlines with spaces and trim surrounding whitespace.
pub fn clean_email_draft_sentence(segment: &str) -> String {
    segment.replace('\n', " ").trim().to_string()
}

/// Count whitespace-delimited words across all sentences.
///
/// Punctuation is part of the word it touches, so `"end ."` is two words.
pub fn word_count<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences
        .iter()
        .map(|sentence| sentence.as_ref().split_whitespace().count())
        .sum()
}
