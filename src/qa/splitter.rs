//! Heuristic question/answer splitting of OCR text
//!
//! An "Answer:"-style label is the strongest signal. Without one, the first
//! line is taken as the prompt and the rest as the response. A single
//! unlabeled line is a question with no answer.

use super::QaRecord;

/// Answer labels, checked in this order on every line
const ANSWER_MARKERS: [&str; 3] = ["answer:", "ans:", "a:"];

/// Question labels, only checked on the first line when no answer label exists
const QUESTION_MARKERS: [&str; 3] = ["question:", "q:", "q."];

/// Split raw OCR text for one image into a question and an answer.
pub fn split_question_answer(text: &str) -> QaRecord {
    let lines: Vec<&str> = text
        .split(is_line_break)
        .map(trim_ocr)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return QaRecord::default();
    }

    for (idx, line) in lines.iter().enumerate() {
        if let Some(rest) = strip_marker(line, &ANSWER_MARKERS) {
            let first = trim_ocr(rest);
            let mut answer_parts: Vec<&str> = Vec::with_capacity(lines.len() - idx);
            if !first.is_empty() {
                answer_parts.push(first);
            }
            answer_parts.extend_from_slice(&lines[idx + 1..]);

            let question = lines[..idx].join(" ");
            let answer = answer_parts.join(" ");
            return QaRecord::new(trim_ocr(&question), trim_ocr(&answer));
        }
    }

    if lines.len() > 1 {
        let mut question = lines[0];
        if let Some(rest) = strip_marker(question, &QUESTION_MARKERS) {
            let trimmed = trim_ocr(rest);
            // A bare "Q:" line stays as-is rather than becoming empty
            if !trimmed.is_empty() {
                question = trimmed;
            }
        }
        let answer = lines[1..].join(" ");
        return QaRecord::new(question, trim_ocr(&answer));
    }

    QaRecord::new(lines[0], "")
}

/// Return the remainder of `line` after the first marker it starts with,
/// ignoring ASCII case.
fn strip_marker<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers.iter().find_map(|marker| {
        let prefix = line.get(..marker.len())?;
        if prefix.eq_ignore_ascii_case(marker) {
            Some(&line[marker.len()..])
        } else {
            None
        }
    })
}

/// Every boundary a universal-newline reader splits on. `\r\n` yields an
/// empty piece in between, which is dropped with the other blank lines.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Trim whitespace, including the ASCII separator controls tesseract can emit.
fn trim_ocr(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
