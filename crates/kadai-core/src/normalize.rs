//! OCR text normalisation for scanned homework pages.
//!
//! Converts raw OCR output into a canonical comparison form so that course
//! matching is robust to the character-form variance a photographed Japanese
//! worksheet produces: full-width digits and Latin letters, full-width roman
//! numerals, circled numbers, and ideographic spaces.
//!
//! This is a fixed-table transliteration, not a generic Unicode fold (NFKC
//! would rewrite far more than the classes that actually show up on scanned
//! sheets, and matching behaviour must stay identical across callers).
//! Characters outside the table pass through unchanged.

/// Normalise raw OCR text into its canonical comparison form.
///
/// # Algorithm
///
/// 1. Substitute the tabulated character classes: ０-９ → `0`-`9`,
///    Ａ-Ｚ/ａ-ｚ → ASCII letters, Ⅰ-Ⅴ → `1`-`5`, ①-⑩ → `1`-`10`,
///    ideographic space → ASCII space.
/// 2. Lowercase (after substitution, so substituted letters fold too).
/// 3. Collapse every whitespace run to a single ASCII space.
/// 4. Trim leading and trailing whitespace.
///
/// Total and pure: empty or whitespace-only input yields the empty string.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut folded);
    }
    let folded = folded.to_lowercase();

    // Collapse whitespace runs and trim in a single pass.
    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }
    out
}

/// Lowercase and strip all whitespace.
///
/// The narrow normalisation applied to course name/instructor fields, and
/// the judgment engine's fallback when no pre-normalised text is supplied.
/// Deliberately skips the character-form substitutions of [`normalize`];
/// the two forms are distinct and must not be merged.
pub fn compact(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Transliterate one character through the substitution table, appending
/// the replacement (or the character itself) to `out`.
fn fold_char(c: char, out: &mut String) {
    match c {
        // Full-width digits ０-９ (U+FF10..U+FF19).
        '０'..='９' => out.push(char::from(b'0' + (c as u32 - '０' as u32) as u8)),
        // Full-width Latin Ａ-Ｚ (U+FF21..U+FF3A) and ａ-ｚ (U+FF41..U+FF5A).
        'Ａ'..='Ｚ' => out.push(char::from(b'A' + (c as u32 - 'Ａ' as u32) as u8)),
        'ａ'..='ｚ' => out.push(char::from(b'a' + (c as u32 - 'ａ' as u32) as u8)),
        // Roman numerals Ⅰ-Ⅴ (U+2160..U+2164), the course-title range.
        'Ⅰ'..='Ⅴ' => out.push(char::from(b'1' + (c as u32 - 'Ⅰ' as u32) as u8)),
        // Circled numbers ①-⑩ (U+2460..U+2469); ⑩ expands to two characters.
        '①'..='⑩' => {
            let n = c as u32 - '①' as u32 + 1;
            if n == 10 {
                out.push_str("10");
            } else {
                out.push(char::from(b'0' + n as u8));
            }
        }
        // Ideographic space U+3000.
        '　' => out.push(' '),
        _ => out.push(c),
    }
}
