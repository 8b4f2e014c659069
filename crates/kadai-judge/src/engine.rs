//! Rule-based validity judgment over OCR'd homework scans.
//!
//! Matches the scanned text against the learner's registered courses and a
//! keyword lexicon, accumulates a confidence score, applies the acceptance
//! rule, and assembles the localised reason string. Matching is plain
//! substring containment (no edit distance, no tokenisation), which keeps
//! behaviour predictable across callers.

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use kadai_core::{Course, Judgment, compact, normalize};

use crate::lexicon::DEFAULT_KEYWORDS;

/// Scoring weights and acceptance thresholds.
///
/// Injectable so tests can isolate individual rules; the defaults are the
/// production values.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// Points per matched course.
    pub course_match: u32,
    /// Extra points when the normalised path matched (on top of
    /// `course_match`).
    pub normalized_bonus: u32,
    /// Points per distinct lexicon hit.
    pub keyword_hit: u32,
    /// Minimum confidence for acceptance.
    pub accept_threshold: u32,
    /// Keyword hits that compensate for a below-threshold confidence.
    pub keyword_quorum: usize,
    /// Ceiling the accumulated score is clamped to.
    pub confidence_cap: u8,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            course_match: 30,
            normalized_bonus: 10,
            keyword_hit: 10,
            accept_threshold: 40,
            keyword_quorum: 2,
            confidence_cap: 100,
        }
    }
}

/// The judgment engine: a keyword lexicon plus scoring weights.
///
/// Stateless across calls, so one engine can serve any number of concurrent
/// judgments. Course descriptors are read for the duration of a single
/// call and never mutated; blank descriptor fields must be rejected
/// upstream (see [`Course::new`]), since an empty pattern is a substring
/// of every scan.
pub struct JudgmentEngine {
    /// Lexicon entries, lowercased once at construction.
    keywords: Vec<String>,
    weights: ScoreWeights,
}

impl Default for JudgmentEngine {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

impl JudgmentEngine {
    /// Engine with the default lexicon and the given weights.
    pub fn new(weights: ScoreWeights) -> Self {
        Self::with_lexicon(DEFAULT_KEYWORDS.iter().copied(), weights)
    }

    /// Engine with a custom keyword lexicon. Entries are lowercased once
    /// here rather than on every call.
    pub fn with_lexicon<I, S>(keywords: I, weights: ScoreWeights) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            weights,
        }
    }

    /// Judge whether `detected_text` documents a valid, registered
    /// assignment.
    ///
    /// `normalized_text` should be the output of [`normalize`] applied to
    /// `detected_text`. When `None`, the engine falls back to [`compact`],
    /// lowercase plus whitespace-strip with none of the character-form
    /// substitutions, which is distinctly less thorough: full-width digits
    /// and letters in the scan will not match their ASCII counterparts.
    /// The fallback is kept for single-argument callers as an accepted
    /// inconsistency; callers that want the full benefit should use
    /// [`judge_scan`] or normalise first.
    ///
    /// [`judge_scan`]: JudgmentEngine::judge_scan
    pub fn judge(
        &self,
        detected_text: &str,
        normalized_text: Option<&str>,
        courses: &[Course],
    ) -> Judgment {
        let analysis = match normalized_text {
            Some(t) => t.to_string(),
            None => compact(detected_text),
        };
        // Course fields are matched against the whitespace-stripped form;
        // the keyword scan below uses the analysis text with spaces intact.
        let analysis_compact = compact(&analysis);

        let mut matched_courses: Vec<String> = Vec::new();
        let mut confidence: u32 = 0;

        for course in courses {
            let matches_normalized = analysis_compact.contains(&compact(&course.name))
                || analysis_compact.contains(&compact(&course.instructor));
            let matches_original = detected_text.contains(course.name.as_str())
                || detected_text.contains(course.instructor.as_str());

            if matches_normalized || matches_original {
                matched_courses.push(course.name.clone());
                confidence += self.weights.course_match;
                if matches_normalized {
                    confidence += self.weights.normalized_bonus;
                }
            }
        }

        let keyword_hits = self
            .keywords
            .iter()
            .filter(|k| analysis.contains(k.as_str()))
            .count();
        confidence += keyword_hits as u32 * self.weights.keyword_hit;

        // A course reference is necessary but not sufficient: accept only
        // with a strong score or corroborating assignment vocabulary.
        let is_valid = !matched_courses.is_empty()
            && (confidence >= self.weights.accept_threshold
                || keyword_hits >= self.weights.keyword_quorum);

        let reason = build_reason(&matched_courses, keyword_hits, is_valid, courses.is_empty());

        debug!(
            matched = matched_courses.len(),
            keyword_hits,
            confidence,
            is_valid,
            "assignment judged"
        );

        Judgment {
            is_valid,
            confidence: confidence.min(u32::from(self.weights.confidence_cap)) as u8,
            detected_text: detected_text.to_string(),
            matched_courses,
            reason,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Normalise `detected_text` with the full substitution table, then
    /// judge. The submission flow should call this rather than [`judge`]
    /// with `None`, which takes the weaker fallback path.
    ///
    /// [`judge`]: JudgmentEngine::judge
    pub fn judge_scan(&self, detected_text: &str, courses: &[Course]) -> Judgment {
        let normalized = normalize(detected_text);
        self.judge(detected_text, Some(&normalized), courses)
    }
}

/// Assemble the localised reason string for the judgment outcome.
///
/// Three invalid shapes are distinguished for the learner: no course
/// recognised, course recognised but insufficient contextual evidence, and
/// no courses registered yet.
fn build_reason(
    matched: &[String],
    keyword_hits: usize,
    is_valid: bool,
    roster_empty: bool,
) -> String {
    let mut reason = if is_valid {
        let mut r = format!("登録済みの講義「{}」が検出されました。", matched.join("、"));
        if keyword_hits > 0 {
            r.push_str(&format!(
                " また、課題関連のキーワードが{keyword_hits}個見つかりました。"
            ));
        }
        r
    } else if matched.is_empty() {
        "登録済みの講義名が画像内で検出されませんでした。".to_string()
    } else {
        "講義名は検出されましたが、課題関連のキーワードが不足しています。".to_string()
    };

    if roster_empty {
        reason.push_str(" まず講義を登録してください。");
    }

    reason
}
