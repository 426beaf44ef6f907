//! Heuristic transcript evaluator — pure-Rust, deterministic, no LLM call.
//!
//! Scores a transcript 0–100 from three signals: how close average sentence
//! length sits to a target, type-token vocabulary richness, and filler-word
//! frequency. Total over every string input, including empty text.

use std::collections::HashSet;

use crate::evaluation::scoring::EvaluationResult;

/// Filler candidates, checked in this order. `filler_words` in the result
/// preserves this order, not the order of appearance in the transcript.
pub const FILLER_CANDIDATES: [&str; 9] = [
    "um", "uh", "like", "you know", "so", "actually", "basically", "kinda", "sort of",
];

/// Average sentence length (in words) that scores full fluency marks.
const TARGET_SENTENCE_LEN: f64 = 19.0;
/// Fluency points lost per word of deviation from the target length.
const FLUENCY_PENALTY_PER_WORD: f64 = 4.0;
/// Type-token ratio scale: a ratio of 0.5 or higher saturates at 100.
const VOCAB_SCALE: f64 = 200.0;
/// Penalty per filler occurrence (every occurrence counts, not just distinct terms).
const FILLER_PENALTY_PER_OCCURRENCE: f64 = 7.0;

const WEIGHT_FLUENCY: f64 = 0.4;
const WEIGHT_VOCAB: f64 = 0.4;
const WEIGHT_FILLER: f64 = 0.2;

/// Counts derived from the normalized transcript.
#[derive(Debug)]
struct TranscriptMetrics {
    word_count: usize,
    sentence_count: usize,
    unique_word_count: usize,
    /// unique / total words, in [0, 1]; 0 when there are no words.
    vocab_richness: f64,
    /// words per sentence; a sentence-less fragment counts as one sentence.
    avg_sentence_len: f64,
    filler_count_total: usize,
    fillers_found: Vec<&'static str>,
}

/// Per-component scores, each in [0, 100].
#[derive(Debug)]
struct ComponentScores {
    fluency: f64,
    vocab: f64,
    filler_impact: f64,
    overall: u32,
}

/// Evaluates a transcript and returns a well-formed result. Never fails.
pub fn evaluate(transcript: &str) -> EvaluationResult {
    let metrics = compute_metrics(transcript);
    let scores = score_metrics(&metrics);
    let feedback_text = build_feedback(&metrics, &scores);

    EvaluationResult {
        overall_score: scores.overall,
        feedback_text,
        filler_words: metrics
            .fillers_found
            .iter()
            .map(|f| f.to_string())
            .collect(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\''
}

/// Drops every character that is not a letter or apostrophe.
fn strip_token(token: &str) -> String {
    token.chars().filter(|c| is_word_char(*c)).collect()
}

fn compute_metrics(transcript: &str) -> TranscriptMetrics {
    let text = transcript
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    // Stripped forms keep token positions so multi-word fillers can be
    // matched as consecutive words; punctuation-only tokens strip to ""
    // and break adjacency.
    let stripped: Vec<String> = text
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(strip_token)
        .collect();

    let word_count = stripped.iter().filter(|w| !w.is_empty()).count();

    let sentence_count = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .count();

    let unique_word_count = stripped
        .iter()
        .filter(|w| !w.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let vocab_richness = if word_count > 0 {
        unique_word_count as f64 / word_count as f64
    } else {
        0.0
    };
    let avg_sentence_len = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        word_count as f64
    };

    let mut fillers_found = Vec::new();
    let mut filler_count_total = 0;
    for candidate in FILLER_CANDIDATES {
        let parts: Vec<&str> = candidate.split(' ').collect();
        let matches = count_word_sequence(&stripped, &parts);
        if matches > 0 {
            fillers_found.push(candidate);
            filler_count_total += matches;
        }
    }

    TranscriptMetrics {
        word_count,
        sentence_count,
        unique_word_count,
        vocab_richness,
        avg_sentence_len,
        filler_count_total,
        fillers_found,
    }
}

/// Counts non-overlapping occurrences of `phrase` as consecutive words.
fn count_word_sequence(words: &[String], phrase: &[&str]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + phrase.len() <= words.len() {
        if words[i..i + phrase.len()]
            .iter()
            .zip(phrase)
            .all(|(w, p)| w == p)
        {
            count += 1;
            i += phrase.len();
        } else {
            i += 1;
        }
    }
    count
}

fn score_metrics(metrics: &TranscriptMetrics) -> ComponentScores {
    let fluency_delta = (metrics.avg_sentence_len - TARGET_SENTENCE_LEN).abs();
    let fluency = (100.0 - fluency_delta * FLUENCY_PENALTY_PER_WORD).clamp(0.0, 100.0);

    let vocab = (metrics.vocab_richness * VOCAB_SCALE).clamp(0.0, 100.0);

    let filler_impact =
        (metrics.filler_count_total as f64 * FILLER_PENALTY_PER_OCCURRENCE).min(100.0);

    let overall = (WEIGHT_FLUENCY * fluency
        + WEIGHT_VOCAB * vocab
        + WEIGHT_FILLER * (100.0 - filler_impact))
        .clamp(0.0, 100.0)
        .round() as u32;

    ComponentScores {
        fluency,
        vocab,
        filler_impact,
        overall,
    }
}

/// Builds the 4–5 sentence feedback paragraph: one sentence each for overall
/// quality, fluency, and vocabulary, a conditional filler sentence, and a
/// fixed closing practice tip.
fn build_feedback(metrics: &TranscriptMetrics, scores: &ComponentScores) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(5);

    if scores.overall >= 85 {
        parts.push(
            "Your response is strong overall with clear structure and confident pacing."
                .to_string(),
        );
    } else if scores.overall >= 70 {
        parts.push(
            "Your response is generally solid, though there are areas to refine for clarity and impact."
                .to_string(),
        );
    } else {
        parts.push(
            "Your response needs clearer structure and delivery to communicate ideas effectively."
                .to_string(),
        );
    }

    if scores.fluency >= 80.0 {
        parts.push("Fluency is good; sentence flow feels natural and easy to follow.".to_string());
    } else if metrics.avg_sentence_len < 12.0 {
        parts.push("Many sentences are short; combine related ideas to improve flow.".to_string());
    } else {
        parts.push(
            "Some sentences are long; break them into shorter units to improve readability."
                .to_string(),
        );
    }

    if scores.vocab >= 80.0 {
        parts.push(
            "Vocabulary is varied and precise, supporting your main points well.".to_string(),
        );
    } else {
        parts.push(
            "Consider using more specific and topic-relevant terms to strengthen your arguments."
                .to_string(),
        );
    }

    if metrics.filler_count_total > 0 {
        parts.push(format!(
            "Reduce filler words ({}); pause briefly instead, which increases clarity.",
            metrics.fillers_found.join(", ")
        ));
    }

    parts.push(
        "Practice by summarizing answers in 2–3 concise points, then expand with examples to balance depth and clarity."
            .to_string(),
    );

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // 19 distinct words, one sentence, no fillers: every component maxes out.
    const CLEAN_19_WORD_SENTENCE: &str = "Our candidate pipeline rewards clear communication \
        because recruiters value concise answers that balance depth with brevity during timed interviews.";

    const FILLER_HEAVY: &str = "Um, so I think, um, this is like a good um approach.";

    fn feedback_sentence_count(feedback: &str) -> usize {
        feedback.matches('.').count()
    }

    #[test]
    fn test_empty_input_scores_30() {
        let result = evaluate("");
        assert_eq!(result.overall_score, 30);
        assert!(result.filler_words.is_empty());
        assert!(!result.feedback_text.is_empty());
    }

    #[test]
    fn test_whitespace_and_punctuation_input_matches_empty() {
        // No words: vocab 0, fluency 24, no filler penalty -> 30.
        for degenerate in ["   ", "\t\n", "... !!! ???", "12 34 -- ..."] {
            let result = evaluate(degenerate);
            assert_eq!(result.overall_score, 30, "input {degenerate:?}");
            assert!(result.filler_words.is_empty());
        }
    }

    #[test]
    fn test_empty_input_component_path() {
        let metrics = compute_metrics("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.vocab_richness, 0.0);
        assert_eq!(metrics.avg_sentence_len, 0.0);

        let scores = score_metrics(&metrics);
        assert_eq!(scores.fluency, 24.0);
        assert_eq!(scores.vocab, 0.0);
        assert_eq!(scores.filler_impact, 0.0);
        assert_eq!(scores.overall, 30);
    }

    #[test]
    fn test_clean_19_word_sentence_scores_100() {
        let metrics = compute_metrics(CLEAN_19_WORD_SENTENCE);
        assert_eq!(metrics.word_count, 19);
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.unique_word_count, 19);

        let scores = score_metrics(&metrics);
        assert_eq!(scores.fluency, 100.0);
        assert_eq!(scores.vocab, 100.0);

        let result = evaluate(CLEAN_19_WORD_SENTENCE);
        assert_eq!(result.overall_score, 100);
        assert!(result.filler_words.is_empty());
    }

    #[test]
    fn test_filler_heavy_input_detects_fillers_in_candidate_order() {
        let metrics = compute_metrics(FILLER_HEAVY);
        // Three "um" plus one "so" plus one "like".
        assert_eq!(metrics.filler_count_total, 5);
        assert_eq!(metrics.fillers_found, vec!["um", "like", "so"]);
        assert_eq!(
            score_metrics(&metrics).filler_impact,
            5.0 * FILLER_PENALTY_PER_OCCURRENCE
        );

        let result = evaluate(FILLER_HEAVY);
        assert_eq!(result.filler_words, vec!["um", "like", "so"]);
        assert!(result.feedback_text.contains("Reduce filler words"));
        assert!(result.feedback_text.contains("um, like, so"));
    }

    #[test]
    fn test_candidate_order_wins_over_text_order() {
        let result = evaluate("So the plan is like fine but um maybe not.");
        assert_eq!(result.filler_words, vec!["um", "like", "so"]);
    }

    #[test]
    fn test_multi_word_fillers_match_word_sequences() {
        let metrics = compute_metrics("It was you know sort of fine.");
        assert_eq!(metrics.fillers_found, vec!["you know", "sort of"]);
        assert_eq!(metrics.filler_count_total, 2);
    }

    #[test]
    fn test_sort_does_not_match_so() {
        let metrics = compute_metrics("Sort the results before presenting them.");
        assert!(metrics.fillers_found.is_empty());
    }

    #[test]
    fn test_filler_requires_word_boundary() {
        // "likely" and "summer" must not register as "like" / "um".
        let metrics = compute_metrics("The summer forecast likely improves.");
        assert!(metrics.fillers_found.is_empty());
        assert_eq!(metrics.filler_count_total, 0);
    }

    #[test]
    fn test_repeated_fillers_count_every_occurrence() {
        let metrics = compute_metrics("um um um um");
        assert_eq!(metrics.fillers_found, vec!["um"]);
        assert_eq!(metrics.filler_count_total, 4);
    }

    #[test]
    fn test_numeric_tokens_are_not_words() {
        let metrics = compute_metrics("We grew 300 percent in 2024.");
        // "300" and "2024" carry no letters.
        assert_eq!(metrics.word_count, 4);
    }

    #[test]
    fn test_sentence_split_on_terminator_runs() {
        let metrics = compute_metrics("Wait... really?! Yes. Definitely.");
        assert_eq!(metrics.sentence_count, 4);
    }

    #[test]
    fn test_fragment_without_terminator_counts_as_one_sentence() {
        let metrics = compute_metrics("three words here");
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.avg_sentence_len, 3.0);
    }

    #[test]
    fn test_casing_and_whitespace_do_not_change_result() {
        let a = evaluate("UM, this is   LIKE a test.");
        let b = evaluate("um, this is like a test.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let input = "Practice interviews regularly. Feedback compounds over time.";
        assert_eq!(evaluate(input), evaluate(input));
    }

    #[test]
    fn test_adding_fillers_never_raises_the_score() {
        // Same word, sentence, and unique counts; one word swapped for a filler.
        let without = evaluate("Today we quickly shipped the report.");
        let with = evaluate("Today we actually shipped the report.");
        assert!(with.overall_score <= without.overall_score);
    }

    #[test]
    fn test_score_bounds_hold_for_assorted_inputs() {
        let run_on = "very long run-on sentence with many many words ".repeat(20);
        let inputs = [
            "",
            "word",
            "um uh like you know so actually basically kinda sort of",
            run_on.as_str(),
            "Short. Very. Choppy. Sentences. Here.",
        ];
        for input in inputs {
            let result = evaluate(input);
            assert!(result.overall_score <= 100, "input {input:?}");
        }
    }

    #[test]
    fn test_feedback_has_four_or_five_sentences() {
        let no_fillers = evaluate("A perfectly ordinary answer with no hedging at all.");
        assert_eq!(feedback_sentence_count(&no_fillers.feedback_text), 4);

        let with_fillers = evaluate(FILLER_HEAVY);
        assert_eq!(feedback_sentence_count(&with_fillers.feedback_text), 5);
    }

    #[test]
    fn test_filler_words_are_distinct_and_from_candidate_list() {
        let result = evaluate("um um like like so so you know you know");
        let mut seen = std::collections::HashSet::new();
        for filler in &result.filler_words {
            assert!(FILLER_CANDIDATES.contains(&filler.as_str()));
            assert!(seen.insert(filler.clone()), "duplicate filler {filler}");
        }
    }

    #[test]
    fn test_short_sentences_get_combine_advice() {
        let result = evaluate("Short. Very. Choppy.");
        assert!(result
            .feedback_text
            .contains("combine related ideas to improve flow"));
    }

    #[test]
    fn test_long_sentences_get_break_up_advice() {
        let long = "one sentence that keeps going and going with far too many words strung together without any break at all and then continues further still beyond reason.";
        let result = evaluate(long);
        assert!(result
            .feedback_text
            .contains("break them into shorter units"));
    }

    #[test]
    fn test_closing_tip_is_always_present() {
        for input in ["", FILLER_HEAVY, CLEAN_19_WORD_SENTENCE] {
            let result = evaluate(input);
            assert!(result.feedback_text.ends_with(
                "then expand with examples to balance depth and clarity."
            ));
        }
    }
}
