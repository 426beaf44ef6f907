// Prompts for the LLM-backed transcript evaluator. The model must return the
// same strict three-field JSON contract the heuristic backend produces.

pub const EVALUATE_SYSTEM: &str = "You are an Expert Speech Assessment System. \
    Analyze the provided text transcription of a user's audio response and \
    evaluate it against Fluency, Vocabulary, and Filler Words. \
    Your output MUST be a valid JSON object that strictly adheres to the schema \
    and contain no extra text.";

pub const EVALUATE_PROMPT_TEMPLATE: &str = r#"Transcript: {transcript}

Evaluation Criteria:
- Overall Score (0-100): a single integer score reflecting the overall quality of the answer.
- Feedback Text: a constructive paragraph (3-5 sentences) summarizing strengths and weaknesses across fluency, vocabulary, and filler words, with specific suggestions for improvement.
- Filler Words: identify and list any common filler words (e.g., 'um', 'uh', 'like', 'you know', 'so').

Return ONLY JSON with keys: overall_score, feedback_text, filler_words. Example schema: {
  "overall_score": <integer 0-100>,
  "feedback_text": <string 3-5 sentences>,
  "filler_words": [<string>, ...]
}"#;
