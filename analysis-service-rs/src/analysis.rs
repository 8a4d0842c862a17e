// analysis-service-rs/src/analysis.rs
// Validation rule and prompt assembly for the analysis endpoint
//
// Everything here is a pure function of the request fields so the prompt
// contract can be tested without a network in sight.

/// Minimum trimmed length of the study notes before analysis is attempted.
pub const MIN_NOTES_CHARS: usize = 40;

/// Returned as a successful result when the notes are too short to analyze.
pub const NOTES_GUIDANCE: &str =
    "Please paste meaningful study notes related to your exam or topic.";

/// Returned with HTTP 500 whenever the provider call fails, whatever the cause.
pub const ANALYSIS_FAILED: &str = "AI analysis failed. Please try again.";

/// Language used when the request omits one or sends a blank value.
pub const DEFAULT_LANGUAGE: &str = "English";

/// True when the trimmed notes are too short to ground a gap analysis.
pub fn notes_too_short(text: &str) -> bool {
    text.trim().chars().count() < MIN_NOTES_CHARS
}

/// Resolve the requested language, falling back to the default when blank.
pub fn resolve_language(language: &str) -> &str {
    if language.trim().is_empty() {
        DEFAULT_LANGUAGE
    } else {
        language
    }
}

/// Fixed system instruction sent with every analysis request.
pub fn system_prompt() -> &'static str {
    "You are a STRICT, exam-aware educational analyst.

Core Rules:
- Always align analysis with the student's EXAM GOAL.
- Detect the exam type automatically from the goal.
- Prioritize only subjects relevant to that exam.
- Ignore irrelevant subjects or noise.
- NEVER analyze code, UI text, or instructions unless the goal is programming-related.
- Base every gap strictly on the provided notes.
- Avoid generic advice."
}

/// User instruction interpolating the goal, notes, and response language.
///
/// The output layout is a fixed contract: exactly three numbered Gap blocks,
/// four labeled lines each, and a closing language directive.
pub fn user_prompt(goal: &str, notes: &str, language: &str) -> String {
    format!(
        "STUDENT GOAL:
{goal}

STUDENT NOTES:
{notes}

LANGUAGE:
{language}

ANALYSIS RULES:
- First infer the exam type from the goal (e.g., JEE, NEET, GATE, UPSC, School, Programming, General Learning).
- Identify which subjects/topics matter MOST for that exam.
- Ignore topics not required for the exam.
- Select the 3 MOST CRITICAL learning gaps based on:
  1. Repeated confusion
  2. Conceptual weakness
  3. Exam relevance

TASKS:
1. Identify exactly 3 critical learning gaps
2. Each gap must clearly match the exam goal
3. Quote or paraphrase the note causing the gap
4. Explain simply at the learner's level
5. Generate exam-style practice questions

OUTPUT FORMAT (STRICT):

Gap 1 (Subject / Topic):
Cause (from notes):
Explanation:
Practice Questions:

Gap 2 (Subject / Topic):
Cause (from notes):
Explanation:
Practice Questions:

Gap 3 (Subject / Topic):
Cause (from notes):
Explanation:
Practice Questions:

Respond ONLY in {language}."
    )
}
