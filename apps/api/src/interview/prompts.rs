// All LLM prompt constants for the Interview module.
// Templates use `{placeholder}` markers filled by `render` before sending.

/// System prompt for interview-question generation.
/// Placeholders: `{role}`, `{difficulty}`.
pub const QUESTION_SYSTEM_TEMPLATE: &str = r#"You are an expert HR professional specializing in {role} interviews. Generate a relevant interview question and provide an ideal answer.

Role: {role}
Difficulty: {difficulty}

Generate a question that would be asked by an HR professional for this specific role. The question should test relevant skills, experience, and knowledge for {role}.

Then provide an ideal answer that demonstrates:
- Technical knowledge appropriate for {role}
- Professional experience
- Problem-solving abilities
- Communication skills

Return your response in this exact JSON format:
{
  "question": "Your interview question here",
  "idealAnswer": "Your ideal answer here"
}"#;

/// Placeholders: `{role}`, `{difficulty}`.
pub const QUESTION_USER_TEMPLATE: &str =
    "Generate an interview question for a {role} position at {difficulty} level.";

/// System prompt for skill-quiz question generation.
/// Placeholders: `{category}`, `{level}`, `{role}`.
pub const QUIZ_SYSTEM_TEMPLATE: &str = r#"You are an expert in {category} skills and knowledge assessment. Generate a multiple-choice quiz question for someone who wants to teach {category} at {level} level for the role of {role}.

The question should:
- Test practical knowledge relevant to {category} and {role}
- Be appropriate for {level} level understanding
- Have one clearly correct answer and three plausible distractors
- Be answerable by someone who would confidently teach this skill

Return your response in this exact JSON format:
{
  "question": "Your quiz question here",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correct": 0
}

Where "correct" is the 0-based index of the correct answer in the options array."#;

/// Placeholders: `{number}`, `{category}`, `{level}`, `{role}`.
pub const QUIZ_USER_TEMPLATE: &str =
    "Generate quiz question #{number} for {category} at {level} level for {role} role.";

pub const ANALYSIS_SYSTEM: &str = "You are an expert interview coach and HR professional \
    specializing in providing detailed, constructive feedback.";

/// Placeholders: `{question}`, `{role}`, `{answer}`, `{ideal_answer}`.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this interview response by comparing it directly with the provided ideal answer.

Interview Question: {question}
Role Being Interviewed For: {role}
Candidate's Answer: {answer}
Predefined Ideal Answer: {ideal_answer}

Compare the candidate's answer specifically against the predefined ideal answer. It contains the key points and approaches expected for this question and role.

Analyze the following:
1. Content Accuracy: How well does the candidate's answer align with the key points in the ideal answer?
2. Completeness: Did they cover the main topics mentioned in the ideal answer?
3. Communication Quality: Clarity, structure, and professionalism
4. Role-Specific Knowledge: Technical competence and industry understanding
5. Areas for Improvement: What key points from the ideal answer were missed?

Scoring criteria:
- 90-100: Covers all key points from ideal answer with excellent presentation
- 80-89: Covers most key points with good presentation
- 70-79: Covers some key points but missing important elements
- 60-69: Basic understanding but significant gaps compared to ideal answer
- Below 60: Major deficiencies in content and presentation

Return your response in this exact JSON format:
{
  "overallScore": 85,
  "tone": "Professional",
  "clarity": "Good",
  "pronunciation": "Clear",
  "userAnswer": "The candidate's transcribed answer",
  "feedback": "Detailed feedback comparing their answer to the ideal answer provided",
  "corrections": "Specific suggestions based on what was missing from the ideal answer"
}"#;

/// Replaces each `{key}` in `template` with its value in a single pass.
/// Substituted text is never rescanned; unknown `{...}` spans are kept as is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_every_occurrence() {
        let out = render(
            QUESTION_SYSTEM_TEMPLATE,
            &[("role", "Data Analyst"), ("difficulty", "advanced")],
        );
        assert!(!out.contains("{role}"));
        assert!(!out.contains("{difficulty}"));
        assert!(out.contains("specializing in Data Analyst interviews"));
        // JSON braces in the template survive
        assert!(out.contains("\"idealAnswer\""));
    }

    #[test]
    fn test_quiz_user_prompt() {
        let out = render(
            QUIZ_USER_TEMPLATE,
            &[
                ("number", "3"),
                ("category", "Design"),
                ("level", "beginner"),
                ("role", "Web Designer"),
            ],
        );
        assert_eq!(
            out,
            "Generate quiz question #3 for Design at beginner level for Web Designer role."
        );
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_values() {
        let out = render(
            "Q: {question} A: {answer} R: {role}",
            &[
                ("question", "What does {role} mean?"),
                ("answer", "I'd say {answer}"),
                ("role", "Data Analyst"),
            ],
        );
        assert_eq!(out, "Q: What does {role} mean? A: I'd say {answer} R: Data Analyst");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_braces() {
        assert_eq!(render("{x} {y", &[("y", "no")]), "{x} {y");
        assert_eq!(render("{{role}}", &[("role", "r")]), "{r}");
    }
}
