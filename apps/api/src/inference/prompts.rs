// All prompt constants for the Inference Client.
// The model does every piece of actual matching work; these two templates
// are the entire "algorithm". Replace {jd_text} and {resume_text} before
// sending.

/// First-stage prompt: compare one resume against the JD and return a
/// free-text report. The percentage score is never parsed client-side —
/// it exists only inside the generated text.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"You are a helpful recruiter assistant.

Compare the resume below to the job description. Return:

1. Candidate Name (if known)
2. Match Score (percentage)
3. Reasons for the score
4. Warning if the score < 70%

Don't generate a chat message or email yet.

Job Description:
{jd_text}

Resume:
{resume_text}"#;

/// Second-stage prompt: on-demand outreach artifacts for one candidate.
/// Asks for exactly three things and nothing from the first stage.
pub const FOLLOWUP_PROMPT_TEMPLATE: &str = r#"Based on the following JD and resume, generate:

1. Chat message (casual, short)
2. Email message (formal, respectful)
3. Screening questions (3 to 5 max)

Job Description:
{jd_text}

Resume:
{resume_text}"#;
