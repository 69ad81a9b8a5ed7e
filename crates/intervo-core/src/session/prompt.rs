//! Opening-prompt assembly.

use super::config::SessionConfig;

/// Builds the single user-role message that kicks off an interview.
///
/// The prompt instructs the model to introduce itself as the interviewer for
/// the configured role and difficulty, optionally grounded in a supplied job
/// description, and to ask exactly one opening question.
pub fn opening_prompt(config: &SessionConfig) -> String {
    let mut prompt = format!(
        "You are conducting a mock interview for a {} position at {} difficulty level.\n\n",
        config.role, config.difficulty
    );

    if !config.job_description.trim().is_empty() {
        prompt.push_str(&format!(
            "JOB DESCRIPTION:\n{}\n\n",
            config.job_description
        ));
    }

    prompt.push_str(
        "Start by:\n\
         1. Briefly introducing yourself as the interviewer\n\
         2. Asking your first interview question\n\
         \n\
         Ask exactly one question, then wait for the candidate's answer.\n\
         Keep it conversational and professional.",
    );

    prompt
}
