//! Prompt technique domain module.
//!
//! - `model`: technique identifiers and the `Technique` record
//! - `preset`: the built-in technique table and lookup
//!
//! Structured-output techniques promise strict JSON; [`parse_structured_reply`]
//! lets the UI collaborator branch on parse success instead of treating a
//! non-JSON reply as exceptional (a technique's output intentionally failing
//! to be structured data yet is an expected path).

mod model;
mod preset;

pub use model::{OutputFormat, Technique, TechniqueId};
pub use preset::{all, lookup};

/// Attempts to parse a model reply as the JSON a structured technique
/// promised. Failure is an ordinary outcome, not an error condition; the
/// caller typically falls back to rendering the raw text.
pub fn parse_structured_reply(reply: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(reply.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_parses() {
        let reply = r#"{"role": "Nurse", "questions": [], "tips": []}"#;
        let value = parse_structured_reply(reply).unwrap();
        assert_eq!(value["role"], "Nurse");
    }

    #[test]
    fn prose_reply_is_a_parse_failure_not_a_panic() {
        assert!(parse_structured_reply("Here are your questions: ...").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(parse_structured_reply("\n  {\"tips\": []}\n").is_ok());
    }
}
