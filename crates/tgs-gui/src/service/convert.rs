//! Conversion service - runs the generator off the UI thread.
//!
//! Uses the `Task::perform` pattern: the future resolves to a plain
//! `Result` and the caller turns it into a message. The generator is an
//! opaque collaborator; any failure (malformed sample while the user is
//! mid-keystroke, unknown option combination, internal error) comes back
//! as an error string for the caller to log and treat as "no output".

use tgs_generate::GenerateRequest;

/// Run a generation request on a blocking thread.
///
/// Designed for `Task::perform`:
///
/// ```ignore
/// Task::perform(run_generation(request), move |result| {
///     Message::GenerationFinished { seq, result }
/// })
/// ```
pub async fn run_generation(request: GenerateRequest) -> Result<Vec<String>, String> {
    tokio::task::spawn_blocking(move || {
        tgs_generate::generate(&request).map(|source| source.lines)
    })
    .await
    .map_err(|e| format!("generation task panicked: {e}"))?
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn request(text: &str) -> GenerateRequest {
        GenerateRequest {
            language: "typescript".to_owned(),
            sample_name: "Welcome".to_owned(),
            sample_text: text.to_owned(),
            options: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn successful_run_yields_lines() {
        let lines = run_generation(request(r#"{"x": 1}"#)).await.unwrap();
        assert!(lines.iter().any(|l| l.contains("x: number;")));
    }

    #[tokio::test]
    async fn malformed_sample_yields_an_error_not_a_panic() {
        let result = run_generation(request("{ mid-keystroke")).await;
        assert!(result.is_err());
    }
}
