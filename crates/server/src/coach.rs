use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use robur_domain::{LogSummary, Property, WorkoutLog};

const ANALYSIS_SYSTEM_PROMPT: &str = "You are a professional workout coach. Analyze the \
    user's workout log: evaluate intensity and time, assess the trained muscles and the \
    effect of the exercises, suggest a routine for the next session, and point out \
    precautions and improvements. Answer in a friendly, encouraging tone.";

const ROUTINE_SYSTEM_PROMPT: &str = "You are a professional workout coach. Based on the \
    user's training records, propose a personalised routine covering the requested period. \
    Describe the overall direction, a weekly overview with body parts per day, and a \
    detailed daily routine with exercise names, sets, reps and rest times. Keep the \
    routine concrete and achievable.";

#[derive(thiserror::Error, Debug)]
pub enum CoachError {
    #[error("coach API key is not configured")]
    Disabled,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("coach API returned status {0}")]
    Api(u16),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachAnswer {
    pub model: String,
    pub content: String,
}

/// Client for an OpenAI-compatible chat completion API. The service stays
/// fully functional without a key; only the coach endpoints report the
/// feature as unavailable.
pub struct CoachClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl CoachClient {
    #[must_use]
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn analyze_log(
        &self,
        log: &WorkoutLog,
        summary: &LogSummary,
        model: Option<&str>,
    ) -> Result<CoachAnswer, CoachError> {
        let prompt = log_analysis_prompt(log, summary);
        self.chat(model, ANALYSIS_SYSTEM_PROMPT, &prompt, 0.8, 1500)
            .await
    }

    pub async fn suggest_routine(
        &self,
        log: &WorkoutLog,
        days: u32,
        frequency: u32,
        model: Option<&str>,
    ) -> Result<CoachAnswer, CoachError> {
        let prompt = routine_prompt(log, days, frequency);
        self.chat(model, ROUTINE_SYSTEM_PROMPT, &prompt, 0.7, 2000)
            .await
    }

    async fn chat(
        &self,
        model: Option<&str>,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<CoachAnswer, CoachError> {
        let Some(api_key) = &self.api_key else {
            return Err(CoachError::Disabled);
        };
        let model = model.unwrap_or(&self.model);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&ChatRequest {
                model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: system,
                    },
                    ChatMessage {
                        role: "user",
                        content: user,
                    },
                ],
                temperature,
                max_tokens,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CoachError::Api(response.status().as_u16()));
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(CoachAnswer {
            model: model.to_string(),
            content,
        })
    }
}

fn log_analysis_prompt(log: &WorkoutLog, summary: &LogSummary) -> String {
    let mut prompt = format!("Please analyze this workout log.\n\nDate: {}\n", log.date);
    if let Some(memo) = &log.memo {
        let _ = writeln!(prompt, "Memo: {memo}");
    }

    prompt.push_str("\nExercises:\n");
    for (i, entry) in log.entries.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} - body part: {}, intensity: {}, time: {} min",
            i + 1,
            entry.name,
            entry.body_part.map_or("unknown", Property::name),
            entry.intensity.name(),
            entry.minutes,
        );
    }

    let _ = writeln!(prompt, "\nLocal summary: {}", summary.headline);
    if !summary.warnings.is_empty() {
        let _ = writeln!(prompt, "Noted concerns: {}", summary.warnings.join(" "));
    }

    prompt.push_str(
        "\nProvide a detailed evaluation covering: 1. overall intensity, time and variety, \
         2. trained muscles and their effect, 3. strengths and improvements, \
         4. concrete suggestions for the next session, 5. injury prevention advice.",
    );
    prompt
}

fn routine_prompt(log: &WorkoutLog, days: u32, frequency: u32) -> String {
    let mut body_parts = log
        .entries
        .iter()
        .filter_map(|e| e.body_part.map(Property::name))
        .collect::<Vec<_>>();
    body_parts.sort_unstable();
    body_parts.dedup();

    let mut prompt = format!(
        "Most recent training session: {}\n\nTrained body parts: {}\n\n",
        log.date,
        if body_parts.is_empty() {
            "none recorded".to_string()
        } else {
            body_parts.join(", ")
        },
    );
    let _ = writeln!(
        prompt,
        "Create a workout routine for the next {days} days with {frequency} sessions per week."
    );
    prompt.push_str(
        "Consider balanced coverage of the whole body, an appropriate split, progressive \
         overload and realistic session lengths. Include exercise names, sets, reps and \
         rest times.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use robur_domain::{BodyPart, Intensity, JournalEntry, Minutes, Name};

    use super::*;

    fn log() -> WorkoutLog {
        WorkoutLog {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            memo: Some("felt strong".to_string()),
            entries: vec![
                JournalEntry {
                    name: Name::new("Barbell Squat").unwrap(),
                    body_part: Some(BodyPart::Legs),
                    intensity: Intensity::High,
                    minutes: Minutes::new(30).unwrap(),
                },
                JournalEntry {
                    name: Name::new("Plank").unwrap(),
                    body_part: Some(BodyPart::Core),
                    intensity: Intensity::Low,
                    minutes: Minutes::new(10).unwrap(),
                },
            ],
        }
    }

    #[test]
    fn test_log_analysis_prompt_renders_entries() {
        let log = log();
        let prompt = log_analysis_prompt(&log, &LogSummary::new(&log));

        assert!(prompt.contains("Date: 2024-05-02"));
        assert!(prompt.contains("Memo: felt strong"));
        assert!(prompt.contains("1. Barbell Squat - body part: Legs, intensity: High, time: 30 min"));
        assert!(prompt.contains("2. Plank - body part: Core, intensity: Low, time: 10 min"));
        assert!(prompt.contains("Local summary: 2 exercises performed in 40 min on 2024-05-02."));
    }

    #[test]
    fn test_routine_prompt_renders_parameters() {
        let prompt = routine_prompt(&log(), 7, 4);

        assert!(prompt.contains("Trained body parts: Core, Legs"));
        assert!(prompt.contains("next 7 days with 4 sessions per week"));
    }

    #[tokio::test]
    async fn test_chat_without_key_is_disabled() {
        let client = CoachClient::new(
            "https://api.openai.com/v1".to_string(),
            None,
            "gpt-4o-mini".to_string(),
        );
        assert!(!client.enabled());

        let log = log();
        let result = client.analyze_log(&log, &LogSummary::new(&log), None).await;
        assert!(matches!(result, Err(CoachError::Disabled)));
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "system",
                content: "prompt",
            }],
            temperature: 0.7,
            max_tokens: 100,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["max_tokens"], 100);
    }
}
