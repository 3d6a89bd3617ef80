use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, warn};

use robur_domain::{
    BodyPart, Catalog, Category, Difficulty, Exercise, ExerciseFilter, Frequency, Goal,
    GoalProfile, Intensity, JournalEntry, LogSummary, Minutes, Name, Property, ReadError, Service,
    Split, TrainingDay, WeeklyPlan, WorkoutLog,
};
use robur_storage::{CatalogStore, SqliteStore};

use crate::coach::{CoachClient, CoachError};
use crate::videos::{Video, VideoClient};

pub struct AppState {
    pub service: Service<CatalogStore>,
    pub catalog: CatalogStore,
    pub store: SqliteStore,
    pub videos: VideoClient,
    pub coach: CoachClient,
    pub started: Instant,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/body-parts", get(body_parts))
        .route("/api/exercises", get(list_exercises))
        .route("/api/exercises/{id}", get(get_exercise))
        .route("/api/plan", post(build_plan))
        .route("/api/journal/analyze", post(analyze_journal))
        .route("/api/journal/plan", post(suggest_routine))
        .route("/api/catalog/refresh", post(refresh_catalog))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug)]
pub enum ApiError {
    Validation {
        field: &'static str,
        message: String,
    },
    BadRequest(String),
    NotFound,
    CoachUnavailable,
    Internal,
}

impl From<ReadError> for ApiError {
    fn from(err: ReadError) -> Self {
        error!("catalog read failed: {err}");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field) = match self {
            ApiError::Validation { field, message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, Some(field))
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string(), None),
            ApiError::CoachUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "coach API is not configured".to_string(),
                None,
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
                None,
            ),
        };
        (status, Json(ErrorBody { error, field })).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    total_exercises: usize,
    version: &'static str,
    uptime_seconds: u64,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        total_exercises: state.catalog.get().len(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}

#[derive(Debug, Serialize)]
struct BodyPartResponse {
    token: &'static str,
    name: &'static str,
    description: &'static str,
}

async fn body_parts() -> Json<Vec<BodyPartResponse>> {
    Json(
        BodyPart::iter()
            .map(|p| BodyPartResponse {
                token: p.token(),
                name: p.name(),
                description: p.description(),
            })
            .collect(),
    )
}

#[derive(Debug, Serialize, PartialEq)]
struct ExerciseResponse {
    id: u32,
    name: String,
    body_part: &'static str,
    category: &'static str,
    difficulty: &'static str,
    duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    equipment: Option<String>,
    target_goal: &'static str,
}

impl From<&Exercise> for ExerciseResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: *exercise.id,
            name: exercise.name.to_string(),
            body_part: exercise.body_part.token(),
            category: exercise.category.token(),
            difficulty: exercise.difficulty.token(),
            duration_minutes: exercise.duration.into(),
            equipment: exercise.equipment.clone(),
            target_goal: exercise.goal.token(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ExercisesQuery {
    body_part: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    goal: Option<String>,
}

impl ExercisesQuery {
    fn filter(&self) -> Result<ExerciseFilter, ApiError> {
        fn parse<'v, T: TryFrom<&'v str>>(value: &'v Option<String>) -> Result<Option<T>, ApiError>
        where
            T::Error: std::fmt::Display,
        {
            value
                .as_deref()
                .map(|v| T::try_from(v).map_err(|e| ApiError::BadRequest(e.to_string())))
                .transpose()
        }

        Ok(ExerciseFilter {
            body_part: parse::<BodyPart>(&self.body_part)?,
            category: parse::<Category>(&self.category)?,
            difficulty: parse::<Difficulty>(&self.difficulty)?,
            goal: parse::<Goal>(&self.goal)?,
        })
    }
}

async fn list_exercises(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExercisesQuery>,
) -> Result<Json<Vec<ExerciseResponse>>, ApiError> {
    let filter = query.filter()?;
    let exercises = state.service.exercises(&filter).await?;
    Ok(Json(exercises.iter().map(ExerciseResponse::from).collect()))
}

async fn get_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let exercise = state.service.exercise(id.into()).await?;
    exercise
        .as_ref()
        .map(ExerciseResponse::from)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[derive(Debug, Deserialize)]
struct PlanRequest {
    weekly_frequency: u8,
    split_type: String,
    primary_goal: String,
    experience_level: String,
    available_time_minutes: u32,
}

impl PlanRequest {
    fn profile(&self) -> Result<GoalProfile, ApiError> {
        fn invalid<E: std::fmt::Display>(field: &'static str) -> impl FnOnce(E) -> ApiError {
            move |err| ApiError::Validation {
                field,
                message: err.to_string(),
            }
        }

        Ok(GoalProfile {
            frequency: Frequency::new(self.weekly_frequency)
                .map_err(invalid("weekly_frequency"))?,
            split: Split::try_from(self.split_type.as_str()).map_err(invalid("split_type"))?,
            goal: Goal::try_from(self.primary_goal.as_str()).map_err(invalid("primary_goal"))?,
            experience: Difficulty::try_from(self.experience_level.as_str())
                .map_err(invalid("experience_level"))?,
            session_time: Minutes::new(self.available_time_minutes)
                .map_err(invalid("available_time_minutes"))?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct PlanQuery {
    #[serde(default)]
    videos: bool,
}

#[derive(Debug, Serialize)]
struct PlannedExerciseResponse {
    id: u32,
    name: String,
    body_part: &'static str,
    difficulty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    equipment: Option<String>,
    sets: u32,
    reps: String,
    rest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    video: Option<Video>,
}

#[derive(Debug, Serialize)]
struct TrainingDayResponse {
    day: u32,
    label: &'static str,
    target_body_parts: Vec<&'static str>,
    exercises: Vec<PlannedExerciseResponse>,
    estimated_duration_minutes: i64,
    time_constrained: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unmatched_body_parts: Vec<&'static str>,
}

impl From<&TrainingDay> for TrainingDayResponse {
    fn from(day: &TrainingDay) -> Self {
        Self {
            day: day.number,
            label: day.label,
            target_body_parts: day.body_parts.iter().map(|p| p.token()).collect(),
            exercises: day
                .exercises
                .iter()
                .map(|planned| PlannedExerciseResponse {
                    id: *planned.exercise.id,
                    name: planned.exercise.name.to_string(),
                    body_part: planned.exercise.body_part.token(),
                    difficulty: planned.exercise.difficulty.token(),
                    equipment: planned.exercise.equipment.clone(),
                    sets: planned.prescription.sets,
                    reps: planned.prescription.effort.to_string(),
                    rest: planned.prescription.rest.to_string(),
                    video: None,
                })
                .collect(),
            estimated_duration_minutes: day.duration().num_minutes(),
            time_constrained: day.time_constrained,
            unmatched_body_parts: day
                .unmatched_body_parts
                .iter()
                .map(|p| p.token())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    days: Vec<TrainingDayResponse>,
    total_weekly_duration_minutes: i64,
    difficulty_score: f32,
    tips: Vec<&'static str>,
}

impl From<&WeeklyPlan> for PlanResponse {
    fn from(plan: &WeeklyPlan) -> Self {
        Self {
            days: plan.days.iter().map(TrainingDayResponse::from).collect(),
            total_weekly_duration_minutes: plan.total_duration().num_minutes(),
            difficulty_score: plan.difficulty_score(),
            tips: plan.tips.clone(),
        }
    }
}

async fn build_plan(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlanQuery>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let profile = request.profile()?;
    let plan = state.service.plan(profile).await?;
    let mut response = PlanResponse::from(&plan);

    if query.videos && state.videos.enabled() {
        for day in &mut response.days {
            for exercise in &mut day.exercises {
                exercise.video = state.videos.search(&exercise.name).await.into_iter().next();
            }
        }
    }

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct JournalEntryRequest {
    name: String,
    body_part: Option<String>,
    intensity: String,
    minutes: u32,
}

#[derive(Debug, Deserialize)]
struct JournalRequest {
    date: NaiveDate,
    memo: Option<String>,
    #[serde(default)]
    exercises: Vec<JournalEntryRequest>,
}

impl JournalRequest {
    fn log(&self) -> Result<WorkoutLog, ApiError> {
        fn invalid<E: std::fmt::Display>(field: &'static str) -> impl FnOnce(E) -> ApiError {
            move |err| ApiError::Validation {
                field,
                message: err.to_string(),
            }
        }

        let entries = self
            .exercises
            .iter()
            .map(|entry| {
                Ok(JournalEntry {
                    name: Name::new(&entry.name).map_err(invalid("name"))?,
                    body_part: entry
                        .body_part
                        .as_deref()
                        .map(|p| BodyPart::try_from(p).map_err(invalid("body_part")))
                        .transpose()?,
                    intensity: Intensity::try_from(entry.intensity.as_str())
                        .map_err(invalid("intensity"))?,
                    minutes: Minutes::new(entry.minutes).map_err(invalid("minutes"))?,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(WorkoutLog {
            date: self.date,
            memo: self.memo.clone(),
            entries,
        })
    }
}

#[derive(Debug, Serialize)]
struct LogSummaryResponse {
    headline: String,
    total_exercises: usize,
    total_minutes: u32,
    avg_minutes: f32,
    intensities: Vec<(String, usize)>,
    body_parts: Vec<(String, usize)>,
    insights: Vec<String>,
    recommendations: Vec<String>,
    warnings: Vec<String>,
}

impl From<&LogSummary> for LogSummaryResponse {
    fn from(summary: &LogSummary) -> Self {
        Self {
            headline: summary.headline.clone(),
            total_exercises: summary.total_exercises,
            total_minutes: summary.total_minutes,
            avg_minutes: summary.avg_minutes,
            intensities: summary
                .intensities
                .iter()
                .map(|(intensity, count)| (intensity.token().to_string(), *count))
                .collect(),
            body_parts: summary
                .body_parts
                .iter()
                .map(|(body_part, count)| (body_part.token().to_string(), *count))
                .collect(),
            insights: summary.insights.clone(),
            recommendations: summary.recommendations.clone(),
            warnings: summary.warnings.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CoachQuery {
    model: Option<String>,
}

#[derive(Debug, Serialize)]
struct CoachAnalysisResponse {
    model: String,
    analysis: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    summary: LogSummaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    coach: Option<CoachAnalysisResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coach_error: Option<String>,
}

async fn analyze_journal(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoachQuery>,
    Json(request): Json<JournalRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let log = request.log()?;
    let summary = LogSummary::new(&log);

    let (coach, coach_error) = match state
        .coach
        .analyze_log(&log, &summary, query.model.as_deref())
        .await
    {
        Ok(answer) => (
            Some(CoachAnalysisResponse {
                model: answer.model,
                analysis: answer.content,
            }),
            None,
        ),
        Err(err) => {
            if !matches!(err, CoachError::Disabled) {
                warn!("coach analysis failed: {err}");
            }
            (None, Some(err.to_string()))
        }
    };

    Ok(Json(AnalyzeResponse {
        summary: LogSummaryResponse::from(&summary),
        coach,
        coach_error,
    }))
}

#[derive(Debug, Deserialize)]
struct SuggestQuery {
    days: Option<u32>,
    frequency: Option<u32>,
    model: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    routine: String,
    model: String,
    days: u32,
    frequency: u32,
}

async fn suggest_routine(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SuggestQuery>,
    Json(request): Json<JournalRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let days = query.days.unwrap_or(7);
    if !(1..=30).contains(&days) {
        return Err(ApiError::BadRequest(format!(
            "days must be in the range 1 to 30 ({days} is not)"
        )));
    }
    let frequency = query.frequency.unwrap_or(4);
    if !(1..=7).contains(&frequency) {
        return Err(ApiError::BadRequest(format!(
            "frequency must be in the range 1 to 7 ({frequency} is not)"
        )));
    }

    let log = request.log()?;
    let answer = state
        .coach
        .suggest_routine(&log, days, frequency, query.model.as_deref())
        .await
        .map_err(|err| match err {
            CoachError::Disabled => ApiError::CoachUnavailable,
            err => {
                error!("coach routine suggestion failed: {err}");
                ApiError::Internal
            }
        })?;

    Ok(Json(SuggestResponse {
        routine: answer.content,
        model: answer.model,
        days,
        frequency,
    }))
}

#[derive(Debug, Serialize)]
struct RefreshResponse {
    total_exercises: usize,
}

async fn refresh_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let exercises = state.store.load().map_err(|err| {
        error!("catalog refresh failed: {err}");
        ApiError::Internal
    })?;
    let catalog = Catalog::new(exercises);
    let total_exercises = catalog.len();
    state.catalog.replace(catalog);
    Ok(Json(RefreshResponse { total_exercises }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use robur_domain::{Planner, catalog};

    use super::*;

    fn plan_request(
        weekly_frequency: u8,
        split_type: &str,
        primary_goal: &str,
        experience_level: &str,
        available_time_minutes: u32,
    ) -> PlanRequest {
        PlanRequest {
            weekly_frequency,
            split_type: split_type.to_string(),
            primary_goal: primary_goal.to_string(),
            experience_level: experience_level.to_string(),
            available_time_minutes,
        }
    }

    #[test]
    fn test_plan_request_to_profile() {
        let profile = plan_request(3, "three_way", "muscle_gain", "intermediate", 60)
            .profile()
            .unwrap();

        assert_eq!(
            profile,
            GoalProfile {
                frequency: Frequency::new(3).unwrap(),
                split: Split::ThreeWay,
                goal: Goal::MuscleGain,
                experience: Difficulty::Intermediate,
                session_time: Minutes::new(60).unwrap(),
            }
        );
    }

    #[rstest]
    #[case(plan_request(0, "three_way", "muscle_gain", "beginner", 60), "weekly_frequency")]
    #[case(plan_request(8, "three_way", "muscle_gain", "beginner", 60), "weekly_frequency")]
    #[case(plan_request(3, "4_way", "muscle_gain", "beginner", 60), "split_type")]
    #[case(plan_request(3, "three_way", "bulking", "beginner", 60), "primary_goal")]
    #[case(plan_request(3, "three_way", "muscle_gain", "expert", 60), "experience_level")]
    #[case(plan_request(3, "three_way", "muscle_gain", "beginner", 0), "available_time_minutes")]
    fn test_plan_request_field_errors(
        #[case] request: PlanRequest,
        #[case] expected_field: &str,
    ) {
        match request.profile() {
            Err(ApiError::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_exercises_query_rejects_unknown_tokens() {
        let query = ExercisesQuery {
            body_part: Some("glutes".to_string()),
            ..ExercisesQuery::default()
        };
        assert!(matches!(query.filter(), Err(ApiError::BadRequest(_))));

        let query = ExercisesQuery {
            category: Some("weight".to_string()),
            difficulty: Some("beginner".to_string()),
            ..ExercisesQuery::default()
        };
        let filter = query.filter().unwrap();
        assert_eq!(filter.category, Some(Category::Weight));
        assert_eq!(filter.difficulty, Some(Difficulty::Beginner));
    }

    #[test]
    fn test_plan_response_shape() {
        let catalog = Catalog::new(catalog::exercises());
        let profile = plan_request(3, "three_way", "muscle_gain", "intermediate", 60)
            .profile()
            .unwrap();
        let plan = Planner::new(&catalog, profile).build();
        let response = PlanResponse::from(&plan);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["days"].as_array().unwrap().len(), 3);
        assert_eq!(json["days"][0]["label"], "Chest & Arms");
        assert!(json["days"][0]["exercises"][0]["reps"].is_string());
        assert!(json["total_weekly_duration_minutes"].as_i64().unwrap() > 0);
        assert!(json["difficulty_score"].as_f64().unwrap() >= 1.0);
    }

    #[test]
    fn test_journal_request_to_log() {
        let request = JournalRequest {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            memo: None,
            exercises: vec![JournalEntryRequest {
                name: "Barbell Squat".to_string(),
                body_part: Some("legs".to_string()),
                intensity: "high".to_string(),
                minutes: 30,
            }],
        };
        let log = request.log().unwrap();
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].body_part, Some(BodyPart::Legs));

        let request = JournalRequest {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            memo: None,
            exercises: vec![JournalEntryRequest {
                name: "Barbell Squat".to_string(),
                body_part: None,
                intensity: "extreme".to_string(),
                minutes: 30,
            }],
        };
        assert!(matches!(
            request.log(),
            Err(ApiError::Validation {
                field: "intensity",
                ..
            })
        ));
    }
}
