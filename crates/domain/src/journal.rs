use std::collections::BTreeMap;
use std::slice::Iter;

use chrono::NaiveDate;

use crate::{BodyPart, Minutes, Name, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITIES: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];
        INTENSITIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        }
    }
}

impl Intensity {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl TryFrom<&str> for Intensity {
    type Error = IntensityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(IntensityError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntensityError {
    #[error("unknown intensity `{0}`")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub name: Name,
    pub body_part: Option<BodyPart>,
    pub intensity: Intensity,
    pub minutes: Minutes,
}

/// A user-submitted workout log for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutLog {
    pub date: NaiveDate,
    pub memo: Option<String>,
    pub entries: Vec<JournalEntry>,
}

/// Rule-based statistics over a workout log, computed locally before any
/// external analysis is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSummary {
    pub headline: String,
    pub total_exercises: usize,
    pub total_minutes: u32,
    pub avg_minutes: f32,
    pub intensities: BTreeMap<Intensity, usize>,
    pub body_parts: BTreeMap<BodyPart, usize>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

impl LogSummary {
    #[must_use]
    pub fn new(log: &WorkoutLog) -> Self {
        if log.entries.is_empty() {
            return Self {
                headline: format!("No exercises recorded on {}.", log.date),
                total_exercises: 0,
                total_minutes: 0,
                avg_minutes: 0.0,
                intensities: BTreeMap::new(),
                body_parts: BTreeMap::new(),
                insights: vec![],
                recommendations: vec!["Start with a short session to build the habit.".to_string()],
                warnings: vec![],
            };
        }

        let total_exercises = log.entries.len();
        let total_minutes = log
            .entries
            .iter()
            .map(|e| u32::from(e.minutes))
            .sum::<u32>();
        #[allow(clippy::cast_precision_loss)]
        let avg_minutes = total_minutes as f32 / total_exercises as f32;

        let mut intensities: BTreeMap<Intensity, usize> = BTreeMap::new();
        let mut body_parts: BTreeMap<BodyPart, usize> = BTreeMap::new();
        for entry in &log.entries {
            *intensities.entry(entry.intensity).or_insert(0) += 1;
            if let Some(body_part) = entry.body_part {
                *body_parts.entry(body_part).or_insert(0) += 1;
            }
        }

        let mut insights = Vec::new();
        let mut recommendations = Vec::new();
        let mut warnings = Vec::new();

        let share = |intensity: Intensity| {
            #[allow(clippy::cast_precision_loss)]
            {
                *intensities.get(&intensity).unwrap_or(&0) as f32 / total_exercises as f32 * 100.0
            }
        };
        let high = share(Intensity::High);
        let medium = share(Intensity::Medium);
        let low = share(Intensity::Low);

        if high > 70.0 {
            warnings.push(format!(
                "{high:.0}% of the session was high intensity. Allow for recovery and sufficient protein."
            ));
            recommendations
                .push("Plan the next session at moderate intensity to avoid overload.".to_string());
        } else if high > 50.0 {
            warnings.push(format!(
                "{high:.0}% of the session was high intensity. Stretch afterwards and sleep well."
            ));
        } else if low > 70.0 {
            recommendations.push(format!(
                "{low:.0}% of the session was low intensity. Raise the intensity gradually."
            ));
        } else if medium > 60.0 {
            insights.push(format!(
                "A medium-intensity share of {medium:.0}% indicates well-paced training."
            ));
        }

        if avg_minutes > 45.0 {
            insights.push(format!(
                "An average of {avg_minutes:.1} min per exercise shows excellent focus."
            ));
        } else if avg_minutes > 30.0 {
            insights.push(format!(
                "An average of {avg_minutes:.1} min per exercise is a solid workload."
            ));
        } else if avg_minutes > 15.0 {
            recommendations.push(format!(
                "An average of {avg_minutes:.1} min per exercise is on the short side. Aim for 20-30 min."
            ));
        } else {
            warnings.push(format!(
                "An average of {avg_minutes:.1} min per exercise is too short to be effective."
            ));
        }

        match body_parts.len() {
            0 => {}
            1 => {
                let part = body_parts
                    .keys()
                    .next()
                    .map_or("one body part", |p| p.name());
                warnings.push(format!(
                    "Only {part} was trained. Include other body parts next time to stay balanced."
                ));
            }
            2 => insights.push("Two body parts were trained in good balance.".to_string()),
            n => insights.push(format!("{n} body parts were covered. Excellent balance.")),
        }

        Self {
            headline: format!(
                "{} exercises performed in {} min on {}.",
                total_exercises, total_minutes, log.date
            ),
            total_exercises,
            total_minutes,
            avg_minutes,
            intensities,
            body_parts,
            insights,
            recommendations,
            warnings,
        }
    }
}
