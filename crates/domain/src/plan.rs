use std::collections::BTreeSet;
use std::fmt;

use chrono::Duration;
use log::debug;

use crate::{
    BodyPart, Catalog, Category, Context, Difficulty, Exercise, ExerciseId, Goal, GoalProfile,
    Minutes, score,
};

pub const MAX_EXERCISES_PER_BODY_PART: usize = 3;
pub const MIN_CANDIDATES_PER_BODY_PART: usize = 3;

const MAX_TIPS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub exercise: Exercise,
    pub prescription: Prescription,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub number: u32,
    pub label: &'static str,
    pub body_parts: Vec<BodyPart>,
    pub exercises: Vec<PlannedExercise>,
    pub time_constrained: bool,
    pub unmatched_body_parts: Vec<BodyPart>,
}

impl TrainingDay {
    pub fn duration(&self) -> Duration {
        Duration::minutes(
            self.exercises
                .iter()
                .map(|e| i64::from(u32::from(e.exercise.duration)))
                .sum(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan {
    pub days: Vec<TrainingDay>,
    pub tips: Vec<&'static str>,
}

impl WeeklyPlan {
    pub fn total_duration(&self) -> Duration {
        self.days.iter().map(TrainingDay::duration).sum()
    }

    /// Mean difficulty of all selected exercises on a 1 to 5 display scale,
    /// rounded to one decimal. 3.0 for a plan without exercises.
    #[must_use]
    pub fn difficulty_score(&self) -> f32 {
        let scores = self
            .days
            .iter()
            .flat_map(|d| &d.exercises)
            .map(|e| match e.exercise.difficulty {
                Difficulty::Beginner => 1.0,
                Difficulty::Intermediate => 3.0,
                Difficulty::Advanced => 5.0,
            })
            .collect::<Vec<f32>>();
        if scores.is_empty() {
            return 3.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = scores.iter().sum::<f32>() / scores.len() as f32;
        (mean * 10.0).round() / 10.0
    }

    pub fn exercise_ids(&self) -> BTreeSet<ExerciseId> {
        self.days
            .iter()
            .flat_map(|d| &d.exercises)
            .map(|e| e.exercise.id)
            .collect::<BTreeSet<_>>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub effort: Effort,
    pub rest: Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effort {
    Reps { min: u32, max: u32 },
    Timed(Minutes),
    Hold { seconds: u32 },
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effort::Reps { min, max } => write!(f, "{min}-{max} reps"),
            Effort::Timed(minutes) => write!(f, "{minutes} min"),
            Effort::Hold { seconds } => write!(f, "{seconds} s hold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rest {
    None,
    Seconds(u32),
    Range { min_seconds: u32, max_seconds: u32 },
}

impl fmt::Display for Rest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rest::None => write!(f, "none"),
            Rest::Seconds(seconds) => write!(f, "{seconds} s"),
            Rest::Range {
                min_seconds,
                max_seconds,
            } => {
                if min_seconds % 60 == 0 && max_seconds % 60 == 0 {
                    write!(f, "{}-{} min", min_seconds / 60, max_seconds / 60)
                } else {
                    write!(f, "{min_seconds}-{max_seconds} s")
                }
            }
        }
    }
}

/// Sets, reps and rest templated by exercise category; strength work is
/// further keyed on the training goal and experience level.
#[must_use]
pub fn prescription(exercise: &Exercise, goal: Goal, experience: Difficulty) -> Prescription {
    match exercise.category {
        Category::Cardio => Prescription {
            sets: 1,
            effort: Effort::Timed(exercise.duration),
            rest: Rest::None,
        },
        Category::Stretch => Prescription {
            sets: 1,
            effort: Effort::Hold { seconds: 30 },
            rest: Rest::Seconds(10),
        },
        Category::Weight | Category::Bodyweight => {
            let sets = match experience {
                Difficulty::Beginner | Difficulty::Intermediate => 3,
                Difficulty::Advanced => 4,
            };
            let (min, max) = match (goal, experience) {
                (Goal::MuscleGain, Difficulty::Beginner | Difficulty::Intermediate) => (8, 12),
                (Goal::MuscleGain, Difficulty::Advanced) => (6, 12),
                (Goal::FatLoss, Difficulty::Beginner) => (12, 15),
                (Goal::FatLoss, Difficulty::Intermediate) => (12, 18),
                (Goal::FatLoss, Difficulty::Advanced) => (15, 20),
                (Goal::Fitness, Difficulty::Beginner) => (10, 15),
                (Goal::Fitness, Difficulty::Intermediate) => (12, 18),
                (Goal::Fitness, Difficulty::Advanced) => (15, 25),
            };
            let rest = if goal == Goal::MuscleGain {
                Rest::Range {
                    min_seconds: 120,
                    max_seconds: 180,
                }
            } else {
                Rest::Range {
                    min_seconds: 60,
                    max_seconds: 120,
                }
            };
            Prescription {
                sets,
                effort: Effort::Reps { min, max },
                rest,
            }
        }
    }
}

enum Phase {
    SelectingDay(u32),
    Finalizing,
}

/// Assembles a weekly plan from an immutable catalog snapshot and a
/// validated goal profile. The computation is pure and deterministic: the
/// same catalog and profile always yield the same plan.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    profile: GoalProfile,
}

impl<'a> Planner<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, profile: GoalProfile) -> Self {
        Self { catalog, profile }
    }

    #[must_use]
    pub fn build(self) -> WeeklyPlan {
        let total_days = u32::from(u8::from(self.profile.frequency));
        let mut days = Vec::with_capacity(total_days as usize);
        let mut previous_days: BTreeSet<ExerciseId> = BTreeSet::new();
        let mut phase = Phase::SelectingDay(0);

        loop {
            phase = match phase {
                Phase::SelectingDay(day) => {
                    let training_day = self.select_day(day, &previous_days);
                    previous_days.extend(training_day.exercises.iter().map(|e| e.exercise.id));
                    days.push(training_day);
                    if day + 1 < total_days {
                        Phase::SelectingDay(day + 1)
                    } else {
                        Phase::Finalizing
                    }
                }
                Phase::Finalizing => {
                    return WeeklyPlan {
                        days,
                        tips: tips(&self.profile),
                    };
                }
            };
        }
    }

    fn select_day(&self, day: u32, previous_days: &BTreeSet<ExerciseId>) -> TrainingDay {
        let day_index = day as usize;
        let split = self.profile.split;
        let parts = split.body_parts(day_index);
        let candidates = parts
            .iter()
            .map(|&p| self.candidates(p))
            .collect::<Vec<_>>();

        let mut remaining = u32::from(self.profile.session_time);
        let mut exercises: Vec<PlannedExercise> = Vec::new();
        let mut picked: BTreeSet<ExerciseId> = BTreeSet::new();
        let mut picks_per_part = vec![0_u32; parts.len()];
        let mut time_constrained = false;
        let mut unmatched_body_parts = Vec::new();

        // First round: one exercise per target body part. If nothing fits
        // into the remaining budget, the shortest candidate is forced in and
        // the day is marked as time-constrained.
        for (i, &part) in parts.iter().enumerate() {
            if candidates[i].is_empty() {
                debug!("no catalog match for {part:?} on day {}", day + 1);
                unmatched_body_parts.push(part);
                continue;
            }
            if let Some(exercise) = self.best_candidate(
                &candidates[i],
                &picked,
                previous_days,
                remaining,
                picks_per_part[i],
            ) {
                remaining -= u32::from(exercise.duration);
                self.pick(exercise, &mut exercises, &mut picked);
                picks_per_part[i] += 1;
            } else if let Some(shortest) = candidates[i].iter().min_by_key(|e| (e.duration, e.id))
            {
                debug!("forcing shortest exercise for {part:?} on day {}", day + 1);
                remaining = remaining.saturating_sub(u32::from(shortest.duration));
                self.pick(shortest, &mut exercises, &mut picked);
                picks_per_part[i] += 1;
                time_constrained = true;
            }
        }

        // Further rounds: fill the remaining budget evenly across body
        // parts, up to the per-part cap.
        for _ in 1..MAX_EXERCISES_PER_BODY_PART {
            let mut picked_any = false;
            for (i, _) in parts.iter().enumerate() {
                if candidates[i].is_empty()
                    || picks_per_part[i] as usize >= MAX_EXERCISES_PER_BODY_PART
                {
                    continue;
                }
                if let Some(exercise) = self.best_candidate(
                    &candidates[i],
                    &picked,
                    previous_days,
                    remaining,
                    picks_per_part[i],
                ) {
                    remaining -= u32::from(exercise.duration);
                    self.pick(exercise, &mut exercises, &mut picked);
                    picks_per_part[i] += 1;
                    picked_any = true;
                }
            }
            if !picked_any {
                break;
            }
        }

        TrainingDay {
            number: day + 1,
            label: split.label(day_index),
            body_parts: parts.to_vec(),
            exercises,
            time_constrained,
            unmatched_body_parts,
        }
    }

    /// Candidates for one body part: all catalog entries of the part that
    /// are accessible at the profile's experience level, narrowed to the
    /// profile's goal when that still leaves enough variety.
    fn candidates(&self, body_part: BodyPart) -> Vec<&'a Exercise> {
        let accessible = self
            .catalog
            .of_body_part(body_part)
            .filter(|e| e.difficulty <= self.profile.experience)
            .collect::<Vec<_>>();
        let matching = accessible
            .iter()
            .copied()
            .filter(|e| e.goal == self.profile.goal)
            .collect::<Vec<_>>();
        if matching.len() >= MIN_CANDIDATES_PER_BODY_PART {
            matching
        } else {
            accessible
        }
    }

    fn best_candidate(
        &self,
        candidates: &[&'a Exercise],
        picked: &BTreeSet<ExerciseId>,
        previous_days: &BTreeSet<ExerciseId>,
        remaining: u32,
        same_part_picks: u32,
    ) -> Option<&'a Exercise> {
        let context = Context {
            goal: self.profile.goal,
            remaining_minutes: remaining,
            same_part_picks,
            previous_days,
        };
        let mut best: Option<(&'a Exercise, crate::Score)> = None;
        // Candidates are ordered by ascending identifier, so keeping the
        // first maximum breaks score ties deterministically.
        for &exercise in candidates {
            if picked.contains(&exercise.id) {
                continue;
            }
            if let Some(s) = score(exercise, &context) {
                match best {
                    Some((_, best_score)) if best_score >= s => {}
                    _ => best = Some((exercise, s)),
                }
            }
        }
        best.map(|(e, _)| e)
    }

    fn pick(
        &self,
        exercise: &Exercise,
        exercises: &mut Vec<PlannedExercise>,
        picked: &mut BTreeSet<ExerciseId>,
    ) {
        picked.insert(exercise.id);
        exercises.push(PlannedExercise {
            exercise: exercise.clone(),
            prescription: prescription(exercise, self.profile.goal, self.profile.experience),
        });
    }
}

fn tips(profile: &GoalProfile) -> Vec<&'static str> {
    let mut tips = Vec::new();

    match profile.experience {
        Difficulty::Beginner => tips.extend([
            "Focus on clean form before adding weight.",
            "Warm up thoroughly before and cool down after every session.",
            "Listen to your body and do not rush progression.",
        ]),
        Difficulty::Intermediate => {}
        Difficulty::Advanced => tips.extend([
            "Keep progressing through small load increases and exercise variation.",
            "Pay attention to mobility and recovery to stay injury-free.",
        ]),
    }

    match profile.goal {
        Goal::MuscleGain => tips.extend([
            "Sufficient protein and rest matter as much as the training itself.",
            "Prioritise compound movements and finish with isolation work.",
        ]),
        Goal::FatLoss => tips.extend([
            "Combine strength and cardio work for an effective calorie burn.",
            "Pair the training with consistent nutrition habits.",
        ]),
        Goal::Fitness => {}
    }

    let session_minutes = u32::from(profile.session_time);
    if session_minutes < 45 {
        tips.push("Short on time: keep rests strict and the intensity high.");
    } else if session_minutes > 90 {
        tips.push("With a long session, take extra care with warm-up and cool-down.");
    }

    tips.truncate(MAX_TIPS);
    tips
}
