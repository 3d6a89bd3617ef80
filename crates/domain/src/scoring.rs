use std::collections::BTreeSet;

use crate::{Exercise, ExerciseId, Goal};

pub const GOAL_WEIGHT: f32 = 0.4;
pub const BALANCE_WEIGHT: f32 = 0.3;
pub const TIME_WEIGHT: f32 = 0.2;
pub const VARIETY_WEIGHT: f32 = 0.1;

const RELATED_GOAL_CREDIT: f32 = 0.4;
const OPPOSED_GOAL_CREDIT: f32 = 0.2;

/// Suitability of a candidate exercise, in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f32);

impl Score {
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<Score> for f32 {
    fn from(value: Score) -> Self {
        value.0
    }
}

/// Selection state a candidate is scored against: the remaining time budget
/// of the day, the number of exercises already picked for the same body part
/// today, and the exercises selected on previous days of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context<'a> {
    pub goal: Goal,
    pub remaining_minutes: u32,
    pub same_part_picks: u32,
    pub previous_days: &'a BTreeSet<ExerciseId>,
}

/// Weighted sum of the four sub-scores. Returns `None` if the exercise does
/// not fit into the remaining time budget at all, in which case it must not
/// be selected for the day (except by the time-constrained fallback).
#[must_use]
pub fn score(exercise: &Exercise, context: &Context) -> Option<Score> {
    let time = time_fit(exercise.duration.into(), context.remaining_minutes)?;
    let variety = if context.previous_days.contains(&exercise.id) {
        0.0
    } else {
        1.0
    };
    Some(Score(
        GOAL_WEIGHT * goal_match(exercise.goal, context.goal)
            + BALANCE_WEIGHT * balance(context.same_part_picks)
            + TIME_WEIGHT * time
            + VARIETY_WEIGHT * variety,
    ))
}

/// 1.0 for an exact goal match. A goal pair involving general fitness keeps
/// partial credit of 0.4, the opposed muscle gain/fat loss pair 0.2.
#[must_use]
pub fn goal_match(exercise_goal: Goal, profile_goal: Goal) -> f32 {
    if exercise_goal == profile_goal {
        1.0
    } else if exercise_goal == Goal::Fitness || profile_goal == Goal::Fitness {
        RELATED_GOAL_CREDIT
    } else {
        OPPOSED_GOAL_CREDIT
    }
}

/// Decays with every further pick for the same body part on the same day.
#[must_use]
pub fn balance(same_part_picks: u32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    {
        1.0 / (1.0 + same_part_picks as f32)
    }
}

/// 1.0 while the exercise consumes at most half of the remaining budget,
/// falling linearly to 0.5 at exactly the full budget. `None` if it cannot
/// fit at all.
#[must_use]
pub fn time_fit(duration_minutes: u32, remaining_minutes: u32) -> Option<f32> {
    if duration_minutes > remaining_minutes {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = duration_minutes as f32 / remaining_minutes as f32;

    if ratio <= 0.5 {
        Some(1.0)
    } else {
        Some(1.5 - ratio)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rstest::rstest;

    use crate::{BodyPart, Category, Difficulty, Minutes, Name, Property};

    use super::*;

    fn exercise(id: u32, duration: u32, goal: Goal) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new("Barbell Bench Press").unwrap(),
            body_part: BodyPart::Chest,
            category: Category::Weight,
            difficulty: Difficulty::Intermediate,
            duration: Minutes::new(duration).unwrap(),
            equipment: None,
            goal,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert_approx_eq!(
            GOAL_WEIGHT + BALANCE_WEIGHT + TIME_WEIGHT + VARIETY_WEIGHT,
            1.0
        );
    }

    #[rstest]
    #[case(Goal::MuscleGain, Goal::MuscleGain, 1.0)]
    #[case(Goal::FatLoss, Goal::FatLoss, 1.0)]
    #[case(Goal::Fitness, Goal::Fitness, 1.0)]
    #[case(Goal::Fitness, Goal::MuscleGain, 0.4)]
    #[case(Goal::MuscleGain, Goal::Fitness, 0.4)]
    #[case(Goal::Fitness, Goal::FatLoss, 0.4)]
    #[case(Goal::MuscleGain, Goal::FatLoss, 0.2)]
    #[case(Goal::FatLoss, Goal::MuscleGain, 0.2)]
    fn test_goal_match(
        #[case] exercise_goal: Goal,
        #[case] profile_goal: Goal,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(goal_match(exercise_goal, profile_goal), expected);
    }

    #[test]
    fn test_goal_match_is_highest_for_exact_match() {
        for profile_goal in Goal::iter() {
            for exercise_goal in Goal::iter() {
                assert!(
                    goal_match(*profile_goal, *profile_goal)
                        >= goal_match(*exercise_goal, *profile_goal)
                );
            }
        }
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1, 0.5)]
    #[case(2, 1.0 / 3.0)]
    #[case(3, 0.25)]
    fn test_balance(#[case] picks: u32, #[case] expected: f32) {
        assert_approx_eq!(balance(picks), expected);
    }

    #[test]
    fn test_balance_decays_monotonically() {
        for picks in 0..10 {
            assert!(balance(picks + 1) < balance(picks));
        }
    }

    #[rstest]
    #[case(10, 30, Some(1.0))]
    #[case(15, 30, Some(1.0))]
    #[case(20, 30, Some(1.5 - 2.0 / 3.0))]
    #[case(30, 30, Some(0.5))]
    #[case(31, 30, None)]
    #[case(5, 0, None)]
    fn test_time_fit(
        #[case] duration: u32,
        #[case] remaining: u32,
        #[case] expected: Option<f32>,
    ) {
        match (time_fit(duration, remaining), expected) {
            (Some(actual), Some(expected)) => assert_approx_eq!(actual, expected),
            (actual, expected) => assert_eq!(actual, expected),
        }
    }

    #[test]
    fn test_score_composition() {
        let previous_days = BTreeSet::from([ExerciseId::from(9)]);
        let context = Context {
            goal: Goal::MuscleGain,
            remaining_minutes: 60,
            same_part_picks: 1,
            previous_days: &previous_days,
        };

        // 0.4 * 1.0 + 0.3 * 0.5 + 0.2 * 1.0 + 0.1 * 1.0
        let fresh = score(&exercise(1, 15, Goal::MuscleGain), &context).unwrap();
        assert_approx_eq!(fresh.value(), 0.85);

        // variety drops to zero for an exercise picked on a previous day
        let repeated = score(&exercise(9, 15, Goal::MuscleGain), &context).unwrap();
        assert_approx_eq!(repeated.value(), 0.75);
    }

    #[test]
    fn test_score_excludes_unfitting_exercise() {
        let previous_days = BTreeSet::new();
        let context = Context {
            goal: Goal::MuscleGain,
            remaining_minutes: 10,
            same_part_picks: 0,
            previous_days: &previous_days,
        };

        assert_eq!(score(&exercise(1, 11, Goal::MuscleGain), &context), None);
    }

    #[test]
    fn test_score_matching_goal_never_scores_lower() {
        let previous_days = BTreeSet::new();
        for remaining in [20, 45, 90] {
            for picks in 0..3 {
                let context = Context {
                    goal: Goal::MuscleGain,
                    remaining_minutes: remaining,
                    same_part_picks: picks,
                    previous_days: &previous_days,
                };
                let matching = score(&exercise(1, 15, Goal::MuscleGain), &context).unwrap();
                for other in [Goal::FatLoss, Goal::Fitness] {
                    let mismatched = score(&exercise(1, 15, other), &context).unwrap();
                    assert!(matching >= mismatched);
                }
            }
        }
    }
}
