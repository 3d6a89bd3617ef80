use crate::{BodyPart, Category, Difficulty, Exercise, Goal, Minutes, Name};

#[derive(Clone, Copy)]
pub struct CatalogExercise {
    pub name: &'static str,
    pub body_part: BodyPart,
    pub category: Category,
    pub difficulty: Difficulty,
    pub duration: u32,
    pub equipment: Option<&'static str>,
    pub goal: Goal,
}

/// Built-in exercise records, converted to domain exercises with sequential
/// identifiers. Used to seed an empty catalog store.
#[must_use]
pub fn exercises() -> Vec<Exercise> {
    EXERCISES
        .iter()
        .enumerate()
        .map(|(i, e)| Exercise {
            #[allow(clippy::cast_possible_truncation)]
            id: (i as u32 + 1).into(),
            name: Name::new(e.name).unwrap(),
            body_part: e.body_part,
            category: e.category,
            difficulty: e.difficulty,
            duration: Minutes::new(e.duration).unwrap(),
            equipment: e.equipment.map(str::to_string),
            goal: e.goal,
        })
        .collect()
}

const EXERCISES: [CatalogExercise; 54] = [
    // Chest
    CatalogExercise {
        name: "Barbell Bench Press",
        body_part: BodyPart::Chest,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 15,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Burpee",
        body_part: BodyPart::Chest,
        category: Category::Cardio,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: None,
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Cable Crossover",
        body_part: BodyPart::Chest,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 12,
        equipment: Some("cable"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Chest Opener Stretch",
        body_part: BodyPart::Chest,
        category: Category::Stretch,
        difficulty: Difficulty::Beginner,
        duration: 5,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Dumbbell Fly",
        body_part: BodyPart::Chest,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 12,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Incline Dumbbell Press",
        body_part: BodyPart::Chest,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 15,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Push Up",
        body_part: BodyPart::Chest,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Ring Dip",
        body_part: BodyPart::Chest,
        category: Category::Bodyweight,
        difficulty: Difficulty::Advanced,
        duration: 12,
        equipment: Some("gymnastic rings"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Weighted Dip",
        body_part: BodyPart::Chest,
        category: Category::Weight,
        difficulty: Difficulty::Advanced,
        duration: 12,
        equipment: Some("parallel bars"),
        goal: Goal::MuscleGain,
    },
    // Back
    CatalogExercise {
        name: "Barbell Deadlift",
        body_part: BodyPart::Back,
        category: Category::Weight,
        difficulty: Difficulty::Advanced,
        duration: 18,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Barbell Row",
        body_part: BodyPart::Back,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 15,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Cat-Cow Stretch",
        body_part: BodyPart::Back,
        category: Category::Stretch,
        difficulty: Difficulty::Beginner,
        duration: 5,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Inverted Row",
        body_part: BodyPart::Back,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Lat Pulldown",
        body_part: BodyPart::Back,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 12,
        equipment: Some("machine"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Pull Up",
        body_part: BodyPart::Back,
        category: Category::Bodyweight,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: Some("pull-up bar"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Rowing Machine",
        body_part: BodyPart::Back,
        category: Category::Cardio,
        difficulty: Difficulty::Beginner,
        duration: 20,
        equipment: Some("machine"),
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Seated Cable Row",
        body_part: BodyPart::Back,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 12,
        equipment: Some("cable"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Superman Hold",
        body_part: BodyPart::Back,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 5,
        equipment: None,
        goal: Goal::Fitness,
    },
    // Legs
    CatalogExercise {
        name: "Barbell Squat",
        body_part: BodyPart::Legs,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 18,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Bulgarian Split Squat",
        body_part: BodyPart::Legs,
        category: Category::Weight,
        difficulty: Difficulty::Advanced,
        duration: 12,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Hamstring Stretch",
        body_part: BodyPart::Legs,
        category: Category::Stretch,
        difficulty: Difficulty::Beginner,
        duration: 5,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Jump Rope",
        body_part: BodyPart::Legs,
        category: Category::Cardio,
        difficulty: Difficulty::Beginner,
        duration: 15,
        equipment: Some("jump rope"),
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Leg Press",
        body_part: BodyPart::Legs,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 12,
        equipment: Some("machine"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Lunge",
        body_part: BodyPart::Legs,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Romanian Deadlift",
        body_part: BodyPart::Legs,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 15,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Stair Climber",
        body_part: BodyPart::Legs,
        category: Category::Cardio,
        difficulty: Difficulty::Intermediate,
        duration: 20,
        equipment: Some("machine"),
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Standing Calf Raise",
        body_part: BodyPart::Legs,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 8,
        equipment: Some("machine"),
        goal: Goal::MuscleGain,
    },
    // Shoulders
    CatalogExercise {
        name: "Arnold Press",
        body_part: BodyPart::Shoulders,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 12,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Band Pull Apart",
        body_part: BodyPart::Shoulders,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 6,
        equipment: Some("resistance band"),
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Battle Rope Wave",
        body_part: BodyPart::Shoulders,
        category: Category::Cardio,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: Some("battle rope"),
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Cable Face Pull",
        body_part: BodyPart::Shoulders,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: Some("cable"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Cross-Body Shoulder Stretch",
        body_part: BodyPart::Shoulders,
        category: Category::Stretch,
        difficulty: Difficulty::Beginner,
        duration: 4,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Dumbbell Lateral Raise",
        body_part: BodyPart::Shoulders,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Overhead Press",
        body_part: BodyPart::Shoulders,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 15,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Pike Push Up",
        body_part: BodyPart::Shoulders,
        category: Category::Bodyweight,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Reverse Fly",
        body_part: BodyPart::Shoulders,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    // Arms
    CatalogExercise {
        name: "Barbell Curl",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Bench Dip",
        body_part: BodyPart::Arms,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 8,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Cable Triceps Pushdown",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: Some("cable"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Concentration Curl",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 8,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Dumbbell Hammer Curl",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 8,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Overhead Triceps Extension",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: Some("dumbbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Skull Crusher",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Intermediate,
        duration: 10,
        equipment: Some("barbell"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Triceps Stretch",
        body_part: BodyPart::Arms,
        category: Category::Stretch,
        difficulty: Difficulty::Beginner,
        duration: 4,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Wrist Curl",
        body_part: BodyPart::Arms,
        category: Category::Weight,
        difficulty: Difficulty::Beginner,
        duration: 6,
        equipment: Some("dumbbell"),
        goal: Goal::Fitness,
    },
    // Core
    CatalogExercise {
        name: "Ab Rollout",
        body_part: BodyPart::Core,
        category: Category::Weight,
        difficulty: Difficulty::Advanced,
        duration: 10,
        equipment: Some("ab wheel"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Bicycle Crunch",
        body_part: BodyPart::Core,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 8,
        equipment: None,
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Child's Pose",
        body_part: BodyPart::Core,
        category: Category::Stretch,
        difficulty: Difficulty::Beginner,
        duration: 5,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Crunch",
        body_part: BodyPart::Core,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 8,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Dead Bug",
        body_part: BodyPart::Core,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 8,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Hanging Leg Raise",
        body_part: BodyPart::Core,
        category: Category::Bodyweight,
        difficulty: Difficulty::Advanced,
        duration: 8,
        equipment: Some("pull-up bar"),
        goal: Goal::MuscleGain,
    },
    CatalogExercise {
        name: "Mountain Climber",
        body_part: BodyPart::Core,
        category: Category::Cardio,
        difficulty: Difficulty::Beginner,
        duration: 10,
        equipment: None,
        goal: Goal::FatLoss,
    },
    CatalogExercise {
        name: "Plank",
        body_part: BodyPart::Core,
        category: Category::Bodyweight,
        difficulty: Difficulty::Beginner,
        duration: 5,
        equipment: None,
        goal: Goal::Fitness,
    },
    CatalogExercise {
        name: "Russian Twist",
        body_part: BodyPart::Core,
        category: Category::Bodyweight,
        difficulty: Difficulty::Intermediate,
        duration: 8,
        equipment: Some("dumbbell"),
        goal: Goal::FatLoss,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use crate::Property;

    use super::*;

    #[test]
    fn test_exercises_ids_are_sequential() {
        let exercises = exercises();
        assert_eq!(exercises.len(), EXERCISES.len());
        for (i, exercise) in exercises.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let expected = crate::ExerciseId::from(i as u32 + 1);
            assert_eq!(exercise.id, expected);
        }
    }

    #[test]
    fn test_exercises_grouped_by_body_part() {
        let body_parts = EXERCISES.iter().map(|e| e.body_part).collect::<Vec<_>>();
        let mut grouped = body_parts.clone();
        grouped.sort_unstable();
        assert_eq!(body_parts, grouped, "not grouped by body part");

        for body_part in BodyPart::iter() {
            let names = EXERCISES
                .iter()
                .filter(|e| e.body_part == *body_part)
                .map(|e| e.name)
                .collect::<Vec<_>>();
            let mut names_sorted = names.clone();
            names_sorted.sort_unstable();
            assert_eq!(names, names_sorted, "unsorted within {body_part:?}");
        }
    }

    #[test]
    fn test_exercises_duplicate_names() {
        let mut names = HashSet::new();

        for exercise in EXERCISES {
            let name = exercise.name;
            assert!(!names.contains(name), "duplicate name {name}");
            names.insert(name);
        }
    }

    #[test]
    fn test_exercises_valid_durations() {
        for exercise in EXERCISES {
            assert!(
                (1..1000).contains(&exercise.duration),
                "invalid duration for \"{}\"",
                exercise.name
            );
        }
    }

    #[test]
    fn test_exercises_body_part_coverage() {
        for body_part in BodyPart::iter() {
            let accessible = EXERCISES
                .iter()
                .filter(|e| {
                    e.body_part == *body_part && e.difficulty <= Difficulty::Intermediate
                })
                .count();
            assert!(
                accessible >= 5,
                "fewer than 5 intermediate-or-lower exercises for {body_part:?}"
            );
        }
    }

    #[test]
    fn test_exercises_equipment_consistency() {
        for exercise in EXERCISES {
            if exercise.name.contains("Barbell") {
                assert_eq!(exercise.equipment, Some("barbell"), "{}", exercise.name);
            }
            if exercise.name.contains("Dumbbell") {
                assert_eq!(exercise.equipment, Some("dumbbell"), "{}", exercise.name);
            }
            if exercise.name.contains("Cable") {
                assert_eq!(exercise.equipment, Some("cable"), "{}", exercise.name);
            }
            if exercise.name.contains("Machine") {
                assert_eq!(exercise.equipment, Some("machine"), "{}", exercise.name);
            }
            if exercise.name.contains("Ring") {
                assert_eq!(
                    exercise.equipment,
                    Some("gymnastic rings"),
                    "{}",
                    exercise.name
                );
            }
            if exercise.category == Category::Stretch {
                assert_eq!(exercise.goal, Goal::Fitness, "{}", exercise.name);
            }
        }
    }
}
