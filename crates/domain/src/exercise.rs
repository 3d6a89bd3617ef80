use std::slice::Iter;

use derive_more::{AsRef, Deref, Display, Into};

use crate::{Property, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: Name,
    pub body_part: BodyPart,
    pub category: Category,
    pub difficulty: Difficulty,
    pub duration: Minutes,
    pub equipment: Option<String>,
    pub goal: Goal,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseId(u32);

impl From<u32> for ExerciseId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 80 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 80 characters or fewer ({0} > 80)")]
    TooLong(usize),
}

#[derive(Debug, Display, Clone, Copy, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(u32);

impl Minutes {
    pub fn new(value: u32) -> Result<Self, MinutesError> {
        if !(1..1000).contains(&value) {
            return Err(MinutesError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Minutes {
    type Error = MinutesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Minutes::new(parsed_value),
            Err(_) => Err(MinutesError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MinutesError {
    #[error("Minutes must be in the range 1 to 999")]
    OutOfRange,
    #[error("Minutes must be an integer")]
    ParseError,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BodyPart {
    Chest = 1,
    Back = 2,
    Legs = 3,
    Shoulders = 4,
    Arms = 5,
    Core = 6,
}

impl Property for BodyPart {
    fn iter() -> Iter<'static, BodyPart> {
        static BODY_PARTS: [BodyPart; 6] = [
            BodyPart::Chest,
            BodyPart::Back,
            BodyPart::Legs,
            BodyPart::Shoulders,
            BodyPart::Arms,
            BodyPart::Core,
        ];
        BODY_PARTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Legs => "Legs",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Arms => "Arms",
            BodyPart::Core => "Core",
        }
    }
}

impl BodyPart {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            BodyPart::Chest => "chest",
            BodyPart::Back => "back",
            BodyPart::Legs => "legs",
            BodyPart::Shoulders => "shoulders",
            BodyPart::Arms => "arms",
            BodyPart::Core => "core",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            BodyPart::Chest => "Pecs and surrounding pushing muscles",
            BodyPart::Back => "Lats, traps and spinal erectors",
            BodyPart::Legs => "Quads, hamstrings, glutes and calves",
            BodyPart::Shoulders => "Front, side and rear delts",
            BodyPart::Arms => "Biceps, triceps and forearms",
            BodyPart::Core => "Abs and lower trunk",
        }
    }
}

impl TryFrom<&str> for BodyPart {
    type Error = BodyPartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "chest" => Ok(BodyPart::Chest),
            "back" => Ok(BodyPart::Back),
            "legs" => Ok(BodyPart::Legs),
            "shoulders" => Ok(BodyPart::Shoulders),
            "arms" => Ok(BodyPart::Arms),
            "core" => Ok(BodyPart::Core),
            _ => Err(BodyPartError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyPartError {
    #[error("unknown body part `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Weight,
    Bodyweight,
    Cardio,
    Stretch,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 4] = [
            Category::Weight,
            Category::Bodyweight,
            Category::Cardio,
            Category::Stretch,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Weight => "Weight",
            Category::Bodyweight => "Bodyweight",
            Category::Cardio => "Cardio",
            Category::Stretch => "Stretch",
        }
    }
}

impl Category {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Category::Weight => "weight",
            Category::Bodyweight => "bodyweight",
            Category::Cardio => "cardio",
            Category::Stretch => "stretch",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "weight" => Ok(Category::Weight),
            "bodyweight" => Ok(Category::Bodyweight),
            "cardio" => Ok(Category::Cardio),
            "stretch" => Ok(Category::Stretch),
            _ => Err(CategoryError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("unknown category `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTIES: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl Difficulty {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(DifficultyError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("unknown difficulty `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Goal {
    MuscleGain,
    FatLoss,
    Fitness,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 3] = [Goal::MuscleGain, Goal::FatLoss, Goal::Fitness];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::MuscleGain => "Muscle gain",
            Goal::FatLoss => "Fat loss",
            Goal::Fitness => "Fitness",
        }
    }
}

impl Goal {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Goal::MuscleGain => "muscle_gain",
            Goal::FatLoss => "fat_loss",
            Goal::Fitness => "fitness",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "muscle_gain" => Ok(Goal::MuscleGain),
            "fat_loss" => Ok(Goal::FatLoss),
            "fitness" => Ok(Goal::Fitness),
            _ => Err(GoalError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("unknown goal `{0}`")]
    Unknown(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub body_part: Option<BodyPart>,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub goal: Option<Goal>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.body_part.is_none_or(|p| exercise.body_part == p)
            && self.category.is_none_or(|c| exercise.category == c)
            && self.difficulty.is_none_or(|d| exercise.difficulty == d)
            && self.goal.is_none_or(|g| exercise.goal == g)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    #[must_use]
    pub fn new(mut exercises: Vec<Exercise>) -> Self {
        exercises.sort_by_key(|e| e.id);
        exercises.dedup_by_key(|e| e.id);
        Self { exercises }
    }

    #[must_use]
    pub fn get(&self, id: ExerciseId) -> Option<&Exercise> {
        self.exercises
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|i| &self.exercises[i])
    }

    pub fn iter(&self) -> Iter<'_, Exercise> {
        self.exercises.iter()
    }

    pub fn of_body_part(&self, body_part: BodyPart) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.body_part == body_part)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Exercise;
    type IntoIter = Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
