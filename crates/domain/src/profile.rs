use std::slice::Iter;

use derive_more::{Deref, Display, Into};

use crate::{BodyPart, Difficulty, Goal, Minutes, Property};

/// Request-scoped training preferences. Constructing the typed values at the
/// boundary is what rejects malformed input; the planner itself is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProfile {
    pub frequency: Frequency,
    pub split: Split,
    pub goal: Goal,
    pub experience: Difficulty,
    pub session_time: Minutes,
}

#[derive(Deref, Display, Debug, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u8);

impl Frequency {
    pub fn new(value: u8) -> Result<Self, FrequencyError> {
        if !(1..=7).contains(&value) {
            return Err(FrequencyError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrequencyError {
    #[error("Weekly frequency must be in the range 1 to 7 ({0} is not)")]
    OutOfRange(u8),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Split {
    TwoWay,
    ThreeWay,
    FullBody,
}

impl Property for Split {
    fn iter() -> Iter<'static, Split> {
        static SPLITS: [Split; 3] = [Split::TwoWay, Split::ThreeWay, Split::FullBody];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Split::TwoWay => "Two-way split",
            Split::ThreeWay => "Three-way split",
            Split::FullBody => "Full body",
        }
    }
}

static UPPER_BODY: [BodyPart; 4] = [
    BodyPart::Chest,
    BodyPart::Back,
    BodyPart::Shoulders,
    BodyPart::Arms,
];
static LOWER_BODY: [BodyPart; 2] = [BodyPart::Legs, BodyPart::Core];
static CHEST_AND_ARMS: [BodyPart; 2] = [BodyPart::Chest, BodyPart::Arms];
static BACK_AND_SHOULDERS: [BodyPart; 2] = [BodyPart::Back, BodyPart::Shoulders];
static LEGS_AND_CORE: [BodyPart; 2] = [BodyPart::Legs, BodyPart::Core];
static ALL_BODY_PARTS: [BodyPart; 6] = [
    BodyPart::Chest,
    BodyPart::Back,
    BodyPart::Legs,
    BodyPart::Shoulders,
    BodyPart::Arms,
    BodyPart::Core,
];

impl Split {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Split::TwoWay => "two_way",
            Split::ThreeWay => "three_way",
            Split::FullBody => "full_body",
        }
    }

    /// Target body parts of the given zero-based training day. Total for any
    /// day index; the cycle repeats to fill the week.
    #[must_use]
    pub fn body_parts(self, day: usize) -> &'static [BodyPart] {
        match self {
            Split::TwoWay => {
                if day % 2 == 0 {
                    &UPPER_BODY
                } else {
                    &LOWER_BODY
                }
            }
            Split::ThreeWay => match day % 3 {
                0 => &CHEST_AND_ARMS,
                1 => &BACK_AND_SHOULDERS,
                _ => &LEGS_AND_CORE,
            },
            Split::FullBody => &ALL_BODY_PARTS,
        }
    }

    #[must_use]
    pub fn label(self, day: usize) -> &'static str {
        match self {
            Split::TwoWay => {
                if day % 2 == 0 {
                    "Upper Body"
                } else {
                    "Lower Body"
                }
            }
            Split::ThreeWay => match day % 3 {
                0 => "Chest & Arms",
                1 => "Back & Shoulders",
                _ => "Legs & Core",
            },
            Split::FullBody => "Full Body",
        }
    }
}

impl TryFrom<&str> for Split {
    type Error = SplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "two_way" => Ok(Split::TwoWay),
            "three_way" => Ok(Split::ThreeWay),
            "full_body" => Ok(Split::FullBody),
            _ => Err(SplitError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("unknown split type `{0}`")]
    Unknown(String),
}
