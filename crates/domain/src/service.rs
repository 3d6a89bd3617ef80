use log::{debug, error};

use crate::{
    Catalog, Exercise, ExerciseFilter, ExerciseId, ExerciseRepository, GoalProfile, Planner,
    ReadError, WeeklyPlan,
};

pub struct Service<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ReadError> {
        let exercises = log_on_error!(self.repository.read_exercises(), "read", "exercises")?;
        Ok(exercises
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect())
    }

    pub async fn exercise(&self, id: ExerciseId) -> Result<Option<Exercise>, ReadError> {
        let exercises = log_on_error!(self.repository.read_exercises(), "read", "exercises")?;
        Ok(exercises.into_iter().find(|e| e.id == id))
    }

    pub async fn plan(&self, profile: GoalProfile) -> Result<WeeklyPlan, ReadError> {
        let exercises = log_on_error!(self.repository.read_exercises(), "read", "exercises")?;
        let catalog = Catalog::new(exercises);
        debug!(
            "building plan for {} days over a catalog of {} exercises",
            profile.frequency,
            catalog.len()
        );
        Ok(Planner::new(&catalog, profile).build())
    }
}
