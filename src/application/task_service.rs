use super::{ServiceError, ServiceResult};
use crate::domain::{Task, TaskId};
use crate::ports::TaskRepository;
use tracing::debug;

pub struct TaskService {
    repository: Box<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Box<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Creates a task from a description, trimming surrounding whitespace.
    /// Rejects descriptions that are empty after trimming.
    pub fn create_task(&mut self, description: &str) -> ServiceResult<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ServiceError::Validation(
                "Task description cannot be empty".to_string(),
            ));
        }

        let id = self.repository.next_id();
        let task = Task::new(id, description);
        self.repository.add(task.clone());
        debug!(%id, "task created");
        Ok(task)
    }

    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.repository.get_all()
    }

    /// Marks a task completed. Ids must be positive; this is checked before
    /// the lookup, so `complete_task(-1)` never reports not-found. Completing
    /// an already-completed task succeeds and leaves state unchanged.
    pub fn complete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        if id.0 <= 0 {
            return Err(ServiceError::Validation(
                "Task id must be a positive integer".to_string(),
            ));
        }

        let mut task = self
            .repository
            .get_by_id(id)
            .ok_or(ServiceError::NotFound(id))?;

        task.mark_completed();
        self.repository.update(task);
        debug!(%id, "task completed");
        Ok(())
    }
}
