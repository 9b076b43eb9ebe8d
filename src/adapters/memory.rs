use crate::domain::{Task, TaskId};
use crate::ports::TaskRepository;

/// Volatile task store. Tasks live in insertion order; ids come from a
/// monotonic counter that stays ahead of every stored id.
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    next_id: i64,
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add(&mut self, task: Task) {
        if task.id.0 >= self.next_id {
            self.next_id = task.id.0 + 1;
        }
        // Id-to-task mapping: re-adding an existing id replaces in place.
        if let Some(stored) = self.tasks.iter_mut().find(|stored| stored.id == task.id) {
            *stored = task;
        } else {
            self.tasks.push(task);
        }
    }

    fn get_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn update(&mut self, task: Task) {
        if let Some(stored) = self.tasks.iter_mut().find(|stored| stored.id == task.id) {
            *stored = task;
        }
    }

    fn next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }
}
