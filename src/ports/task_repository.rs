use crate::domain::{Task, TaskId};

#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository {
    fn add(&mut self, task: Task);
    fn get_all(&self) -> Vec<Task>;
    fn get_by_id(&self, id: TaskId) -> Option<Task>;
    // Silent no-op when the id is absent; not usable for insertion.
    fn update(&mut self, task: Task);
    // Peek only; repeated calls do not advance.
    fn next_id(&self) -> TaskId;
}
