use crate::error::WeekgridError;
use crate::models::Task;

/// Ordered in-memory collection of validated tasks for the session.
/// Insertion order is preserved and drives list display and export order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    tasks: Vec<Task>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task and returns its position.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Overwrites the record at `index` in place.
    pub fn replace(&mut self, index: usize, task: Task) -> Result<(), WeekgridError> {
        let len = self.tasks.len();
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(WeekgridError::out_of_range(index, len)),
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, WeekgridError> {
        if index >= self.tasks.len() {
            return Err(WeekgridError::out_of_range(index, self.tasks.len()));
        }
        Ok(self.tasks.remove(index))
    }

    /// Discards all current records and replaces them with `tasks`.
    /// The only bulk mutation; callers must validate the full input first.
    pub fn import(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
