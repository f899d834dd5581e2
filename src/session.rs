//! Explicit session state for the interactive flows: the schedule store plus
//! the edit pointer, with modal dialogs modeled as capability traits so the
//! windowing toolkit stays outside the core.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::WeekgridError;
use crate::format;
use crate::models::{day_label, format_time, Color, Task};
use crate::render;
use crate::store::ScheduleStore;

/// Result of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Selected(T),
    Cancelled,
}

pub trait FilePicker {
    fn pick_import_file(&mut self) -> Selection<PathBuf>;
}

pub trait ColorPicker {
    fn pick_color(&mut self) -> Selection<Color>;
}

/// Headless dialogs: always cancel.
pub struct NoPicker;

impl FilePicker for NoPicker {
    fn pick_import_file(&mut self) -> Selection<PathBuf> {
        Selection::Cancelled
    }
}

impl ColorPicker for NoPicker {
    fn pick_color(&mut self) -> Selection<Color> {
        Selection::Cancelled
    }
}

/// Raw input-field values, exactly as a form would hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub color: String,
}

impl TaskForm {
    fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            day: day_label(task.day).to_string(),
            start: format_time(task.start),
            end: format_time(task.end),
            color: task.color.hex(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    store: ScheduleStore,
    editing: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Validates the form and commits it: replaces the record under edit if
    /// one is selected, otherwise appends. Returns the affected position.
    /// A validation error mutates nothing, including the edit pointer, so
    /// the user can fix the field and resubmit.
    pub fn submit(&mut self, form: &TaskForm) -> Result<usize, WeekgridError> {
        let task = Task::from_fields(&form.name, &form.day, &form.start, &form.end, &form.color)?;
        match self.editing.take() {
            Some(index) => {
                self.store.replace(index, task)?;
                Ok(index)
            }
            None => Ok(self.store.add(task)),
        }
    }

    /// Selects a record for in-place editing and returns a prefilled form.
    pub fn begin_edit(&mut self, index: usize) -> Result<TaskForm, WeekgridError> {
        let task = self
            .store
            .get(index)
            .ok_or_else(|| WeekgridError::out_of_range(index, self.store.len()))?;
        let form = TaskForm::from_task(task);
        self.editing = Some(index);
        Ok(form)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, WeekgridError> {
        let removed = self.store.remove(index)?;
        // keep the edit pointer coherent with the shifted positions
        self.editing = match self.editing {
            Some(e) if e == index => None,
            Some(e) if e > index => Some(e - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Duplicates the record at `index`; the copy is appended.
    pub fn clone_task(&mut self, index: usize) -> Result<usize, WeekgridError> {
        let task = self
            .store
            .get(index)
            .cloned()
            .ok_or_else(|| WeekgridError::out_of_range(index, self.store.len()))?;
        Ok(self.store.add(task))
    }

    /// Assigns one random muted color per distinct task name, so repeated
    /// tasks stay visually grouped.
    pub fn auto_colors(&mut self) {
        let mut rng = fastrand::Rng::new();
        let mut by_name: HashMap<String, Color> = HashMap::new();
        for index in 0..self.store.len() {
            let Some(mut task) = self.store.get(index).cloned() else {
                break;
            };
            let color = *by_name
                .entry(task.name.clone())
                .or_insert_with(|| Color::random_muted(&mut rng));
            task.color = color;
            let _ = self.store.replace(index, task);
        }
    }

    /// Parses the whole file first, then replaces the store atomically.
    /// On any parse error the prior store (and edit pointer) stay intact.
    pub fn import_file(&mut self, path: &Path) -> Result<usize, WeekgridError> {
        let tasks = format::read_file(path)?;
        let count = tasks.len();
        self.store.import(tasks);
        self.editing = None;
        Ok(count)
    }

    /// Asks the file picker for an import file. Cancellation is not an
    /// error: the store is left as it was.
    pub fn import_interactive(
        &mut self,
        picker: &mut dyn FilePicker,
    ) -> Result<Option<usize>, WeekgridError> {
        match picker.pick_import_file() {
            Selection::Selected(path) => self.import_file(&path).map(Some),
            Selection::Cancelled => Ok(None),
        }
    }

    /// Fills the form's color field from the picker; cancellation keeps the
    /// field as-is.
    pub fn apply_picked_color(form: &mut TaskForm, picker: &mut dyn ColorPicker) {
        if let Selection::Selected(color) = picker.pick_color() {
            form.color = color.hex();
        }
    }

    /// Canonical text of the current store, one task per line.
    pub fn export(&self) -> String {
        format::write(self.store.tasks())
    }

    pub fn render_to(&self, path: &Path) -> Result<(), WeekgridError> {
        render::render_schedule(self.store.tasks(), path)
    }
}
