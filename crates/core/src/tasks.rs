//! Personal task list for the employee view. Purely local, no persistence.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A personal to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// The employee's local task list.
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Task list seeded with the original sample tasks.
    pub fn with_sample_data() -> Self {
        let mut list = Self::new();
        for (title, completed) in [
            ("Revisar cardápio do Restaurante A", false),
            ("Contatar Cliente B para coleta de informações", true),
            ("Finalizar implantação do Cliente C", false),
        ] {
            let id = list.add(title).expect("seed titles are non-empty").id;
            if completed {
                list.set_completed(id, true).expect("task just added");
            }
        }
        list
    }

    /// Add a task. A blank title is rejected the way the inline form does.
    pub fn add(&mut self, title: &str) -> Result<&Task, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::invalid("taskTitle", "Digite uma tarefa"));
        }
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            completed: false,
        };
        self.next_id += 1;
        self.tasks.push(task);
        Ok(self.tasks.last().expect("task just pushed"))
    }

    /// Toggle or set a task's completion flag.
    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<(), CoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "task",
                key: id.to_string(),
            })?;
        task.completed = completed;
        Ok(())
    }

    /// Remove a task by id.
    pub fn remove(&mut self, id: u64) -> Result<(), CoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(CoreError::NotFound {
                entity: "task",
                key: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
