//! Todo use-cases.

use crate::model::todo::{NewTodo, Todo};
use crate::repo::todo_repo::TodoRepository;
use crate::service::{non_blank, ServiceError, ServiceResult};

/// Completion filter for todo listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds an open todo with a trimmed title.
    pub fn add(&self, owner_id: &str, title: &str) -> ServiceResult<Todo> {
        let title = non_blank(title, "todo title cannot be blank")?;
        Ok(self.repo.create(&NewTodo::new(owner_id, title))?)
    }

    /// Owner's todos in storage order, narrowed by `filter`.
    pub fn list(&self, owner_id: &str, filter: TodoFilter) -> ServiceResult<Vec<Todo>> {
        let mut todos = self.repo.list_by_owner(owner_id)?;
        todos.retain(|todo| filter.matches(todo));
        Ok(todos)
    }

    /// Flips `completed` and persists the result.
    pub fn toggle(&self, owner_id: &str, id: &str) -> ServiceResult<Todo> {
        let mut todo = self.find(owner_id, id)?;
        todo.completed = !todo.completed;
        Ok(self.repo.update(&todo)?)
    }

    pub fn rename(&self, owner_id: &str, id: &str, title: &str) -> ServiceResult<Todo> {
        let title = non_blank(title, "todo title cannot be blank")?;
        let mut todo = self.find(owner_id, id)?;
        todo.title = title.to_string();
        Ok(self.repo.update(&todo)?)
    }

    /// Returns `false` when nothing was removed.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        Ok(self.repo.delete(id)?)
    }

    fn find(&self, owner_id: &str, id: &str) -> ServiceResult<Todo> {
        self.repo
            .list_by_owner(owner_id)?
            .into_iter()
            .find(|todo| todo.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}
