//! Todo repository contract and key-value implementation.

use crate::clock::Clock;
use crate::model::new_record_id;
use crate::model::todo::{NewTodo, Todo};
use crate::repo::{RecordCollection, RepoResult};
use crate::store::{keys, KeyValueStore, StoreAdapter};

/// Repository interface for todos.
pub trait TodoRepository {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<Todo>>;
    /// Assigns id and `created_at`, then appends.
    fn create(&self, todo: &NewTodo) -> RepoResult<Todo>;
    /// Replaces by id; returns the input unchanged whether or not it existed.
    fn update(&self, todo: &Todo) -> RepoResult<Todo>;
    /// Returns `true` when a todo was removed.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

pub struct KvTodoRepository<'s, S: KeyValueStore + ?Sized> {
    records: RecordCollection<'s, S, Todo>,
    clock: &'s dyn Clock,
}

impl<'s, S: KeyValueStore + ?Sized> KvTodoRepository<'s, S> {
    pub fn new(adapter: StoreAdapter<'s, S>, clock: &'s dyn Clock) -> Self {
        Self {
            records: RecordCollection::new(adapter, keys::TODOS),
            clock,
        }
    }
}

impl<S: KeyValueStore + ?Sized> TodoRepository for KvTodoRepository<'_, S> {
    fn list_by_owner(&self, owner_id: &str) -> RepoResult<Vec<Todo>> {
        self.records.list_by_owner(owner_id)
    }

    fn create(&self, todo: &NewTodo) -> RepoResult<Todo> {
        self.records.insert(Todo {
            id: new_record_id(),
            title: todo.title.clone(),
            completed: todo.completed,
            created_at: self.clock.now(),
            user_id: todo.user_id.clone(),
        })
    }

    fn update(&self, todo: &Todo) -> RepoResult<Todo> {
        self.records.replace(todo)?;
        Ok(todo.clone())
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        self.records.remove(id)
    }
}
