//! Domain service - delegates to the user and book repositories

use super::repository::{BookRepository, UserRepository};
use crate::contract::{Book, User};
use crudkit::StoreError;
use std::sync::Arc;

pub struct LibraryService {
    users: Arc<dyn UserRepository>,
    books: Arc<dyn BookRepository>,
}

impl LibraryService {
    pub fn new(users: Arc<dyn UserRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { users, books }
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.users.find_by_id(id).await
    }

    pub async fn create_user(&self, user: &User) -> Result<User, StoreError> {
        self.users.save(user).await
    }

    pub async fn get_book(&self, id: i64) -> Result<Option<Book>, StoreError> {
        self.books.find_by_id(id).await
    }

    pub async fn create_book(&self, book: &Book) -> Result<Book, StoreError> {
        self.books.save(book).await
    }
}
