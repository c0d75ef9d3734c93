//! Row mappers for the `library_user` and `book` tables

use super::schema::{BOOK, LIBRARY_USER};
use crate::contract::{Book, User};
use crudkit::{MappingError, RecordMapper, Row, TableSchema};
use sea_orm::Value;

pub struct UserRowMapper;

impl RecordMapper for UserRowMapper {
    type Record = User;

    fn schema() -> &'static TableSchema {
        &LIBRARY_USER
    }

    fn id(record: &User) -> Option<i64> {
        record.id
    }

    fn from_row(row: &Row) -> Result<User, MappingError> {
        row.ensure_shape(&LIBRARY_USER)?;
        Ok(User {
            id: Some(row.get("id")?),
            username: row.get("username")?,
            full_name: row.get("full_name")?,
            email: row.get("email")?,
        })
    }

    fn to_params(record: &User) -> Vec<Value> {
        vec![
            record.id.into(),
            record.username.clone().into(),
            record.full_name.clone().into(),
            record.email.clone().into(),
        ]
    }
}

pub struct BookRowMapper;

impl RecordMapper for BookRowMapper {
    type Record = Book;

    fn schema() -> &'static TableSchema {
        &BOOK
    }

    fn id(record: &Book) -> Option<i64> {
        record.id
    }

    fn from_row(row: &Row) -> Result<Book, MappingError> {
        row.ensure_shape(&BOOK)?;
        Ok(Book {
            id: Some(row.get("id")?),
            title: row.get("title")?,
            author: row.get("author")?,
            isbn: row.get("isbn")?,
        })
    }

    fn to_params(record: &Book) -> Vec<Value> {
        vec![
            record.id.into(),
            record.title.clone().into(),
            record.author.clone().into(),
            record.isbn.clone().into(),
        ]
    }
}
