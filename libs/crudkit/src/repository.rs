//! Generic SQL repository
//!
//! [`SqlRepository`] implements find-all, find-by-id, save and delete-by-id for
//! any entity described by a [`RecordMapper`]. Statements are built with
//! sea-query from the mapper's [`TableSchema`] and executed through a SeaORM
//! connection; rows come back through the mapper, never through derived
//! entity models.

use crate::error::StoreError;
use crate::mapper::RecordMapper;
use crate::row::Row;
use crate::schema::{IdStrategy, TableSchema};
use sea_orm::sea_query::{Alias, Expr, Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryResult, TransactionTrait};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct SqlRepository<M> {
    db: Arc<DatabaseConnection>,
    _mapper: PhantomData<fn() -> M>,
}

impl<M> Clone for SqlRepository<M> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _mapper: PhantomData,
        }
    }
}

impl<M: RecordMapper> SqlRepository<M> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _mapper: PhantomData,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Every row of the table, in no particular order
    pub async fn find_all(&self) -> Result<Vec<M::Record>, StoreError> {
        let schema = M::schema();
        let stmt = {
            let mut select = Query::select();
            select
                .columns(schema.column_names().map(Alias::new))
                .from(Alias::new(schema.table));
            self.db.get_database_backend().build(&select)
        };
        tracing::debug!(table = schema.table, sql = %stmt.sql, "find_all");

        let results = self.db.query_all(stmt).await?;
        results.iter().map(map_result::<M>).collect()
    }

    /// The row with primary key `id`, `None` when there is none
    pub async fn find_by_id(&self, id: i64) -> Result<Option<M::Record>, StoreError> {
        let schema = M::schema();
        let stmt = {
            let mut select = Query::select();
            select
                .columns(schema.column_names().map(Alias::new))
                .from(Alias::new(schema.table))
                .and_where(Expr::col(Alias::new(schema.primary_key)).eq(id));
            self.db.get_database_backend().build(&select)
        };
        tracing::debug!(table = schema.table, id, sql = %stmt.sql, "find_by_id");

        self.db
            .query_one(stmt)
            .await?
            .as_ref()
            .map(map_result::<M>)
            .transpose()
    }

    /// Plain INSERT returning the stored row.
    ///
    /// Generated keys are left to the store even when the record carries one.
    /// Assigned keys must be present.
    pub async fn insert(&self, record: &M::Record) -> Result<M::Record, StoreError> {
        let schema = M::schema();
        if schema.id_strategy == IdStrategy::Assigned && M::id(record).is_none() {
            return Err(StoreError::MissingId { table: schema.table });
        }

        let mut columns = Vec::with_capacity(schema.columns.len());
        let mut values: Vec<SimpleExpr> = Vec::with_capacity(schema.columns.len());
        for (column, value) in M::to_row(record)?.into_columns() {
            if schema.is_insertable(&column) {
                columns.push(Alias::new(column));
                values.push(value.into());
            }
        }

        let stmt = {
            let mut insert = Query::insert();
            insert
                .into_table(Alias::new(schema.table))
                .columns(columns)
                .values(values)?
                .returning_all();
            self.db.get_database_backend().build(&insert)
        };
        tracing::debug!(table = schema.table, sql = %stmt.sql, "insert");

        let result = self
            .db
            .query_one(stmt)
            .await?
            .ok_or(StoreError::NoRowReturned { table: schema.table })?;
        map_result::<M>(&result)
    }

    /// UPDATE of every non-key column by primary key.
    ///
    /// Returns `None` when no row has the record's id.
    pub async fn update(&self, record: &M::Record) -> Result<Option<M::Record>, StoreError> {
        let schema = M::schema();
        let id = M::id(record).ok_or(StoreError::MissingId { table: schema.table })?;

        let assignments: Vec<(Alias, SimpleExpr)> = M::to_row(record)?
            .into_columns()
            .into_iter()
            .filter(|(column, _)| column != schema.primary_key)
            .map(|(column, value)| (Alias::new(column), value.into()))
            .collect();

        if assignments.is_empty() {
            return self.find_by_id(id).await;
        }

        let stmt = {
            let mut update = Query::update();
            update
                .table(Alias::new(schema.table))
                .values(assignments)
                .and_where(Expr::col(Alias::new(schema.primary_key)).eq(id))
                .returning_all();
            self.db.get_database_backend().build(&update)
        };
        tracing::debug!(table = schema.table, id, sql = %stmt.sql, "update");

        self.db
            .query_one(stmt)
            .await?
            .as_ref()
            .map(map_result::<M>)
            .transpose()
    }

    /// Insert when the record has no id, otherwise update in place.
    ///
    /// An id that matches no row falls back to an insert; for generated keys
    /// the store then assigns a fresh id.
    pub async fn save(&self, record: &M::Record) -> Result<M::Record, StoreError> {
        let schema = M::schema();
        match (M::id(record), schema.id_strategy) {
            (None, IdStrategy::Generated) => self.insert(record).await,
            (None, IdStrategy::Assigned) => Err(StoreError::MissingId { table: schema.table }),
            (Some(_), _) => match self.update(record).await? {
                Some(saved) => Ok(saved),
                None => self.insert(record).await,
            },
        }
    }

    /// Delete by primary key, returning the number of rows removed
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        let schema = M::schema();
        delete_where(&*self.db, schema.table, schema.primary_key, id).await
    }

    /// Delete the rows of every `children` table that reference `id`, then
    /// the row itself, in one transaction.
    ///
    /// Returns the number of parent rows removed.
    pub async fn delete_cascade(
        &self,
        id: i64,
        children: &[&'static TableSchema],
    ) -> Result<u64, StoreError> {
        let parent = M::schema();
        let txn = self.db.begin().await?;

        for child in children {
            let fk = child
                .foreign_key_to(parent)
                .ok_or(StoreError::MissingForeignKey {
                    child: child.table,
                    parent: parent.table,
                })?;
            let removed = delete_where(&txn, child.table, fk.column, id).await?;
            tracing::debug!(table = child.table, parent = parent.table, id, removed, "cascade");
        }

        let affected = delete_where(&txn, parent.table, parent.primary_key, id).await?;
        txn.commit().await?;
        Ok(affected)
    }
}

fn map_result<M: RecordMapper>(result: &QueryResult) -> Result<M::Record, StoreError> {
    let row = Row::from_query_result(M::schema(), result)?;
    Ok(M::from_row(&row)?)
}

async fn delete_where<C: ConnectionTrait>(
    conn: &C,
    table: &'static str,
    column: &'static str,
    id: i64,
) -> Result<u64, StoreError> {
    let stmt = {
        let mut delete = Query::delete();
        delete
            .from_table(Alias::new(table))
            .and_where(Expr::col(Alias::new(column)).eq(id));
        conn.get_database_backend().build(&delete)
    };
    tracing::debug!(table, column, id, sql = %stmt.sql, "delete");

    Ok(conn.execute(stmt).await?.rows_affected())
}
