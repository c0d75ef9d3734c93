use crudkit::{ColumnKind, ColumnSpec, IdStrategy, TableSchema};

/// Library members; `user` is reserved in PostgreSQL
pub static LIBRARY_USER: TableSchema = TableSchema {
    table: "library_user",
    primary_key: "id",
    id_strategy: IdStrategy::Generated,
    columns: &[
        ColumnSpec::required("id", ColumnKind::BigInt),
        ColumnSpec::nullable("username", ColumnKind::Text),
        ColumnSpec::nullable("full_name", ColumnKind::Text),
        ColumnSpec::nullable("email", ColumnKind::Text),
    ],
    foreign_keys: &[],
};

pub static BOOK: TableSchema = TableSchema {
    table: "book",
    primary_key: "id",
    id_strategy: IdStrategy::Generated,
    columns: &[
        ColumnSpec::required("id", ColumnKind::BigInt),
        ColumnSpec::nullable("title", ColumnKind::Text),
        ColumnSpec::nullable("author", ColumnKind::Text),
        ColumnSpec::nullable("isbn", ColumnKind::Text),
    ],
    foreign_keys: &[],
};
