use crudkit::{ColumnKind, ColumnSpec, IdStrategy, TableSchema};

/// `student` table; ids are assigned by the caller
pub static STUDENT: TableSchema = TableSchema {
    table: "student",
    primary_key: "id",
    id_strategy: IdStrategy::Assigned,
    columns: &[
        ColumnSpec::required("id", ColumnKind::BigInt),
        ColumnSpec::nullable("name", ColumnKind::Text),
    ],
    foreign_keys: &[],
};
