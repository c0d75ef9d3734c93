use crudkit::{ColumnKind, ColumnSpec, ForeignKeySpec, IdStrategy, OnDelete, TableSchema};

pub static EMPLOYEE: TableSchema = TableSchema {
    table: "employee",
    primary_key: "employee_id",
    id_strategy: IdStrategy::Generated,
    columns: &[
        ColumnSpec::required("employee_id", ColumnKind::BigInt),
        ColumnSpec::nullable("full_name", ColumnKind::Text),
        ColumnSpec::nullable("date_of_birth", ColumnKind::Date),
        ColumnSpec::nullable("email", ColumnKind::Text),
        ColumnSpec::nullable("health_status", ColumnKind::Text),
    ],
    foreign_keys: &[],
};

/// Programs are owned by an employee through `employee_id`
pub static PROGRAM: TableSchema = TableSchema {
    table: "program",
    primary_key: "program_id",
    id_strategy: IdStrategy::Generated,
    columns: &[
        ColumnSpec::required("program_id", ColumnKind::BigInt),
        ColumnSpec::nullable("program_name", ColumnKind::Text),
        ColumnSpec::nullable("program_description", ColumnKind::Text),
        ColumnSpec::nullable("start_date", ColumnKind::Date),
        ColumnSpec::nullable("end_date", ColumnKind::Date),
        ColumnSpec::nullable("employee_id", ColumnKind::BigInt),
    ],
    foreign_keys: &[ForeignKeySpec {
        column: "employee_id",
        references_table: "employee",
        references_column: "employee_id",
        on_delete: OnDelete::Cascade,
    }],
};
