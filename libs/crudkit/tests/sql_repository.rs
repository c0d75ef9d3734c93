#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Generic repository behaviour against an in-memory SQLite store

use chrono::NaiveDate;
use crudkit::{
    ColumnKind, ColumnSpec, ForeignKeySpec, IdStrategy, MappingError, OnDelete, RecordMapper, Row,
    SqlRepository, StoreError, TableSchema,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Value};
use std::sync::Arc;

const OWNER: TableSchema = TableSchema {
    table: "owner",
    primary_key: "owner_id",
    id_strategy: IdStrategy::Generated,
    columns: &[
        ColumnSpec::required("owner_id", ColumnKind::BigInt),
        ColumnSpec::nullable("name", ColumnKind::Text),
        ColumnSpec::nullable("born_on", ColumnKind::Date),
    ],
    foreign_keys: &[],
};

const PET: TableSchema = TableSchema {
    table: "pet",
    primary_key: "pet_id",
    id_strategy: IdStrategy::Generated,
    columns: &[
        ColumnSpec::required("pet_id", ColumnKind::BigInt),
        ColumnSpec::nullable("name", ColumnKind::Text),
        ColumnSpec::nullable("owner_id", ColumnKind::BigInt),
    ],
    foreign_keys: &[ForeignKeySpec {
        column: "owner_id",
        references_table: "owner",
        references_column: "owner_id",
        on_delete: OnDelete::Restrict,
    }],
};

const TAG: TableSchema = TableSchema {
    table: "tag",
    primary_key: "code",
    id_strategy: IdStrategy::Assigned,
    columns: &[
        ColumnSpec::required("code", ColumnKind::BigInt),
        ColumnSpec::nullable("label", ColumnKind::Text),
    ],
    foreign_keys: &[],
};

#[derive(Debug, Clone, PartialEq)]
struct Owner {
    id: Option<i64>,
    name: Option<String>,
    born_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pet {
    id: Option<i64>,
    name: Option<String>,
    owner_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
struct Tag {
    code: i64,
    label: Option<String>,
}

struct OwnerMapper;
struct PetMapper;
struct TagMapper;

impl RecordMapper for OwnerMapper {
    type Record = Owner;

    fn schema() -> &'static TableSchema {
        &OWNER
    }

    fn id(record: &Owner) -> Option<i64> {
        record.id
    }

    fn from_row(row: &Row) -> Result<Owner, MappingError> {
        row.ensure_shape(&OWNER)?;
        Ok(Owner {
            id: Some(row.get("owner_id")?),
            name: row.get("name")?,
            born_on: row.get("born_on")?,
        })
    }

    fn to_params(record: &Owner) -> Vec<Value> {
        vec![
            record.id.into(),
            record.name.clone().into(),
            record.born_on.into(),
        ]
    }
}

impl RecordMapper for PetMapper {
    type Record = Pet;

    fn schema() -> &'static TableSchema {
        &PET
    }

    fn id(record: &Pet) -> Option<i64> {
        record.id
    }

    fn from_row(row: &Row) -> Result<Pet, MappingError> {
        row.ensure_shape(&PET)?;
        Ok(Pet {
            id: Some(row.get("pet_id")?),
            name: row.get("name")?,
            owner_id: row.get("owner_id")?,
        })
    }

    fn to_params(record: &Pet) -> Vec<Value> {
        vec![
            record.id.into(),
            record.name.clone().into(),
            record.owner_id.into(),
        ]
    }
}

impl RecordMapper for TagMapper {
    type Record = Tag;

    fn schema() -> &'static TableSchema {
        &TAG
    }

    fn id(record: &Tag) -> Option<i64> {
        Some(record.code)
    }

    fn from_row(row: &Row) -> Result<Tag, MappingError> {
        row.ensure_shape(&TAG)?;
        Ok(Tag {
            code: row.get("code")?,
            label: row.get("label")?,
        })
    }

    fn to_params(record: &Tag) -> Vec<Value> {
        vec![record.code.into(), record.label.clone().into()]
    }
}

async fn setup() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    let backend = db.get_database_backend();
    for schema in [&OWNER, &PET, &TAG] {
        db.execute(backend.build(&schema.create_table_statement()))
            .await
            .unwrap();
    }
    Arc::new(db)
}

fn owner(name: &str) -> Owner {
    Owner {
        id: None,
        name: Some(name.to_owned()),
        born_on: NaiveDate::from_ymd_opt(1990, 2, 28),
    }
}

fn pet(name: &str, owner_id: Option<i64>) -> Pet {
    Pet {
        id: None,
        name: Some(name.to_owned()),
        owner_id,
    }
}

#[tokio::test]
async fn save_then_find_returns_equal_record_with_new_id() {
    let repo = SqlRepository::<OwnerMapper>::new(setup().await);

    let input = owner("Ada");
    let saved = repo.save(&input).await.unwrap();
    let id = saved.id.expect("store assigns an id");

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, Owner { id: Some(id), ..input });
}

#[tokio::test]
async fn find_by_unknown_id_is_none() {
    let repo = SqlRepository::<OwnerMapper>::new(setup().await);
    assert_eq!(repo.find_by_id(999).await.unwrap(), None);
}

#[tokio::test]
async fn save_with_existing_id_updates_in_place() {
    let repo = SqlRepository::<OwnerMapper>::new(setup().await);
    let saved = repo.save(&owner("Ada")).await.unwrap();

    let renamed = Owner {
        name: Some("Ada Lovelace".to_owned()),
        born_on: None,
        ..saved.clone()
    };
    let updated = repo.save(&renamed).await.unwrap();

    assert_eq!(updated, renamed);
    assert_eq!(repo.find_all().await.unwrap(), vec![renamed]);
}

#[tokio::test]
async fn save_with_unknown_generated_id_inserts_fresh_row() {
    let repo = SqlRepository::<OwnerMapper>::new(setup().await);
    let stray = Owner {
        id: Some(4242),
        ..owner("Grace")
    };

    let saved = repo.save(&stray).await.unwrap();
    assert!(saved.id.is_some());
    assert_eq!(saved.name.as_deref(), Some("Grace"));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn find_all_counts_inserts_minus_deletes() {
    let repo = SqlRepository::<OwnerMapper>::new(setup().await);

    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d", "e"] {
        ids.push(repo.save(&owner(name)).await.unwrap().id.unwrap());
    }
    for id in &ids[..2] {
        assert_eq!(repo.delete_by_id(*id).await.unwrap(), 1);
    }

    assert_eq!(repo.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn deleting_unknown_id_affects_zero_rows() {
    let repo = SqlRepository::<OwnerMapper>::new(setup().await);
    assert_eq!(repo.delete_by_id(77).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_cascade_removes_children_then_parent() {
    let db = setup().await;
    let owners = SqlRepository::<OwnerMapper>::new(db.clone());
    let pets = SqlRepository::<PetMapper>::new(db);

    let keeper = owners.save(&owner("keeper")).await.unwrap().id;
    let other = owners.save(&owner("other")).await.unwrap().id;
    for name in ["rex", "tom", "kit"] {
        pets.save(&pet(name, keeper)).await.unwrap();
    }
    let stray = pets.save(&pet("stray", other)).await.unwrap();

    let removed = owners
        .delete_cascade(keeper.unwrap(), &[&PET])
        .await
        .unwrap();
    assert_eq!(removed, 1);

    assert_eq!(pets.find_all().await.unwrap(), vec![stray]);
    assert_eq!(owners.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_cascade_requires_a_foreign_key() {
    let db = setup().await;
    let owners = SqlRepository::<OwnerMapper>::new(db);
    let id = owners.save(&owner("x")).await.unwrap().id.unwrap();

    let err = owners.delete_cascade(id, &[&TAG]).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingForeignKey { child: "tag", parent: "owner" }
    ));
    assert!(owners.find_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn nulling_foreign_key_detaches_child() {
    let db = setup().await;
    let owners = SqlRepository::<OwnerMapper>::new(db.clone());
    let pets = SqlRepository::<PetMapper>::new(db);

    let owner_id = owners.save(&owner("o")).await.unwrap().id;
    let saved = pets.save(&pet("rex", owner_id)).await.unwrap();

    let detached = pets
        .save(&Pet {
            owner_id: None,
            ..saved
        })
        .await
        .unwrap();
    assert_eq!(detached.owner_id, None);
}

#[tokio::test]
async fn assigned_ids_are_kept_and_required() {
    let repo = SqlRepository::<TagMapper>::new(setup().await);

    let tag = Tag {
        code: 7,
        label: Some("seven".to_owned()),
    };
    assert_eq!(repo.insert(&tag).await.unwrap(), tag);
    assert_eq!(repo.find_by_id(7).await.unwrap(), Some(tag.clone()));

    let duplicate = repo.insert(&tag).await.unwrap_err();
    assert!(matches!(duplicate, StoreError::Database(_)));
}

#[tokio::test]
async fn update_of_missing_assigned_row_is_none_and_save_inserts() {
    let repo = SqlRepository::<TagMapper>::new(setup().await);
    let tag = Tag {
        code: 1,
        label: Some("one".to_owned()),
    };

    assert_eq!(repo.update(&tag).await.unwrap(), None);
    assert_eq!(repo.save(&tag).await.unwrap(), tag);

    let relabelled = Tag {
        label: Some("uno".to_owned()),
        ..tag
    };
    assert_eq!(repo.update(&relabelled).await.unwrap(), Some(relabelled.clone()));
    assert_eq!(repo.find_all().await.unwrap(), vec![relabelled]);
}

#[tokio::test]
async fn stored_rows_map_back_to_identical_parameters() {
    let db = setup().await;
    let repo = SqlRepository::<OwnerMapper>::new(db.clone());
    let saved = repo.save(&owner("Ada")).await.unwrap();

    let backend = db.get_database_backend();
    let result = db
        .query_one(sea_orm::Statement::from_string(
            backend,
            "SELECT owner_id, name, born_on FROM owner",
        ))
        .await
        .unwrap()
        .unwrap();
    let row = Row::from_query_result(&OWNER, &result).unwrap();

    let record = OwnerMapper::from_row(&row).unwrap();
    assert_eq!(record, saved);
    assert_eq!(OwnerMapper::to_params(&record), row.into_values());
}
