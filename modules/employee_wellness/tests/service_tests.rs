#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Services against in-memory mock repositories

use async_trait::async_trait;
use crudkit::StoreError;
use employee_wellness::domain::{
    EmployeeRepository, EmployeeService, ProgramRepository, ProgramService,
};
use employee_wellness::{Employee, Program};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Programs shared by both mocks so employee deletion can cascade
#[derive(Default)]
struct MockStore {
    employees: RwLock<BTreeMap<i64, Employee>>,
    programs: RwLock<BTreeMap<i64, Program>>,
    next_id: RwLock<i64>,
}

impl MockStore {
    fn next_id(&self) -> i64 {
        let mut next = self.next_id.write();
        *next += 1;
        *next
    }
}

struct MockEmployeeRepo(Arc<MockStore>);
struct MockProgramRepo(Arc<MockStore>);

#[async_trait]
impl EmployeeRepository for MockEmployeeRepo {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.0.employees.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        Ok(self.0.employees.read().get(&id).cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, StoreError> {
        let id = match employee.id {
            Some(id) if self.0.employees.read().contains_key(&id) => id,
            _ => self.0.next_id(),
        };
        let stored = Employee {
            id: Some(id),
            ..employee.clone()
        };
        self.0.employees.write().insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        self.0
            .programs
            .write()
            .retain(|_, program| program.employee_id != Some(id));
        Ok(u64::from(self.0.employees.write().remove(&id).is_some()))
    }
}

#[async_trait]
impl ProgramRepository for MockProgramRepo {
    async fn find_all(&self) -> Result<Vec<Program>, StoreError> {
        Ok(self.0.programs.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Program>, StoreError> {
        Ok(self.0.programs.read().get(&id).cloned())
    }

    async fn save(&self, program: &Program) -> Result<Program, StoreError> {
        let id = match program.id {
            Some(id) if self.0.programs.read().contains_key(&id) => id,
            _ => self.0.next_id(),
        };
        let stored = Program {
            id: Some(id),
            ..program.clone()
        };
        self.0.programs.write().insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.0.programs.write().remove(&id).is_some()))
    }
}

fn services() -> (EmployeeService, ProgramService) {
    let store = Arc::new(MockStore::default());
    (
        EmployeeService::new(Arc::new(MockEmployeeRepo(store.clone()))),
        ProgramService::new(Arc::new(MockProgramRepo(store))),
    )
}

fn named(name: &str) -> Employee {
    Employee {
        full_name: Some(name.to_owned()),
        ..Employee::default()
    }
}

#[tokio::test]
async fn register_assigns_id_and_get_finds_it() {
    let (employees, _) = services();
    let saved = employees.register_employee(&named("Ada")).await.unwrap();
    let id = saved.id.unwrap();

    assert_eq!(employees.get_employee(id).await.unwrap(), Some(saved));
    assert_eq!(employees.get_all_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_employee_drops_owned_programs() {
    let (employees, programs) = services();
    let owner = employees.register_employee(&named("Ada")).await.unwrap().id;

    programs
        .create_program(&Program {
            employee_id: owner,
            ..Program::default()
        })
        .await
        .unwrap();
    let free = programs.create_program(&Program::default()).await.unwrap();

    assert_eq!(employees.delete_employee(owner.unwrap()).await.unwrap(), 1);
    assert_eq!(programs.get_all_programs().await.unwrap(), vec![free]);
}
