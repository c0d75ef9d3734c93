//! Conversions between REST DTOs and contract models

use super::dto::{EmployeeDto, EmployeeRefDto, ProgramDto};
use crate::contract::{Employee, Program};

// ===== Employee conversions =====

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.id,
            full_name: employee.full_name,
            date_of_birth: employee.date_of_birth,
            email: employee.email,
            health_status: employee.health_status,
        }
    }
}

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: dto.employee_id,
            full_name: dto.full_name,
            date_of_birth: dto.date_of_birth,
            email: dto.email,
            health_status: dto.health_status,
        }
    }
}

// ===== Program conversions =====

impl From<Program> for ProgramDto {
    fn from(program: Program) -> Self {
        Self {
            program_id: program.id,
            program_name: program.name,
            program_description: program.description,
            start_date: program.start_date,
            end_date: program.end_date,
            employee: program.employee_id.map(|id| EmployeeRefDto {
                employee_id: Some(id),
            }),
        }
    }
}

impl From<ProgramDto> for Program {
    fn from(dto: ProgramDto) -> Self {
        Self {
            id: dto.program_id,
            name: dto.program_name,
            description: dto.program_description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            employee_id: dto.employee.and_then(|employee| employee.employee_id),
        }
    }
}
