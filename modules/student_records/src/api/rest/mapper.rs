//! Conversions between REST DTOs and contract models

use super::dto::StudentDto;
use crate::contract::Student;

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
        }
    }
}

impl From<StudentDto> for Student {
    fn from(dto: StudentDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
