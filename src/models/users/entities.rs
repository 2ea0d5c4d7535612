use serde::Serialize;

use crate::errors::{MiniCanvasError, Result};
use crate::utils::validate::{require_non_empty, require_positive_id};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student, // 学生
    Teacher, // 教师
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = MiniCanvasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Err(MiniCanvasError::invalid_argument(
                "Name, password, and user type cannot be empty.",
            )),
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(MiniCanvasError::invalid_argument(
                "Invalid user type. User type should be 'student', 'teacher', or 'admin'.",
            )),
        }
    }
}

// 用户实体，创建后不可变
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    id: i64,
    name: String,
    #[serde(skip_serializing)] // 不序列化到JSON响应中
    password: String,
    role: UserRole,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> Result<Self> {
        let name = name.into();
        let password = password.into();

        require_positive_id(id, "User ID should be a positive integer.")?;
        require_non_empty(&name, "Name, password, and user type cannot be empty.")?;
        require_non_empty(&password, "Name, password, and user type cannot be empty.")?;

        Ok(Self {
            id,
            name,
            password,
            role,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}, name: {}, type: {}", self.id, self.name, self.role)
    }
}
