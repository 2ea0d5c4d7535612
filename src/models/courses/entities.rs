use serde::Serialize;

use crate::errors::{MiniCanvasError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::users::entities::{User, UserRole};
use crate::utils::validate::{require_non_empty, require_positive_id};

// 课程教师
//
// 通过 API 创建的课程持有已注册用户；通过名称列表创建的课程只记录教师姓名。
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Teacher {
    Registered(User),
    Named { name: String },
}

impl Teacher {
    pub fn name(&self) -> &str {
        match self {
            Teacher::Registered(user) => user.name(),
            Teacher::Named { name } => name,
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Course {
    id: i64,
    code: String,
    semester: String,
    teachers: Vec<Teacher>,
    students: Vec<User>,
    assignments: Vec<Assignment>,
    creator_role: UserRole,
}

impl Course {
    /// 使用已注册的教师用户创建课程
    pub fn new(
        id: i64,
        code: impl Into<String>,
        semester: impl Into<String>,
        teachers: Vec<User>,
        creator_role: UserRole,
    ) -> Result<Self> {
        let teachers = teachers.into_iter().map(Teacher::Registered).collect();
        Self::build(id, code.into(), semester.into(), teachers, creator_role)
    }

    /// 使用教师姓名创建课程，姓名需由调用方预先校验
    pub(crate) fn with_teacher_names(
        id: i64,
        code: impl Into<String>,
        semester: impl Into<String>,
        names: Vec<String>,
        creator_role: UserRole,
    ) -> Result<Self> {
        let teachers = names
            .into_iter()
            .map(|name| Teacher::Named { name })
            .collect();
        Self::build(id, code.into(), semester.into(), teachers, creator_role)
    }

    fn build(
        id: i64,
        code: String,
        semester: String,
        teachers: Vec<Teacher>,
        creator_role: UserRole,
    ) -> Result<Self> {
        require_positive_id(id, "Course ID must be a positive integer.")?;
        require_non_empty(&code, "Course code cannot be empty.")?;
        require_non_empty(&semester, "Semester cannot be empty.")?;
        if teachers.is_empty() {
            return Err(MiniCanvasError::invalid_argument(
                "Teacher list cannot be empty.",
            ));
        }

        Ok(Self {
            id,
            code,
            semester,
            teachers,
            students: Vec::new(),
            assignments: Vec::new(),
            creator_role,
        })
    }

    /// 导入学生，不去重也不检查角色
    pub fn import_students(&mut self, students: impl IntoIterator<Item = User>) {
        self.students.extend(students);
    }

    /// 创建作业并返回作业 ID
    ///
    /// 作业只追加不删除，因此 `已有数量 + 1` 单调递增且不会重复。
    pub fn create_assignment(&mut self, due_date: impl Into<String>) -> Result<i64> {
        let assignment_id = self.assignments.len() as i64 + 1;
        let assignment = Assignment::new(assignment_id, due_date, self.id)?;
        self.assignments.push(assignment);
        Ok(assignment_id)
    }

    pub fn find_assignment_mut(&mut self, assignment_id: i64) -> Option<&mut Assignment> {
        self.assignments
            .iter_mut()
            .find(|assignment| assignment.id() == assignment_id)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn semester(&self) -> &str {
        &self.semester
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn students(&self) -> &[User] {
        &self.students
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn creator_role(&self) -> UserRole {
        self.creator_role
    }
}
