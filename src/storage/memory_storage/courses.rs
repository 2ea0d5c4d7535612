//! 课程注册表

use serde_json::Value;
use tracing::debug;

use crate::errors::{MiniCanvasError, Result};
use crate::models::courses::entities::Course;
use crate::models::users::entities::{User, UserRole};
use crate::utils::validate::require_non_empty;

/// 内存中的课程注册表，ID 计数器与用户注册表相互独立
#[derive(Debug, Default)]
pub struct CourseManager {
    courses: Vec<Course>,
    counter: i64,
}

impl CourseManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配下一个课程 ID
    pub fn generate_id(&mut self) -> i64 {
        self.counter += 1;
        self.counter
    }

    /// 以教师姓名列表创建课程
    ///
    /// `teachers` 来自未经类型约束的输入，必须是由非空字符串组成的非空数组。
    pub fn create_course(
        &mut self,
        code: &str,
        semester: &str,
        teachers: &Value,
        creator_role: UserRole,
    ) -> Result<i64> {
        require_non_empty(code, "Course code cannot be empty.")?;
        require_non_empty(semester, "Semester cannot be empty.")?;
        let names = teacher_names(teachers)?;

        let course =
            Course::with_teacher_names(self.counter + 1, code, semester, names, creator_role)?;
        Ok(self.commit(course))
    }

    /// 以已注册的教师用户创建课程
    pub fn create_course_with_teachers(
        &mut self,
        code: &str,
        semester: &str,
        teachers: Vec<User>,
        creator_role: UserRole,
    ) -> Result<i64> {
        let course = Course::new(self.counter + 1, code, semester, teachers, creator_role)?;
        Ok(self.commit(course))
    }

    // 课程已按下一个 ID 构造完成，此处正式分配并入表
    fn commit(&mut self, course: Course) -> i64 {
        let id = self.generate_id();
        debug_assert_eq!(id, course.id());
        debug!(
            "Registered course {} ({}) with id {}",
            course.code(),
            course.semester(),
            id
        );
        self.courses.push(course);
        id
    }

    pub fn find_course(&self, course_id: i64) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == course_id)
    }

    pub fn find_course_mut(&mut self, course_id: i64) -> Option<&mut Course> {
        self.courses
            .iter_mut()
            .find(|course| course.id() == course_id)
    }

    /// 与外部数据库同步，当前没有配置持久化后端
    pub fn sync_with_database(&self) {
        debug!(
            "sync_with_database: no persistence backend configured, {} course(s) kept in memory",
            self.courses.len()
        );
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn teacher_names(teachers: &Value) -> Result<Vec<String>> {
    let entries = teachers
        .as_array()
        .ok_or_else(|| MiniCanvasError::invalid_argument("Teacher list must be a list."))?;

    if entries.is_empty() {
        return Err(MiniCanvasError::invalid_argument(
            "Teacher list cannot be empty.",
        ));
    }

    entries
        .iter()
        .map(|entry| match entry.as_str() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(MiniCanvasError::invalid_argument(
                "Each teacher must be a non-empty string.",
            )),
        })
        .collect()
}
