use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{MiniCanvasError, Result};
use crate::models::{
    assignments::entities::Submission,
    courses::entities::Course,
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

/// 提交作业的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    CourseNotFound,
    AssignmentNotFound,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户，返回新用户 ID
    async fn create_user(&self, user: CreateUserRequest) -> Result<i64>;
    // 按 ID 批量查询用户，保持注册顺序
    async fn find_users(&self, ids: &[i64]) -> Result<Vec<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<usize>;

    /// 课程管理方法
    // 创建课程，返回新课程 ID
    async fn create_course(
        &self,
        code: &str,
        semester: &str,
        teachers: Vec<User>,
        creator_role: UserRole,
    ) -> Result<i64>;
    // 课程是否存在，不复制课程数据
    async fn course_exists(&self, course_id: i64) -> Result<bool>;
    // 通过ID获取课程快照
    async fn get_course(&self, course_id: i64) -> Result<Option<Course>>;
    // 导入学生，课程不存在时返回 false
    async fn import_students(&self, course_id: i64, students: Vec<User>) -> Result<bool>;

    /// 作业管理方法
    // 创建作业，课程不存在时返回 None
    async fn create_assignment(&self, course_id: i64, due_date: String) -> Result<Option<i64>>;
    // 提交作业
    async fn submit_assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
        submission: Submission,
    ) -> Result<SubmitOutcome>;

    // 与外部数据库同步
    async fn sync(&self) -> Result<()>;
}

/// 根据配置创建存储后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();

    match config.storage.storage_type.as_str() {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        other => Err(MiniCanvasError::configuration(format!(
            "Unsupported storage type: {other}. Supported: memory"
        ))),
    }
}
