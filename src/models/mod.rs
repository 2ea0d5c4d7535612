pub mod assignments;
pub mod common;
pub mod courses;
pub mod users;

pub use common::response::ApiResponse;

use serde::Serialize;

// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // 用户相关
    UserCreationFailed = 2000,
    UserNotFound = 2004,

    // 课程相关
    CourseCreationFailed = 3000,
    CourseImportFailed = 3001,
    CourseNotFound = 3004,

    // 作业相关
    AssignmentCreationFailed = 4000,
    AssignmentNotFound = 4004,

    // 提交相关
    SubmissionFailed = 5000,
}
