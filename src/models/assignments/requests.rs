use serde::Deserialize;

// 创建作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub due_date: String,
}

// 提交作业请求
#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub student_id: i64,
    pub content: String,
}
