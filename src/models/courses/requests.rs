use serde::Deserialize;

// 创建课程的查询参数，课程代码来自路径，教师 ID 列表为 JSON 数组请求体
#[derive(Debug, Deserialize)]
pub struct CreateCourseQuery {
    pub semester: String,
}
