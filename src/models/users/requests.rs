use serde::Deserialize;

// 用户创建请求
// role 保持原始字符串，交由领域层校验，以便返回统一的错误信息
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub role: String,
}
