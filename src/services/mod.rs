pub mod assignments;
pub mod courses;
pub mod system;
pub mod users;

pub use assignments::AssignmentService;
pub use courses::CourseService;
pub use system::SystemService;
pub use users::UserService;

use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::errors::MiniCanvasError;
use crate::models::{ApiResponse, ErrorCode};

/// 将存储层错误转换为 HTTP 响应
///
/// 参数校验失败返回 400 并透传错误信息，其余错误返回 500。
pub(crate) fn error_response(code: ErrorCode, err: &MiniCanvasError) -> HttpResponse {
    if err.is_invalid_argument() {
        warn!("Rejected request: {}", err);
        HttpResponse::BadRequest().json(ApiResponse::error_empty(code, err.message()))
    } else {
        error!("{}", err);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            err.format_simple(),
        ))
    }
}
