use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::CourseService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseQuery};
use crate::services::error_response;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_code: String,
    query: CreateCourseQuery,
    teacher_id_list: Vec<i64>,
) -> ActixResult<HttpResponse> {
    if teacher_id_list.is_empty() {
        warn!("Course {} rejected: no teacher ids", course_code);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No teacher IDs provided.",
        )));
    }

    let storage = service.get_storage(request);

    let teachers = match storage.find_users(&teacher_id_list).await {
        Ok(users) => users,
        Err(e) => return Ok(error_response(ErrorCode::CourseCreationFailed, &e)),
    };
    if teachers.is_empty() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "No teachers found with provided IDs.",
        )));
    }

    // 接口层没有认证，课程统一以管理员身份创建
    match storage
        .create_course(&course_code, &query.semester, teachers, UserRole::Admin)
        .await
    {
        Ok(course_id) => {
            info!(
                "Course {} ({}) created with id {}",
                course_code, query.semester, course_id
            );
            Ok(HttpResponse::Ok().json(course_id))
        }
        Err(e) => Ok(error_response(ErrorCode::CourseCreationFailed, &e)),
    }
}
