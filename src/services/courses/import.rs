use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

fn course_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::CourseNotFound,
        "Course not found.",
    ))
}

pub async fn import_students(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    student_id_list: Vec<i64>,
) -> ActixResult<HttpResponse> {
    if student_id_list.is_empty() {
        warn!("Import into course {} rejected: no student ids", course_id);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No student IDs provided.",
        )));
    }

    let storage = service.get_storage(request);

    match storage.course_exists(course_id).await {
        Ok(true) => {}
        Ok(false) => return Ok(course_not_found()),
        Err(e) => return Ok(error_response(ErrorCode::CourseImportFailed, &e)),
    }

    let students = match storage.find_users(&student_id_list).await {
        Ok(users) => users,
        Err(e) => return Ok(error_response(ErrorCode::CourseImportFailed, &e)),
    };
    if students.is_empty() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "No students found with provided IDs.",
        )));
    }

    let count = students.len();
    match storage.import_students(course_id, students).await {
        Ok(true) => {
            info!("Imported {} student(s) into course {}", count, course_id);
            Ok(HttpResponse::Ok().finish())
        }
        Ok(false) => Ok(course_not_found()),
        Err(e) => Ok(error_response(ErrorCode::CourseImportFailed, &e)),
    }
}
