use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::CreateAssignmentRequest};
use crate::services::error_response;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    course_id: i64,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .create_assignment(course_id, assignment_data.due_date)
        .await
    {
        Ok(Some(assignment_id)) => {
            info!(
                "Assignment {} created in course {}",
                assignment_id, course_id
            );
            Ok(HttpResponse::Ok().json(assignment_id))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found.",
        ))),
        Err(e) => Ok(error_response(ErrorCode::AssignmentCreationFailed, &e)),
    }
}
