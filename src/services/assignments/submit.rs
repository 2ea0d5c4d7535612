use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{entities::Submission, requests::SubmitAssignmentRequest},
};
use crate::services::error_response;
use crate::storage::SubmitOutcome;

pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    course_id: i64,
    assignment_id: i64,
    submission_data: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let submission = match Submission::new(submission_data.student_id, submission_data.content) {
        Ok(submission) => submission,
        Err(e) => return Ok(error_response(ErrorCode::SubmissionFailed, &e)),
    };
    let student_id = submission.student_id();

    let storage = service.get_storage(request);

    match storage
        .submit_assignment(course_id, assignment_id, submission)
        .await
    {
        Ok(SubmitOutcome::Submitted) => {
            info!(
                "Student {} submitted assignment {} of course {}",
                student_id, assignment_id, course_id
            );
            Ok(HttpResponse::Ok().finish())
        }
        Ok(SubmitOutcome::CourseNotFound) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::CourseNotFound, "Course not found."),
        )),
        Ok(SubmitOutcome::AssignmentNotFound) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AssignmentNotFound, "Assignment not found."),
        )),
        Err(e) => Ok(error_response(ErrorCode::SubmissionFailed, &e)),
    }
}
