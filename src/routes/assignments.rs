use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{CreateAssignmentRequest, SubmitAssignmentRequest};
use crate::services::AssignmentService;
use crate::utils::{SafeAssignmentIdI64, SafeCourseIdI64};

// 懒加载的全局 ASSIGNMENT_SERVICE 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// HTTP处理程序
pub async fn create_assignment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, course_id.0, assignment_data.into_inner())
        .await
}

pub async fn submit_assignment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    assignment_id: SafeAssignmentIdI64,
    submission_data: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(
            &req,
            course_id.0,
            assignment_id.0,
            submission_data.into_inner(),
        )
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/courses/{course}/assignments").route(web::post().to(create_assignment)),
    )
    .service(
        web::resource("/courses/{course}/assignments/{assignment}/submissions")
            .route(web::post().to(submit_assignment)),
    );
}
