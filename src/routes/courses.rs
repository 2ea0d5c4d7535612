use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::CreateCourseQuery;
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn create_course(
    req: HttpRequest,
    course_code: web::Path<String>,
    query: web::Query<CreateCourseQuery>,
    teacher_id_list: web::Json<Vec<i64>>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(
            &req,
            course_code.into_inner(),
            query.into_inner(),
            teacher_id_list.into_inner(),
        )
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn import_students(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    student_id_list: web::Json<Vec<i64>>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .import_students(&req, course_id.0, student_id_list.into_inner())
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // POST 时路径段为课程代码，GET 时为课程 ID
        web::resource("/courses/{course}")
            .route(web::post().to(create_course))
            .route(web::get().to(get_course)),
    )
    .service(web::resource("/courses/{course}/students").route(web::put().to(import_students)));
}
