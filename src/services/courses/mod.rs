pub mod create;
pub mod get;
pub mod import;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::CreateCourseQuery;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建课程
    pub async fn create_course(
        &self,
        req: &HttpRequest,
        course_code: String,
        query: CreateCourseQuery,
        teacher_id_list: Vec<i64>,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, req, course_code, query, teacher_id_list).await
    }

    // 根据课程 ID 获取课程信息
    pub async fn get_course(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        get::get_course(self, req, course_id).await
    }

    // 向课程导入学生
    pub async fn import_students(
        &self,
        req: &HttpRequest,
        course_id: i64,
        student_id_list: Vec<i64>,
    ) -> ActixResult<HttpResponse> {
        import::import_students(self, req, course_id, student_id_list).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::MemoryStorage;
    use actix_web::{http::StatusCode, test::TestRequest};

    #[actix_web::test]
    async fn test_bound_storage_is_used_without_app_data() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let teacher_id = storage
            .create_user(CreateUserRequest {
                name: "Mark".to_string(),
                password: "pwd".to_string(),
                role: "teacher".to_string(),
            })
            .await
            .unwrap();

        let service = CourseService::new(storage.clone());
        let req = TestRequest::default().to_http_request();
        let query = CreateCourseQuery {
            semester: "Winter".to_string(),
        };

        let resp = service
            .create_course(&req, "COSC381".to_string(), query, vec![teacher_id])
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service.import_students(&req, 1, vec![teacher_id]).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let course = storage.get_course(1).await.unwrap().unwrap();
        assert_eq!(course.code(), "COSC381");
        assert_eq!(course.students().len(), 1);
    }

    #[actix_web::test]
    async fn test_import_checks_course_before_students() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let service = CourseService::new(storage);
        let req = TestRequest::default().to_http_request();

        // 课程与学生都不存在时先报告课程缺失
        let resp = service.import_students(&req, 9, vec![42]).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Course not found.");
    }
}
