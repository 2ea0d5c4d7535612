pub mod create;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{CreateAssignmentRequest, SubmitAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 在课程下创建作业
    pub async fn create_assignment(
        &self,
        req: &HttpRequest,
        course_id: i64,
        assignment_data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, req, course_id, assignment_data).await
    }

    // 提交作业
    pub async fn submit_assignment(
        &self,
        req: &HttpRequest,
        course_id: i64,
        assignment_id: i64,
        submission_data: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, req, course_id, assignment_id, submission_data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserRole};
    use crate::storage::MemoryStorage;
    use actix_web::{http::StatusCode, test::TestRequest};

    #[actix_web::test]
    async fn test_assignment_flow_with_bound_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let teacher = User::new(1, "Mark", "pwd", UserRole::Teacher).unwrap();
        let course_id = storage
            .create_course("COSC381", "Winter", vec![teacher], UserRole::Admin)
            .await
            .unwrap();

        let service = AssignmentService::new(storage.clone());
        let req = TestRequest::default().to_http_request();

        let resp = service
            .create_assignment(
                &req,
                course_id,
                CreateAssignmentRequest {
                    due_date: "2024-04-21".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service
            .submit_assignment(
                &req,
                course_id,
                1,
                SubmitAssignmentRequest {
                    student_id: 2,
                    content: "My essay".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let course = storage.get_course(course_id).await.unwrap().unwrap();
        let submission = &course.assignments()[0].submissions()[0];
        assert_eq!(submission.content(), "My essay");
    }
}
