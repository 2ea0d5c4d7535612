pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 创建用户
    pub async fn create_user(
        &self,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, user_data, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use actix_web::{http::StatusCode, test::TestRequest};

    fn request(name: &str, role: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            password: "pwd".to_string(),
            role: role.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_user_with_bound_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let service = UserService::new(storage.clone());
        let req = TestRequest::default().to_http_request();

        let resp = service
            .create_user(request("Brianna", "student"), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service.create_user(request("", "student"), &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(storage.count_users().await.unwrap(), 1);
        assert_eq!(storage.find_users(&[1]).await.unwrap()[0].name(), "Brianna");
    }
}
