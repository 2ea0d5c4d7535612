use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ErrorCode, users::requests::CreateUserRequest};
use crate::services::error_response;

pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let name = user_data.name.clone();

    match storage.create_user(user_data).await {
        Ok(user_id) => {
            info!("User {} created with id {}", name, user_id);
            Ok(HttpResponse::Ok().json(user_id))
        }
        Err(e) => Ok(error_response(ErrorCode::UserCreationFailed, &e)),
    }
}
