use actix_web::{HttpResponse, Result as ActixResult};

pub const WELCOME_MESSAGE: &str = "Welcome to our miniCanvas!";

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 欢迎信息，无副作用
    pub async fn welcome(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok().json(WELCOME_MESSAGE))
    }
}
