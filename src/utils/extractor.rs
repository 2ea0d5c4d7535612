//! 路径参数安全提取器
//!
//! 从路径中提取正整数 ID，非法值直接返回 400，避免在处理函数中重复校验。

/// 定义一个从路径参数中提取正整数 i64 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<std::result::Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                let result = match raw.parse::<i64>() {
                    Ok(id) if id > 0 => Ok($name(id)),
                    _ => {
                        tracing::warn!("Rejected invalid path parameter {}: {:?}", $param, raw);
                        let response = actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ApiResponse::error_empty(
                                $crate::models::ErrorCode::BadRequest,
                                format!("Invalid {} id: must be a positive integer", $param),
                            ),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            format!("invalid {}", $param),
                            response,
                        )
                        .into())
                    }
                };
                std::future::ready(result)
            }
        }
    };
}

define_safe_i64_extractor!(SafeCourseIdI64, "course");
define_safe_i64_extractor!(SafeAssignmentIdI64, "assignment");
