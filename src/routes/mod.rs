pub mod assignments;

pub mod courses;

pub mod system;

pub mod users;

pub use assignments::configure_assignment_routes;
pub use courses::configure_course_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes) // 配置系统相关路由
        .configure(configure_user_routes) // 配置用户相关路由
        .configure(configure_course_routes) // 配置课程相关路由
        .configure(configure_assignment_routes); // 配置作业相关路由
}
