use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!(
        "Storage backend '{}' initialized",
        config.storage.storage_type
    );

    // 持久化后端尚未接入，此处仅触发同步钩子
    storage.sync().await?;

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateUserRequest;

    fn request(name: &str, role: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            password: "pwd".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_startup_leaves_registries_empty() {
        let startup = prepare_server_startup().await.unwrap();
        let storage = startup.storage;

        assert_eq!(storage.count_users().await.unwrap(), 0);

        // 首批用户从 1 开始编号
        assert_eq!(storage.create_user(request("Brianna", "student")).await.unwrap(), 1);
        assert_eq!(storage.create_user(request("Maddy", "teacher")).await.unwrap(), 2);
        assert_eq!(storage.create_user(request("Carolina", "admin")).await.unwrap(), 3);

        let found = storage.find_users(&[1, 2]).await.unwrap();
        let names: Vec<&str> = found.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["Brianna", "Maddy"]);
    }
}
