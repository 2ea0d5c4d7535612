//! 用户注册表

use tracing::debug;

use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};
use crate::utils::validate::require_non_empty;

/// 内存中的用户注册表，ID 从 1 开始顺序分配且永不复用
#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
    counter: i64,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配下一个用户 ID
    pub fn generate_id(&mut self) -> i64 {
        self.counter += 1;
        self.counter
    }

    /// 创建用户并返回其 ID
    pub fn create_user(&mut self, name: &str, password: &str, role: &str) -> Result<i64> {
        // 校验全部通过后才分配 ID，失败的请求不会消耗 ID
        require_non_empty(name, "Name, password, and user type cannot be empty.")?;
        require_non_empty(password, "Name, password, and user type cannot be empty.")?;
        let role: UserRole = role.parse()?;

        let id = self.generate_id();
        let user = User::new(id, name, password, role)?;
        debug!("Registered user {} with id {}", user.name(), id);
        self.users.push(user);
        Ok(id)
    }

    /// 按注册顺序返回 ID 在 `ids` 中的用户，未匹配的 ID 直接忽略
    pub fn find_users(&self, ids: &[i64]) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| ids.contains(&user.id()))
            .cloned()
            .collect()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> UserManager {
        let mut manager = UserManager::new();
        manager.create_user("Brianna", "pwd", "student").unwrap();
        manager.create_user("Maddy", "pwd", "teacher").unwrap();
        manager.create_user("Carolina", "pwd", "admin").unwrap();
        manager
    }

    #[test]
    fn test_generate_id() {
        let mut manager = seeded();
        assert_eq!(manager.generate_id(), 4);
    }

    #[test]
    fn test_create_user() {
        let mut manager = seeded();
        let initial = manager.len();

        let id = manager.create_user("TestUser", "pwd", "student").unwrap();

        assert_eq!(id, 4);
        assert_eq!(manager.len(), initial + 1);
        let last = manager.users().last().unwrap();
        assert_eq!(last.name(), "TestUser");
        assert_eq!(last.role(), UserRole::Student);
    }

    #[test]
    fn test_ids_are_sequential() {
        let manager = seeded();
        let ids: Vec<i64> = manager.users().iter().map(User::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_create_user_rejects_invalid_input() {
        let mut manager = UserManager::new();
        assert!(manager.create_user("", "pwd", "student").is_err());
        assert!(manager.create_user("John", "", "student").is_err());
        assert!(manager.create_user("John", "pwd", "").is_err());
        assert!(manager.create_user("John", "pwd", "invalid_type").is_err());
        assert!(manager.is_empty());

        // 失败的创建不消耗 ID
        assert_eq!(manager.create_user("John", "pwd", "student").unwrap(), 1);
    }

    #[test]
    fn test_find_users() {
        let manager = seeded();

        let found = manager.find_users(&[1, 2]);

        let names: Vec<&str> = found.iter().map(User::name).collect();
        assert_eq!(names, vec!["Brianna", "Maddy"]);
    }

    #[test]
    fn test_find_users_uses_registry_order_and_skips_unknown() {
        let manager = seeded();

        let found = manager.find_users(&[3, 42, 1]);

        let names: Vec<&str> = found.iter().map(User::name).collect();
        assert_eq!(names, vec!["Brianna", "Carolina"]);
        assert!(manager.find_users(&[]).is_empty());
        assert!(manager.find_users(&[99]).is_empty());
    }
}
