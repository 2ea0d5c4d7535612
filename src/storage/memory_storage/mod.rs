//! 内存存储实现
//!
//! 两个注册表各自持有一把互斥锁，ID 分配与追加在同一次加锁内完成。

mod courses;
mod users;

pub use courses::CourseManager;
pub use users::UserManager;

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use super::{Storage, SubmitOutcome};
use crate::errors::Result;
use crate::models::{
    assignments::entities::Submission,
    courses::entities::Course,
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: Mutex<UserManager>,
    courses: Mutex<CourseManager>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        info!("Memory storage initialized, data lives for the process lifetime");
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<i64> {
        self.users
            .lock()?
            .create_user(&user.name, &user.password, &user.role)
    }

    async fn find_users(&self, ids: &[i64]) -> Result<Vec<User>> {
        Ok(self.users.lock()?.find_users(ids))
    }

    async fn count_users(&self) -> Result<usize> {
        Ok(self.users.lock()?.len())
    }

    async fn create_course(
        &self,
        code: &str,
        semester: &str,
        teachers: Vec<User>,
        creator_role: UserRole,
    ) -> Result<i64> {
        self.courses
            .lock()?
            .create_course_with_teachers(code, semester, teachers, creator_role)
    }

    async fn course_exists(&self, course_id: i64) -> Result<bool> {
        Ok(self.courses.lock()?.find_course(course_id).is_some())
    }

    async fn get_course(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self.courses.lock()?.find_course(course_id).cloned())
    }

    async fn import_students(&self, course_id: i64, students: Vec<User>) -> Result<bool> {
        let mut courses = self.courses.lock()?;
        match courses.find_course_mut(course_id) {
            Some(course) => {
                course.import_students(students);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_assignment(&self, course_id: i64, due_date: String) -> Result<Option<i64>> {
        let mut courses = self.courses.lock()?;
        courses
            .find_course_mut(course_id)
            .map(|course| course.create_assignment(due_date))
            .transpose()
    }

    async fn submit_assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
        submission: Submission,
    ) -> Result<SubmitOutcome> {
        let mut courses = self.courses.lock()?;
        let Some(course) = courses.find_course_mut(course_id) else {
            return Ok(SubmitOutcome::CourseNotFound);
        };
        let Some(assignment) = course.find_assignment_mut(assignment_id) else {
            return Ok(SubmitOutcome::AssignmentNotFound);
        };
        assignment.submit(submission);
        Ok(SubmitOutcome::Submitted)
    }

    async fn sync(&self) -> Result<()> {
        self.courses.lock()?.sync_with_database();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn user_request(name: &str, role: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            password: "pwd".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_course_lifecycle() {
        let storage = MemoryStorage::new();
        storage.create_user(user_request("Mark", "teacher")).await.unwrap();
        storage.create_user(user_request("Anthony", "student")).await.unwrap();

        let teachers = storage.find_users(&[1]).await.unwrap();
        let course_id = storage
            .create_course("COSC381", "Winter", teachers, UserRole::Admin)
            .await
            .unwrap();

        let students = storage.find_users(&[2]).await.unwrap();
        assert!(storage.import_students(course_id, students).await.unwrap());

        let assignment_id = storage
            .create_assignment(course_id, "2024-04-21".to_string())
            .await
            .unwrap()
            .unwrap();
        let outcome = storage
            .submit_assignment(course_id, assignment_id, Submission::new(2, "essay").unwrap())
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);

        let course = storage.get_course(course_id).await.unwrap().unwrap();
        assert_eq!(course.students()[0].name(), "Anthony");
        assert_eq!(course.assignments()[0].submissions().len(), 1);
        storage.sync().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_course_is_reported_not_raised() {
        let storage = MemoryStorage::new();

        assert!(!storage.course_exists(9).await.unwrap());
        assert!(!storage.import_students(9, vec![]).await.unwrap());
        assert!(storage.get_course(9).await.unwrap().is_none());
        assert!(
            storage
                .create_assignment(9, "2024-04-21".to_string())
                .await
                .unwrap()
                .is_none()
        );
        let outcome = storage
            .submit_assignment(9, 1, Submission::new(1, "x").unwrap())
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::CourseNotFound);
    }

    #[tokio::test]
    async fn test_missing_assignment() {
        let storage = MemoryStorage::new();
        let teacher = User::new(1, "Mark", "pwd", UserRole::Teacher).unwrap();
        let course_id = storage
            .create_course("COSC381", "Winter", vec![teacher], UserRole::Admin)
            .await
            .unwrap();

        assert!(storage.course_exists(course_id).await.unwrap());

        let outcome = storage
            .submit_assignment(course_id, 3, Submission::new(1, "x").unwrap())
            .await
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::AssignmentNotFound);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creation_yields_unique_ids() {
        let storage = Arc::new(MemoryStorage::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    storage
                        .create_user(user_request(&format!("user{i}"), "student"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<i64>>());
        assert_eq!(storage.count_users().await.unwrap(), 32);
    }
}
