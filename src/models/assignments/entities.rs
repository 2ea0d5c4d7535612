use serde::Serialize;

use crate::errors::Result;
use crate::utils::validate::{require_non_empty, require_positive_id};

// 学生提交记录
//
// 只能通过 `Submission::new` 构造，因此任何 Submission 值都已通过校验。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submission {
    student_id: i64,
    content: String,
    // 由外部评分流程设置，本系统不提供修改入口
    grade: Option<f64>,
}

impl Submission {
    pub fn new(student_id: i64, content: impl Into<String>) -> Result<Self> {
        let content = content.into();

        require_positive_id(student_id, "Student ID must be a positive integer.")?;
        require_non_empty(&content, "Submission content cannot be empty.")?;

        Ok(Self {
            student_id,
            content,
            grade: None,
        })
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn grade(&self) -> Option<f64> {
        self.grade
    }
}

// 作业
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assignment {
    id: i64,
    due_date: String,
    course_id: i64,
    submissions: Vec<Submission>,
}

impl Assignment {
    pub fn new(id: i64, due_date: impl Into<String>, course_id: i64) -> Result<Self> {
        let due_date = due_date.into();

        require_positive_id(id, "Assignment ID must be a positive integer.")?;
        require_non_empty(&due_date, "Due date cannot be empty.")?;
        require_positive_id(course_id, "Course ID must be a positive integer.")?;

        Ok(Self {
            id,
            due_date,
            course_id,
            submissions: Vec::new(),
        })
    }

    /// 追加一份提交，同一学生可多次提交，全部按顺序保留
    pub fn submit(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }
}
