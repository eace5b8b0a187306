use uuid::Uuid;

use super::timestamp_now;

/// One block of a question page (description, hints, solution...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
    /// Free-form tag such as `DESCRIPTION`. Not validated.
    pub section_type: String,
}

impl Section {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        section_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            section_type: section_type.into(),
        }
    }
}

/// An interview question and the sections that make up its page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewQuestion {
    pub question_id: String,
    pub title: String,
    pub difficulty: String,
    pub question_type: String,
    pub category: String,
    /// Optional illustration. `None` is written as JSON `null`.
    pub image_url: Option<String>,
    /// Id of the authoring user. Not checked against any user list.
    pub author_id: String,
    pub total_attempts: i64,
    pub total_successes: i64,
    pub created_at: String,
    pub last_updated: String,
    pub sections: Vec<Section>,
}

impl InterviewQuestion {
    /// Build a question from known values. Timestamps start empty and there
    /// are no sections yet.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        question_id: impl Into<String>,
        title: impl Into<String>,
        difficulty: impl Into<String>,
        question_type: impl Into<String>,
        category: impl Into<String>,
        image_url: Option<String>,
        author_id: impl Into<String>,
        total_attempts: i64,
        total_successes: i64,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            title: title.into(),
            difficulty: difficulty.into(),
            question_type: question_type.into(),
            category: category.into(),
            image_url,
            author_id: author_id.into(),
            total_attempts,
            total_successes,
            created_at: String::new(),
            last_updated: String::new(),
            sections: Vec::new(),
        }
    }

    /// Author a new question with a generated id, stamped with the current time.
    pub fn create(
        title: impl Into<String>,
        difficulty: impl Into<String>,
        question_type: impl Into<String>,
        category: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        let now = timestamp_now();
        Self {
            created_at: now.clone(),
            last_updated: now,
            ..Self::new(
                Uuid::new_v4().to_string(),
                title,
                difficulty,
                question_type,
                category,
                None,
                author_id,
                0,
                0,
            )
        }
    }

    pub fn with_timestamps(
        mut self,
        created_at: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        self.created_at = created_at.into();
        self.last_updated = last_updated.into();
        self
    }

    /// Append a section; sections keep their insertion order.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Touch the last updated timestamp.
    pub fn touch(&mut self) {
        self.last_updated = timestamp_now();
    }
}
