//! Entity → JSON tree field mapping.
//!
//! Key names and order here are the on-disk format. Values pass through as
//! they are: no trimming, defaulting or range checks.

use crate::model::{InterviewQuestion, Profile, Section, User};

use super::tree::{Map, Value};

pub fn map_user(user: &User) -> Value {
    let mut map = Map::new();
    map.insert("userId", user.user_id.as_str());
    map.insert("email", user.email.as_str());
    map.insert("passwordHash", user.password_hash.as_str());
    map.insert("firstName", user.first_name.as_str());
    map.insert("lastName", user.last_name.as_str());
    map.insert("createdAt", user.created_at.as_str());
    map.insert("lastLogin", user.last_login.as_str());
    map.insert("isAdmin", user.is_admin);
    map.insert("isContributor", user.is_contributor);
    map.insert("profile", map_profile(&user.profile));
    Value::Object(map)
}

fn map_profile(profile: &Profile) -> Value {
    let mut map = Map::new();
    map.insert("school", profile.school.as_str());
    map.insert("major", profile.major.as_str());
    map.insert("totalUpvotes", profile.total_upvotes);
    map.insert("resumeURL", profile.resume_url.as_str());
    Value::Object(map)
}

pub fn map_question(question: &InterviewQuestion) -> Value {
    let mut map = Map::new();
    map.insert("questionId", question.question_id.as_str());
    map.insert("title", question.title.as_str());
    map.insert("difficulty", question.difficulty.as_str());
    map.insert("type", question.question_type.as_str());
    map.insert("category", question.category.as_str());
    map.insert("imageURL", question.image_url.as_deref());
    map.insert("authorId", question.author_id.as_str());
    map.insert("totalAttempts", question.total_attempts);
    map.insert("totalSuccesses", question.total_successes);
    map.insert("createdAt", question.created_at.as_str());
    map.insert("lastUpdated", question.last_updated.as_str());
    // Always present, even when empty.
    map.insert(
        "sections",
        question.sections.iter().map(map_section).collect::<Value>(),
    );
    Value::Object(map)
}

/// Answers and comments are not part of the section format.
pub fn map_section(section: &Section) -> Value {
    let mut map = Map::new();
    map.insert("title", section.title.as_str());
    map.insert("content", section.content.as_str());
    map.insert("type", section.section_type.as_str());
    Value::Object(map)
}
