//! Demo records written by `prep-store demo`.

use crate::model::{InterviewQuestion, Section, User};

pub fn sample_users() -> Vec<User> {
    let mut john = User::new(
        "user-id-1",
        "john.doe@example.com",
        "hashed-password-123",
        "John",
        "Doe",
        "2024-01-15T10:30:00",
        "2026-02-20T14:45:00",
        true,
        true,
    );
    let profile = john.profile_mut();
    profile.school = "University of South Carolina".into();
    profile.major = "Computer Science".into();
    profile.total_upvotes = 5;
    profile.resume_url = "https://example.com/resume.pdf".into();

    let mut jane = User::new(
        "user-id-2",
        "jane.smith@example.com",
        "hashed-password-456",
        "Jane",
        "Smith",
        "2024-02-01T10:30:00",
        "2026-02-18T14:45:00",
        false,
        true,
    );
    let profile = jane.profile_mut();
    profile.school = "University of North Carolina".into();
    profile.major = "Computer Engineering".into();
    profile.total_upvotes = 10;
    profile.resume_url = "https://example.com/resume2.pdf".into();

    vec![john, jane]
}

pub fn sample_questions() -> Vec<InterviewQuestion> {
    let mut binary_search = InterviewQuestion::new(
        "q-id-1",
        "Binary search time complexity",
        "EASY",
        "SHORT_ANSWER",
        "ARRAY",
        Some(String::new()),
        "user-id-2",
        0,
        0,
    )
    .with_timestamps("2026-02-21T13:30:00", "2026-02-21T13:30:00");
    binary_search.add_section(Section::new(
        "Description",
        "What is the time complexity of binary search on a sorted array and why?",
        "DESCRIPTION",
    ));

    let mut duplicates = InterviewQuestion::new(
        "q-id-2",
        "Detecting duplicates in an array",
        "MEDIUM",
        "SHORT_ANSWER",
        "ARRAY",
        Some(String::new()),
        "user-id-1",
        0,
        0,
    )
    .with_timestamps("2026-02-21T14:00:00", "2026-02-21T14:00:00");
    duplicates.add_section(Section::new(
        "Description",
        "Given an integer array, explain an efficient approach to determine whether the array contains any duplicate values.",
        "DESCRIPTION",
    ));

    vec![binary_search, duplicates]
}
