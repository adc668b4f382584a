use anyhow::Result;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ReviewId;

/// Review status enum for type-safe status handling
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    InProgress,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
            ReviewStatus::InProgress => write!(f, "in_progress"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            "in_progress" => Ok(ReviewStatus::InProgress),
            _ => Err(anyhow::anyhow!("Invalid review status: {}", s)),
        }
    }
}

/// Current time at the precision timestamps are stored with.
pub(crate) fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Review model - a design submitted for review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub title: String,
    pub description: String,
    pub status: ReviewStatus,
    pub reviewer: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Build a review stamped with the current time.
    ///
    /// Text fields are trimmed; both timestamps share one instant.
    pub fn new(
        id: ReviewId,
        title: &str,
        description: &str,
        status: ReviewStatus,
        reviewer: Option<&str>,
    ) -> Self {
        let now = timestamp_now();
        Self {
            id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            status,
            reviewer: reviewer.map(|r| r.trim().to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a review. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ReviewStatus>,
    pub reviewer: Option<String>,
}

impl ReviewChanges {
    pub fn status(status: ReviewStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Merge into `review` field by field, then refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply_to(&self, review: &mut Review, touched_at: DateTime<Utc>) {
        if let Some(title) = &self.title {
            review.title = title.clone();
        }
        if let Some(description) = &self.description {
            review.description = description.clone();
        }
        if let Some(status) = self.status {
            review.status = status;
        }
        if let Some(reviewer) = &self.reviewer {
            review.reviewer = Some(reviewer.clone());
        }
        review.updated_at = review.updated_at.max(touched_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> Review {
        Review::new(
            ReviewId::new(),
            "  ロゴデザイン ",
            "会社の新しいロゴデザイン案です。",
            ReviewStatus::Pending,
            Some(" 佐藤花子 "),
        )
    }

    #[test]
    fn status_string_forms() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
            ReviewStatus::InProgress,
        ] {
            assert_eq!(status.to_string().parse::<ReviewStatus>().unwrap(), status);
        }
        assert!("done".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ReviewStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn new_trims_and_shares_timestamps() {
        let review = sample();
        assert_eq!(review.title, "ロゴデザイン");
        assert_eq!(review.reviewer.as_deref(), Some("佐藤花子"));
        assert_eq!(review.created_at, review.updated_at);
    }

    #[test]
    fn review_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn empty_changes_only_touch_updated_at() {
        let mut review = sample();
        let before = review.clone();
        let later = before.updated_at + Duration::seconds(5);

        ReviewChanges::default().apply_to(&mut review, later);

        assert_eq!(review.updated_at, later);
        review.updated_at = before.updated_at;
        assert_eq!(review, before);
    }

    #[test]
    fn changes_overwrite_only_present_fields() {
        let mut review = sample();
        let changes = ReviewChanges {
            status: Some(ReviewStatus::Approved),
            reviewer: Some("田中太郎".into()),
            ..Default::default()
        };

        changes.apply_to(&mut review, timestamp_now());

        assert_eq!(review.status, ReviewStatus::Approved);
        assert_eq!(review.reviewer.as_deref(), Some("田中太郎"));
        assert_eq!(review.title, "ロゴデザイン");
    }

    #[test]
    fn updated_at_never_goes_backwards() {
        let mut review = sample();
        let before = review.updated_at;
        ReviewChanges::default().apply_to(&mut review, before - Duration::hours(1));
        assert_eq!(review.updated_at, before);
    }
}
