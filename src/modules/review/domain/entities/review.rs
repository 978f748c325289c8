use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Photo, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub content: String,
    pub rating: u8,
    pub photos: Vec<Photo>,
    pub date_posted: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub written_by: User,
}

impl Review {
    /// Create a freshly posted review with a new id
    ///
    /// `date_posted` and `last_updated` both start at `now`, and every photo
    /// reference is stamped with the same instant.
    pub fn post(
        author: User,
        content: String,
        rating: u8,
        photo_ids: &[String],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            rating,
            photos: Photo::attach_all(photo_ids, now),
            date_posted: now,
            last_updated: now,
            written_by: author,
        }
    }

    pub fn is_authored_by(&self, user: &User) -> bool {
        self.written_by.id == user.id
    }

    /// Last instant at which the review may still be edited
    pub fn editable_until(&self, window: Duration) -> DateTime<Utc> {
        self.date_posted + window
    }

    /// The window is anchored to the original posting, not to the last edit
    pub fn is_editable_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now <= self.editable_until(window)
    }

    /// Replace the editable fields; the photo set is replaced wholesale
    pub fn revise(&mut self, content: String, rating: u8, photo_ids: &[String], now: DateTime<Utc>) {
        self.content = content;
        self.rating = rating;
        self.photos = Photo::attach_all(photo_ids, now);
        self.last_updated = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn posted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 18, 30, 0).unwrap()
    }

    fn sample_review() -> Review {
        Review::post(
            User::new("author-1"),
            "Crispy dumplings, slow service".to_string(),
            4,
            &["https://cdn.example.com/p/1.jpg".to_string()],
            posted_at(),
        )
    }

    #[test]
    fn post_stamps_timestamps_and_photos() {
        let review = sample_review();

        assert!(Uuid::parse_str(&review.id).is_ok());
        assert_eq!(review.date_posted, review.last_updated);
        assert_eq!(review.photos.len(), 1);
        assert_eq!(review.photos[0].upload_date, posted_at());
    }

    #[test]
    fn posted_reviews_get_distinct_ids() {
        assert_ne!(sample_review().id, sample_review().id);
    }

    #[test]
    fn editable_window_is_inclusive_at_the_boundary() {
        let review = sample_review();
        let window = Duration::hours(48);

        assert!(review.is_editable_at(posted_at() + Duration::hours(47), window));
        assert!(review.is_editable_at(posted_at() + window, window));
        assert!(!review.is_editable_at(posted_at() + window + Duration::seconds(1), window));
    }

    #[test]
    fn revise_keeps_identity_and_posting_date() {
        let mut review = sample_review();
        let id = review.id.clone();
        let later = posted_at() + Duration::hours(3);

        review.revise(
            "Dumplings still great".to_string(),
            5,
            &["a.jpg".to_string(), "b.jpg".to_string()],
            later,
        );

        assert_eq!(review.id, id);
        assert_eq!(review.date_posted, posted_at());
        assert_eq!(review.last_updated, later);
        assert_eq!(review.rating, 5);
        assert_eq!(review.photos.len(), 2);
        assert!(review.photos.iter().all(|p| p.upload_date == later));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_review()).unwrap();

        assert!(json.get("datePosted").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert_eq!(json["writtenBy"]["id"], "author-1");
        assert!(json["photos"][0].get("uploadDate").is_some());
    }
}
