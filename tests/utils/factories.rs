/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use restaurant_reviews::{Restaurant, ReviewCreateUpdateRequest, User};
use uuid::Uuid;

pub struct UserFactory {
    id: String,
    username: Option<String>,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: None,
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn build(self) -> User {
        let user = User::new(self.id);
        match self.username {
            Some(username) => user.with_username(username),
            None => user,
        }
    }
}

pub struct ReviewRequestFactory {
    content: String,
    rating: u8,
    photo_ids: Vec<String>,
}

impl Default for ReviewRequestFactory {
    fn default() -> Self {
        Self {
            content: "Solid food, friendly staff".to_string(),
            rating: 4,
            photo_ids: Vec::new(),
        }
    }
}

impl ReviewRequestFactory {
    pub fn rated(rating: u8) -> Self {
        Self {
            rating,
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn with_photos(mut self, photo_ids: &[&str]) -> Self {
        self.photo_ids = photo_ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn build(self) -> ReviewCreateUpdateRequest {
        ReviewCreateUpdateRequest::new(self.content, self.rating).with_photos(self.photo_ids)
    }
}

pub struct RestaurantFactory;

impl RestaurantFactory {
    pub fn named(name: &str) -> Restaurant {
        Restaurant::new(Uuid::new_v4().to_string(), name)
    }
}
