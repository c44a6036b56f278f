use crate::domain::topic::Topic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDto {
    pub slug: String,
    pub description: String,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            slug: topic.slug.into(),
            description: topic.description,
        }
    }
}
