// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use forum_core::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle};
use forum_core::domain::comment::{Comment, CommentBody, CommentId};
use forum_core::domain::topic::{Topic, TopicSlug};
use forum_core::domain::user::{User, Username};

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_600_000_000 + secs, 0).unwrap()
}

pub fn article(
    id: i64,
    title: &str,
    topic: &str,
    author: &str,
    votes: i64,
    created_at: DateTime<Utc>,
) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new(title).unwrap(),
        topic: TopicSlug::new(topic).unwrap(),
        author: Username::new(author).unwrap(),
        body: ArticleBody::new("some text").unwrap(),
        votes,
        created_at,
        comment_count: 0,
    }
}

pub fn comment(id: i64, article_id: i64, author: &str, body: &str, votes: i64) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        author: Username::new(author).unwrap(),
        body: CommentBody::new(body).unwrap(),
        votes,
        created_at: ts(0),
    }
}

pub fn topic(slug: &str) -> Topic {
    Topic {
        slug: TopicSlug::new(slug).unwrap(),
        description: format!("all about {slug}"),
    }
}

pub fn user(username: &str) -> User {
    User {
        username: Username::new(username).unwrap(),
        name: username.to_string(),
        avatar_url: format!("https://example.com/{username}.png"),
    }
}
