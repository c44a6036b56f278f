// tests/support/mocks.rs
use std::cmp::Ordering;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, AtomicUsize, Ordering as AtomicOrdering},
};

use async_trait::async_trait;
use chrono::Utc;
use forum_core::application::services::ApplicationServices;
use forum_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSort, ArticleSummary,
    ArticleWriteRepository, NewArticle, SortDirection, SortKey,
};
use forum_core::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentWriteRepository, NewComment,
};
use forum_core::domain::errors::DomainResult;
use forum_core::domain::topic::{Topic, TopicRepository, TopicSlug};
use forum_core::domain::user::{User, UserRepository, Username};

/* -------------------------------- articles -------------------------------- */

pub struct InMemoryArticles {
    rows: Mutex<Vec<Article>>,
    next_id: AtomicI64,
    pub list_calls: AtomicUsize,
}

impl InMemoryArticles {
    pub fn new(rows: Vec<Article>) -> Self {
        let next_id = rows.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(AtomicOrdering::SeqCst)
    }

    fn summary(article: &Article) -> ArticleSummary {
        ArticleSummary {
            id: article.id,
            title: article.title.clone(),
            topic: article.topic.clone(),
            author: article.author.clone(),
            votes: article.votes,
            created_at: article.created_at,
            comment_count: article.comment_count,
        }
    }

    fn compare(a: &ArticleSummary, b: &ArticleSummary, key: SortKey) -> Ordering {
        match key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Title => a.title.as_str().cmp(b.title.as_str()),
            SortKey::Author => a.author.as_str().cmp(b.author.as_str()),
            SortKey::Topic => a.topic.as_str().cmp(b.topic.as_str()),
            SortKey::Votes => a.votes.cmp(&b.votes),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn list(
        &self,
        sort: ArticleSort,
        topic: Option<&TopicSlug>,
    ) -> DomainResult<Vec<ArticleSummary>> {
        self.list_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let rows = self.rows.lock().unwrap();

        let mut summaries: Vec<ArticleSummary> = rows
            .iter()
            .filter(|a| topic.map_or(true, |slug| a.topic == *slug))
            .map(Self::summary)
            .collect();

        summaries.sort_by(|a, b| {
            let ordering = Self::compare(a, b, sort.key);
            let ordering = match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            ordering.then(i64::from(a.id).cmp(&i64::from(b.id)))
        });

        Ok(summaries)
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|a| a.id == id))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            votes: 0,
            created_at: Utc::now(),
            comment_count: 0,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn increment_votes(&self, id: ArticleId, delta: i64) -> DomainResult<Option<Article>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|a| a.id == id).map(|a| {
            a.votes += delta;
            a.clone()
        }))
    }
}

/* -------------------------------- comments -------------------------------- */

pub struct InMemoryComments {
    rows: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryComments {
    pub fn new(rows: Vec<Comment>) -> Self {
        let next_id = rows.iter().map(|c| i64::from(c.id)).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
        }
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryComments {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let created = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: 0,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn increment_votes(&self, id: CommentId, delta: i64) -> DomainResult<Option<Comment>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.votes += delta;
            c.clone()
        }))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }
}

/* -------------------------------- topics / users -------------------------------- */

pub struct InMemoryTopics {
    rows: Vec<Topic>,
}

impl InMemoryTopics {
    pub fn new(rows: Vec<Topic>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopics {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Ok(self.rows.clone())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        Ok(self.rows.iter().any(|t| t.slug == *slug))
    }
}

pub struct InMemoryUsers {
    rows: Vec<User>,
}

impl InMemoryUsers {
    pub fn new(rows: Vec<User>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.rows.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self.rows.iter().find(|u| u.username == *username).cloned())
    }

    async fn exists(&self, username: &Username) -> DomainResult<bool> {
        Ok(self.rows.iter().any(|u| u.username == *username))
    }
}

/* -------------------------------- wiring -------------------------------- */

pub struct TestContext {
    pub services: ApplicationServices,
    pub articles: Arc<InMemoryArticles>,
    pub comments: Arc<InMemoryComments>,
}

pub fn context(
    articles: Vec<Article>,
    comments: Vec<Comment>,
    topics: Vec<Topic>,
    users: Vec<User>,
) -> TestContext {
    let articles = Arc::new(InMemoryArticles::new(articles));
    let comments = Arc::new(InMemoryComments::new(comments));

    let article_read: Arc<dyn ArticleReadRepository> = articles.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
    let comment_read: Arc<dyn CommentReadRepository> = comments.clone();
    let comment_write: Arc<dyn CommentWriteRepository> = comments.clone();
    let topic_repo: Arc<dyn TopicRepository> = Arc::new(InMemoryTopics::new(topics));
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUsers::new(users));

    let services = ApplicationServices::new(
        article_read,
        article_write,
        comment_read,
        comment_write,
        topic_repo,
        user_repo,
    );

    TestContext {
        services,
        articles,
        comments,
    }
}
