//! Redis cache for generated quiz questions. Failures are logged and bypassed.

use std::sync::Arc;

use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::interview::coach::QuizTopic;
use crate::skills::quiz::QuizQuestion;

pub const QUIZ_CACHE_TTL_SECONDS: u64 = 24 * 60 * 60;

pub fn quiz_cache_key(topic: &QuizTopic) -> String {
    format!(
        "skillit:quiz:{}:{}:{}:{}",
        topic.category.trim().to_lowercase(),
        topic.level.trim().to_lowercase(),
        topic.target_role.trim().to_lowercase(),
        topic.number
    )
}

/// Quiz-question cache over one shared multiplexed Redis connection.
/// A broken connection is dropped and re-established on the next call.
#[derive(Clone)]
pub struct QuizCache {
    client: redis::Client,
    conn: Arc<Mutex<Option<MultiplexedConnection>>>,
}

impl QuizCache {
    pub fn new(client: redis::Client) -> Self {
        Self {
            client,
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Opens the shared connection ahead of the first request.
    pub async fn connect(&self) -> redis::RedisResult<()> {
        self.connection().await.map(|_| ())
    }

    async fn connection(&self) -> redis::RedisResult<MultiplexedConnection> {
        let mut slot = self.conn.lock().await;
        if let Some(conn) = slot.as_ref() {
            return Ok(conn.clone());
        }
        let conn = self.client.get_multiplexed_async_connection().await?;
        *slot = Some(conn.clone());
        Ok(conn)
    }

    async fn reset(&self) {
        *self.conn.lock().await = None;
    }

    pub async fn get_quiz_question(&self, key: &str) -> Option<QuizQuestion> {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                warn!("Redis unavailable, skipping quiz cache lookup: {e}");
                return None;
            }
        };

        let cached: Option<String> = match conn.get(key).await {
            Ok(v) => v,
            Err(e) => {
                warn!("Quiz cache read failed for {key}: {e}");
                self.reset().await;
                return None;
            }
        };

        let question = cached
            .and_then(|raw| serde_json::from_str::<QuizQuestion>(&raw).ok())
            .filter(|q| q.validate().is_ok());
        if question.is_some() {
            debug!("Quiz cache hit: {key}");
        }
        question
    }

    pub async fn put_quiz_question(&self, key: &str, question: &QuizQuestion) {
        let payload = match serde_json::to_string(question) {
            Ok(p) => p,
            Err(e) => {
                warn!("Could not serialize quiz question for cache: {e}");
                return;
            }
        };

        if let Err(e) = self.set_with_ttl(key, payload).await {
            warn!("Quiz cache write failed for {key}: {e}");
            self.reset().await;
        }
    }

    async fn set_with_ttl(&self, key: &str, payload: String) -> redis::RedisResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex(key, payload, QUIZ_CACHE_TTL_SECONDS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_normalizes_case_and_whitespace() {
        let a = QuizTopic {
            category: "Programming".to_string(),
            level: "Beginner ".to_string(),
            target_role: "Full Stack Developer".to_string(),
            number: 2,
        };
        let b = QuizTopic {
            category: " programming".to_string(),
            level: "beginner".to_string(),
            target_role: "full stack developer".to_string(),
            number: 2,
        };
        assert_eq!(quiz_cache_key(&a), quiz_cache_key(&b));
        assert_eq!(
            quiz_cache_key(&a),
            "skillit:quiz:programming:beginner:full stack developer:2"
        );
    }

    #[test]
    fn test_cache_key_distinguishes_question_number() {
        let mut topic = QuizTopic {
            category: "Music".to_string(),
            level: "advanced".to_string(),
            target_role: "Composer".to_string(),
            number: 1,
        };
        let first = quiz_cache_key(&topic);
        topic.number = 2;
        assert_ne!(first, quiz_cache_key(&topic));
    }

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            question: "Which hook stores mutable state?".to_string(),
            options: vec![
                "useState".to_string(),
                "useEffect".to_string(),
                "useMemo".to_string(),
                "useRef".to_string(),
            ],
            correct: 0,
        }
    }

    #[tokio::test]
    async fn test_unreachable_redis_is_a_miss_and_keeps_no_connection() {
        let cache = QuizCache::new(redis::Client::open("redis://127.0.0.1:1/").unwrap());
        assert!(cache.connect().await.is_err());

        cache.put_quiz_question("skillit:quiz:k", &sample_question()).await;
        assert!(cache.get_quiz_question("skillit:quiz:k").await.is_none());
        assert!(cache.conn.lock().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_one_connection_slot() {
        let cache = QuizCache::new(redis::Client::open("redis://127.0.0.1:1/").unwrap());
        let clone = cache.clone();
        assert!(Arc::ptr_eq(&cache.conn, &clone.conn));
    }
}
