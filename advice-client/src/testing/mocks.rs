use crate::error::{AdviceError, Result};
use crate::traits::ApiTransport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type ErrorFactory = Arc<dyn Fn() -> AdviceError + Send + Sync>;

#[derive(Clone)]
enum MockOutcome {
    Json(Value),
    Error(ErrorFactory),
}

#[derive(Clone)]
struct MockReply {
    outcome: MockOutcome,
    delay: Option<Duration>,
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, VecDeque<MockReply>>,
    calls: Vec<String>,
    bodies: Vec<Value>,
}

/// In-memory transport for tests.
///
/// Replies are keyed by `"<METHOD> <path>"`, e.g. `"POST homes"`. Several
/// replies for one key are served in order; the last one repeats.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, key: &str, reply: MockReply) -> Self {
        self.lock()
            .replies
            .entry(key.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// Answer `key` with a JSON payload
    pub fn with_json(self, key: &str, value: Value) -> Self {
        self.push(
            key,
            MockReply {
                outcome: MockOutcome::Json(value),
                delay: None,
            },
        )
    }

    /// Answer `key` with a JSON payload after sleeping for `delay`
    pub fn with_delayed_json(self, key: &str, value: Value, delay: Duration) -> Self {
        self.push(
            key,
            MockReply {
                outcome: MockOutcome::Json(value),
                delay: Some(delay),
            },
        )
    }

    /// Fail `key` with the error produced by `factory`
    pub fn with_error<F>(self, key: &str, factory: F) -> Self
    where
        F: Fn() -> AdviceError + Send + Sync + 'static,
    {
        self.push(
            key,
            MockReply {
                outcome: MockOutcome::Error(Arc::new(factory)),
                delay: None,
            },
        )
    }

    /// Keys of every request made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// JSON body of the most recent request that carried one
    pub fn last_body(&self) -> Option<Value> {
        self.lock().bodies.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock transport state poisoned")
    }

    fn next_reply(&self, key: String, body: Option<Value>) -> Option<MockReply> {
        let mut state = self.lock();
        state.calls.push(key.clone());
        if let Some(body) = body {
            state.bodies.push(body);
        }

        let queue = state.replies.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    async fn respond<T>(&self, key: String, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let reply = self.next_reply(key.clone(), body).ok_or_else(|| AdviceError::Transport {
            message: format!("Mock response not found for key: {}", key),
        })?;

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }

        match reply.outcome {
            MockOutcome::Json(value) => {
                serde_json::from_value(value).map_err(|e| AdviceError::Decode {
                    status: 200,
                    message: e.to_string(),
                })
            }
            MockOutcome::Error(factory) => Err(factory()),
        }
    }
}

impl ApiTransport for MockTransport {
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.respond(format!("GET {}", path), None).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let body = serde_json::to_value(body)?;
        self.respond(format!("POST {}", path), Some(body)).await
    }

    async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.respond(format!("POST {}", path), None).await
    }
}

/// Fixture builders shared by unit and integration tests
pub mod test_helpers {
    use crate::profile::{HeatingType, HomeProfile, InsulationType, WindowType};
    use crate::types::Recommendation;
    use serde_json::{json, Value};

    pub fn sample_profile() -> HomeProfile {
        let mut profile = HomeProfile::new(
            2000,
            15,
            HeatingType::Gas,
            InsulationType::Moderate,
            WindowType::DoublePane,
            2,
            4,
        );
        profile.has_basement = true;
        profile.has_attic = true;
        profile
    }

    pub fn home_response_json(id: &str) -> Value {
        let mut value = serde_json::to_value(sample_profile()).unwrap_or_else(|_| json!({}));
        if let Some(map) = value.as_object_mut() {
            map.insert("id".to_string(), json!(id));
            map.insert("created_at".to_string(), json!("2025-12-30T10:30:00"));
            map.insert("updated_at".to_string(), json!("2025-12-30T10:30:00"));
        }
        value
    }

    pub fn recommendation_json(
        title: &str,
        priority: &str,
        difficulty: Option<&str>,
        cost: Option<f64>,
    ) -> Value {
        json!({
            "title": title,
            "description": format!("{} description", title),
            "priority": priority,
            "category": "insulation",
            "estimated_savings_annual": 100.0,
            "estimated_cost": cost,
            "payback_period_years": null,
            "implementation_difficulty": difficulty
        })
    }

    pub fn recommendation(
        title: &str,
        priority: &str,
        difficulty: Option<&str>,
        cost: Option<f64>,
    ) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: format!("{} description", title),
            priority: priority.into(),
            category: "insulation".to_string(),
            estimated_savings_annual: Some(100.0),
            estimated_cost: cost,
            payback_period_years: None,
            implementation_difficulty: difficulty.map(Into::into),
        }
    }

    pub fn advice_json(home_id: &str, recommendations: Vec<Value>) -> Value {
        json!({
            "home_id": home_id,
            "recommendations": recommendations,
            "summary": "Your home has moderate energy efficiency.",
            "estimated_total_annual_savings": 2500.0,
            "generated_at": "2025-12-21T10:30:00Z",
            "llm_provider": "ollama-llama3.2"
        })
    }
}
