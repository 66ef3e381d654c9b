//! Fake REST backend for testing
//!
//! A wiremock server answering like a json-server instance: collections of
//! JSON objects under `/users`, `/courses` and `/enrollments`, with ids
//! assigned on POST. State lives in memory and can be inspected from tests.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{json, Value};
use wiremock::{matchers::any, Mock, MockServer, Request, Respond, ResponseTemplate};

use crate::fixtures;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<Value>,
    courses: Vec<Value>,
    enrollments: Vec<Value>,
    fail_with: Option<u16>,
}

impl Collections {
    fn collection(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match name {
            "users" => Some(&mut self.users),
            "courses" => Some(&mut self.courses),
            "enrollments" => Some(&mut self.enrollments),
            _ => None,
        }
    }
}

fn id_of(record: &Value) -> Option<i64> {
    match record.get("id")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Stateful responder mounted for every request
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<Collections>>,
}

impl FakeBackend {
    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.state.lock().unwrap()
    }
}

impl Respond for FakeBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = self.lock();
        if let Some(status) = state.fail_with {
            return ResponseTemplate::new(status);
        }

        let segments: Vec<&str> = request.url.path().trim_matches('/').split('/').collect();
        let (name, id) = match segments.as_slice() {
            [name] => (*name, None),
            [name, id] => match id.parse::<i64>() {
                Ok(id) => (*name, Some(id)),
                Err(_) => return ResponseTemplate::new(404),
            },
            _ => return ResponseTemplate::new(404),
        };
        let Some(records) = state.collection(name) else {
            return ResponseTemplate::new(404);
        };

        match (request.method.as_str(), id) {
            ("GET", None) => ResponseTemplate::new(200).set_body_json(Value::Array(records.clone())),
            ("GET", Some(id)) => match records.iter().find(|r| id_of(r) == Some(id)) {
                Some(record) => ResponseTemplate::new(200).set_body_json(record.clone()),
                None => ResponseTemplate::new(404),
            },
            ("POST", None) => {
                let Ok(mut record) = serde_json::from_slice::<Value>(&request.body) else {
                    return ResponseTemplate::new(400);
                };
                let next_id = records.iter().filter_map(id_of).max().unwrap_or(0) + 1;
                record["id"] = json!(next_id);
                records.push(record.clone());
                ResponseTemplate::new(201).set_body_json(record)
            }
            ("PUT", Some(id)) => {
                let Ok(mut record) = serde_json::from_slice::<Value>(&request.body) else {
                    return ResponseTemplate::new(400);
                };
                record["id"] = json!(id);
                match records.iter_mut().find(|r| id_of(r) == Some(id)) {
                    Some(existing) => {
                        *existing = record.clone();
                        ResponseTemplate::new(200).set_body_json(record)
                    }
                    None => ResponseTemplate::new(404),
                }
            }
            ("DELETE", Some(id)) => {
                let before = records.len();
                records.retain(|r| id_of(r) != Some(id));
                if records.len() < before {
                    ResponseTemplate::new(200).set_body_json(json!({}))
                } else {
                    ResponseTemplate::new(404)
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

/// Mock backend server for testing
pub struct MockBackend {
    pub server: MockServer,
    backend: FakeBackend,
}

impl MockBackend {
    /// Start an empty backend
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let backend = FakeBackend::default();
        Mock::given(any())
            .respond_with(backend.clone())
            .mount(&server)
            .await;
        Self { server, backend }
    }

    /// Start a backend loaded with the fixtures
    pub async fn seeded() -> Self {
        let mock = Self::start().await;
        {
            let mut state = mock.backend.lock();
            state.users = fixtures::users();
            state.courses = fixtures::courses();
            state.enrollments = fixtures::enrollments();
        }
        mock
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn users(&self) -> Vec<Value> {
        self.backend.lock().users.clone()
    }

    pub fn courses(&self) -> Vec<Value> {
        self.backend.lock().courses.clone()
    }

    pub fn enrollments(&self) -> Vec<Value> {
        self.backend.lock().enrollments.clone()
    }

    pub fn add_user(&self, user: Value) {
        self.backend.lock().users.push(user);
    }

    /// Answer every request with `status` until cleared with `None`
    pub fn fail_with(&self, status: Option<u16>) {
        self.backend.lock().fail_with = status;
    }

    /// `(method, path)` of every request received so far
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| (r.method.as_str().to_string(), r.url.path().to_string()))
            .collect()
    }

    /// Requests that changed data
    pub async fn writes(&self) -> Vec<(String, String)> {
        self.requests()
            .await
            .into_iter()
            .filter(|(method, _)| method != "GET")
            .collect()
    }
}

/// Field of a record as a number, accepting numeric strings
pub fn number(record: &Value, field: &str) -> Option<i64> {
    match record.get(field)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
