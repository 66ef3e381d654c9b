//! Confirmation capability
//!
//! Destructive handlers ask before acting. The question is answered by
//! whatever front end is attached: the terminal driver prompts on stdin,
//! tests answer with a fixed value.

use std::sync::Mutex;

use async_trait::async_trait;

#[async_trait]
pub trait Confirm: Send + Sync {
    /// `true` to go ahead
    async fn confirm(&self, message: &str) -> bool;
}

/// Answers every question the same way and remembers what was asked
#[derive(Debug, Default)]
pub struct AutoConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl AutoConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn accept() -> Self {
        Self::new(true)
    }

    pub fn decline() -> Self {
        Self::new(false)
    }

    /// Questions asked so far
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .map(|asked| asked.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, message: &str) -> bool {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(message.to_string());
        }
        self.answer
    }
}
