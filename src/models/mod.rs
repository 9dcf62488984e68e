//! Request and response models

pub mod item;
pub mod user;

pub use item::{Item, ItemPayload};
pub use user::{User, UserPayload};

use serde::Serialize;

/// Message-only acknowledgement body, used by edit and destroy responses.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement carrying the id the engine generated for an add.
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

impl Created {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
