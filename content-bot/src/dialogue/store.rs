//! Session storage keyed by user id.
//!
//! [`SessionStore`] is injected into the dialogue controller so the in-memory map can be
//! replaced by a shared or persistent backend. Only the controller reads or writes it.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::DialogueState;
use crate::core::Result;

/// Opaque user id supplied by the transport.
pub type UserId = i64;

/// Key-value store of dialogue sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: UserId) -> Result<Option<DialogueState>>;

    /// Stores `state`, returning the state it replaced.
    async fn insert(&self, user_id: UserId, state: DialogueState) -> Result<Option<DialogueState>>;

    /// Deletes the session, returning it if there was one.
    async fn remove(&self, user_id: UserId) -> Result<Option<DialogueState>>;

    /// Atomically replaces the session with `new` (or deletes it when `new` is `None`) only if the
    /// current session equals `expected`. Returns whether the swap happened.
    async fn compare_and_swap(
        &self,
        user_id: UserId,
        expected: &DialogueState,
        new: Option<DialogueState>,
    ) -> Result<bool>;

    /// Number of active sessions.
    async fn count(&self) -> Result<usize>;
}

/// In-process store backed by a `HashMap` behind a tokio `RwLock`.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<UserId, DialogueState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: UserId) -> Result<Option<DialogueState>> {
        Ok(self.sessions.read().await.get(&user_id).cloned())
    }

    async fn insert(&self, user_id: UserId, state: DialogueState) -> Result<Option<DialogueState>> {
        Ok(self.sessions.write().await.insert(user_id, state))
    }

    async fn remove(&self, user_id: UserId) -> Result<Option<DialogueState>> {
        Ok(self.sessions.write().await.remove(&user_id))
    }

    async fn compare_and_swap(
        &self,
        user_id: UserId,
        expected: &DialogueState,
        new: Option<DialogueState>,
    ) -> Result<bool> {
        let mut sessions = self.sessions.write().await;
        if sessions.get(&user_id) != Some(expected) {
            return Ok(false);
        }
        match new {
            Some(state) => {
                sessions.insert(user_id, state);
            }
            None => {
                sessions.remove(&user_id);
            }
        }
        Ok(true)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::Platform;
    use std::sync::Arc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store = InMemorySessionStore::new();
        assert!(store.get(1).await.unwrap().is_none());

        let prev = store.insert(1, DialogueState::AwaitingPlatform).await.unwrap();
        assert!(prev.is_none());
        assert_eq!(store.get(1).await.unwrap(), Some(DialogueState::AwaitingPlatform));

        let prev = store
            .insert(1, DialogueState::AwaitingTopic { platform: Platform::TikTok })
            .await
            .unwrap();
        assert_eq!(prev, Some(DialogueState::AwaitingPlatform));

        let removed = store.remove(1).await.unwrap();
        assert_eq!(removed, Some(DialogueState::AwaitingTopic { platform: Platform::TikTok }));
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.remove(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_compare_and_swap_requires_expected_state() {
        let store = InMemorySessionStore::new();
        let expected = DialogueState::AwaitingTopic { platform: Platform::YouTube };

        assert!(!store
            .compare_and_swap(7, &expected, None)
            .await
            .unwrap());

        store.insert(7, DialogueState::AwaitingPlatform).await.unwrap();
        assert!(!store
            .compare_and_swap(7, &expected, None)
            .await
            .unwrap());
        assert_eq!(store.get(7).await.unwrap(), Some(DialogueState::AwaitingPlatform));

        assert!(store
            .compare_and_swap(7, &DialogueState::AwaitingPlatform, Some(expected.clone()))
            .await
            .unwrap());
        assert_eq!(store.get(7).await.unwrap(), Some(expected.clone()));

        assert!(store.compare_and_swap(7, &expected, None).await.unwrap());
        assert!(store.get(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generating_sessions_differ_by_request_id() {
        let store = InMemorySessionStore::new();
        let first = DialogueState::Generating {
            platform: Platform::Instagram,
            topic: "travel".to_string(),
            request_id: Uuid::new_v4(),
        };
        let second = DialogueState::Generating {
            platform: Platform::Instagram,
            topic: "travel".to_string(),
            request_id: Uuid::new_v4(),
        };
        store.insert(3, second.clone()).await.unwrap();

        assert!(!store.compare_and_swap(3, &first, None).await.unwrap());
        assert_eq!(store.get(3).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_users_do_not_interfere() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut tasks = Vec::new();
        for user_id in 0..50 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.insert(user_id, DialogueState::AwaitingPlatform).await.unwrap();
                store
                    .compare_and_swap(
                        user_id,
                        &DialogueState::AwaitingPlatform,
                        Some(DialogueState::AwaitingTopic { platform: Platform::Telegram }),
                    )
                    .await
                    .unwrap()
            }));
        }
        for t in tasks {
            assert!(t.await.unwrap());
        }
        assert_eq!(store.count().await.unwrap(), 50);
        assert_eq!(
            store.get(42).await.unwrap(),
            Some(DialogueState::AwaitingTopic { platform: Platform::Telegram })
        );
    }
}
