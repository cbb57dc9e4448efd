//! KV key builders for notification records.
//!
//! Centralising key construction prevents typos and keeps the key
//! space auditable: these two functions are the only place keys come
//! from. The purpose tags differ and each key embeds the full id, so
//! keys never collide across purposes or notifications.

use movecar_core::types::id::NotifyId;

/// Prefix applied to all Movecar KV keys.
const PREFIX: &str = "notify";

/// KV key for the stored payload of a notification.
pub fn request_key(id: NotifyId) -> String {
    format!("{PREFIX}:request:{id}")
}

/// KV key for the confirmation status of a notification.
pub fn confirm_key(id: NotifyId) -> String {
    format!("{PREFIX}:confirm:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_request_key() {
        let id = NotifyId::from_uuid(Uuid::nil());
        assert_eq!(
            request_key(id),
            "notify:request:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_confirm_key() {
        let id = NotifyId::from_uuid(Uuid::nil());
        assert_eq!(
            confirm_key(id),
            "notify:confirm:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_keys_never_collide() {
        let id = NotifyId::new();
        assert_ne!(request_key(id), confirm_key(id));
        assert_ne!(request_key(id), request_key(NotifyId::new()));
    }
}
