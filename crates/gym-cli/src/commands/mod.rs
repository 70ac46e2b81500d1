use anyhow::Result;
use inquire::Confirm;
use thiserror::Error as ThisError;
use uuid::Uuid;

use gym_data::Member;
use gym_db::{MemberStore, Slot};

mod members;
pub use members::*;

mod stats;
pub use stats::*;

/// Member lookup errors
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum LookupError {
    #[error("Member {0} not found.")]
    NotFound(String),
    #[error("Id {0} is ambiguous, it matches {1} members.")]
    Ambiguous(String, usize),
}

/// Find a member by full id or by a unique id prefix.
pub fn find_member<'a, S: Slot>(
    store: &'a MemberStore<S>,
    id: &str,
) -> Result<&'a Member, LookupError> {
    let needle = id.trim().to_lowercase();
    if needle.is_empty() {
        return Err(LookupError::NotFound(id.to_string()));
    }
    if let Ok(uuid) = Uuid::parse_str(&needle) {
        return store
            .get(uuid)
            .ok_or_else(|| LookupError::NotFound(id.to_string()));
    }

    let matches: Vec<&Member> = store
        .members()
        .iter()
        .filter(|m| m.id.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [] => Err(LookupError::NotFound(id.to_string())),
        [member] => Ok(*member),
        _ => Err(LookupError::Ambiguous(id.to_string(), matches.len())),
    }
}

/// Ask before changing anything, unless told not to.
fn confirm(skip: bool, message: &str) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    let confirmed = Confirm::new(message).with_default(true).prompt()?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use gym_data::NewMember;
    use gym_db::connection;

    fn new_member(name: &str) -> NewMember {
        NewMember {
            name: name.to_string(),
            email: format!("{}@gym.test", name.to_lowercase()),
            password: "pw".to_string(),
            ..NewMember::default()
        }
    }

    #[tokio::test]
    async fn test_find_member() {
        let (_handle, db) = connection::open_test().await;
        let mut store = MemberStore::load(db).await;
        let ana = store.add(new_member("Ana"), Utc::now()).await;

        let full = ana.id.to_string();
        assert_eq!(find_member(&store, &full), Ok(&ana));
        assert_eq!(find_member(&store, &full.to_uppercase()), Ok(&ana));
        assert_eq!(find_member(&store, &full[..8]), Ok(&ana));

        assert_eq!(
            find_member(&store, "not-an-id"),
            Err(LookupError::NotFound("not-an-id".to_string()))
        );
        assert_eq!(
            find_member(&store, ""),
            Err(LookupError::NotFound("".to_string()))
        );

        let unknown = Uuid::new_v4().to_string();
        assert_eq!(
            find_member(&store, &unknown),
            Err(LookupError::NotFound(unknown.clone()))
        );
    }

    #[tokio::test]
    async fn test_find_member_ambiguous() {
        let (_handle, db) = connection::open_test().await;
        let mut store = MemberStore::load(db).await;
        // 17 ids over 16 possible first digits, at least two share one
        for n in 0..17 {
            store.add(new_member(&format!("M{}", n)), Utc::now()).await;
        }
        let shared = "0123456789abcdef"
            .chars()
            .map(|c| c.to_string())
            .find(|prefix| {
                store
                    .members()
                    .iter()
                    .filter(|m| m.id.to_string().starts_with(prefix.as_str()))
                    .count()
                    > 1
            })
            .unwrap();
        assert!(matches!(
            find_member(&store, &shared),
            Err(LookupError::Ambiguous(_, n)) if n > 1
        ));
    }
}
