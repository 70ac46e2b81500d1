use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use gym_data::{CycleMonth, Member, MemberPatch, NewMember};

use crate::{results::StorageError, Connection, Slot};

/// Name of the slot holding all members.
pub const MEMBERS_SLOT: &str = "gymjared_users";

/// The member collection.
///
/// All members are kept in memory. Every mutation writes the whole
/// collection back to the slot. A failed write is logged and otherwise
/// ignored, the in memory state is updated regardless.
///
/// Operations on unknown ids do nothing and return `None`.
pub struct MemberStore<S = Connection> {
    slot: S,
    members: Vec<Member>,
}

fn decode(data: &str) -> Result<Vec<Member>, StorageError> {
    serde_json::from_str(data).map_err(|source| StorageError::Malformed {
        key: MEMBERS_SLOT.to_string(),
        source,
    })
}

fn encode(members: &[Member]) -> Result<String, StorageError> {
    serde_json::to_string(members).map_err(|source| StorageError::Encode {
        key: MEMBERS_SLOT.to_string(),
        source,
    })
}

impl<S: Slot> MemberStore<S> {
    /// Load the members from the slot. Missing or unreadable
    /// data results in an empty store.
    pub async fn load(slot: S) -> Self {
        let members = match slot.read_slot(MEMBERS_SLOT).await {
            Ok(Some(data)) => decode(&data).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring stored members");
                Vec::new()
            }),
            Ok(None) => {
                debug!("no members stored yet");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "could not read stored members");
                Vec::new()
            }
        };
        info!(count = members.len(), "members loaded");
        Self { slot, members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, id: Uuid) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a member with a fresh id.
    pub async fn add(&mut self, member: NewMember, now: DateTime<Utc>) -> Member {
        let member = member.into_member(Uuid::new_v4(), now);
        debug!(id = %member.id, "adding member");
        self.members.push(member.clone());
        self.persist().await;
        member
    }

    /// Merge the patch into the member.
    pub async fn update(
        &mut self,
        id: Uuid,
        patch: MemberPatch,
        now: DateTime<Utc>,
    ) -> Option<Member> {
        let updated = self.get_mut(id).map(|member| {
            member.apply(patch);
            member.updated_at = now;
            member.clone()
        });
        if updated.is_none() {
            debug!(%id, "update of unknown member ignored");
        }
        self.persist().await;
        updated
    }

    /// Remove the member for good.
    pub async fn delete(&mut self, id: Uuid) -> Option<Member> {
        let removed = self
            .members
            .iter()
            .position(|m| m.id == id)
            .map(|idx| self.members.remove(idx));
        if removed.is_none() {
            debug!(%id, "delete of unknown member ignored");
        }
        self.persist().await;
        removed
    }

    /// Flip the payment status. The member is moved into the
    /// given cycle in both directions.
    pub async fn toggle_payment(
        &mut self,
        id: Uuid,
        cycle: CycleMonth,
        now: DateTime<Utc>,
    ) -> Option<Member> {
        let toggled = self.get_mut(id).map(|member| {
            member.payment_status = member.payment_status.toggled();
            member.current_cycle_month = cycle;
            member.updated_at = now;
            member.clone()
        });
        if toggled.is_none() {
            debug!(%id, "payment toggle of unknown member ignored");
        }
        self.persist().await;
        toggled
    }

    /// Overwrite the slot with the full collection.
    async fn persist(&self) {
        let data = match encode(&self.members) {
            Ok(data) => data,
            Err(err) => {
                error!(error = %err, "could not save members");
                return;
            }
        };
        if let Err(err) = self.slot.write_slot(MEMBERS_SLOT, &data).await {
            error!(error = %err, "could not save members");
        }
    }
}
