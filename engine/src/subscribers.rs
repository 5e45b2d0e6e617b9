//! Publish list for session snapshots.
//!
//! Subscribers are plain callbacks invoked synchronously, in subscription
//! order, after every committed mutation. Each receives a shared reference to
//! a freshly captured [`SessionSnapshot`]; the live session state is never
//! reachable from a callback.

use crate::session::SessionSnapshot;

/// Handle returned by [`crate::App::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SessionSnapshot)>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn publish(&mut self, snapshot: &SessionSnapshot) {
        for (_, callback) in &mut self.entries {
            callback(snapshot);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}
