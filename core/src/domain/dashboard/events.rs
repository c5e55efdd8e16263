use crate::domain::{feedback::entities::Feedback, profile::entities::Profile};

/// Store tables the dashboard observes for live inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTable {
    Profiles,
    Feedback,
}

#[derive(Debug, Clone)]
pub enum StoreRecord {
    Profile(Profile),
    Feedback(Feedback),
}

/// Change notification published after a successful store insert.
///
/// The dashboard reducer is the only consumer and the only place that
/// mutates the "new" buckets, so events from rapid inserts apply in arrival
/// order.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    Inserted(StoreRecord),
}

impl StoreEvent {
    pub fn profile_inserted(profile: Profile) -> Self {
        StoreEvent::Inserted(StoreRecord::Profile(profile))
    }

    pub fn feedback_inserted(feedback: Feedback) -> Self {
        StoreEvent::Inserted(StoreRecord::Feedback(feedback))
    }

    pub fn table(&self) -> StoreTable {
        match self {
            StoreEvent::Inserted(StoreRecord::Profile(_)) => StoreTable::Profiles,
            StoreEvent::Inserted(StoreRecord::Feedback(_)) => StoreTable::Feedback,
        }
    }
}
