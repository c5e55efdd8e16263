//! Admin dashboard view logic.
//!
//! The dashboard holds every fetched profile and feedback row in memory and
//! derives its projections from that set: the searchable/sortable table, the
//! "new since last sync" buckets, the day → meal → time-slot aggregation
//! tree, and the matching-group annotations. Nothing here writes back to the
//! store.

pub mod aggregation;
pub mod events;
pub mod matching;
pub mod projection;
pub mod view;

pub use aggregation::{DayAggregate, build_meal_times};
pub use events::{StoreEvent, StoreRecord, StoreTable};
pub use matching::MatchingGroups;
pub use projection::{FilterField, SortDirection, SortKey, SortState, ViewMode};
pub use view::DashboardView;
