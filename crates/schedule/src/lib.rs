//! Delivery-window scheduling engine.
//!
//! This crate provides:
//! - The per-week cutoff check shared by both schedulers
//! - Weekday projection from an order date to its delivery date
//! - A bounded multi-zone scheduler for the customer-facing date picker
//! - An earliest-date scheduler for the "next delivery" notice
//! - Upstream source traits with in-memory and YAML catalog backends
//! - [`DeliveryPlanner`], which fetches both snapshots and runs either scheduler

pub mod bounded;
pub mod cutoff;
pub mod display;
pub mod earliest;
pub mod error;
pub mod planner;
pub mod projector;
pub mod source;
pub mod store;

pub use bounded::{BoundedScheduler, DeliverySlot, SchedulerResult};
pub use cutoff::{can_order_for_week, ClosedReason, OrderWindow};
pub use display::{format_date, Locale};
pub use earliest::{EarliestDelivery, EarliestScheduler};
pub use error::{ScheduleError, SourceError};
pub use planner::DeliveryPlanner;
pub use projector::project_delivery_date;
pub use source::{DeniedDateSource, InMemoryStore, ZoneRuleSource};
pub use store::{CatalogFile, YamlCatalog};
