//! Core library modules for taskdash.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, errors
//! - **Task Model**: Task, priority and status types with validation
//! - **Dashboard**: Aggregated statistics over the whole task list
//! - **Data Exchange**: CSV import and CSV/JSON/Excel export
//! - **User Interface**: Console rendering of tables and charts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use taskdash::db::tasks::Tasks;
//! use taskdash::libs::dashboard::compute_dashboard_snapshot;
//!
//! let tasks = Tasks::new()?.all()?;
//! let snapshot = compute_dashboard_snapshot(&tasks, Local::now().date_naive());
//! println!("{} of {} tasks completed", snapshot.completed_tasks, snapshot.total_tasks);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod import;
pub mod messages;
pub mod task;
pub mod view;
