//! Database layer for taskdash.
//!
//! SQLite persistence through `rusqlite`, with a versioned migration system
//! that brings every opened database up to the current schema.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskdash::db::{db::Db, tasks::Tasks};
//! use taskdash::libs::task::{Priority, Status, Task};
//!
//! let mut tasks = Tasks::from_db(Db::open_in_memory()?);
//! let due = NaiveDate::from_ymd_opt(2025, 3, 21).unwrap();
//! let id = tasks.insert(&Task::new("Review code", None, Priority::High, Status::Pending, due))?;
//! assert!(tasks.get_by_id(id)?.is_some());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Testing Support
//!
//! [`db::Db::open_in_memory`] gives each test its own migrated database.

/// Connection management and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Task CRUD operations and filtering.
pub mod tasks;
