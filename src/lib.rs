//! # Taskdash - task tracking with a statistics dashboard
//!
//! A command-line utility for managing a personal task list and summarizing
//! it on a dashboard.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, filter and delete tasks
//! - **Dashboard**: Status and priority distribution, upcoming work and a
//!   weekly creation histogram
//! - **Data Exchange**: Import tasks from CSV, export to CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
