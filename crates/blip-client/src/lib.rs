//! Blip platform API client
//!
//! This crate provides the trait-based client the application uses to reach
//! the care platform, together with the data transfer objects it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             BlipApi trait                 │
//! │  - fetch_user() / fetch_patient(id)       │
//! │  - fetch_patients() / invites             │
//! │  - care team mutations                    │
//! └──────────────────────────────────────────┘
//!                      │
//!                      ▼
//!            ┌───────────────────┐
//!            │    DemoClient     │
//!            │ (in-memory data)  │
//!            └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use blip_client::{BlipApi, Credentials, DemoClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DemoClient::bundled()?;
//! client
//!     .login(&Credentials {
//!         username: "demo@tidepool.org".to_string(),
//!         password: "demo".to_string(),
//!     })
//!     .await?;
//! let patients = client.fetch_patients().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod demo_client;
pub mod types;

pub use client::BlipApi;
pub use demo_client::DemoClient;
pub use types::{
    Credentials, Datum, Invite, InviteStatus, PatientData, PatientProfile, Permissions, Profile,
    User, UserId,
};
