//! Data models for the Zendesk Support API.
//!
//! This module contains the resource types (tickets, users, organizations,
//! ...), the request/response envelope, and the pagination, sideload and
//! search helpers shared by the resource methods.

mod attachment;
mod audit;
mod comment;
mod common;
mod envelope;
mod group;
mod identity;
mod job_status;
mod locale;
mod optional;
mod organization;
mod schedule;
mod ticket;
mod ticket_field;
mod user;
mod via;

pub use attachment::*;
pub use audit::*;
pub use comment::*;
pub use common::*;
pub use envelope::*;
pub use group::*;
pub use identity::*;
pub use job_status::*;
pub use locale::*;
pub use optional::*;
pub use organization::*;
pub use schedule::*;
pub use ticket::*;
pub use ticket_field::*;
pub use user::*;
pub use via::*;
