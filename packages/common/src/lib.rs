//! Common - Shared Types for Cross-Domain Token Contracts
//!
//! This package holds the slice of the messenger interface that token
//! contracts depend on: dispatching an outbound message and reading the
//! authenticated origin of the message currently being delivered.

pub mod messenger;

pub use messenger::{
    query_cross_domain_context, CrossDomainContextResponse, MessengerExecuteMsg,
    MessengerQueryMsg,
};
