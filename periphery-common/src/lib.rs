//! Constants shared between the periphery scripts and the test suite, including
//! vault role flags, change-event classifications & address provider identifiers

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

pub mod address_ids;
pub mod change_types;
pub mod constants;
pub mod roles;
