//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit
//! serialization control. They decouple the domain `Command` type from the
//! external API representation; each projection between the two is a
//! hand-written pure function.

pub mod command;

pub use command::{CommandCreateDto, CommandReadDto, CommandUpdateDto};
