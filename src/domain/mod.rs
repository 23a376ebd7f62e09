//! Domain layer - Core carving logic
//!
//! Entities, repository traits and the services that scan and carve.
//! Nothing here touches the filesystem directly.

pub mod entities;
pub mod repositories;
pub mod services;
