//! Catalog module: static technique and persona lookup tables.
//! Read-only for the lifetime of the process.

pub mod persona;
pub mod technique;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use persona::Persona;
pub use technique::Technique;

static TECHNIQUES_BY_NAME: Lazy<HashMap<&'static str, Technique>> =
    Lazy::new(|| Technique::ALL.iter().map(|t| (t.name(), *t)).collect());

static PERSONAS_BY_NAME: Lazy<HashMap<&'static str, Persona>> =
    Lazy::new(|| Persona::ALL.iter().map(|p| (p.name(), *p)).collect());

/// Description for a client-supplied technique name; `None` when unknown.
pub fn technique_context(name: &str) -> Option<&'static str> {
    Technique::from_name(name).map(Technique::context)
}

/// Thinking-style phrase for a client-supplied persona name; `None` when unknown.
pub fn persona_perspective(name: &str) -> Option<&'static str> {
    Persona::from_name(name).map(Persona::perspective)
}
