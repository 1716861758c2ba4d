//! All built-in validation rule implementations.
//!
//! This module re-exports all individual rule types and provides
//! `register_builtin_rules` to add all 13 rules to a `Validator`.

mod e101;
mod e102;
mod e103;
mod e104;
mod w101;
mod w102;
mod w103;
mod w104;
mod w105;
mod w106;
mod w107;
mod w108;
mod w109;

pub use e101::MissingModule;
pub use e102::MissingDescription;
pub use e103::BrokenLink;
pub use e104::RdfMissingMarker;
pub use w101::LongDescription;
pub use w102::NoExports;
pub use w103::NoTags;
pub use w104::EmptyRelationship;
pub use w105::UnknownTag;
pub use w106::MissingRdf;
pub use w107::RdfNameMismatch;
pub use w108::DuplicateModule;
pub use w109::DependencyCycle;

use crate::Validator;

/// Registers all 13 built-in validation rules with the engine.
///
/// Registration order fixes the order of findings within one record:
/// structure, links, tags, embedded metadata, then collection-wide checks.
pub fn register_builtin_rules(validator: &mut Validator) {
    validator.register(Box::new(MissingModule));
    validator.register(Box::new(MissingDescription));
    validator.register(Box::new(LongDescription));
    validator.register(Box::new(NoExports));
    validator.register(Box::new(NoTags));
    validator.register(Box::new(BrokenLink));
    validator.register(Box::new(EmptyRelationship));
    validator.register(Box::new(UnknownTag));
    validator.register(Box::new(MissingRdf));
    validator.register(Box::new(RdfMissingMarker));
    validator.register(Box::new(RdfNameMismatch));
    validator.register(Box::new(DuplicateModule));
    validator.register(Box::new(DependencyCycle));
}
