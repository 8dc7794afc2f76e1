//! InMemory Repository 実装

mod membership;

pub use membership::InMemoryMembershipRepository;
