//! Platform - Cryptographic building blocks
//!
//! Credential handling shared by the feature crates:
//! - `password`: complexity policy, Argon2id hashing and verification
//! - `token`: signed bearer tokens carrying identity and role claims

pub mod password;
pub mod token;
