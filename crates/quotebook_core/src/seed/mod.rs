//! Seed data for populating an empty quote store.

pub mod catalog;
