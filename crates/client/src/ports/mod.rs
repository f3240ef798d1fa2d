//! Port traits - the client's view of its external collaborators.

pub mod outbound;
