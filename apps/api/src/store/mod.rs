//! Persistence over the two independent storage domains. Résumés and
//! responses live in separate databases with no cross-store constraint; a
//! response carries a denormalized copy of the résumé's identity instead of
//! a foreign key.

pub mod responses;
pub mod resumes;
