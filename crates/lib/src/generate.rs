//! Random document generation for benchmarks and tests.
//!
//! Generated documents carry a publication type and an author drawn from
//! [`PAPER_TYPES`] and [`AUTHORS`].

use rand::{Rng, seq::SliceRandom};

use crate::{
    constants::{AUTHOR_FIELD, AUTHORS, PAPER_TYPE_FIELD, PAPER_TYPES},
    doc::Doc,
    sort::Criterion,
};

/// Generates `size` random newspaper/author documents.
pub fn random_documents(size: usize) -> Vec<Doc> {
    random_documents_with(&mut rand::thread_rng(), size)
}

/// Generates `size` random documents from the given RNG.
///
/// Seeding the RNG makes the output reproducible.
pub fn random_documents_with<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<Doc> {
    (0..size)
        .map(|_| {
            let paper_type = PAPER_TYPES.choose(rng).copied().unwrap_or(PAPER_TYPES[0]);
            let author = AUTHORS.choose(rng).copied().unwrap_or(AUTHORS[0]);
            Doc::new()
                .with(PAPER_TYPE_FIELD, paper_type)
                .with(AUTHOR_FIELD, author)
        })
        .collect()
}

/// Criteria matching the generated vocabulary: newspapers first, then
/// newspaper authors in [`AUTHORS`] order.
pub fn newspaper_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(PAPER_TYPE_FIELD).priorities(["Newspaper", "Magazine"]),
        Criterion::new(AUTHOR_FIELD)
            .based_on(PAPER_TYPE_FIELD, "Newspaper")
            .priorities(AUTHORS),
    ]
}
