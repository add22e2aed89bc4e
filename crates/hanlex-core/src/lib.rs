// hanlex-core: shared leaf types for the hanlex bilingual dictionary engine.
//
// Everything in this crate is dependency-light and free of I/O: the entry
// model, the authoritative translation-normalization routine, character
// classification, and the lookup direction enum.

pub mod character;
pub mod entry;
pub mod enums;
pub mod normalize;

pub use entry::Entry;
pub use enums::Direction;
