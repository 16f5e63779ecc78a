//! Color permutation core: alphabet validation, code generation, pagination

mod alphabet;
mod code;
mod generate;
mod page;

pub use alphabet::Alphabet;
pub use code::ColorCode;
pub use generate::generate;
pub use page::{paginate, Page};

/// Length of a generated color code (two hex digits per RGB channel)
pub const CODE_LEN: usize = 6;

/// Maximum number of alphabet characters accepted at the input boundary
///
/// Output size grows as the 6th power of the alphabet length, so the cap
/// bounds a full generation at 6^6 = 46,656 codes.
pub const MAX_ALPHABET_LEN: usize = 6;
