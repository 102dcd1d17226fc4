pub mod column;
pub mod diagnostics;
pub mod inspect;
