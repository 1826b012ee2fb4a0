//! Presentation helpers shared by every front end.
//!
//! Nothing here touches the store; views call these before `add` and while
//! rendering a snapshot.

pub mod draft;
pub mod tier;

pub use draft::{parse_amount, ExpenseDraft};
pub use tier::{classify_amount, AmountTier};
