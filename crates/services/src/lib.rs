#![forbid(unsafe_code)]

pub mod deck_file;
pub mod error;
pub mod round_loop;
pub mod round_view;
pub mod time_fmt;

pub use error::{DeckFileError, RoundServiceError};
pub use round_loop::{RoundEvent, RoundLoopService, RoundObserver};
pub use round_view::{RoundView, VisibleCard};
