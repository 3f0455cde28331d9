// Interface adapters: concrete ports plus the terminal presentation.

pub mod clock;
pub mod timer;
pub mod tui;
pub mod utils;
pub mod view;
