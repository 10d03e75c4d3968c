mod app;
mod banner;
mod menu;
mod printer;
mod prompt;

pub use app::{App, MenuState};
pub use banner::{clear_screen, BANNER, SUBTITLE};
pub use menu::{MenuChoice, MetricsAction, RootAction, METRICS_MENU, ROOT_MENU};
pub use printer::Printer;
pub use prompt::{Prompter, TerminalPrompter};
