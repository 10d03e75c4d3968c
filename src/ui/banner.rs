use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

/// Startup banner
pub const BANNER: &str = r#"
   ____   _   _      _      ____      ____
  / ___| | | | |    / \    / ___|    |  _ \   ___  _ __ ___    ___
 | |  _  | |_| |   / _ \   \___ \    | | | | / _ \| '_ ` _ \  / _ \
 | |_| | |  _  |  / ___ \   ___) |   | |_| ||  __/| | | | | || (_) |
  \____| |_| |_| /_/   \_\ |____/    |____/  \___||_| |_| |_| \___/
"#;

/// Line printed under the banner
pub const SUBTITLE: &str = "GitHub Advanced Security Demo Console\n";

/// Clear the terminal and move the cursor home
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    crossterm::execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
