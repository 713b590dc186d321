pub mod render;
pub mod terminal;

pub use render::{format_nutrient_line, greeting, render_report, report_lines};
pub use terminal::{DialoguerTerminal, ScriptedTerminal, Terminal};
