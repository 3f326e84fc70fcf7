pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, muted, section, success, warn};
pub use table::menu_table;
pub use theme::{theme, Theme};
