use ratatui::style::Color;

// Title colors
pub const TITLE_TEAL: Color = Color::Rgb(108, 178, 172);      // #6CB2AC
pub const TITLE_SAND: Color = Color::Rgb(219, 171, 121);      // #DBAB79

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const DATE_VALUE: Color = Color::Rgb(124, 175, 194);      // detail text on date rows
pub const FIELD_FOCUS: Color = Color::Rgb(161, 193, 129);     // focused wheel field
pub const STATUS_ERROR: Color = Color::Rgb(232, 131, 136);    // status-line errors
