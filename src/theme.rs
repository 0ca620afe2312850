//! Color palette

pub mod dropdown {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const TEXT: Color = Color::White;
    pub const MUTED: Color = Color::DarkGray;
    pub const SELECTED_BG: Color = Color::Cyan;
}

pub mod input {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
}

pub mod detail {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const TITLE: Color = Color::Yellow;
    pub const TEXT: Color = Color::Gray;
}

pub mod status {
    use ratatui::style::Color;

    pub const TEXT: Color = Color::DarkGray;
    pub const MESSAGE: Color = Color::Green;
}

pub mod garage {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Green;
    pub const PRICE: Color = Color::Yellow;
}
