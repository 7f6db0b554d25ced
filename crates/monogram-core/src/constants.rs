pub mod style_defaults {
    /// Box edge length in pixels; the box is always square.
    pub const SIZE: f64 = 50.0;
    pub const RADIUS: &str = "50%";
    pub const BG_COLOR: &str = "#4f46e5";
    pub const TEXT_COLOR: &str = "#ffffff";
    pub const FONT_FAMILY: &str = "inherit";
    /// Font size as a fraction of the box size when none is given.
    pub const FONT_SIZE_RATIO: f64 = 0.4;
    pub const FONT_WEIGHT: f64 = 600.0;
    pub const LETTER_SPACING: f64 = 0.0;
}

pub mod initials_defaults {
    pub const UPPERCASE: bool = true;
    pub const FALLBACK: &str = "";
}

/// Characters treated as word separators in addition to whitespace.
pub const NAME_SEPARATORS: [char; 3] = ['-', '.', '\''];
