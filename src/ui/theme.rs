use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub rod: Color,
    pub held_disk: Color,
    pub disks: [Color; 6], // Cycled by disk size
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),
    rod: Color::Rgb(147, 153, 178),
    held_disk: Color::Rgb(249, 226, 175),
    disks: [
        Color::Rgb(243, 139, 168), // Red
        Color::Rgb(250, 179, 135), // Orange
        Color::Rgb(166, 227, 161), // Green
        Color::Rgb(148, 226, 213), // Teal
        Color::Rgb(137, 180, 250), // Blue
        Color::Rgb(203, 166, 247), // Mauve
    ],
};

impl Theme {
    /// Fill color for a disk of the given size
    pub fn disk_color(&self, size: u32) -> Color {
        self.disks[(size.saturating_sub(1) as usize) % self.disks.len()]
    }
}
