use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0b, 0x0b, 0x1a);
pub const GRID_LINE: Color32 = Color32::from_rgb(0x1c, 0x1c, 0x3a);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x39, 0xff, 0x14);
pub const FOOD: Color32 = Color32::from_rgb(0xff, 0x2e, 0xa6);
pub const SCORE: Color32 = Color32::from_rgb(0x00, 0xf0, 0xff);
pub const HIGH_SCORE: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);
pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);

/// Body segments fade from the head colour towards the tail.
pub fn segment_color(index: usize, length: usize) -> Color32 {
    let fade = if length <= 1 {
        0.0
    } else {
        index as f32 / (length - 1) as f32
    };
    let green = (255.0 - fade * 120.0) as u8;
    let blue = (20.0 + fade * 80.0) as u8;
    Color32::from_rgb(0x20, green, blue)
}
