// ui/icon.rs - Procedural Window Icon
//
// Draws the two-pane mark straight into an RGBA buffer; no bundled asset.

use iced::window::{self, Icon};
use image::{Rgba, RgbaImage};

const SIZE: u32 = 32;

/// Window icon for both samples: two panes on a dark field.
pub fn app_icon() -> Option<Icon> {
    let mut img = RgbaImage::from_pixel(SIZE, SIZE, Rgba([24, 24, 31, 255]));
    fill(&mut img, 5, 7, 12, 18, Rgba([89, 140, 242, 255]));
    fill(&mut img, 19, 7, 8, 18, Rgba([242, 166, 90, 255]));
    window::icon::from_rgba(img.into_raw(), SIZE, SIZE).ok()
}

fn fill(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}
