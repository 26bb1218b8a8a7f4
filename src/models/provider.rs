// models/provider.rs - Sample Data and Placeholder Synthesis
//
// The original samples ship a set of bundled photos. Here each item carries
// a seed instead, and the provider renders a deterministic gradient
// landscape for it at whatever size the caller asks for. The RGBA buffers
// go straight into `iced::widget::image::Handle::from_rgba`.

use image::{Rgba, RgbaImage};

use super::GalleryItem;

/// The static item set shared by both samples.
pub fn sample_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new("1", "Dunes at first light", 1),
        GalleryItem::new("2", "Ridge line in fog", 2),
        GalleryItem::new("3", "Tidal flats", 3),
        GalleryItem::new("4", "Sandstone canyon", 4),
        GalleryItem::new("5", "Winter shoreline", 5),
        GalleryItem::new("6", "Highland meadow", 6),
        GalleryItem::new("7", "Basalt columns", 7),
        GalleryItem::new("8", "Desert storm front", 8),
        GalleryItem::new("9", "Glacier terminus", 9),
        GalleryItem::new("10", "Salt flat horizon", 10),
    ]
}

/// Render the placeholder photo for `seed` at the given size.
///
/// Same seed and size always produce the same pixels, so handles built from
/// this buffer are stable across runs.
pub fn render_placeholder(seed: u32, width: u32, height: u32) -> RgbaImage {
    let sky_top = palette(seed, 0);
    let sky_bottom = palette(seed, 1);
    let ground_top = palette(seed, 2);
    let ground_bottom = palette(seed, 3);
    // Horizon sits somewhere in the middle band of the frame
    let horizon = 0.45 + (mix(seed, 4) % 21) as f32 / 100.0;

    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let t = y as f32 / height.max(1) as f32;
        let (from, to, local) = if t < horizon {
            (sky_top, sky_bottom, t / horizon)
        } else {
            (ground_top, ground_bottom, (t - horizon) / (1.0 - horizon))
        };
        let base = lerp_rgb(from, to, local);
        for x in 0..width {
            // Soft side vignette keeps the frames from looking flat
            let edge = (x as f32 / width.max(1) as f32 - 0.5).abs() * 2.0;
            let shade = 1.0 - edge * edge * 0.25;
            img.put_pixel(x, y, Rgba([scale(base[0], shade), scale(base[1], shade), scale(base[2], shade), 255]));
        }
    }
    img
}

/// RGBA bytes for `iced::widget::image::Handle::from_rgba`.
pub fn placeholder_rgba(seed: u32, width: u32, height: u32) -> Vec<u8> {
    render_placeholder(seed, width, height).into_raw()
}

/// Derived color stop for `seed`, one of four per frame.
fn palette(seed: u32, stop: u32) -> [u8; 3] {
    let v = mix(seed, stop);
    // Keep channels in a muted mid range so text stays readable on top
    [
        40 + (v & 0x7F) as u8,
        40 + ((v >> 8) & 0x7F) as u8,
        48 + ((v >> 16) & 0x7F) as u8,
    ]
}

/// Integer hash of seed and salt, 32-bit finalizer.
fn mix(seed: u32, salt: u32) -> u32 {
    let mut x = seed
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(salt.wrapping_mul(0x85EB_CA6B));
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^ (x >> 16)
}

fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (from[i] as f32 + (to[i] as f32 - from[i] as f32) * t) as u8;
    }
    out
}

fn scale(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_have_unique_ids() {
        let items = sample_items();
        assert!(!items.is_empty());
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn placeholder_has_requested_dimensions() {
        let img = render_placeholder(7, 64, 40);
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 40);
        assert_eq!(placeholder_rgba(7, 64, 40).len(), 64 * 40 * 4);
    }

    #[test]
    fn placeholder_is_deterministic_per_seed() {
        assert_eq!(placeholder_rgba(3, 32, 32), placeholder_rgba(3, 32, 32));
        assert_ne!(placeholder_rgba(3, 32, 32), placeholder_rgba(4, 32, 32));
    }

    #[test]
    fn placeholder_pixels_are_opaque() {
        let img = render_placeholder(1, 16, 16);
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
