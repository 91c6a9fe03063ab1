//! Minimal software rasterization into an `RgbImage`.

use image::{Rgb, RgbImage};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn put(img: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

/// Draw a line segment by sampling it once per pixel of length.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw_line(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().clamp(1.0, 10_000.0) as u32;
    for i in 0..=steps {
        let s = f64::from(i) / f64::from(steps);
        put(img, from.0 + dx * s, from.1 + dy * s, color);
    }
}

pub fn draw_disc(img: &mut RgbImage, center: (f64, f64), radius: f64, color: Rgb<u8>) {
    let r = radius.ceil();
    let mut y = -r;
    while y <= r {
        let mut x = -r;
        while x <= r {
            if x * x + y * y <= radius * radius {
                put(img, center.0 + x, center.1 + y, color);
            }
            x += 1.0;
        }
        y += 1.0;
    }
}
