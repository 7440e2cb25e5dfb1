//! Patterns driven by the animation frame counter
use crate::config::{INVERSION_PERIOD_FRAMES, MOVING_BAR_THICKNESS};
use crate::devices::framebuffer::{Color, PixelBuffer};
use crate::patterns::{solid::fill_solid, Animation};

/// Leading edge of the sweeping bar along an axis of `axis_len` pixels.
///
/// The bar covers `[position - thickness, position)`, so it enters from one
/// edge, crosses fully and wraps after `axis_len + thickness` steps.
pub fn bar_position(anim: &Animation, axis_len: usize) -> usize {
    let period = (axis_len + MOVING_BAR_THICKNESS) as u64;
    (anim.offset() % period) as usize
}

fn in_bar(coord: usize, position: usize) -> bool {
    coord < position && coord + MOVING_BAR_THICKNESS >= position
}

/// White bar sweeping left to right.
pub fn moving_bar_horizontal(buf: &mut PixelBuffer, anim: &Animation) {
    let position = bar_position(anim, buf.width());
    let white = Color::WHITE.to_packed();
    let black = Color::BLACK.to_packed();
    for row in buf.rows_mut() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = if in_bar(x, position) { white } else { black };
        }
    }
}

/// White bar sweeping top to bottom.
pub fn moving_bar_vertical(buf: &mut PixelBuffer, anim: &Animation) {
    let position = bar_position(anim, buf.height());
    for (y, row) in buf.rows_mut().enumerate() {
        let color = if in_bar(y, position) { Color::WHITE } else { Color::BLACK };
        row.fill(color.to_packed());
    }
}

/// Hue advanced by the animation offset, wrapping every 360 degrees.
pub fn cycle_hue(anim: &Animation) -> u32 {
    (anim.offset() % 360) as u32
}

/// Whole screen in one fully saturated color that walks the hue circle.
pub fn color_cycle(buf: &mut PixelBuffer, anim: &Animation) {
    fill_solid(buf, Color::from_hue(cycle_hue(anim)));
}

/// Black and white alternating every [`INVERSION_PERIOD_FRAMES`], regardless of speed.
pub fn inversion(buf: &mut PixelBuffer, anim: &Animation) {
    let phase = (anim.frame / INVERSION_PERIOD_FRAMES) % 2;
    fill_solid(buf, if phase == 1 { Color::WHITE } else { Color::BLACK });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim(frame: u32, speed: u32) -> Animation {
        Animation { frame, speed }
    }

    #[test]
    fn test_bar_starts_offscreen() {
        assert_eq!(bar_position(&anim(0, 1), 960), 0);
        let mut buf = PixelBuffer::try_new(960, 4, 960).unwrap();
        moving_bar_horizontal(&mut buf, &anim(0, 1));
        assert!(buf.row(0).unwrap().iter().all(|&p| p == Color::BLACK.to_packed()));
    }

    #[test]
    fn test_bar_period() {
        let period = 960 + MOVING_BAR_THICKNESS as u32;
        assert_eq!(bar_position(&anim(period, 1), 960), 0);
        assert_eq!(bar_position(&anim(period + 5, 1), 960), 5);
        assert_eq!(bar_position(&anim(period / 2, 2), 960), 0);
    }

    #[test]
    fn test_bar_span() {
        let mut buf = PixelBuffer::try_new(960, 2, 960).unwrap();
        moving_bar_horizontal(&mut buf, &anim(50, 2));
        assert_eq!(buf.pixel(35, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(36, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(99, 1), Some(Color::WHITE));
        assert_eq!(buf.pixel(100, 1), Some(Color::BLACK));
    }

    #[test]
    fn test_vertical_bar_enters_from_top() {
        let mut buf = PixelBuffer::try_new(4, 544, 4).unwrap();
        moving_bar_vertical(&mut buf, &anim(10, 1));
        assert_eq!(buf.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(3, 9), Some(Color::WHITE));
        assert_eq!(buf.pixel(0, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_color_cycle_primaries() {
        let mut buf = PixelBuffer::try_new(2, 2, 2).unwrap();
        color_cycle(&mut buf, &anim(0, 2));
        assert_eq!(buf.pixel(1, 1), Some(Color::RED));
        color_cycle(&mut buf, &anim(60, 2));
        assert_eq!(buf.pixel(0, 0), Some(Color::GREEN));
        color_cycle(&mut buf, &anim(24, 10));
        assert_eq!(buf.pixel(0, 0), Some(Color::BLUE));
        assert_eq!(cycle_hue(&anim(200, 2)), 40);
    }

    #[test]
    fn test_inversion_ignores_speed() {
        let mut buf = PixelBuffer::try_new(2, 2, 2).unwrap();
        inversion(&mut buf, &anim(59, 10));
        assert_eq!(buf.pixel(0, 0), Some(Color::BLACK));
        inversion(&mut buf, &anim(60, 1));
        assert_eq!(buf.pixel(0, 0), Some(Color::WHITE));
        inversion(&mut buf, &anim(120, 7));
        assert_eq!(buf.pixel(0, 0), Some(Color::BLACK));
    }
}
