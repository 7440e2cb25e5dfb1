//! Bootloader-provided linear framebuffer as a [`Display`]
use bootloader_api::info::{FrameBuffer, PixelFormat as DeviceFormat};
use log::{info, warn};
use x86_64::instructions::port::Port;

use screentest::devices::display::{Display, DisplayInfo, Frame, PixelFormat, PresentMode};
use screentest::devices::scanout::{ChannelOrder, ScanoutFormat};

use crate::interrupts::timer;

const VGA_INPUT_STATUS: u16 = 0x3DA;
const VGA_RETRACE: u8 = 1 << 3;

/// Scan-out memory plus the pacing source used for vblank.
pub struct BootDisplay {
    framebuffer: FrameBuffer,
    /// `None` when the device layout cannot be written; frames are dropped.
    format: Option<ScanoutFormat>,
    has_vga: bool,
}

impl BootDisplay {
    pub fn new(framebuffer: FrameBuffer) -> Self {
        let fb = framebuffer.info();
        // floating bus reads back all ones when no VGA device decodes the port
        let has_vga = unsafe { Port::<u8>::new(VGA_INPUT_STATUS).read() } != 0xFF;
        info!(
            "framebuffer {}x{} stride {} {:?}, {} bytes/pixel",
            fb.width, fb.height, fb.stride, fb.pixel_format, fb.bytes_per_pixel
        );
        if !has_vga {
            warn!("no VGA status register; pacing frames with the PIT");
        }

        let order = match fb.pixel_format {
            DeviceFormat::Bgr => ChannelOrder::Bgr,
            DeviceFormat::U8 => ChannelOrder::Luma,
            DeviceFormat::Rgb => ChannelOrder::Rgb,
            other => {
                warn!("pixel format {:?} treated as RGB", other);
                ChannelOrder::Rgb
            }
        };
        let format = ScanoutFormat::new(order, fb.bytes_per_pixel)
            .map_err(|e| warn!("{}; frames will not be shown", e))
            .ok();

        Self {
            framebuffer,
            format,
            has_vga,
        }
    }

    fn wait_retrace(&self) {
        let mut status = Port::<u8>::new(VGA_INPUT_STATUS);
        unsafe {
            while status.read() & VGA_RETRACE != 0 {
                core::hint::spin_loop();
            }
            while status.read() & VGA_RETRACE == 0 {
                core::hint::spin_loop();
            }
        }
    }

    fn clear(&mut self) {
        self.framebuffer.buffer_mut().fill(0);
    }

    /// Copy `frame` into scan-out memory in the device's byte layout.
    fn blit(&mut self, frame: &Frame<'_>) {
        debug_assert_eq!(frame.format, PixelFormat::Rgba8888);
        let Some(format) = self.format else {
            return;
        };
        let fb = self.framebuffer.info();
        let bpp = format.bytes_per_pixel();
        let width = frame.width.min(fb.width);
        let height = frame.height.min(fb.height);
        let buffer = self.framebuffer.buffer_mut();

        for y in 0..height {
            let src = &frame.pixels[y * frame.stride..y * frame.stride + width];
            let row_start = y * fb.stride * bpp;
            let Some(dst) = buffer.get_mut(row_start..row_start + width * bpp) else {
                break;
            };
            format.encode_row(src, dst);
        }
    }
}

impl Display for BootDisplay {
    fn info(&self) -> DisplayInfo {
        let fb = self.framebuffer.info();
        DisplayInfo {
            width: fb.width,
            height: fb.height,
            stride: fb.stride,
        }
    }

    fn wait_vblank(&mut self) {
        if self.has_vga {
            self.wait_retrace();
        } else {
            timer::wait_next_tick();
        }
    }

    fn set_frame(&mut self, frame: Option<Frame<'_>>, mode: PresentMode) {
        if mode == PresentMode::NextVblank {
            self.wait_vblank();
        }
        match frame {
            Some(frame) => self.blit(&frame),
            None => self.clear(),
        }
    }
}
