// src/pixel/buffer.rs
//
// Flat RGBA8 pixel storage, row-major, four channels per pixel.
// Stands in for the canvas-backed image data the transforms read and write.

use nannou::image::RgbaImage;

pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// A zeroed buffer. Every pixel starts fully transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Take ownership of a decoded image's raw samples.
    pub fn from_image(image: &RgbaImage) -> Self {
        Self {
            data: image.as_raw().clone(),
            width: image.width(),
            height: image.height(),
        }
    }

    /// Paint `image` into the buffer at (0,0), clipped to the buffer bounds.
    /// Pixels outside the painted region keep their prior values.
    pub fn blit(&mut self, image: &RgbaImage) {
        let copy_w = image.width().min(self.width) as usize;
        let copy_h = image.height().min(self.height) as usize;
        let src_stride = image.width() as usize * 4;
        let dst_stride = self.width as usize * 4;
        let src = image.as_raw();

        for row in 0..copy_h {
            let src_start = row * src_stride;
            let dst_start = row * dst_stride;
            self.data[dst_start..dst_start + copy_w * 4]
                .copy_from_slice(&src[src_start..src_start + copy_w * 4]);
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((x + y * self.width) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Channel values starting at a raw byte index, or None when the index
    /// runs past the buffer. Out-of-range sampling reads nothing.
    pub fn channels_at(&self, index: usize) -> Option<[u8; 4]> {
        if index + 4 <= self.data.len() {
            Some([
                self.data[index],
                self.data[index + 1],
                self.data[index + 2],
                self.data[index + 3],
            ])
        } else {
            None
        }
    }
}
