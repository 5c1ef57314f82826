//! Border synthesis: constant (black) fill for letterboxing and reflect-101
//! mirror fill for smart fill.

use tracing::debug;

use crate::core::pixel::{CHANNELS, PixelImage};
use crate::error::Result;

/// Per-edge padding amounts, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadAmounts {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl PadAmounts {
    /// Center split of total padding; any odd remainder accrues to the
    /// bottom/right edge.
    pub fn centered(pad_w: usize, pad_h: usize) -> Self {
        let top = pad_h / 2;
        let left = pad_w / 2;
        Self {
            top,
            bottom: pad_h - top,
            left,
            right: pad_w - left,
        }
    }

    fn is_zero(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }
}

/// Center the source on a black canvas grown by `pads`.
pub fn constant_pad(src: &PixelImage, pads: PadAmounts) -> Result<PixelImage> {
    if pads.is_zero() {
        return Ok(src.clone());
    }
    let out_w = src.width() + pads.left + pads.right;
    let out_h = src.height() + pads.top + pads.bottom;
    debug!(
        "constant pad {}x{} -> {}x{} (t={} b={} l={} r={})",
        src.width(),
        src.height(),
        out_w,
        out_h,
        pads.top,
        pads.bottom,
        pads.left,
        pads.right
    );

    let src_row_len = src.width() * CHANNELS;
    let mut data = vec![0u8; out_w * out_h * CHANNELS];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..src.height() {
        let src_offset = row * src_row_len;
        let dst_offset = ((row + pads.top) * out_w + pads.left) * CHANNELS;
        data[dst_offset..dst_offset + src_row_len]
            .copy_from_slice(&src.data()[src_offset..src_offset + src_row_len]);
    }
    PixelImage::from_raw(out_w, out_h, data)
}

/// Reflect-101 index: mirrors across each edge without duplicating the edge
/// sample, so the sample just outside an edge equals the second-to-edge
/// sample. Periodic, which keeps pads wider than the content defined; a
/// 1-sample extent degenerates to replication.
fn reflect_101(idx: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut i = idx % period;
    if i < 0 {
        i += period;
    }
    if i >= len as isize {
        (period - i) as usize
    } else {
        i as usize
    }
}

/// Grow the source by `pads`, synthesizing the border by mirror reflection
/// (reflect-101: for a row `a b c d`, the left extension reads `... c b |`).
pub fn mirror_pad(src: &PixelImage, pads: PadAmounts) -> Result<PixelImage> {
    if pads.is_zero() {
        return Ok(src.clone());
    }
    let (w, h) = (src.width(), src.height());
    let out_w = w + pads.left + pads.right;
    let out_h = h + pads.top + pads.bottom;
    debug!(
        "mirror pad {}x{} -> {}x{} (t={} b={} l={} r={})",
        w, h, out_w, out_h, pads.top, pads.bottom, pads.left, pads.right
    );

    let col_of: Vec<usize> = (0..out_w)
        .map(|x| reflect_101(x as isize - pads.left as isize, w))
        .collect();

    let src_row_len = w * CHANNELS;
    let out_row_len = out_w * CHANNELS;
    let mut data = vec![0u8; out_w * out_h * CHANNELS];
    for out_row in 0..out_h {
        let sy = reflect_101(out_row as isize - pads.top as isize, h);
        let src_row = &src.data()[sy * src_row_len..(sy + 1) * src_row_len];
        let dst_row = &mut data[out_row * out_row_len..(out_row + 1) * out_row_len];
        // Interior columns map 1:1, so that run is a single slice copy
        dst_row[pads.left * CHANNELS..(pads.left + w) * CHANNELS].copy_from_slice(src_row);
        for x in (0..pads.left).chain(pads.left + w..out_w) {
            let sx = col_of[x];
            dst_row[x * CHANNELS..(x + 1) * CHANNELS]
                .copy_from_slice(&src_row[sx * CHANNELS..(sx + 1) * CHANNELS]);
        }
    }
    PixelImage::from_raw(out_w, out_h, data)
}
