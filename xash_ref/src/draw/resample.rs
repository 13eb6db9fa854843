/// Power-of-two sizing and RGBA8 resampling for contexts without NPOT support

/// Smallest power of two >= `value`, or the largest one <= `value` when
/// `round_down` is set. Values below 1 give 1.
pub fn nearest_pow(value: i32, round_down: bool) -> i32 {
    let mut n: i32 = 1;
    while n < value {
        match n.checked_shl(1) {
            Some(next) if next > 0 => n = next,
            _ => break,
        }
    }
    if round_down && n > value && n > 1 {
        n >>= 1;
    }
    n
}

/// Point-sample an RGBA8 image to a new size.
///
/// Returns an empty buffer when any size is not positive or `src` is
/// shorter than `in_width * in_height * 4`.
pub fn resample_texture(src: &[u8], in_width: i32, in_height: i32, out_width: i32, out_height: i32) -> Vec<u8> {
    if in_width <= 0 || in_height <= 0 || out_width <= 0 || out_height <= 0 {
        return Vec::new();
    }
    let (in_w, in_h) = (in_width as usize, in_height as usize);
    let (out_w, out_h) = (out_width as usize, out_height as usize);
    if src.len() < in_w * in_h * 4 {
        return Vec::new();
    }

    let mut out = vec![0u8; out_w * out_h * 4];
    for y in 0..out_h {
        let sy = y * in_h / out_h;
        for x in 0..out_w {
            let sx = x * in_w / out_w;
            let from = (sy * in_w + sx) * 4;
            let to = (y * out_w + x) * 4;
            out[to..to + 4].copy_from_slice(&src[from..from + 4]);
        }
    }
    out
}

#[cfg(test)]
#[path = "resample_tests.rs"]
mod tests;
