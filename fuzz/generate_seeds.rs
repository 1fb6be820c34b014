#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, pixels: &[[u8; 3]]) -> Vec<u8> {
    let stride = (width.unsigned_abs() as usize * 3).div_ceil(4) * 4;
    let rows = height.unsigned_abs() as usize;
    let size = 54 + stride * rows;
    let mut out = vec![0u8; 54];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[38..42].copy_from_slice(&2835u32.to_le_bytes());
    out[42..46].copy_from_slice(&2835u32.to_le_bytes());
    for row in pixels.chunks(width.unsigned_abs() as usize) {
        for bgr in row {
            out.extend_from_slice(bgr);
        }
        out.resize(out.len() + stride - row.len() * 3, 0);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, &[[0xff, 0, 0]])).unwrap();
    fs::write(
        format!("{dir}/bmp_2x2_red.bmp"),
        bmp(2, 2, &[[0, 0, 0xff]; 4]),
    )
    .unwrap();
    fs::write(
        format!("{dir}/bmp_3x2_top_down.bmp"),
        bmp(3, -2, &[[10, 20, 30], [40, 50, 60], [70, 80, 90], [1, 2, 3], [4, 5, 6], [7, 8, 9]]),
    )
    .unwrap();

    // Truncated/malformed seeds for edge coverage
    let good = bmp(2, 2, &[[0x80; 3]; 4]);
    fs::write(format!("{dir}/truncated_header.bmp"), &good[..30]).unwrap();
    fs::write(format!("{dir}/truncated_pixels.bmp"), &good[..good.len() - 3]).unwrap();
    let mut eight_bit = good.clone();
    eight_bit[28..30].copy_from_slice(&8u16.to_le_bytes());
    fs::write(format!("{dir}/bpp8.bmp"), eight_bit).unwrap();

    let roundtrip = "fuzz/corpus/fuzz_roundtrip";
    fs::create_dir_all(roundtrip).unwrap();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        fs::copy(&path, format!("{roundtrip}/{}", path.file_name().unwrap().to_string_lossy())).unwrap();
    }

    println!("seeds written to {dir} and {roundtrip}");
}
