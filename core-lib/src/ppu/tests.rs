use super::color::Color;
use super::ppu::Ppu;
use super::{
    framebuffer_to_ppm, framebuffer_to_rgba32, FRAMEBUFFER_SIZE, LINES_PER_FRAME, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::mmu::Memory;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

fn run_lines(ppu: &mut Ppu, mem: &Memory, lines: usize) -> usize {
    (0..lines).filter(|_| ppu.step(mem)).count()
}

#[test]
fn test_ppu_initialization() {
    let ppu = Ppu::new();
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.frame_count(), 0);
    assert_eq!(ppu.brightness(), 15);
    assert_eq!(ppu.bg_mode(), 0);
    assert_eq!(ppu.frame_buffer().len(), FRAMEBUFFER_SIZE);
    assert_eq!(FRAMEBUFFER_SIZE, 172_032);
    assert!(ppu.frame_buffer().iter().all(|&b| b == 0));
}

#[test]
fn test_full_frame_returns_to_line_zero() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    let frames = run_lines(&mut ppu, &mem, usize::from(LINES_PER_FRAME));
    assert_eq!(frames, 1);
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.frame_count(), 1);
}

#[test]
fn test_frame_edge_only_on_last_line() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    for line in 0..LINES_PER_FRAME - 1 {
        assert!(!ppu.step(&mem), "unexpected frame edge after line {line}");
    }
    assert_eq!(ppu.scanline(), 261);
    assert!(ppu.step(&mem));
    assert_eq!(ppu.scanline(), 0);
}

#[test]
fn test_visible_lines_render_test_pattern() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    run_lines(&mut ppu, &mem, SCREEN_HEIGHT);

    assert_eq!(ppu.pixel(0, 0), Some(Color::new(0, 0, 0)));
    assert_eq!(ppu.pixel(10, 3), Some(Color::new(13, 20, 6)));
    assert_eq!(ppu.pixel(255, 223), Some(Color::new(222, 254, 190)));
    assert_eq!(ppu.pixel(200, 100), Some(Color::new(44, 144, 200)));
}

#[test_case(0, 0, [0, 0, 0]; "origin")]
#[test_case(128, 0, [128, 0, 0]; "green wraps at 128")]
#[test_case(255, 1, [0, 254, 2]; "red wraps at 256")]
#[test_case(17, 200, [217, 34, 144]; "blue wraps past 128")]
fn test_pattern_values(x: usize, line: usize, rgb: [u8; 3]) {
    assert_eq!(Color::test_pattern(x, line).to_bytes(), rgb);
}

#[test]
fn test_blanking_lines_do_not_touch_framebuffer() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    run_lines(&mut ppu, &mem, SCREEN_HEIGHT);
    let visible = ppu.frame_buffer().to_vec();

    // Lines 224..=261 run without writing
    run_lines(&mut ppu, &mem, usize::from(LINES_PER_FRAME) - SCREEN_HEIGHT);
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.frame_buffer(), &visible[..]);
}

#[test]
fn test_framebuffer_is_reused_across_frames() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    run_lines(&mut ppu, &mem, usize::from(LINES_PER_FRAME));
    let first = ppu.frame_buffer().to_vec();
    let ptr = ppu.frame_buffer().as_ptr();
    run_lines(&mut ppu, &mem, usize::from(LINES_PER_FRAME));
    assert_eq!(ppu.frame_buffer().as_ptr(), ptr);
    assert_eq!(ppu.frame_buffer(), &first[..]);
    assert_eq!(ppu.frame_count(), 2);
}

#[test]
fn test_reset_returns_to_line_zero() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    run_lines(&mut ppu, &mem, 100);
    assert_eq!(ppu.scanline(), 100);
    assert!(ppu.is_visible_line());
    ppu.reset();
    assert_eq!(ppu.scanline(), 0);
}

#[test]
fn test_brightness_is_clamped() {
    let mut ppu = Ppu::new();
    ppu.set_brightness(7);
    assert_eq!(ppu.brightness(), 7);
    ppu.set_brightness(0xFF);
    assert_eq!(ppu.brightness(), 15);
}

#[test]
fn test_bg_mode_is_masked() {
    let mut ppu = Ppu::new();
    ppu.set_bg_mode(3);
    assert_eq!(ppu.bg_mode(), 3);
    ppu.set_bg_mode(0x09);
    assert_eq!(ppu.bg_mode(), 1);
}

#[test]
fn test_pattern_ignores_mode_and_brightness() {
    let mem = Memory::new();
    let mut plain = Ppu::new();
    let mut dimmed = Ppu::new();
    dimmed.set_brightness(0);
    dimmed.set_bg_mode(7);
    run_lines(&mut plain, &mem, SCREEN_HEIGHT);
    run_lines(&mut dimmed, &mem, SCREEN_HEIGHT);
    assert_eq!(dimmed.frame_buffer(), plain.frame_buffer());
}

#[test]
fn test_pixel_out_of_bounds() {
    let ppu = Ppu::new();
    assert_eq!(ppu.pixel(SCREEN_WIDTH, 0), None);
    assert_eq!(ppu.pixel(0, SCREEN_HEIGHT), None);
}

#[test]
fn test_palette_color_from_cgram() {
    let mut mem = Memory::new();
    // Entry 1: pure red (0x001F); entry 2: white (0x7FFF)
    mem.cgram[2] = 0x1F;
    mem.cgram[3] = 0x00;
    mem.cgram[4] = 0xFF;
    mem.cgram[5] = 0x7F;
    // Entry 255: pure blue (0x7C00)
    mem.cgram[510] = 0x00;
    mem.cgram[511] = 0x7C;

    assert_eq!(Ppu::palette_color(&mem, 0), Color::BLACK);
    assert_eq!(Ppu::palette_color(&mem, 1), Color::new(0xFF, 0, 0));
    assert_eq!(Ppu::palette_color(&mem, 2), Color::WHITE);
    assert_eq!(Ppu::palette_color(&mem, 255), Color::new(0, 0, 0xFF));
}

#[test]
fn test_ppm_header_and_payload() {
    let mem = Memory::new();
    let mut ppu = Ppu::new();
    run_lines(&mut ppu, &mem, usize::from(LINES_PER_FRAME));

    let ppm = framebuffer_to_ppm(ppu.frame_buffer());
    let header = b"P6\n256 224\n255\n";
    assert_eq!(&ppm[..header.len()], header);
    assert_eq!(ppm.len(), header.len() + FRAMEBUFFER_SIZE);
    assert_eq!(&ppm[header.len()..], ppu.frame_buffer());
}

#[test]
fn test_rgba32_conversion() {
    let frame = [0x12, 0x34, 0x56, 0xFF, 0x00, 0x80];
    assert_eq!(framebuffer_to_rgba32(&frame), vec![0xFF12_3456, 0xFFFF_0080]);
    assert_eq!(Color::WHITE.to_rgba32(), 0xFFFF_FFFF);
}

proptest! {
    #[test]
    fn test_scanline_stays_in_range(steps in 0usize..2_000) {
        let mem = Memory::new();
        let mut ppu = Ppu::new();
        let frames = run_lines(&mut ppu, &mem, steps);
        prop_assert!(ppu.scanline() < LINES_PER_FRAME);
        prop_assert_eq!(usize::from(ppu.scanline()), steps % 262);
        prop_assert_eq!(frames, steps / 262);
        prop_assert_eq!(ppu.frame_count(), (steps / 262) as u64);
    }
}
