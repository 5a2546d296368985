//! Loading spinner frames

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frames the spinner holds each glyph for
const FRAMES_PER_GLYPH: u64 = 4;

/// Spinner glyph for the given render frame counter
pub fn spinner_glyph(frame_count: u64) -> &'static str {
    let index = (frame_count / FRAMES_PER_GLYPH) % SPINNER_FRAMES.len() as u64;
    SPINNER_FRAMES[index as usize]
}
