//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

// Glacier (headers, account names): #7CB4C8
const GLACIER: (u8, u8, u8) = (124, 180, 200);

// Moss (deleted/success): #6B8F5E
const MOSS: (u8, u8, u8) = (107, 143, 94);

// Amber (warnings, dry-run intents): #C49A5C
const AMBER: (u8, u8, u8) = (196, 154, 92);

// Rust (errors/failures): #B87060
const RUST: (u8, u8, u8) = (184, 112, 96);

// Slate (secondary text): #5C6370
const SLATE: (u8, u8, u8) = (92, 99, 112);

pub fn glacier(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(GLACIER.0, GLACIER.1, GLACIER.2))
        .to_string()
}

pub fn moss(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MOSS.0, MOSS.1, MOSS.2))
        .to_string()
}

pub fn amber(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(AMBER.0, AMBER.1, AMBER.2))
        .to_string()
}

pub fn rust(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(RUST.0, RUST.1, RUST.2))
        .to_string()
}

pub fn slate(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(SLATE.0, SLATE.1, SLATE.2))
        .to_string()
}

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}
