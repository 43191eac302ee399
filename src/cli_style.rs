use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Attribute, Stylize};

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Magenta))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Magenta))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

pub mod colors {
    use crossterm::style::Color;

    pub const MAGENTA: Color = Color::Rgb {
        r: 255,
        g: 0,
        b: 255,
    };
    pub const PINK: Color = Color::Rgb {
        r: 255,
        g: 105,
        b: 180,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

const NOTE: &str = "♪";
const CHECK: &str = "✓";
const CROSS_MARK: &str = "✗";
const DIAMOND: &str = "◆";

pub fn print_banner() {
    let title = format!("{} Music Recommender Chatbot {}", NOTE, NOTE);
    let rule = "═".repeat(title.chars().count() + 4);
    println!();
    println!("{}", rule.as_str().with(colors::PINK));
    println!("  {}", title.with(colors::MAGENTA).bold());
    println!("{}", rule.as_str().with(colors::PINK));
    println!(
        "{}",
        "I can find songs for you based on mood, genre, artist, year, energy, etc.".with(colors::WHITE)
    );
    println!(
        "{}",
        "For example: 'Suggest a happy rock song from 2000' or 'find a slow tempo sad song'"
            .with(colors::DIM)
            .attribute(Attribute::Italic)
    );
    println!("{}", "Type 'exit' to quit.".with(colors::DIM));
}

pub fn print_success(message: &str) {
    println!(
        " {} {}",
        CHECK.with(colors::GREEN).bold(),
        message.with(colors::GREEN)
    );
}

pub fn print_error(message: &str) {
    println!(
        " {} {}",
        CROSS_MARK.with(colors::RED).bold(),
        message.with(colors::RED)
    );
}

pub fn print_warning(message: &str) {
    println!(
        " {} {}",
        "⚠".with(colors::ORANGE).bold(),
        message.with(colors::ORANGE)
    );
}

pub fn print_key_value(key: &str, value: &str) {
    println!(
        "  {} {} {}",
        DIAMOND.with(colors::MAGENTA),
        format!("{}:", key).with(colors::DIM),
        value.with(colors::WHITE)
    );
}

pub fn print_song(song: &str, artist: &str) {
    println!(
        "  {} '{}' by {}",
        "-".with(colors::PINK),
        song.with(colors::WHITE).bold(),
        artist.with(colors::GREEN)
    );
}
