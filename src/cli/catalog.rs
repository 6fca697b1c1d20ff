use console::style;
use postforge_core::{Category, Tone};

/// Handle the categories command
pub fn handle_categories_command() {
    println!("{}", style("Content categories").blue().bold());
    for category in Category::ALL {
        println!("  {:<12} {}", style(category.slug()).cyan(), category.label());
    }
}

/// Handle the tones command
pub fn handle_tones_command() {
    println!("{}", style("Tones").blue().bold());
    for tone in Tone::ALL {
        println!("  {}", tone.label());
    }
}
