use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use buscadis_import::classify_title;

/// Print the guessed category for each title.
pub(crate) fn run_classify(titles: &[String]) {
    for title in titles {
        let category = classify_title(title);
        log::info!(
            "{} {} {}",
            category.name().if_supports_color(Stdout, |t| t.cyan()),
            "\u{2190}".if_supports_color(Stdout, |t| t.dimmed()),
            title,
        );
    }
}
