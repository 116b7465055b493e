use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use buscadis_catalog::Category;

/// Print every category with its collection.
pub(crate) fn run_categories() {
    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    for category in Category::all() {
        log::info!(
            "  {:<12} {:<14} {}",
            category.name().if_supports_color(Stdout, |t| t.cyan()),
            category.display_name(),
            category.collection().if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
