//! End-to-end styling tests: class merging through theme resolution to
//! rendered surface output.

use chrono::NaiveDate;
use vulcan_tui::calendar::{Calendar, FixedClock, MonthView};
use vulcan_tui::widgets::{Button, ButtonVariant};
use vulcan_tui::{
    ClassList, Rect, Style, Surface, TextAttributes, Theme, ThemeManager, ThemeMode, Widget,
    merge_classes,
};

#[test]
fn class_merge_feeds_theme_resolution() {
    let theme = Theme::light();
    let classes = ClassList::new()
        .add("text-foreground")
        .add_if("text-destructive", true)
        .add_if("font-bold", true)
        .merge();
    assert_eq!(classes, "text-foreground text-destructive font-bold");

    let style = theme.resolve(&classes);
    assert_eq!(style.fg, Some(theme.destructive()), "later token wins");
    assert!(style.attributes.contains(TextAttributes::BOLD));
}

#[test]
fn merge_classes_handles_duplicates_across_fragments() {
    let merged = merge_classes(["btn btn-primary", "btn  rounded", "rounded"]);
    assert_eq!(merged, "btn btn-primary rounded");
}

#[test]
fn dark_and_light_render_different_sgr() {
    let render = |theme: &Theme| {
        let mut surface = Surface::new(8, 1);
        surface.clear(theme.base_style());
        surface.draw_text(0, 0, "hello", theme.resolve("text-foreground"));
        let mut buf = Vec::new();
        surface.write_ansi(&mut buf, true).expect("write succeeds");
        String::from_utf8(buf).expect("utf8")
    };
    assert_ne!(render(&Theme::light()), render(&Theme::dark()));
}

#[test]
fn theme_manager_drives_widget_rendering() {
    let mut manager = ThemeManager::new(ThemeMode::Light);
    let button = Button::new("Save").variant(ButtonVariant::Primary);

    let mut surface = Surface::new(12, 1);
    button.render(&mut surface, Rect::new(0, 0, 12, 1), manager.active());
    assert_eq!(surface.to_text(), "  Save\n");

    manager.toggle();
    assert_eq!(manager.active().name(), "dark");
    let mut dark_surface = Surface::new(12, 1);
    button.render(&mut dark_surface, Rect::new(0, 0, 12, 1), manager.active());
    // Same text, different palette.
    assert_eq!(dark_surface.to_text(), surface.to_text());
}

#[test]
fn calendar_renders_full_month_frame() {
    let today = NaiveDate::from_ymd_opt(2024, 2, 14).expect("valid date");
    let calendar = Calendar::with_clock(MonthView::new(2024, 1), &FixedClock(today));
    let mut surface = Surface::new(30, 8);
    calendar.render(&mut surface, Rect::new(0, 0, 28, 8), &Theme::light());
    let text = surface.to_text();

    assert!(text.contains("February 2024"));
    assert!(text.contains("Sun Mon Tue Wed Thu Fri Sat"));
    // First and last cells of the 42-day window.
    assert!(text.contains("28"));
    assert!(text.lines().last().is_some_and(|l| l.contains(" 9")));
}

#[test]
fn unknown_tokens_resolve_to_plain_style() {
    let theme = Theme::dark();
    assert_eq!(theme.resolve("not-a-token also-missing"), Style::NONE);
}
