//! `showcase` — vulcan_tui demonstration binary
//!
//! Renders one of the demo pages (widget gallery, calendar & pickers,
//! theme palette, login form) to stdout as a static frame.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin showcase
//! cargo run --bin showcase -- --page calendar --month 2024-02
//! cargo run --bin showcase -- --dark --no-color
//! ```

use std::io::{self, Write};

use vulcan_tui::calendar::{Calendar, FixedClock, GridOptions, MonthView, SystemClock};
use vulcan_tui::widgets::{
    Accordion, AccordionItem, AccordionKind, AlertDialog, Button, ButtonSize, ButtonVariant,
    DatePicker, Form, FormField, MinuteStep, Select, SelectOption, Tabs, TextInput, Time,
    TimePicker, Tooltip,
};
use vulcan_tui::{
    Clock, LogLevel, Rect, Router, Surface, Theme, ThemeManager, ThemeMode, Widget,
    set_log_callback,
};

const HELP_TEXT: &str = "showcase - vulcan_tui demonstration binary

USAGE:
    showcase [OPTIONS]

OPTIONS:
    -h, --help          Print this help message and exit
    --page <NAME>       Page to render: components, calendar, theme,
                        login (default: components)
    --dark              Force the dark theme
    --light             Force the light theme
    --width <N>         Frame width in cells (default: 72)
    --month <YYYY-MM>   Month shown on the calendar page
    --no-color          Plain text output (also honors NO_COLOR)
    --verbose           Echo toolkit log messages to stderr

EXAMPLES:
    showcase                           # Widget gallery, system theme
    showcase --page calendar --dark
    showcase --page theme --no-color
";

/// Configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
struct Config {
    page: String,
    mode: ThemeMode,
    width: u32,
    month: Option<MonthView>,
    color: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page: "components".to_string(),
            mode: ThemeMode::System,
            width: 72,
            month: None,
            color: std::env::var_os("NO_COLOR").is_none(),
            verbose: false,
        }
    }
}

fn parse_month(value: &str) -> Option<MonthView> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: i32 = month.parse::<i32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(MonthView::new(year, month - 1))
}

fn parse_args() -> Result<Config, String> {
    let mut config = Config::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{HELP_TEXT}");
                std::process::exit(0);
            }
            "--page" => {
                config.page = args.next().ok_or("--page requires a value")?;
            }
            "--dark" => config.mode = ThemeMode::Dark,
            "--light" => config.mode = ThemeMode::Light,
            "--width" => {
                let value = args.next().ok_or("--width requires a value")?;
                config.width = value
                    .parse()
                    .map_err(|_| format!("invalid width: {value}"))?;
            }
            "--month" => {
                let value = args.next().ok_or("--month requires a value")?;
                config.month =
                    Some(parse_month(&value).ok_or(format!("invalid month: {value}"))?);
            }
            "--no-color" => config.color = false,
            "--verbose" => config.verbose = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(config)
}

fn section(surface: &mut Surface, y: i32, title: &str, theme: &Theme) -> i32 {
    surface.draw_text(1, y, title, theme.resolve("text-accent font-bold"));
    y + 1
}

fn components_page(surface: &mut Surface, theme: &Theme) {
    let width = surface.width();
    let mut y = section(surface, 1, "Buttons", theme);
    let mut x = 1;
    for (label, variant) in [
        ("Default", ButtonVariant::Default),
        ("Secondary", ButtonVariant::Secondary),
        ("Outline", ButtonVariant::Outline),
        ("Ghost", ButtonVariant::Ghost),
        ("Link", ButtonVariant::Link),
        ("Delete", ButtonVariant::Destructive),
    ] {
        let button = Button::new(label).variant(variant).size(ButtonSize::Sm);
        let w = button.width();
        button.render(surface, Rect::new(x, y, w, 1), theme);
        x += w as i32 + 1;
    }

    y = section(surface, y + 2, "Tabs", theme);
    let mut tabs = Tabs::new("overview")
        .tab("overview", "Overview")
        .tab("usage", "Usage")
        .tab_with("api", "API", true);
    tabs.select("usage");
    tabs.render(surface, Rect::new(1, y, width - 2, 1), theme);

    y = section(surface, y + 2, "Accordion", theme);
    let accordion = Accordion::new(AccordionKind::Single)
        .item(AccordionItem::new(
            "what",
            "What is vulcan_tui?",
            vec!["A terminal widget toolkit.".to_string()],
        ))
        .item(AccordionItem::new(
            "why",
            "Why class tokens?",
            vec!["Themes resolve them to styles.".to_string()],
        ))
        .default_open(["what"]);
    accordion.render(surface, Rect::new(1, y, width - 2, 5), theme);

    y = section(surface, y + 5, "Select", theme);
    let mut select = Select::new("Pick a flavor")
        .option(SelectOption::new("sweet", "Sweet"))
        .option(SelectOption::new("sour", "Sour"))
        .option(SelectOption::disabled("umami", "Umami (soon)"));
    select.open();
    select.render(surface, Rect::new(1, y, 24, 1), theme);

    y = section(surface, y + 7, "Input", theme);
    let input = TextInput::new("Search widgets...");
    input.render(surface, Rect::new(1, y, 30, 1), theme);

    y = section(surface, y + 2, "Tooltip", theme);
    let anchor = Rect::new(1, y + 1, 8, 1);
    surface.draw_text(anchor.x, anchor.y, "[hover me]", theme.resolve("text-foreground"));
    let mut tooltip = Tooltip::new("Keyboard first");
    tooltip.show();
    let (rect, _) = tooltip.position(anchor, surface.area());
    tooltip.render(surface, rect, theme);

    let mut alert = AlertDialog::new("Discard draft?", "Unsaved changes will be lost.")
        .labels("Keep editing", "Discard");
    alert.open();
    let overlay = Rect::new(0, y + 3, width, 7);
    alert.render(surface, overlay, theme);
}

fn calendar_page(surface: &mut Surface, theme: &Theme, month: Option<MonthView>) {
    // A pinned clock keeps the sample frame reproducible.
    let clock = FixedClock(
        month
            .map_or_else(|| SystemClock.today(), |m| m.first_day()),
    );
    let view = month.unwrap_or_else(|| MonthView::containing(clock.today()));

    let mut y = section(surface, 1, "Calendar", theme);
    let calendar = Calendar::with_clock(view, &clock).with_options(
        GridOptions::default().with_selection(clock.today().into()),
    );
    calendar.render(
        surface,
        Rect::new(1, y, Calendar::preferred_width(), 8),
        theme,
    );

    y = section(surface, y + 9, "Date picker", theme);
    let mut date_picker = DatePicker::with_clock("Select date", &clock);
    date_picker.set_date(clock.today());
    date_picker.render(surface, Rect::new(1, y, 16, 1), theme);

    y = section(surface, y + 2, "Time picker", theme);
    let mut time_picker = TimePicker::new("Select time").minute_step(MinuteStep::Fifteen);
    if let Ok(time) = Time::new(9, 30) {
        time_picker.set_time(time);
    }
    time_picker.render(surface, Rect::new(1, y, 16, 1), theme);
}

fn theme_page(surface: &mut Surface, theme: &Theme) {
    let mut y = section(surface, 1, &format!("Theme: {}", theme.name()), theme);
    let swatches = [
        ("background", theme.background()),
        ("surface", theme.surface()),
        ("foreground", theme.foreground()),
        ("muted", theme.muted()),
        ("border", theme.border()),
        ("accent", theme.accent()),
        ("destructive", theme.destructive()),
        ("ring", theme.ring()),
    ];
    for (name, color) in swatches {
        let chip = vulcan_tui::Style::bg(color);
        surface.fill_rect(Rect::new(1, y, 6, 1), ' ', chip);
        surface.draw_text(9, y, name, theme.resolve("text-foreground"));
        surface.draw_text(24, y, &color.to_string(), theme.resolve("text-muted"));
        y += 1;
    }

    y = section(surface, y + 1, "Class resolution", theme);
    for classes in ["text-muted", "text-accent font-bold", "bg-accent text-accent-foreground"] {
        let style = theme.resolve(classes);
        surface.draw_text(1, y, classes, style);
        y += 1;
    }
}

fn login_page(surface: &mut Surface, theme: &Theme) {
    let mut y = section(surface, 1, "Sign in", theme);
    let mut form = Form::new()
        .field(
            FormField::new("email", "Email")
                .required()
                .hint("you@example.com")
                .validator(|v| {
                    if v.contains('@') {
                        Ok(())
                    } else {
                        Err("Enter a valid email address".to_string())
                    }
                }),
        )
        .field(
            FormField::new("password", "Password")
                .required()
                .with_input(TextInput::new("Password").masked('•')),
        );
    // A pre-filled invalid value, to show the error rendering.
    if let Some(field) = form.get_mut("email") {
        field.input_mut().insert_str("not-an-address");
    }
    form.validate();
    for field in form.fields() {
        field.render(surface, Rect::new(1, y, surface.width() - 2, 3), theme);
        y += 4;
    }
    let submit = Button::new("Sign in").variant(ButtonVariant::Primary);
    submit.render(surface, Rect::new(1, y, submit.width(), 1), theme);
}

fn run() -> Result<(), String> {
    let config = parse_args()?;
    if config.verbose {
        set_log_callback(|level, message| {
            let tag = match level {
                LogLevel::Debug => "debug",
                LogLevel::Info => "info",
                LogLevel::Warn => "warn",
                LogLevel::Error => "error",
            };
            eprintln!("[{tag}] {message}");
        });
    }

    let manager = ThemeManager::new(config.mode);
    let theme = manager.active();

    let router = Router::new("/")
        .route("/", "Components")
        .route("/calendar", "Calendar & pickers")
        .route("/theme", "Theme palette")
        .route("/login", "Sign in");

    let (path, height) = match config.page.as_str() {
        "components" => ("/", 36),
        "calendar" => ("/calendar", 16),
        "theme" => ("/theme", 16),
        "login" => ("/login", 12),
        other => return Err(format!("unknown page: {other} (see --help)")),
    };
    let mut nav = router;
    nav.navigate(path).map_err(|e| e.to_string())?;

    let mut surface = Surface::new(config.width, height);
    surface.clear(theme.base_style());
    let title = format!("vulcan_tui — {}", nav.current().title);
    surface.draw_text(1, 0, &title, theme.resolve("text-foreground font-bold underline"));

    match config.page.as_str() {
        "calendar" => calendar_page(&mut surface, theme, config.month),
        "theme" => theme_page(&mut surface, theme),
        "login" => login_page(&mut surface, theme),
        _ => components_page(&mut surface, theme),
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    surface
        .write_ansi(&mut handle, config.color)
        .map_err(|e| e.to_string())?;
    handle.flush().map_err(|e| e.to_string())?;
    Ok(())
}

fn main() {
    if let Err(message) = run() {
        eprintln!("showcase: {message}");
        std::process::exit(2);
    }
}
