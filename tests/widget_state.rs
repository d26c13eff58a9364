//! Cross-widget integration tests: keyboard protocols and composed
//! state flows that span more than one module.

use chrono::NaiveDate;
use vulcan_tui::calendar::{FixedClock, GridOptions};
use vulcan_tui::keys::KeyCode;
use vulcan_tui::widgets::{
    Accordion, AccordionItem, AccordionKind, AlertAction, AlertDialog, DatePicker, Dialog, Form,
    FormField, Select, SelectOption, Tabs, TextInput, Time, TimePicker,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn select_full_keyboard_session() {
    let mut select = Select::new("Choose")
        .option(SelectOption::new("s", "Small"))
        .option(SelectOption::new("m", "Medium"))
        .option(SelectOption::disabled("l", "Large"));

    // Closed: Down opens without moving.
    assert!(select.handle_key(KeyCode::Down.into()));
    assert!(select.is_open());
    assert_eq!(select.highlighted(), 0);

    // Navigate, abort with Esc: value untouched.
    select.handle_key(KeyCode::Down.into());
    select.handle_key(KeyCode::Esc.into());
    assert_eq!(select.value(), None);

    // Reopen and commit.
    select.handle_key(KeyCode::Enter.into());
    select.handle_key(KeyCode::Down.into());
    select.handle_key(KeyCode::Enter.into());
    assert_eq!(select.value(), Some("m"));
    assert!(!select.is_open());

    // Reopening highlights the committed value.
    select.open();
    assert_eq!(select.highlighted(), 1);
}

#[test]
fn dialog_and_alert_dismissal_contract() {
    let mut dialog = Dialog::new("Prefs", "Tweak things");
    dialog.open();
    assert!(dialog.handle_key(KeyCode::Esc.into()));
    assert!(!dialog.is_open());

    let mut alert = AlertDialog::new("Sure?", "No undo").labels("Back", "Do it");
    alert.open();
    assert_eq!(alert.handle_key(KeyCode::Esc.into()), None);
    assert!(alert.is_open(), "alerts require an explicit action");
    alert.handle_key(KeyCode::Right.into());
    assert_eq!(alert.handle_key(KeyCode::Enter.into()), Some(AlertAction::Confirm));
    assert!(!alert.is_open());
}

#[test]
fn tabs_and_accordion_compose() {
    let mut tabs = Tabs::new("general").tab("general", "General").tab("advanced", "Advanced");
    let mut accordion = Accordion::new(AccordionKind::Multiple)
        .item(AccordionItem::new("net", "Network", vec![]))
        .item(AccordionItem::new("gfx", "Graphics", vec![]));

    tabs.handle_key(KeyCode::Right.into());
    assert_eq!(tabs.active(), "advanced");

    accordion.toggle("net");
    accordion.toggle("gfx");
    accordion.toggle("net");
    assert_eq!(accordion.open_values(), ["gfx".to_string()]);
}

#[test]
fn date_picker_respects_calendar_bounds() {
    let clock = FixedClock(date(2024, 3, 15));
    let mut picker = DatePicker::with_clock("When?", &clock).format("yyyy-MM-dd");
    *picker.calendar_mut().options_mut() = GridOptions::default()
        .with_bounds(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));

    picker.open();
    assert!(!picker.set_date(date(2024, 3, 25)), "outside max bound");
    assert!(picker.is_open());
    assert!(picker.set_date(date(2024, 3, 12)));
    assert_eq!(picker.display(), "2024-03-12");
}

#[test]
fn login_form_flow() {
    let mut form = Form::new()
        .field(
            FormField::new("email", "Email").required().validator(|v| {
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
                .with_input(TextInput::new("Password").masked('*')),
        );

    assert!(!form.validate());
    assert_eq!(form.error_fields().count(), 2);

    for (name, text) in [("email", "user@example.com"), ("password", "hunter2")] {
        let field = form.get_mut(name).expect("field exists");
        for c in text.chars() {
            field.input_mut().handle_key(KeyCode::Char(c).into());
        }
    }
    assert!(form.validate());
    assert_eq!(form.error_fields().count(), 0);
    let password = form.get("password").expect("field exists");
    assert_eq!(password.input().display_value(), "*******");
    assert_eq!(password.value(), "hunter2");
}

#[test]
fn time_picker_option_flow() {
    let mut picker = TimePicker::new("When")
        .minute_step(vulcan_tui::widgets::MinuteStep::from_minutes(10).expect("valid step"));

    picker.handle_key(KeyCode::Enter.into());
    assert!(picker.is_open());
    picker.set_hour(3);
    picker.set_minute(50);
    picker.set_period(vulcan_tui::widgets::Period::Pm);
    picker.handle_key(KeyCode::Esc.into());

    assert!(!picker.is_open());
    assert_eq!(picker.value(), Some(Time::new(15, 50).expect("valid time")));
    assert_eq!(picker.display(), "03:50 PM");
    assert_eq!(picker.minute_options().len(), 6);
}

#[test]
fn text_input_editing_session() {
    let mut input = TextInput::new("Name");
    for c in "wrold".chars() {
        input.handle_key(KeyCode::Char(c).into());
    }
    // Fix the typo: wrold -> world.
    for _ in 0..4 {
        input.handle_key(KeyCode::Left.into());
    }
    input.handle_key(KeyCode::Delete.into());
    input.handle_key(KeyCode::Right.into());
    input.handle_key(KeyCode::Char('r').into());
    assert_eq!(input.value(), "world");
    input.handle_key(KeyCode::Home.into());
    input.handle_key(KeyCode::Backspace.into());
    assert_eq!(input.value(), "world", "backspace at start is a no-op");
}
