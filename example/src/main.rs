mod app_state;

use chrono::Local;
use tessera_pickers::{
    HeaderError,
    datetime_header::{DateTimePickerHeaderArgsBuilder, date_time_picker_header},
    formatter::ChronoFormatter,
    preview::preview,
    theme::{LayoutDirection, PickerTheme},
    toolbar::{ButtonRole, Toolbar},
    view::{MeridiemMode, OpenView},
};

use crate::app_state::AppState;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("warn,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

fn header(
    app: &AppState,
    formatter: &ChronoFormatter,
    theme: &PickerTheme,
    show_seconds: bool,
) -> Result<Toolbar, HeaderError> {
    let (date, open_view, meridiem_mode) = {
        let picker = app.picker.read();
        (picker.date, picker.open_view, picker.meridiem_mode)
    };
    let args = DateTimePickerHeaderArgsBuilder::default()
        .date(date)
        .open_view(open_view)
        .meridiem_mode(meridiem_mode)
        .show_seconds(show_seconds)
        .on_open_view_change(app.on_open_view_change())
        .on_meridiem_change(app.on_meridiem_change())
        .build()?;
    Ok(date_time_picker_header(&args, formatter, theme))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let app = AppState::new(Local::now().naive_local());
    let formatter = ChronoFormatter::default();
    let ltr = PickerTheme::default();

    println!("{}", preview(&header(&app, &formatter, &ltr, false)?));

    let clicks = [
        ButtonRole::Field(OpenView::Hour),
        ButtonRole::Meridiem(MeridiemMode::Am),
        ButtonRole::Meridiem(MeridiemMode::Pm),
        ButtonRole::Field(OpenView::Minutes),
        ButtonRole::Field(OpenView::Seconds),
    ];
    for role in clicks {
        let toolbar = header(&app, &formatter, &ltr, true)?;
        if !toolbar.click(role) {
            tracing::warn!(?role, "nothing to click");
        }
        println!("{}", preview(&header(&app, &formatter, &ltr, true)?));
    }

    let rtl = PickerTheme::with_direction(LayoutDirection::Rtl);
    println!("{}", preview(&header(&app, &formatter, &rtl, true)?));
    Ok(())
}
