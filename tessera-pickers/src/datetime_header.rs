//! Header of the date/time picker.
//!
//! ## Usage
//!
//! Call [`date_time_picker_header`] on every state change of the host picker
//! and render the returned [`Toolbar`]. The header holds no state: clicking
//! a field or an AM/PM toggle only reports the intent through the callbacks
//! in [`DateTimePickerHeaderArgs`].

use derive_builder::Builder;
use smallvec::smallvec;

use crate::{
    Dp,
    alignment::{CrossAxisAlignment, FlexDirection, MainAxisAlignment},
    dp::EdgeInsets,
    error::HeaderError,
    formatter::HeaderFormatter,
    prop::CallbackWith,
    theme::{PickerTheme, TextVariant},
    toolbar::{
        ButtonRole, ButtonStyle, Container, ContainerStyle, Cursor, Toolbar, ToolbarButton,
        ToolbarStyle,
    },
    view::{MeridiemMode, OpenView},
};

const HEADER_HEIGHT: Dp = Dp(65.0);
const TOOLBAR_HORIZONTAL_PADDING: Dp = Dp(16.0);
const SEPARATOR_MARGIN: EdgeInsets = EdgeInsets::new(Dp(0.0), Dp(4.0), Dp(0.0), Dp(2.0));
const AM_PM_BESIDE_MARGIN: EdgeInsets = EdgeInsets::horizontal(Dp(10.0), Dp(-10.0));
const AM_PM_STACKED_MARGIN: EdgeInsets = EdgeInsets::horizontal(Dp(3.0), Dp(0.0));

/// Configuration for [`date_time_picker_header`].
///
/// `date`, `open_view`, `meridiem_mode` and both callbacks are required;
/// building without them fails with [`HeaderError::InvalidProps`].
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(pattern = "owned", build_fn(error = "HeaderError"))]
pub struct DateTimePickerHeaderArgs<D> {
    /// Date shown in the header.
    pub date: D,
    /// View whose field is highlighted.
    pub open_view: OpenView,
    /// Active half of the day.
    pub meridiem_mode: MeridiemMode,
    /// Whether the AM/PM toggle is shown and the hour uses a 12-hour clock.
    #[builder(default = "true")]
    pub show_am_pm: bool,
    /// Whether the seconds field is shown.
    #[builder(default = "false")]
    pub show_seconds: bool,
    /// Invoked with the view a field click asks to open.
    #[builder(setter(into))]
    pub on_open_view_change: CallbackWith<OpenView>,
    /// Invoked with the mode an AM/PM click asks for.
    #[builder(setter(into))]
    pub on_meridiem_change: CallbackWith<MeridiemMode>,
}

/// Layout of the time region, derived from the display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeHeaderVariant {
    /// Clock fields and AM/PM side by side, right aligned.
    Row,
    /// Clock fields side by side, left aligned, no AM/PM.
    RowWithoutAmPm,
    /// AM/PM stacked above the clock fields, right aligned.
    Stacked,
    /// Clock fields only, bottom aligned, left aligned.
    StackedWithoutAmPm,
}

impl TimeHeaderVariant {
    /// Selects the variant for the given flags.
    pub fn from_flags(show_seconds: bool, show_am_pm: bool) -> Self {
        match (show_seconds, show_am_pm) {
            (false, true) => TimeHeaderVariant::Row,
            (false, false) => TimeHeaderVariant::RowWithoutAmPm,
            (true, true) => TimeHeaderVariant::Stacked,
            (true, false) => TimeHeaderVariant::StackedWithoutAmPm,
        }
    }

    /// Container style of the time region.
    pub fn style(self) -> ContainerStyle {
        let (direction, main_axis_alignment) = match self {
            TimeHeaderVariant::Row => (FlexDirection::Row, MainAxisAlignment::End),
            TimeHeaderVariant::RowWithoutAmPm => (FlexDirection::Row, MainAxisAlignment::Start),
            TimeHeaderVariant::Stacked => (FlexDirection::ColumnReverse, MainAxisAlignment::End),
            TimeHeaderVariant::StackedWithoutAmPm => {
                (FlexDirection::ColumnReverse, MainAxisAlignment::Start)
            }
        };
        ContainerStyle {
            direction,
            main_axis_alignment,
            cross_axis_alignment: CrossAxisAlignment::End,
            height: Some(HEADER_HEIGHT),
            ..ContainerStyle::default()
        }
    }
}

/// Placement of the AM/PM toggles relative to the clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmPmVariant {
    /// Next to the clock, pulled towards the toolbar edge.
    Beside,
    /// Above the clock, labels inline with a ` / ` divider.
    Stacked,
}

impl AmPmVariant {
    /// Selects the variant for the given seconds flag.
    pub fn from_flags(show_seconds: bool) -> Self {
        if show_seconds {
            AmPmVariant::Stacked
        } else {
            AmPmVariant::Beside
        }
    }

    /// Container style of the AM/PM group.
    pub fn style(self) -> ContainerStyle {
        match self {
            AmPmVariant::Beside => ContainerStyle {
                direction: FlexDirection::Column,
                margin: AM_PM_BESIDE_MARGIN,
                ..ContainerStyle::default()
            },
            AmPmVariant::Stacked => ContainerStyle {
                direction: FlexDirection::Row,
                align_self: Some(CrossAxisAlignment::Start),
                margin: AM_PM_STACKED_MARGIN,
                ..ContainerStyle::default()
            },
        }
    }

    fn label_style(self, theme: &PickerTheme) -> ButtonStyle {
        ButtonStyle {
            font_size: Some(theme.typography.meridiem.font_size),
            inline: self == AmPmVariant::Stacked,
            ..ButtonStyle::default()
        }
    }
}

fn toolbar_style() -> ToolbarStyle {
    ToolbarStyle {
        container: ContainerStyle {
            direction: FlexDirection::Row,
            main_axis_alignment: MainAxisAlignment::SpaceAround,
            cross_axis_alignment: CrossAxisAlignment::Center,
            ..ContainerStyle::default()
        },
        padding: EdgeInsets::horizontal(TOOLBAR_HORIZONTAL_PADDING, TOOLBAR_HORIZONTAL_PADDING),
    }
}

fn date_header_style() -> ContainerStyle {
    ContainerStyle {
        direction: FlexDirection::Column,
        height: Some(HEADER_HEIGHT),
        ..ContainerStyle::default()
    }
}

fn hour_minute_style(theme: &PickerTheme) -> ContainerStyle {
    let direction = if theme.direction.is_rtl() {
        FlexDirection::RowReverse
    } else {
        FlexDirection::Row
    };
    ContainerStyle {
        direction,
        main_axis_alignment: MainAxisAlignment::End,
        cross_axis_alignment: CrossAxisAlignment::End,
        ..ContainerStyle::default()
    }
}

fn clock_separator(variant: TextVariant) -> ToolbarButton {
    ToolbarButton::label_only(ButtonRole::Separator, ":", variant).with_style(ButtonStyle {
        margin: SEPARATOR_MARGIN,
        cursor: Cursor::Default,
        ..ButtonStyle::default()
    })
}

/// # date_time_picker_header
///
/// Lay out the header of a date/time picker.
///
/// ## Parameters
///
/// - `args` — date, view state and intent callbacks; see
///   [`DateTimePickerHeaderArgs`].
/// - `formatter` — produces every label from `args.date`.
/// - `theme` — supplies the layout direction.
///
/// ## Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tessera_pickers::{
///     datetime_header::{DateTimePickerHeaderArgsBuilder, date_time_picker_header},
///     formatter::ChronoFormatter,
///     theme::PickerTheme,
///     toolbar::ButtonRole,
///     view::{MeridiemMode, OpenView},
/// };
///
/// let date = NaiveDate::from_ymd_opt(2020, 3, 14)
///     .and_then(|d| d.and_hms_opt(15, 45, 0))
///     .unwrap();
/// let args = DateTimePickerHeaderArgsBuilder::default()
///     .date(date)
///     .open_view(OpenView::Minutes)
///     .meridiem_mode(MeridiemMode::Pm)
///     .show_seconds(true)
///     .on_open_view_change(|_: OpenView| {})
///     .on_meridiem_change(|_: MeridiemMode| {})
///     .build()
///     .unwrap();
///
/// let formatter = ChronoFormatter::default();
/// let toolbar = date_time_picker_header(&args, &formatter, &PickerTheme::default());
/// assert_eq!(toolbar.count(ButtonRole::Separator), 2);
/// assert_eq!(toolbar.find(ButtonRole::Field(OpenView::Hour)).unwrap().label(), "03");
/// ```
pub fn date_time_picker_header<F: HeaderFormatter>(
    args: &DateTimePickerHeaderArgs<F::Date>,
    formatter: &F,
    theme: &PickerTheme,
) -> Toolbar {
    let show_seconds = args.show_seconds;
    let show_am_pm = args.show_am_pm;
    tracing::debug!(
        open_view = %args.open_view,
        meridiem_mode = %args.meridiem_mode,
        show_seconds,
        show_am_pm,
        rtl = theme.direction.is_rtl(),
        "laying out date time picker header"
    );
    if args.open_view == OpenView::Seconds && !show_seconds {
        tracing::warn!("open view is `seconds` but the seconds field is hidden");
    }

    let field = |view: OpenView, label: String, variant: TextVariant| {
        ToolbarButton::new(
            ButtonRole::Field(view),
            label,
            variant,
            args.open_view == view,
            args.on_open_view_change.bind(view),
        )
    };

    let mut date_header = Container::new(date_header_style());
    date_header.push_button(field(
        OpenView::Year,
        formatter.year_text(&args.date),
        TextVariant::Subheading,
    ));
    date_header.push_button(field(
        OpenView::Date,
        formatter.date_text(&args.date),
        TextVariant::Display1,
    ));

    let clock_variant = if show_seconds {
        TextVariant::Display1
    } else {
        TextVariant::Display2
    };
    let mut hour_minute = Container::new(hour_minute_style(theme));
    hour_minute.push_button(field(
        OpenView::Hour,
        formatter.hour_text(&args.date, show_am_pm),
        clock_variant,
    ));
    hour_minute.push_button(clock_separator(clock_variant));
    hour_minute.push_button(field(
        OpenView::Minutes,
        formatter.minute_text(&args.date),
        clock_variant,
    ));
    if show_seconds {
        hour_minute.push_button(clock_separator(TextVariant::Display1));
        hour_minute.push_button(field(
            OpenView::Seconds,
            formatter.second_text(&args.date),
            TextVariant::Display1,
        ));
    }

    let mut time_header =
        Container::new(TimeHeaderVariant::from_flags(show_seconds, show_am_pm).style());
    time_header.push_container(hour_minute);
    if show_am_pm {
        time_header.push_container(am_pm_selection(args, formatter, theme));
    }

    Toolbar {
        style: toolbar_style(),
        regions: smallvec![date_header, time_header],
    }
}

fn am_pm_selection<F: HeaderFormatter>(
    args: &DateTimePickerHeaderArgs<F::Date>,
    formatter: &F,
    theme: &PickerTheme,
) -> Container {
    let variant = AmPmVariant::from_flags(args.show_seconds);
    let label_style = variant.label_style(theme);
    let toggle = |mode: MeridiemMode| {
        ToolbarButton::new(
            ButtonRole::Meridiem(mode),
            formatter.meridiem_text(mode),
            TextVariant::Subheading,
            args.meridiem_mode == mode,
            args.on_meridiem_change.bind(mode),
        )
        .with_style(label_style)
    };

    let mut selection = Container::new(variant.style());
    selection.push_button(toggle(MeridiemMode::Am));
    if variant == AmPmVariant::Stacked {
        selection.push_button(
            ToolbarButton::label_only(ButtonRole::Divider, " / ", TextVariant::Subheading)
                .with_style(ButtonStyle {
                    cursor: Cursor::Default,
                    ..label_style
                }),
        );
    }
    selection.push_button(toggle(MeridiemMode::Pm));
    selection
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};
    use parking_lot::Mutex;

    use super::*;
    use crate::{
        formatter::ChronoFormatter,
        preview::TextRenderer,
        theme::LayoutDirection,
        toolbar::ToolbarNode,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Intent {
        Open(OpenView),
        Meridiem(MeridiemMode),
    }

    struct Harness {
        intents: Arc<Mutex<Vec<Intent>>>,
        args: DateTimePickerHeaderArgs<NaiveDateTime>,
    }

    type ArgsBuilder = DateTimePickerHeaderArgsBuilder<NaiveDateTime>;

    impl Harness {
        fn new(open_view: OpenView, meridiem_mode: MeridiemMode) -> Self {
            Self::configured(open_view, meridiem_mode, |builder| builder)
        }

        fn configured(
            open_view: OpenView,
            meridiem_mode: MeridiemMode,
            configure: impl FnOnce(ArgsBuilder) -> ArgsBuilder,
        ) -> Self {
            let intents = Arc::new(Mutex::new(Vec::new()));
            let opened = Arc::clone(&intents);
            let toggled = Arc::clone(&intents);
            let builder = DateTimePickerHeaderArgsBuilder::default()
                .date(pi_day())
                .open_view(open_view)
                .meridiem_mode(meridiem_mode)
                .on_open_view_change(move |view: OpenView| opened.lock().push(Intent::Open(view)))
                .on_meridiem_change(move |mode: MeridiemMode| {
                    toggled.lock().push(Intent::Meridiem(mode))
                });
            let args = configure(builder).build().unwrap();
            Self { intents, args }
        }

        fn layout(&self, direction: LayoutDirection) -> Toolbar {
            date_time_picker_header(
                &self.args,
                &ChronoFormatter::default(),
                &PickerTheme::with_direction(direction),
            )
        }

        fn intents(&self) -> Vec<Intent> {
            self.intents.lock().clone()
        }
    }

    fn pi_day() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 26, 53))
            .unwrap()
    }

    fn selected(toolbar: &Toolbar, role: ButtonRole) -> bool {
        toolbar.find(role).is_some_and(ToolbarButton::is_selected)
    }

    #[test]
    fn exactly_the_open_view_is_highlighted() {
        for view in OpenView::ALL {
            let toolbar = Harness::configured(view, MeridiemMode::Am, |b| b.show_seconds(true))
                .layout(LayoutDirection::Ltr);
            assert_eq!(toolbar.selected_fields(), vec![view], "open view {view}");
        }
    }

    #[test]
    fn field_clicks_emit_their_view_regardless_of_state() {
        for current in OpenView::ALL {
            let harness =
                Harness::configured(current, MeridiemMode::Pm, |b| b.show_seconds(true));
            let toolbar = harness.layout(LayoutDirection::Ltr);
            for view in OpenView::ALL {
                assert!(toolbar.click(ButtonRole::Field(view)));
            }
            let expected: Vec<Intent> = OpenView::ALL.into_iter().map(Intent::Open).collect();
            assert_eq!(harness.intents(), expected);
        }
    }

    #[test]
    fn hour_scenario_without_seconds() {
        let toolbar = Harness::new(OpenView::Hour, MeridiemMode::Am).layout(LayoutDirection::Ltr);

        assert!(selected(&toolbar, ButtonRole::Field(OpenView::Hour)));
        let minute = toolbar.find(ButtonRole::Field(OpenView::Minutes)).unwrap();
        assert!(!minute.is_selected());
        assert_eq!(minute.label(), "26");
        assert!(toolbar.find(ButtonRole::Field(OpenView::Seconds)).is_none());
        assert_eq!(toolbar.count(ButtonRole::Separator), 1);
        assert!(selected(&toolbar, ButtonRole::Meridiem(MeridiemMode::Am)));
        assert!(!selected(&toolbar, ButtonRole::Meridiem(MeridiemMode::Pm)));
        assert_eq!(toolbar.count(ButtonRole::Divider), 0);

        let year = toolbar.find(ButtonRole::Field(OpenView::Year)).unwrap();
        assert_eq!(year.label(), "2020");
        assert_eq!(year.variant(), TextVariant::Subheading);
        let date = toolbar.find(ButtonRole::Field(OpenView::Date)).unwrap();
        assert_eq!(date.label(), "Mar 14");
        assert_eq!(date.variant(), TextVariant::Display1);
        assert_eq!(
            toolbar
                .find(ButtonRole::Field(OpenView::Hour))
                .map(ToolbarButton::variant),
            Some(TextVariant::Display2)
        );
    }

    #[test]
    fn hour_scenario_with_seconds() {
        let toolbar =
            Harness::configured(OpenView::Hour, MeridiemMode::Am, |b| b.show_seconds(true))
                .layout(LayoutDirection::Ltr);

        assert_eq!(toolbar.count(ButtonRole::Separator), 2);
        let seconds = toolbar.find(ButtonRole::Field(OpenView::Seconds)).unwrap();
        assert_eq!(seconds.label(), "53");
        assert!(!seconds.is_selected());
        assert_eq!(toolbar.count(ButtonRole::Divider), 1);
        assert!(
            toolbar
                .buttons()
                .iter()
                .filter(|b| b.role() != ButtonRole::Field(OpenView::Year))
                .filter(|b| !matches!(b.role(), ButtonRole::Meridiem(_) | ButtonRole::Divider))
                .all(|b| b.variant() == TextVariant::Display1)
        );
        assert_eq!(
            toolbar.regions[1].style.direction,
            FlexDirection::ColumnReverse
        );
    }

    #[test]
    fn am_pm_region_follows_the_flag_only() {
        for mode in [MeridiemMode::Am, MeridiemMode::Pm] {
            let harness = Harness::configured(OpenView::Date, mode, |b| b.show_am_pm(false));
            let toolbar = harness.layout(LayoutDirection::Ltr);
            assert!(toolbar.find(ButtonRole::Meridiem(MeridiemMode::Am)).is_none());
            assert!(toolbar.find(ButtonRole::Meridiem(MeridiemMode::Pm)).is_none());
            assert_eq!(toolbar.regions[1].containers().count(), 1);
            assert_eq!(
                toolbar.regions[1].style.main_axis_alignment,
                MainAxisAlignment::Start
            );
            assert_eq!(
                toolbar.find(ButtonRole::Field(OpenView::Hour)).unwrap().label(),
                "09"
            );
        }
    }

    #[test]
    fn twenty_four_hour_clock_without_am_pm() {
        let harness = Harness::configured(OpenView::Hour, MeridiemMode::Pm, |b| {
            b.date(pi_day() + chrono::Duration::hours(12))
                .show_am_pm(false)
        });
        let toolbar = harness.layout(LayoutDirection::Ltr);
        assert_eq!(
            toolbar.find(ButtonRole::Field(OpenView::Hour)).unwrap().label(),
            "21"
        );
    }

    #[test]
    fn meridiem_clicks_emit_their_mode() {
        let harness = Harness::new(OpenView::Hour, MeridiemMode::Pm);
        let toolbar = harness.layout(LayoutDirection::Ltr);

        assert!(selected(&toolbar, ButtonRole::Meridiem(MeridiemMode::Pm)));
        assert!(!selected(&toolbar, ButtonRole::Meridiem(MeridiemMode::Am)));
        assert!(toolbar.click(ButtonRole::Meridiem(MeridiemMode::Am)));
        assert!(toolbar.click(ButtonRole::Meridiem(MeridiemMode::Pm)));
        assert!(!toolbar.click(ButtonRole::Separator));

        assert_eq!(
            harness.intents(),
            vec![
                Intent::Meridiem(MeridiemMode::Am),
                Intent::Meridiem(MeridiemMode::Pm)
            ]
        );
    }

    #[test]
    fn rtl_mirrors_the_clock_group_only() {
        let harness =
            Harness::configured(OpenView::Minutes, MeridiemMode::Am, |b| b.show_seconds(true));
        let ltr = harness.layout(LayoutDirection::Ltr);
        let rtl = harness.layout(LayoutDirection::Rtl);

        let clock_order = |toolbar: &Toolbar| -> Vec<String> {
            let hour_minute = toolbar.regions[1].containers().next().unwrap();
            hour_minute
                .visual_order()
                .filter_map(|node| match node {
                    ToolbarNode::Button(button) => Some(button.label().to_string()),
                    ToolbarNode::Container(_) => None,
                })
                .collect()
        };
        let mut mirrored = clock_order(&rtl);
        mirrored.reverse();
        assert_eq!(clock_order(&ltr), vec!["09", ":", "26", ":", "53"]);
        assert_eq!(mirrored, clock_order(&ltr));

        let mut preview = TextRenderer::default();
        rtl.render(&mut preview);
        assert_eq!(
            preview.finish(),
            "[2020] [Mar 14] | [*AM*] / [PM] [53] : [*26*] : [09]"
        );

        assert!(rtl.click(ButtonRole::Field(OpenView::Hour)));
        assert_eq!(harness.intents(), vec![Intent::Open(OpenView::Hour)]);
    }

    #[test]
    fn seconds_without_am_pm_stacks_and_left_aligns() {
        let toolbar = Harness::configured(OpenView::Seconds, MeridiemMode::Am, |b| {
            b.show_seconds(true).show_am_pm(false)
        })
        .layout(LayoutDirection::Ltr);
        let style = toolbar.regions[1].style;
        assert_eq!(style.direction, FlexDirection::ColumnReverse);
        assert_eq!(style.main_axis_alignment, MainAxisAlignment::Start);
        assert_eq!(style.height, Some(Dp(65.0)));
        assert_eq!(toolbar.selected_fields(), vec![OpenView::Seconds]);
    }

    #[test]
    fn hidden_seconds_view_highlights_nothing() {
        let toolbar =
            Harness::new(OpenView::Seconds, MeridiemMode::Am).layout(LayoutDirection::Ltr);
        assert!(toolbar.selected_fields().is_empty());
    }

    #[test]
    fn am_pm_styles_follow_the_seconds_flag() {
        let beside = Harness::new(OpenView::Date, MeridiemMode::Am).layout(LayoutDirection::Ltr);
        let group = beside.regions[1].containers().nth(1).unwrap();
        assert_eq!(group.style, AmPmVariant::Beside.style());
        assert_eq!(group.style.margin.right, Dp(-10.0));
        let am = beside.find(ButtonRole::Meridiem(MeridiemMode::Am)).unwrap();
        assert_eq!(am.style().font_size, Some(Dp(18.0)));
        assert!(!am.style().inline);

        let stacked =
            Harness::configured(OpenView::Date, MeridiemMode::Am, |b| b.show_seconds(true))
                .layout(LayoutDirection::Ltr);
        let group = stacked.regions[1].containers().nth(1).unwrap();
        assert_eq!(group.style.align_self, Some(CrossAxisAlignment::Start));
        assert!(
            stacked
                .find(ButtonRole::Meridiem(MeridiemMode::Pm))
                .unwrap()
                .style()
                .inline
        );
    }

    #[test]
    fn missing_required_props_are_reported() {
        let error = DateTimePickerHeaderArgsBuilder::<NaiveDateTime>::default()
            .open_view(OpenView::Year)
            .meridiem_mode(MeridiemMode::Am)
            .on_open_view_change(|_: OpenView| {})
            .on_meridiem_change(|_: MeridiemMode| {})
            .build()
            .unwrap_err();
        assert_eq!(error, HeaderError::InvalidProps { prop: "date" });

        let error = DateTimePickerHeaderArgsBuilder::default()
            .date(pi_day())
            .open_view(OpenView::Year)
            .meridiem_mode(MeridiemMode::Am)
            .on_open_view_change(|_: OpenView| {})
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            HeaderError::InvalidProps {
                prop: "on_meridiem_change"
            }
        );
    }

    #[test]
    fn defaults_show_am_pm_and_hide_seconds() {
        let harness = Harness::new(OpenView::Year, MeridiemMode::Am);
        assert!(harness.args.show_am_pm);
        assert!(!harness.args.show_seconds);
    }

    #[test]
    fn time_header_variants_cover_all_flag_combinations() {
        assert_eq!(TimeHeaderVariant::from_flags(false, true), TimeHeaderVariant::Row);
        assert_eq!(
            TimeHeaderVariant::from_flags(true, false),
            TimeHeaderVariant::StackedWithoutAmPm
        );
        assert_eq!(
            TimeHeaderVariant::Row.style().main_axis_alignment,
            MainAxisAlignment::End
        );
        assert_eq!(
            TimeHeaderVariant::RowWithoutAmPm.style().direction,
            FlexDirection::Row
        );
    }
}
