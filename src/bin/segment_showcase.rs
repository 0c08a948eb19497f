//! `segment_showcase` - segstrip demonstration binary
//!
//! Plays a scripted tour over a strip of disaster-preparedness tabs:
//! selections near both ends, a user scroll, a tap and badge updates.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin segment_showcase
//! cargo run --bin segment_showcase -- --style image-over-label --rtl
//! cargo run --bin segment_showcase -- --headless --layout dynamic
//! cargo run --bin segment_showcase -- --dump-json
//! ```

use segstrip::ansi::{self, AnsiWriter, ColorMode};
use segstrip::geometry::Span;
use segstrip::{
    IndicatorOptions, LayoutMode, LayoutStyle, LogLevel, Options, Rgba, Segment, SegmentedControl,
    StateStyle, States, Style, Surface, TextAttributes, ViewportState,
};
use std::ffi::OsString;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "segment_showcase - segstrip demonstration binary

USAGE:
    segment_showcase [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --style <NAME>          Content style: only-label, only-image,
                            image-over-label, image-under-label,
                            image-before-label, image-after-label
                            (default: image-before-label)
    --layout <MODE>         fixed:<N> or dynamic (default: fixed:3)
    --width <N>             Strip width in columns (default: 72)
    --rtl                   Mirror the strip for right-to-left locales

    --frames <N>            Stop after N frames
    --fps <N>               Frames per second (default: 30)
    --color-mode <MODE>     truecolor, 256 or none (default: truecolor)

    --headless              Print the final frame as plain text (no TTY required)
    --dump-json             Print the tour as JSON (no TTY required)
    --verbose               Forward control logs to stderr

EXAMPLES:
    segment_showcase                            # Animated tour
    segment_showcase --layout dynamic --rtl     # Dynamic widths, mirrored
    segment_showcase --headless --width 48      # CI smoke test
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    pub style: LayoutStyle,
    pub layout: LayoutMode,
    pub width: u32,
    pub rtl: bool,

    pub max_frames: Option<u64>,
    pub fps: u32,
    pub color_mode: ColorMode,

    pub headless: bool,
    pub dump_json: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: LayoutStyle::ImageBeforeLabel,
            layout: LayoutMode::Fixed { max_visible: 3 },
            width: 72,
            rtl: false,
            max_frames: None,
            fps: 30,
            color_mode: ColorMode::TrueColor,
            headless: false,
            dump_json: false,
            verbose: false,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--style" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--style requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match LayoutStyle::from_name(&value) {
                        Some(style) => config.style = style,
                        None => return ParseResult::Error(format!("Unknown --style: {value}")),
                    }
                }

                "--layout" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--layout requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match parse_layout(&value) {
                        Some(layout) => config.layout = layout,
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --layout: {value} (use fixed:<N> or dynamic)"
                            ));
                        }
                    }
                }

                "--width" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--width requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => config.width = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --width value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--rtl" => config.rtl = true,

                "--frames" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--frames requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<u64>() {
                        Ok(n) => config.max_frames = Some(n),
                        Err(_) => return ParseResult::Error(format!("Invalid --frames value: {value}")),
                    }
                }

                "--fps" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--fps requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => config.fps = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --fps value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--color-mode" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--color-mode requires a value".to_string());
                    };
                    let value = value.to_string_lossy();
                    match ColorMode::from_name(&value) {
                        Some(mode) => config.color_mode = mode,
                        None => {
                            return ParseResult::Error(format!(
                                "Unknown --color-mode: {value} (valid: truecolor, 256, none)"
                            ));
                        }
                    }
                }

                "--headless" => config.headless = true,
                "--dump-json" => config.dump_json = true,
                "--verbose" => config.verbose = true,

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Get target frame duration.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps))
    }

    /// Rows of the strip: separators plus content tall enough for the style.
    #[must_use]
    pub fn strip_height(&self) -> u32 {
        match self.style {
            LayoutStyle::ImageOverLabel | LayoutStyle::ImageUnderLabel => 5,
            _ => 4,
        }
    }

    fn layout_name(&self) -> String {
        match self.layout {
            LayoutMode::Fixed { max_visible } => format!("fixed:{max_visible}"),
            LayoutMode::Dynamic => "dynamic".to_string(),
        }
    }
}

/// Parse `fixed:<N>` or `dynamic`.
fn parse_layout(s: &str) -> Option<LayoutMode> {
    if s == "dynamic" {
        return Some(LayoutMode::Dynamic);
    }
    let count = s.strip_prefix("fixed:")?.parse::<usize>().ok()?;
    (count > 0).then_some(LayoutMode::Fixed { max_visible: count })
}

// ============================================================================
// Content
// ============================================================================

const CORAL: Rgba = Rgba::rgb(244.0 / 255.0, 111.0 / 255.0, 96.0 / 255.0);
const WHITE_SMOKE: Rgba = Rgba::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
const GRAY_CHATEAU: Rgba = Rgba::rgb(163.0 / 255.0, 164.0 / 255.0, 168.0 / 255.0);
const INK: Rgba = Rgba::rgb(3.0 / 255.0, 3.0 / 255.0, 3.0 / 255.0);

fn disaster_segments() -> Vec<Segment> {
    vec![
        Segment::new("Tornado").with_image("🌀"),
        Segment::new("Earthquakes").with_image("💥"),
        Segment::new("Extreme heat").with_image("🥵"),
        Segment::new("Eruption").with_image("🌋"),
        Segment::new("Floods").with_image("🌊"),
        Segment::new("Wildfires").with_image("🔥"),
    ]
}

fn showcase_options(config: &Config) -> Options {
    let text = |color: Rgba| StateStyle {
        text_color: color,
        ..StateStyle::default()
    };
    let states = States {
        default: text(GRAY_CHATEAU),
        selected: StateStyle {
            attributes: TextAttributes::BOLD,
            ..text(INK)
        },
        highlighted: StateStyle {
            background: WHITE_SMOKE,
            ..text(GRAY_CHATEAU)
        },
    };
    Options::default()
        .with_background(Rgba::WHITE)
        .with_layout(config.layout)
        .with_indicator(Some(IndicatorOptions {
            color: CORAL,
            ..IndicatorOptions::default()
        }))
        .with_states(states)
        .with_animation_duration(Duration::from_millis(250))
}

// ============================================================================
// Tour
// ============================================================================

/// One scripted interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Select(usize),
    ScrollBy(i32),
    Tap(i32),
    Badge(usize, u32),
    ClearBadge(usize),
}

impl Step {
    fn describe(self) -> String {
        match self {
            Self::Select(index) => format!("select {index}"),
            Self::ScrollBy(delta) => format!("scroll {delta}"),
            Self::Tap(column) => format!("tap {column}"),
            Self::Badge(index, count) => format!("badge {index} {count}"),
            Self::ClearBadge(index) => format!("clear-badge {index}"),
        }
    }

    fn apply(self, control: &mut SegmentedControl) -> segstrip::Result<()> {
        match self {
            Self::Select(index) => {
                control.set_selected_index(index)?;
            }
            Self::ScrollBy(delta) => {
                control.scroll_by(delta);
            }
            Self::Tap(column) => {
                control.tap(column);
            }
            Self::Badge(index, count) => control.add_badge(index, count, CORAL)?,
            Self::ClearBadge(index) => control.remove_badge(index)?,
        }
        Ok(())
    }
}

fn tour(width: u32) -> Vec<Step> {
    vec![
        Step::Select(0),
        Step::Select(2),
        Step::Select(5),
        Step::ScrollBy(-(width as i32) / 3),
        Step::Tap(width as i32 / 2),
        Step::Badge(4, 120),
        Step::Select(3),
        Step::ClearBadge(1),
        Step::Select(1),
    ]
}

/// State of the control after a step settled.
struct StepRecord {
    action: String,
    selected: Option<usize>,
    scroll_offset: i32,
    indicator: Option<Span>,
    frames: u32,
}

/// Play `steps`, calling `on_frame` before every animation tick.
///
/// Each step runs until its animation settles and at least `hold_frames`
/// frames have passed. Stops early once `max_frames` frames were shown.
fn play<F>(
    control: &mut SegmentedControl,
    steps: &[Step],
    dt: Duration,
    hold_frames: u32,
    max_frames: Option<u64>,
    mut on_frame: F,
) -> segstrip::Result<Vec<StepRecord>>
where
    F: FnMut(&SegmentedControl) -> io::Result<()>,
{
    let mut records = Vec::with_capacity(steps.len());
    let mut total: u64 = 0;

    for step in steps {
        step.apply(control)?;
        let mut frames = 0u32;
        let mut stopped = false;
        loop {
            if max_frames.is_some_and(|max| total >= max) {
                stopped = true;
                break;
            }
            on_frame(control)?;
            total += 1;
            frames += 1;
            let animating = control.advance(dt);
            if !animating && frames > hold_frames {
                break;
            }
        }
        records.push(StepRecord {
            action: step.describe(),
            selected: control.selected_index(),
            scroll_offset: control.scroll_offset(),
            indicator: control.indicator_span(),
            frames,
        });
        if stopped {
            break;
        }
    }

    Ok(records)
}

fn build_control(config: &Config) -> segstrip::Result<SegmentedControl> {
    let mut control =
        SegmentedControl::with_content(disaster_segments(), config.style, showcase_options(config))?;
    control.add_badge(1, 10, CORAL)?;
    control.on_viewport_change(ViewportState::new(config.width, config.strip_height()).with_mirrored(config.rtl));
    Ok(control)
}

// ============================================================================
// Output
// ============================================================================

fn draw_frame(control: &SegmentedControl, config: &Config) -> Surface {
    let height = config.strip_height();
    let mut surface = Surface::new(config.width, height + 1);
    segstrip::render::draw(control, &mut surface, 0, 0);

    let title = control
        .selected_index()
        .and_then(|index| control.segment(index))
        .map_or("none", Segment::title_str);
    let status = format!(" {title}  offset {}", control.scroll_offset());
    surface.draw_text(0, height as i32, &status, Style::fg(GRAY_CHATEAU));
    surface
}

fn json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if u32::from(c) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn json_span(span: Option<Span>) -> String {
    span.map_or_else(
        || "null".to_string(),
        |span| format!("{{\"start\":{},\"end\":{}}}", span.start, span.end),
    )
}

fn json_index(index: Option<usize>) -> String {
    index.map_or_else(|| "null".to_string(), |index| index.to_string())
}

fn tour_json(config: &Config, control: &SegmentedControl, records: &[StepRecord]) -> String {
    let widths: Vec<String> = control.widths().iter().map(u32::to_string).collect();
    let badges: Vec<String> = control
        .segments()
        .iter()
        .map(|segment| segment.badge.map_or_else(|| "null".to_string(), |badge| json_string(&badge.label())))
        .collect();
    let steps: Vec<String> = records
        .iter()
        .map(|record| {
            format!(
                "{{\"action\":{},\"selected\":{},\"scroll_offset\":{},\"indicator\":{},\"frames\":{}}}",
                json_string(&record.action),
                json_index(record.selected),
                record.scroll_offset,
                json_span(record.indicator),
                record.frames,
            )
        })
        .collect();

    format!(
        "{{\"style\":{},\"layout\":{},\"width\":{},\"mirrored\":{},\"widths\":[{}],\"badges\":[{}],\"steps\":[{}],\"selected\":{},\"indicator\":{}}}",
        json_string(config.style.name()),
        json_string(&config.layout_name()),
        config.width,
        config.rtl,
        widths.join(","),
        badges.join(","),
        steps.join(","),
        json_index(control.selected_index()),
        json_span(control.indicator_span()),
    )
}

// ============================================================================
// Entry Points
// ============================================================================

fn main() -> segstrip::Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return Ok(());
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!();
            eprintln!("Run 'segment_showcase --help' for usage information.");
            std::process::exit(1);
        }
    };

    if config.verbose {
        segstrip::set_log_callback(|level: LogLevel, message: &str| eprintln!("[{level:?}] {message}"));
        segstrip::set_event_callback(|name, data| eprintln!("[event] {name} {data}"));
    }

    if config.dump_json {
        run_dump_json(&config)
    } else if config.headless {
        run_headless(&config)
    } else {
        run_interactive(&config)
    }
}

/// Play the tour without a terminal and print it as one JSON object.
fn run_dump_json(config: &Config) -> segstrip::Result<()> {
    let mut control = build_control(config)?;
    let steps = tour(config.width);
    let records = play(&mut control, &steps, config.frame_duration(), 0, config.max_frames, |_| Ok(()))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", tour_json(config, &control, &records))?;
    Ok(())
}

/// Play the tour without a terminal and print the final frame as text.
fn run_headless(config: &Config) -> segstrip::Result<()> {
    let mut control = build_control(config)?;
    let steps = tour(config.width);
    let records = play(&mut control, &steps, config.frame_duration(), 0, config.max_frames, |_| Ok(()))?;

    let mut stdout = io::stdout().lock();
    for line in draw_frame(&control, config).to_plain_lines() {
        writeln!(stdout, "{line}")?;
    }
    for record in &records {
        eprintln!(
            "{:<16} selected={} offset={} frames={}",
            record.action,
            json_index(record.selected),
            record.scroll_offset,
            record.frames
        );
    }
    Ok(())
}

/// Play the tour on the terminal's alternate screen.
fn run_interactive(config: &Config) -> segstrip::Result<()> {
    if !io::stdout().is_terminal() {
        eprintln!("Error: stdout is not a terminal");
        eprintln!();
        eprintln!("Use --headless or --dump-json to run without a TTY.");
        std::process::exit(1);
    }

    let mut control = build_control(config)?;
    let steps = tour(config.width);
    let frame_duration = config.frame_duration();
    let hold_frames = config.fps / 2;

    let mut writer = AnsiWriter::with_color_mode(io::stdout().lock(), config.color_mode);
    writer.write_str(ansi::ALT_SCREEN_ON);
    writer.write_str(ansi::CURSOR_HIDE);
    writer.write_str(ansi::CLEAR_SCREEN);
    writer.flush()?;

    let result = play(&mut control, &steps, frame_duration, hold_frames, config.max_frames, |control| {
        let started = Instant::now();
        let surface = draw_frame(control, config);
        writer.write_str(ansi::sync::BEGIN);
        writer.present(&surface, 1, 0);
        writer.write_str(ansi::sync::END);
        writer.flush()?;
        if let Some(remaining) = frame_duration.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
        Ok(())
    });

    writer.write_str(ansi::RESET);
    writer.write_str(ansi::CURSOR_SHOW);
    writer.write_str(ansi::ALT_SCREEN_OFF);
    writer.flush()?;

    result.map(|_| ())
}

// ============================================================================
// Tests
// ============================================================================
