//! The kiosk event loop: poll input, tick, render, sleep.
//!
//! Single-threaded and cooperative. Each iteration evaluates the alarm
//! first (so a trigger and an acknowledging click in the same frame are
//! seen in that order), then drains pending mouse input, renders a plain
//! text frame, and sleeps for the configured tick interval. The only
//! concurrency is the audio child processes the core detaches.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use paulboy_core::{
    AlarmScheduler, Button, ClockSource, Config, CursorPosition, Event, Habit, HabitLedger,
    InputEvent, JsonHabitStore, PlaylistNavigator, ProcessPlayer, ProcessSound, StatsPanel,
    SystemClock, Tab, TabRouter, WallTime, YouTubeClient,
};

/// Restores the terminal even when the loop exits early.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let clock = SystemClock;

    let store = JsonHabitStore::new(JsonHabitStore::default_path()?);
    let habits = HabitLedger::load(Box::new(store), clock.now().date)?;
    let alarm = AlarmScheduler::new(Box::new(ProcessSound::new(
        config.alarm.player.clone(),
        config.alarm.sound.clone(),
    )));
    let mut playlist = PlaylistNavigator::new(Box::new(ProcessPlayer::new(
        config.radio.player.clone(),
    )));
    match playlist.scan(&config.radio.music_folder) {
        Ok(count) => eprintln!("radio: {count} tracks in {}", config.radio.music_folder.display()),
        Err(e) => eprintln!("radio: {e}; starting with an empty playlist"),
    }
    let sounds = ProcessSound::new(config.alarm.player.clone(), config.ui.transition_sound.clone());
    let mut router = TabRouter::new(alarm, habits, playlist, Box::new(sounds));

    let fetcher = YouTubeClient::new(config.youtube.api_key.clone());
    let mut panel = StatsPanel::new();

    let _guard = RawModeGuard::enter()?;
    let mut previous_tab = router.active_tab();

    loop {
        let now = clock.now();
        if let Some(event) = router.tick(now) {
            log_event(&event);
        }

        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                TermEvent::Mouse(mouse) => {
                    let input = match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => {
                            Some(InputEvent::Click(Button::Left))
                        }
                        MouseEventKind::Down(MouseButton::Right) => {
                            Some(InputEvent::Click(Button::Right))
                        }
                        MouseEventKind::ScrollUp => Some(InputEvent::Scroll(1)),
                        MouseEventKind::ScrollDown => Some(InputEvent::Scroll(-1)),
                        _ => None,
                    };
                    if let Some(input) = input {
                        // Collaborator failures degrade to a log line; the
                        // loop itself never dies on them.
                        match router.handle(input) {
                            Ok(events) => events.iter().for_each(log_event),
                            Err(e) => log_line(&format!("input error: {e}")),
                        }
                    }
                }
                TermEvent::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    quit = true;
                }
                _ => {}
            }
        }
        if quit {
            break;
        }

        // One best-effort fetch when the youtube tab comes up; stale or
        // zeroed values stay on screen if it fails.
        if router.active_tab() == Tab::Youtube && previous_tab != Tab::Youtube {
            if let Err(e) = panel.refresh(&fetcher, &config.youtube.channel_id) {
                log_line(&format!("stats: {e}"));
            }
        }
        previous_tab = router.active_tab();

        render(&router, &panel, now)?;
        std::thread::sleep(Duration::from_millis(config.ui.tick_ms));
    }

    Ok(())
}

/// Raw mode needs explicit carriage returns on stderr too.
fn log_line(message: &str) {
    eprint!("{message}\r\n");
}

fn log_event(event: &Event) {
    if let Ok(json) = serde_json::to_string(event) {
        log_line(&json);
    }
}

fn render(router: &TabRouter, panel: &StatsPanel, now: WallTime) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let tab_bar: String = Tab::CYCLE
        .iter()
        .map(|&tab| {
            if tab == router.active_tab() {
                format!("[{}] ", tab.label())
            } else {
                format!(" {}  ", tab.label())
            }
        })
        .collect();
    write!(out, "{tab_bar}\r\n\r\n")?;

    match router.active_tab() {
        Tab::Date => {
            write!(out, "  {:02}:{:02}\r\n  {}\r\n", now.hour, now.minute, now.date)?;
        }
        Tab::Alarm => render_alarm(&mut out, router, now)?,
        Tab::Radio => render_radio(&mut out, router)?,
        Tab::Habit => render_habits(&mut out, router, now)?,
        Tab::Youtube => {
            let stats = panel.stats();
            write!(
                out,
                "  {}\r\n  {} subs\r\n  {} views\r\n  {} videos\r\n",
                stats.name, stats.subscribers, stats.views, stats.video_count
            )?;
        }
    }

    if router.alarm().is_triggered() {
        write!(out, "\r\n  *** WAKE UP TIME!!! (click to snooze) ***\r\n")?;
    }
    write!(out, "\r\n  right-click: next tab | scroll: move | q: quit\r\n")?;
    out.flush()
}

fn render_alarm(out: &mut impl Write, router: &TabRouter, now: WallTime) -> io::Result<()> {
    let dial = router.alarm().dial();
    let state = router.alarm().state();
    let (hours, minutes) = router.alarm().remaining_time(now);

    write!(out, "  {:02}:{:02}\r\n\r\n", now.hour, now.minute)?;
    write!(
        out,
        "  dial {:02}:{:02}  ({hours}Hrs {minutes}M from now)\r\n\r\n",
        dial.hour, dial.minute
    )?;
    for (index, label) in ["", "hour +", "minute +", "set alarm"].iter().enumerate() {
        let marker = if router.option_index() == index as i32 {
            '>'
        } else {
            ' '
        };
        write!(out, "  {marker} {label}\r\n")?;
    }
    if state.armed {
        let status = if state.snoozed { " (snoozed)" } else { "" };
        write!(out, "\r\n  alarm set {:02}:{:02}{status}\r\n", state.hour, state.minute)?;
    }
    Ok(())
}

fn render_radio(out: &mut impl Write, router: &TabRouter) -> io::Result<()> {
    let playlist = router.playlist();
    if matches!(playlist.cursor_position(), CursorPosition::AboveTop) {
        write!(out, "  [resume]\r\n")?;
    }
    for (index, track) in playlist.tracks().iter().enumerate() {
        let marker = if playlist.cursor_position() == CursorPosition::Track(index) {
            '>'
        } else {
            ' '
        };
        let playing = if playlist.currently_playing() == Some(index) && playlist.is_playing() {
            '*'
        } else {
            ' '
        };
        write!(out, "  {marker}{playing} {}\r\n", track.display_name())?;
    }
    if matches!(playlist.cursor_position(), CursorPosition::BelowBottom) {
        write!(out, "  [pause]\r\n")?;
    }
    if playlist.is_empty() {
        write!(out, "  (no tracks)\r\n")?;
    }

    let wave: String = playlist
        .waveform()
        .samples(125, 5)
        .iter()
        .map(|&y| if y >= 0.0 { '~' } else { '_' })
        .collect();
    write!(out, "\r\n  {wave}\r\n")?;
    Ok(())
}

fn render_habits(out: &mut impl Write, router: &TabRouter, now: WallTime) -> io::Result<()> {
    for (index, &habit) in Habit::ALL.iter().enumerate() {
        let marker = if router.option_index() == index as i32 {
            '>'
        } else {
            ' '
        };
        let entry = router.habits().entry(habit);
        let check = if entry.checked_today { 'x' } else { ' ' };
        let (count, days) = router.habits().monthly_progress(habit, now.date);
        write!(out, "  {marker} [{check}] {:<10} {count}/{days}\r\n", habit.label())?;
    }
    Ok(())
}
